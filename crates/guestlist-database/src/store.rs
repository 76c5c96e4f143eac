//! Persistence contracts consumed by the service layer.
//!
//! Every implementation translates its native errors into
//! [`AppError`](guestlist_core::AppError) before returning: a unique
//! violation becomes `AlreadyExists`, a missing row becomes `NotFound` when
//! the caller supplied an identifier and `MissingData` otherwise.

use async_trait::async_trait;

use guestlist_core::result::AppResult;
use guestlist_entity::guest::{Guest, GuestArrival, GuestListing, GuestStatus, NewGuest};
use guestlist_entity::table::EventTable;

/// Guest rows and their seating.
#[async_trait]
pub trait GuestStore: Send + Sync + 'static {
    /// List every guest with the table they are seated at.
    async fn list_all(&self) -> AppResult<Vec<GuestListing>>;

    /// List guests whose status is one of `statuses`.
    async fn list_by_statuses(&self, statuses: &[GuestStatus]) -> AppResult<Vec<GuestArrival>>;

    /// Find a guest by their unique name.
    async fn find_by_name(&self, name: &str) -> AppResult<Option<Guest>>;

    /// Create a guest in `not_arrived` status together with its seating row.
    async fn insert(&self, guest: &NewGuest) -> AppResult<Guest>;

    /// Overwrite entourage, status, and arrival time of an existing guest.
    async fn update_full(&self, guest: &Guest) -> AppResult<Guest>;

    /// Move the named guest from `from` to `to` in a single conditional
    /// write. Returns the number of rows changed.
    async fn transition_status(
        &self,
        name: &str,
        from: GuestStatus,
        to: GuestStatus,
    ) -> AppResult<u64>;
}

/// Event tables.
#[async_trait]
pub trait TableStore: Send + Sync + 'static {
    /// List every table.
    async fn list_all(&self) -> AppResult<Vec<EventTable>>;

    /// Find a table by id.
    async fn find_by_id(&self, id: i64) -> AppResult<Option<EventTable>>;

    /// Create a table with the given capacity.
    async fn insert(&self, capacity: i32) -> AppResult<EventTable>;
}

/// Derived seat usage. Implementations compute every answer from the
/// persisted seating data; nothing is cached.
#[async_trait]
pub trait CapacityView: Send + Sync + 'static {
    /// Free seats at a table. Fails `NotFound` for an unknown table.
    async fn free_seats_at_table(&self, table_id: i64) -> AppResult<i64>;

    /// Free seats at the table the named guest is seated at. The guest's
    /// own party is counted as occupied while their status holds seats.
    /// Fails `NotFound` for an unknown guest.
    async fn free_seats_for_guest(&self, name: &str) -> AppResult<i64>;

    /// Free seats summed over all tables; `0` when there are none.
    async fn total_free_seats(&self) -> AppResult<i64>;
}
