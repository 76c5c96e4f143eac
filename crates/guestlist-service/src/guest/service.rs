//! Guest admission service: registration, check-in, and departure.

use std::sync::Arc;

use chrono::Utc;
use tracing::{info, warn};

use guestlist_core::error::AppError;
use guestlist_core::result::AppResult;
use guestlist_database::store::GuestStore;
use guestlist_entity::guest::{Guest, GuestArrival, GuestListing, GuestStatus, NewGuest};

use crate::table::SeatingCapacityService;
use crate::validation::{validate_entourage, validate_name};

/// Enforces admission rules and owns every `GuestStatus` transition.
#[derive(Clone)]
pub struct GuestAdmissionService {
    guests: Arc<dyn GuestStore>,
    seating: Arc<SeatingCapacityService>,
}

impl GuestAdmissionService {
    /// Creates a new guest admission service.
    pub fn new(guests: Arc<dyn GuestStore>, seating: Arc<SeatingCapacityService>) -> Self {
        Self { guests, seating }
    }

    /// Registers a guest at a table if the whole party fits.
    ///
    /// The party needs `entourage + 1` seats. When the table has fewer free
    /// seats the call fails with `ExceedsCapacity` and nothing is stored.
    pub async fn register_guest(
        &self,
        name: &str,
        table_id: i64,
        entourage: i32,
    ) -> AppResult<Guest> {
        validate_entourage(entourage)?;
        validate_name(name)?;

        let free = self.seating.free_seats_at_table(table_id).await?;
        let required = i64::from(entourage) + 1;
        if free < required {
            warn!(
                guest = %name,
                table_id,
                free,
                required,
                "Registration refused, party does not fit"
            );
            return Err(AppError::exceeds_capacity(free, required - free));
        }

        let guest = self
            .guests
            .insert(&NewGuest {
                name: name.to_string(),
                table_id,
                entourage,
            })
            .await?;

        info!(guest = %guest.name, guest_id = guest.id, table_id, entourage, "Guest registered");
        Ok(guest)
    }

    /// Records a guest's arrival with the party they actually brought.
    ///
    /// The guest is `arrived` when the change in party size fits in the free
    /// seats of their table and `rejected` otherwise. A rejected guest holds
    /// no seats, so their whole party must fit. Either way the entourage is
    /// replaced and the arrival time stamped. Calling again re-evaluates.
    pub async fn record_arrival(&self, name: &str, entourage: i32) -> AppResult<Guest> {
        validate_entourage(entourage)?;

        let mut guest = self
            .guests
            .find_by_name(name)
            .await?
            .ok_or_else(|| AppError::not_found("guest", "name", name))?;

        if guest.arrival_status == GuestStatus::Left {
            return Err(AppError::arrival_status("guest has already left"));
        }

        let entourage_diff = i64::from(entourage) - i64::from(guest.entourage);
        let free = self.seating.free_seats_for_guest(name).await?;
        let required = if guest.arrival_status.holds_seats() {
            entourage_diff
        } else {
            i64::from(entourage) + 1
        };

        guest.arrival_status = if free < required {
            GuestStatus::Rejected
        } else {
            GuestStatus::Arrived
        };
        guest.entourage = entourage;
        guest.arrived_at = Some(Utc::now());

        let guest = self.guests.update_full(&guest).await?;

        match guest.arrival_status {
            GuestStatus::Rejected => warn!(
                guest = %guest.name,
                entourage,
                free,
                required,
                "Guest rejected at check-in"
            ),
            _ => info!(guest = %guest.name, entourage, "Guest arrived"),
        }
        Ok(guest)
    }

    /// Marks an arrived guest as having left.
    ///
    /// An unknown guest and a guest that has not arrived fail the same way,
    /// with `ArrivalStatus`.
    pub async fn depart(&self, name: &str) -> AppResult<()> {
        let changed = self
            .guests
            .transition_status(name, GuestStatus::Arrived, GuestStatus::Left)
            .await?;

        if changed == 0 {
            return Err(AppError::arrival_status("Guest can't leave before they arrive"));
        }

        info!(guest = %name, "Guest left");
        Ok(())
    }

    /// Gets a guest by name.
    pub async fn get_guest(&self, name: &str) -> AppResult<Guest> {
        validate_name(name)?;

        self.guests
            .find_by_name(name)
            .await?
            .ok_or_else(|| AppError::not_found("guest", "name", name))
    }

    /// Lists every guest with their table.
    pub async fn list_guests(&self) -> AppResult<Vec<GuestListing>> {
        self.guests.list_all().await
    }

    /// Lists guests that have been through check-in: arrived, rejected, or
    /// left.
    pub async fn list_arrived_guests(&self) -> AppResult<Vec<GuestArrival>> {
        self.guests.list_by_statuses(&GuestStatus::CHECKED_IN).await
    }
}
