//! In-memory store guarded by a Tokio `RwLock`.

use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;
use tracing::debug;

use guestlist_core::error::AppError;
use guestlist_core::result::AppResult;
use guestlist_entity::guest::{Guest, GuestArrival, GuestListing, GuestStatus, NewGuest};
use guestlist_entity::table::{EventTable, Seating};

use crate::store::{CapacityView, GuestStore, TableStore};

#[derive(Debug, Default)]
struct InnerState {
    next_guest_id: i64,
    next_table_id: i64,
    guests: BTreeMap<i64, Guest>,
    /// Keyed by guest id.
    seating: HashMap<i64, Seating>,
    tables: BTreeMap<i64, EventTable>,
}

impl InnerState {
    fn guest_by_name(&self, name: &str) -> Option<&Guest> {
        self.guests.values().find(|g| g.name == name)
    }

    /// Mirrors the `seating_usage` view.
    fn free_seats(&self, table_id: i64) -> Option<i64> {
        let table = self.tables.get(&table_id)?;
        let occupied: i64 = self
            .seating
            .values()
            .filter(|seat| seat.table_id == table_id)
            .filter_map(|seat| self.guests.get(&seat.guest_id))
            .filter(|g| g.arrival_status.holds_seats())
            .map(Guest::party_size)
            .sum();
        Some(i64::from(table.capacity) - occupied)
    }
}

/// Store that keeps guests, seating, and tables in process memory.
///
/// Clones share the same underlying state.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    state: Arc<RwLock<InnerState>>,
}

impl MemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl GuestStore for MemoryStore {
    async fn list_all(&self) -> AppResult<Vec<GuestListing>> {
        let state = self.state.read().await;
        Ok(state
            .guests
            .values()
            .filter_map(|g| {
                state.seating.get(&g.id).map(|seat| GuestListing {
                    name: g.name.clone(),
                    table_id: seat.table_id,
                    entourage: g.entourage,
                })
            })
            .collect())
    }

    async fn list_by_statuses(&self, statuses: &[GuestStatus]) -> AppResult<Vec<GuestArrival>> {
        let state = self.state.read().await;
        let mut matching: Vec<&Guest> = state
            .guests
            .values()
            .filter(|g| statuses.contains(&g.arrival_status))
            .collect();
        matching.sort_by_key(|g| (g.arrived_at.is_none(), g.arrived_at, g.id));
        Ok(matching.into_iter().map(GuestArrival::from).collect())
    }

    async fn find_by_name(&self, name: &str) -> AppResult<Option<Guest>> {
        let state = self.state.read().await;
        Ok(state.guest_by_name(name).cloned())
    }

    async fn insert(&self, data: &NewGuest) -> AppResult<Guest> {
        let mut state = self.state.write().await;

        if state.guest_by_name(&data.name).is_some() {
            return Err(AppError::already_exists("guest", "name", &data.name));
        }
        if !state.tables.contains_key(&data.table_id) {
            return Err(AppError::not_found("table", "tableID", data.table_id));
        }
        if data.entourage < 0 {
            return Err(AppError::bad_input(data.entourage));
        }

        state.next_guest_id += 1;
        let now = Utc::now();
        let guest = Guest {
            id: state.next_guest_id,
            name: data.name.clone(),
            entourage: data.entourage,
            arrival_status: GuestStatus::NotArrived,
            arrived_at: None,
            created_at: now,
            updated_at: now,
        };
        state.guests.insert(guest.id, guest.clone());
        state.seating.insert(
            guest.id,
            Seating {
                guest_id: guest.id,
                table_id: data.table_id,
            },
        );

        debug!(guest_id = guest.id, table_id = data.table_id, "Guest stored in memory");
        Ok(guest)
    }

    async fn update_full(&self, guest: &Guest) -> AppResult<Guest> {
        let mut state = self.state.write().await;
        let stored = state
            .guests
            .get_mut(&guest.id)
            .ok_or_else(|| AppError::not_found("guest", "guestID", guest.id))?;

        stored.entourage = guest.entourage;
        stored.arrival_status = guest.arrival_status;
        stored.arrived_at = guest.arrived_at;
        stored.updated_at = Utc::now();
        Ok(stored.clone())
    }

    async fn transition_status(
        &self,
        name: &str,
        from: GuestStatus,
        to: GuestStatus,
    ) -> AppResult<u64> {
        let mut state = self.state.write().await;
        match state
            .guests
            .values_mut()
            .find(|g| g.name == name && g.arrival_status == from)
        {
            Some(guest) => {
                guest.arrival_status = to;
                guest.updated_at = Utc::now();
                Ok(1)
            }
            None => Ok(0),
        }
    }
}

#[async_trait]
impl TableStore for MemoryStore {
    async fn list_all(&self) -> AppResult<Vec<EventTable>> {
        let state = self.state.read().await;
        Ok(state.tables.values().cloned().collect())
    }

    async fn find_by_id(&self, id: i64) -> AppResult<Option<EventTable>> {
        let state = self.state.read().await;
        Ok(state.tables.get(&id).cloned())
    }

    async fn insert(&self, capacity: i32) -> AppResult<EventTable> {
        if capacity <= 0 {
            return Err(AppError::bad_input(format!("capacity {capacity}")));
        }

        let mut state = self.state.write().await;
        state.next_table_id += 1;
        let now = Utc::now();
        let table = EventTable {
            id: state.next_table_id,
            capacity,
            created_at: now,
            updated_at: now,
        };
        state.tables.insert(table.id, table.clone());
        Ok(table)
    }
}

#[async_trait]
impl CapacityView for MemoryStore {
    async fn free_seats_at_table(&self, table_id: i64) -> AppResult<i64> {
        let state = self.state.read().await;
        state
            .free_seats(table_id)
            .ok_or_else(|| AppError::not_found("table", "tableID", table_id))
    }

    async fn free_seats_for_guest(&self, name: &str) -> AppResult<i64> {
        let state = self.state.read().await;
        state
            .guest_by_name(name)
            .and_then(|g| state.seating.get(&g.id))
            .and_then(|seat| state.free_seats(seat.table_id))
            .ok_or_else(|| AppError::not_found("guest", "name", name))
    }

    async fn total_free_seats(&self) -> AppResult<i64> {
        let state = self.state.read().await;
        Ok(state
            .tables
            .keys()
            .filter_map(|id| state.free_seats(*id))
            .sum())
    }
}
