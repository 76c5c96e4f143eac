//! Response DTOs.

use serde::{Deserialize, Serialize};

use guestlist_entity::EventTable;

/// Table as returned by the API.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TableResponse {
    /// Table id.
    pub id: i64,
    /// Total seats.
    pub capacity: i32,
}

impl From<EventTable> for TableResponse {
    fn from(table: EventTable) -> Self {
        Self {
            id: table.id,
            capacity: table.capacity,
        }
    }
}

/// Table listing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TablesResponse {
    /// All tables.
    pub tables: Vec<TableResponse>,
}

/// Free seat count.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeatsEmptyResponse {
    /// Seats not claimed by a seat-holding guest.
    pub seats_empty: i64,
}

/// Guest listing wrapper.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GuestsResponse<T> {
    /// Guests in the listing.
    pub guests: Vec<T>,
}

/// Name echoed back after a guest mutation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NameResponse {
    /// Guest name.
    pub name: String,
}

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// `ok` or `unavailable`.
    pub status: String,
    /// Backing store provider.
    pub store: String,
    /// Crate version.
    pub version: String,
}
