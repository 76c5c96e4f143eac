//! Guest entity model and read projections.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use super::status::GuestStatus;

/// A guest registered for the event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Guest {
    /// Server-assigned identifier.
    pub id: i64,
    /// Unique name, also used as the lookup key.
    pub name: String,
    /// People accompanying the guest, not counting the guest.
    #[serde(rename = "accompanying_guests")]
    pub entourage: i32,
    /// Current arrival status.
    pub arrival_status: GuestStatus,
    /// When the guest last went through check-in.
    pub arrived_at: Option<DateTime<Utc>>,
    /// When the guest was registered.
    pub created_at: DateTime<Utc>,
    /// When the guest row was last written.
    pub updated_at: DateTime<Utc>,
}

impl Guest {
    /// Seats the whole party needs: the guest plus the entourage.
    pub fn party_size(&self) -> i64 {
        i64::from(self.entourage) + 1
    }
}

/// Data required to register a guest and seat them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewGuest {
    /// Unique guest name.
    pub name: String,
    /// Table the guest is seated at.
    pub table_id: i64,
    /// Size of the entourage.
    pub entourage: i32,
}

/// A guest together with their table assignment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct GuestListing {
    /// Guest name.
    pub name: String,
    /// Assigned table.
    #[serde(rename = "table")]
    pub table_id: i64,
    /// Size of the entourage.
    #[serde(rename = "accompanying_guests")]
    pub entourage: i32,
}

/// A guest that has been through check-in.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct GuestArrival {
    /// Guest name.
    pub name: String,
    /// Size of the entourage at check-in.
    #[serde(rename = "accompanying_guests")]
    pub entourage: i32,
    /// Time of the last check-in.
    #[serde(rename = "time_arrived")]
    pub arrived_at: Option<DateTime<Utc>>,
}

impl From<&Guest> for GuestArrival {
    fn from(guest: &Guest) -> Self {
        Self {
            name: guest.name.clone(),
            entourage: guest.entourage,
            arrived_at: guest.arrived_at,
        }
    }
}
