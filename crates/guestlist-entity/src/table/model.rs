//! Event table and seating models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A table at the event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct EventTable {
    /// Table identifier.
    pub id: i64,
    /// Total seats at the table.
    pub capacity: i32,
    /// When the table was created.
    pub created_at: DateTime<Utc>,
    /// When the table was last written.
    pub updated_at: DateTime<Utc>,
}

/// Binding of a guest to the table they sit at. One row per guest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Seating {
    /// Seated guest.
    pub guest_id: i64,
    /// Table the guest sits at.
    pub table_id: i64,
}
