//! Guest arrival status enumeration.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Arrival status of a guest.
///
/// Only `NotArrived` and `Arrived` consume seats at the guest's table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "guest_status", rename_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum GuestStatus {
    /// Registered, not yet checked in.
    NotArrived,
    /// Checked in and the party fits at the table.
    Arrived,
    /// Checked in but the party did not fit.
    Rejected,
    /// Left the event after having arrived.
    Left,
    /// Awaiting a new table. Reserved; nothing transitions here yet.
    Allocate,
}

impl GuestStatus {
    /// Statuses of guests that have passed check-in at least once.
    pub const CHECKED_IN: [GuestStatus; 3] = [Self::Arrived, Self::Left, Self::Rejected];

    /// Statuses whose party counts against the table capacity.
    pub const SEAT_HOLDING: [GuestStatus; 2] = [Self::NotArrived, Self::Arrived];

    /// Whether a guest in this status occupies seats at their table.
    pub fn holds_seats(&self) -> bool {
        Self::SEAT_HOLDING.contains(self)
    }

    /// Return the status as its stored string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::NotArrived => "not_arrived",
            Self::Arrived => "arrived",
            Self::Rejected => "rejected",
            Self::Left => "left",
            Self::Allocate => "allocate",
        }
    }
}

impl fmt::Display for GuestStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
