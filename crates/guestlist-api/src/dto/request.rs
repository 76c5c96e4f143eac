//! Request DTOs with validation.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Create table request body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(deny_unknown_fields)]
pub struct CreateTableRequest {
    /// Total seats at the table.
    #[validate(range(min = 1, message = "capacity must be positive"))]
    pub capacity: i32,
}

/// Guest registration body. The guest name comes from the path.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(deny_unknown_fields)]
pub struct RegisterGuestRequest {
    /// Table the guest is seated at.
    pub table: i64,
    /// People coming with the guest.
    #[validate(range(min = 0, message = "accompanying_guests must not be negative"))]
    pub accompanying_guests: i32,
}

/// Check-in body carrying the party the guest actually brought.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(deny_unknown_fields)]
pub struct ArrivalRequest {
    /// People arriving with the guest.
    #[validate(range(min = 0, message = "accompanying_guests must not be negative"))]
    pub accompanying_guests: i32,
}
