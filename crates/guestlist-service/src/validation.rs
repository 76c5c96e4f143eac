//! Argument checks run before any store call.

use guestlist_core::error::AppError;
use guestlist_core::result::AppResult;

/// An entourage is a head count and cannot be negative.
pub fn validate_entourage(entourage: i32) -> AppResult<()> {
    if entourage < 0 {
        return Err(AppError::bad_input(entourage));
    }
    Ok(())
}

/// Guest names double as path keys, so they must be non-empty and free of
/// whitespace.
pub fn validate_name(name: &str) -> AppResult<()> {
    if name.is_empty() || name.chars().any(char::is_whitespace) {
        return Err(AppError::bad_input(format!("'{name}'")));
    }
    Ok(())
}

/// A table needs at least one seat.
pub fn validate_capacity(capacity: i32) -> AppResult<()> {
    if capacity <= 0 {
        return Err(AppError::bad_input(format!("capacity {capacity}")));
    }
    Ok(())
}
