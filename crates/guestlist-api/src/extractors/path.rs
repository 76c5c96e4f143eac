//! Typed path parameter helpers.

use guestlist_core::error::AppError;

/// Parses a table id from a path segment.
pub fn parse_table_id(s: &str) -> Result<i64, AppError> {
    s.parse::<i64>()
        .map_err(|_| AppError::bad_input(format!("table id {s:?} is not a number")))
}
