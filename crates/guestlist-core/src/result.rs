//! Convenience result type alias for Guestlist.

use crate::error::AppError;

/// A specialized `Result` type for Guestlist operations.
pub type AppResult<T> = Result<T, AppError>;
