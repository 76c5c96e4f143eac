//! PostgreSQL implementations of the store contracts.

pub mod guest;
pub mod seating_usage;
pub mod table;

pub use guest::GuestRepository;
pub use seating_usage::SeatingUsageRepository;
pub use table::TableRepository;

use sqlx::FromRow;
use sqlx::postgres::PgRow;
use tracing::error;

use guestlist_core::error::{AppError, ErrorKind};

/// Translate a sqlx error into the application taxonomy.
///
/// `id` is the identifier the caller supplied, if any. A missing row is a
/// `NotFound` when there was one and `MissingData` when there was not.
pub(crate) fn translate_error(
    err: sqlx::Error,
    resource: &str,
    id_type: &str,
    id: Option<&str>,
) -> AppError {
    match &err {
        sqlx::Error::Database(db_err) if db_err.is_unique_violation() => {
            AppError::already_exists(resource, id_type, id.unwrap_or_default())
        }
        sqlx::Error::RowNotFound => match id {
            Some(id) => AppError::not_found(resource, id_type, id),
            None => AppError::missing_data(resource),
        },
        _ => {
            error!(error = %err, resource, "Unclassified database error");
            AppError::with_source(ErrorKind::Database, format!("Failed to access {resource}"), err)
        }
    }
}

/// Decode result rows one at a time. Rows that fail to decode are logged
/// and left out so one bad row does not abort the whole listing.
pub(crate) fn decode_rows<T>(rows: &[PgRow], what: &str) -> Vec<T>
where
    T: for<'r> FromRow<'r, PgRow>,
{
    rows.iter()
        .filter_map(|row| match T::from_row(row) {
            Ok(item) => Some(item),
            Err(e) => {
                error!(error = %e, what, "Skipping row that failed to decode");
                None
            }
        })
        .collect()
}
