//! Unified application error types for Guestlist.
//!
//! All crates map their internal errors into [`AppError`] for consistent
//! propagation through the ? operator.

use std::fmt;
use thiserror::Error;

/// Top-level error kind categorization used across the entire application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum ErrorKind {
    /// A malformed argument (negative count, whitespace in a name, bad identifier).
    BadInput,
    /// The referenced entity does not exist.
    NotFound,
    /// A uniqueness constraint was violated.
    AlreadyExists,
    /// The party does not fit at the table.
    ExceedsCapacity {
        /// Free seats at the table when the check ran.
        available: i64,
        /// Seats missing for the party to fit.
        shortfall: i64,
    },
    /// An illegal guest lifecycle transition was requested.
    ArrivalStatus,
    /// A collection query found nothing to aggregate.
    MissingData,
    /// An unclassified database error occurred.
    Database,
    /// An internal server error occurred.
    Internal,
    /// A configuration error occurred.
    Configuration,
    /// A serialization/deserialization error occurred.
    Serialization,
    /// The requested operation is declared but not implemented.
    NotImplemented,
}

impl ErrorKind {
    /// Whether the error was caused by the caller rather than the server.
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            Self::BadInput
                | Self::NotFound
                | Self::AlreadyExists
                | Self::ExceedsCapacity { .. }
                | Self::ArrivalStatus
        )
    }

    /// Machine-readable code for this kind.
    pub fn code(&self) -> &'static str {
        match self {
            Self::BadInput => "BAD_INPUT",
            Self::NotFound => "NOT_FOUND",
            Self::AlreadyExists => "ALREADY_EXISTS",
            Self::ExceedsCapacity { .. } => "EXCEEDS_CAPACITY",
            Self::ArrivalStatus => "ARRIVAL_STATUS",
            Self::MissingData => "MISSING_DATA",
            Self::Database => "DATABASE",
            Self::Internal => "INTERNAL",
            Self::Configuration => "CONFIGURATION",
            Self::Serialization => "SERIALIZATION",
            Self::NotImplemented => "NOT_IMPLEMENTED",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// The unified application error used throughout Guestlist.
///
/// Persistence errors are translated into an `AppError` once, at the store
/// boundary, and are returned unchanged by the service and API layers.
#[derive(Debug, Error)]
#[error("{kind}: {message}")]
pub struct AppError {
    /// The category of error.
    pub kind: ErrorKind,
    /// A human-readable error message.
    pub message: String,
    /// Optional underlying cause.
    #[source]
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl AppError {
    /// Create a new application error.
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            source: None,
        }
    }

    /// Create a new application error with an underlying cause.
    pub fn with_source(
        kind: ErrorKind,
        message: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self {
            kind,
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create a bad-input error for the offending value.
    pub fn bad_input(input: impl fmt::Display) -> Self {
        Self::new(ErrorKind::BadInput, format!("Invalid input: {input}"))
    }

    /// Create a not-found error for `resource` identified by `id_type = id`.
    pub fn not_found(resource: &str, id_type: &str, id: impl fmt::Display) -> Self {
        Self::new(
            ErrorKind::NotFound,
            format!("{resource} with {id_type} {id} not found."),
        )
    }

    /// Create an already-exists error for `resource` identified by `id_type = id`.
    pub fn already_exists(resource: &str, id_type: &str, id: impl fmt::Display) -> Self {
        Self::new(
            ErrorKind::AlreadyExists,
            format!("{resource} with {id_type} {id} already exists."),
        )
    }

    /// Create a capacity error carrying the free seats and the shortfall.
    pub fn exceeds_capacity(available: i64, shortfall: i64) -> Self {
        Self::new(
            ErrorKind::ExceedsCapacity {
                available,
                shortfall,
            },
            format!(
                "Table has free capacity of {available}, entourage exceeds by {shortfall}."
            ),
        )
    }

    /// Create an arrival-status error.
    pub fn arrival_status(message: impl fmt::Display) -> Self {
        Self::new(
            ErrorKind::ArrivalStatus,
            format!("Invalid arrival status: {message}"),
        )
    }

    /// Create a missing-data error for the queried data set.
    pub fn missing_data(data_type: &str) -> Self {
        Self::new(
            ErrorKind::MissingData,
            format!("No data to show when querying for {data_type}."),
        )
    }

    /// Create an internal error.
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Internal, message)
    }

    /// Create a configuration error.
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Configuration, message)
    }

    /// Create a not-implemented error.
    pub fn not_implemented(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::NotImplemented, message)
    }
}

impl Clone for AppError {
    fn clone(&self) -> Self {
        Self {
            kind: self.kind,
            message: self.message.clone(),
            source: None,
        }
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        Self::with_source(
            ErrorKind::Serialization,
            format!("JSON serialization error: {err}"),
            err,
        )
    }
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        Self::with_source(ErrorKind::Internal, format!("I/O error: {err}"), err)
    }
}

impl From<config::ConfigError> for AppError {
    fn from(err: config::ConfigError) -> Self {
        Self::with_source(
            ErrorKind::Configuration,
            format!("Configuration error: {err}"),
            err,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exceeds_capacity_carries_diagnostics() {
        let err = AppError::exceeds_capacity(4, 2);
        assert_eq!(
            err.kind,
            ErrorKind::ExceedsCapacity {
                available: 4,
                shortfall: 2
            }
        );
        assert_eq!(
            err.message,
            "Table has free capacity of 4, entourage exceeds by 2."
        );
    }

    #[test]
    fn test_client_error_classification() {
        assert!(ErrorKind::BadInput.is_client_error());
        assert!(ErrorKind::ArrivalStatus.is_client_error());
        assert!(
            ErrorKind::ExceedsCapacity {
                available: 0,
                shortfall: 1
            }
            .is_client_error()
        );
        assert!(!ErrorKind::MissingData.is_client_error());
        assert!(!ErrorKind::Database.is_client_error());
    }

    #[test]
    fn test_display_uses_code_prefix() {
        let err = AppError::not_found("guest", "name", "ana");
        assert_eq!(err.to_string(), "NOT_FOUND: guest with name ana not found.");
    }

    #[test]
    fn test_clone_drops_source() {
        let io = std::io::Error::other("disk");
        let err = AppError::from(io);
        assert!(std::error::Error::source(&err).is_some());
        let cloned = err.clone();
        assert_eq!(cloned.kind, ErrorKind::Internal);
        assert!(cloned.source.is_none());
    }
}
