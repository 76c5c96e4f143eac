//! Maps domain `AppError` to HTTP responses.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};

use guestlist_core::error::{AppError, ErrorKind};

/// Standard API error response body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiErrorResponse {
    /// Machine-readable error code.
    pub error: String,
    /// Human-readable message.
    pub message: String,
    /// Optional details.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

/// Handler error wrapping [`AppError`] so it can be rendered by Axum.
#[derive(Debug)]
pub struct ApiError(pub AppError);

impl From<AppError> for ApiError {
    fn from(err: AppError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let err = self.0;

        let status = match err.kind {
            ErrorKind::BadInput | ErrorKind::ExceedsCapacity { .. } | ErrorKind::ArrivalStatus => {
                StatusCode::BAD_REQUEST
            }
            ErrorKind::NotFound => StatusCode::NOT_FOUND,
            ErrorKind::AlreadyExists => StatusCode::CONFLICT,
            ErrorKind::NotImplemented => StatusCode::NOT_IMPLEMENTED,
            ErrorKind::MissingData
            | ErrorKind::Database
            | ErrorKind::Internal
            | ErrorKind::Configuration
            | ErrorKind::Serialization => StatusCode::INTERNAL_SERVER_ERROR,
        };

        if !err.kind.is_client_error() {
            tracing::error!(kind = %err.kind, error = %err.message, source = ?err.source, "Server error");
        }

        // Only missing data and unimplemented operations surface their
        // message among server-side kinds.
        let message = match err.kind {
            ErrorKind::MissingData | ErrorKind::NotImplemented => err.message,
            kind if kind.is_client_error() => err.message,
            _ => "Internal server error".to_string(),
        };

        let details = match err.kind {
            ErrorKind::ExceedsCapacity {
                available,
                shortfall,
            } => Some(serde_json::json!({
                "available": available,
                "shortfall": shortfall,
            })),
            _ => None,
        };

        let body = ApiErrorResponse {
            error: err.kind.code().to_string(),
            message,
            details,
        };

        (status, Json(body)).into_response()
    }
}
