//! Guest registration, check-in, and departure handlers.

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;

use guestlist_entity::{Guest, GuestArrival, GuestListing};

use crate::dto::{ArrivalRequest, GuestsResponse, NameResponse, RegisterGuestRequest};
use crate::error::ApiError;
use crate::extractors::ValidatedJson;
use crate::state::AppState;

/// GET /guest_list
pub async fn list_guests(
    State(state): State<AppState>,
) -> Result<Json<GuestsResponse<GuestListing>>, ApiError> {
    let guests = state.guest_service.list_guests().await?;
    Ok(Json(GuestsResponse { guests }))
}

/// POST /guest_list/{name}
pub async fn register_guest(
    State(state): State<AppState>,
    Path(name): Path<String>,
    ValidatedJson(req): ValidatedJson<RegisterGuestRequest>,
) -> Result<Json<NameResponse>, ApiError> {
    let guest = state
        .guest_service
        .register_guest(&name, req.table, req.accompanying_guests)
        .await?;
    Ok(Json(NameResponse { name: guest.name }))
}

/// GET /guest_list/{name}
pub async fn get_guest(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<Json<Guest>, ApiError> {
    let guest = state.guest_service.get_guest(&name).await?;
    Ok(Json(guest))
}

/// PUT /guests/{name}
///
/// Succeeds for rejected arrivals too; the outcome is visible through
/// `GET /guest_list/{name}`.
pub async fn record_arrival(
    State(state): State<AppState>,
    Path(name): Path<String>,
    ValidatedJson(req): ValidatedJson<ArrivalRequest>,
) -> Result<Json<NameResponse>, ApiError> {
    let guest = state
        .guest_service
        .record_arrival(&name, req.accompanying_guests)
        .await?;
    Ok(Json(NameResponse { name: guest.name }))
}

/// GET /guests
pub async fn list_arrived_guests(
    State(state): State<AppState>,
) -> Result<Json<GuestsResponse<GuestArrival>>, ApiError> {
    let guests = state.guest_service.list_arrived_guests().await?;
    Ok(Json(GuestsResponse { guests }))
}

/// DELETE /guests/{name}
pub async fn depart(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<StatusCode, ApiError> {
    state.guest_service.depart(&name).await?;
    Ok(StatusCode::NO_CONTENT)
}
