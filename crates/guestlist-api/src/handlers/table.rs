//! Table and free-seat handlers.

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;

use crate::dto::{CreateTableRequest, SeatsEmptyResponse, TableResponse, TablesResponse};
use crate::error::ApiError;
use crate::extractors::{ValidatedJson, parse_table_id};
use crate::state::AppState;

/// GET /tables
pub async fn list_tables(State(state): State<AppState>) -> Result<Json<TablesResponse>, ApiError> {
    let tables = state.seating_service.list_tables().await?;
    Ok(Json(TablesResponse {
        tables: tables.into_iter().map(TableResponse::from).collect(),
    }))
}

/// POST /tables
pub async fn create_table(
    State(state): State<AppState>,
    ValidatedJson(req): ValidatedJson<CreateTableRequest>,
) -> Result<Json<TableResponse>, ApiError> {
    let table = state.seating_service.create_table(req.capacity).await?;
    Ok(Json(table.into()))
}

/// GET /tables/{id}
pub async fn get_table(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<TableResponse>, ApiError> {
    let id = parse_table_id(&id)?;
    let table = state.seating_service.get_table(id).await?;
    Ok(Json(table.into()))
}

/// DELETE /tables/{id}
pub async fn delete_table(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    let id = parse_table_id(&id)?;
    state.seating_service.delete_table(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// GET /tables/{id}/seats_empty
pub async fn seats_empty_at_table(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<SeatsEmptyResponse>, ApiError> {
    let id = parse_table_id(&id)?;
    let seats_empty = state.seating_service.free_seats_at_table(id).await?;
    Ok(Json(SeatsEmptyResponse { seats_empty }))
}

/// GET /seats_empty
pub async fn seats_empty(
    State(state): State<AppState>,
) -> Result<Json<SeatsEmptyResponse>, ApiError> {
    let seats_empty = state.seating_service.total_free_seats().await?;
    Ok(Json(SeatsEmptyResponse { seats_empty }))
}
