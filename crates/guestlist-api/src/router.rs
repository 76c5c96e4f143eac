//! Route definitions for the Guestlist HTTP API.
//!
//! The router receives `AppState` and passes it to all handlers via Axum's
//! `State` extractor.

use axum::{
    Router, middleware as axum_middleware,
    routing::{get, post, put},
};

use crate::handlers;
use crate::middleware;
use crate::state::AppState;

/// Build the Axum router with all routes and the request logger.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .merge(table_routes())
        .merge(guest_list_routes())
        .merge(arrival_routes())
        .merge(health_routes())
        .layer(axum_middleware::from_fn(middleware::logging::request_logging))
        .with_state(state)
}

/// Tables and free seats
fn table_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/tables",
            get(handlers::table::list_tables).post(handlers::table::create_table),
        )
        .route(
            "/tables/{id}",
            get(handlers::table::get_table).delete(handlers::table::delete_table),
        )
        .route(
            "/tables/{id}/seats_empty",
            get(handlers::table::seats_empty_at_table),
        )
        .route("/seats_empty", get(handlers::table::seats_empty))
}

/// Registration and guest lookup
fn guest_list_routes() -> Router<AppState> {
    Router::new()
        .route("/guest_list", get(handlers::guest::list_guests))
        .route(
            "/guest_list/{name}",
            post(handlers::guest::register_guest).get(handlers::guest::get_guest),
        )
}

/// Check-in and departure
fn arrival_routes() -> Router<AppState> {
    Router::new()
        .route("/guests", get(handlers::guest::list_arrived_guests))
        .route(
            "/guests/{name}",
            put(handlers::guest::record_arrival).delete(handlers::guest::depart),
        )
}

/// Liveness endpoints
fn health_routes() -> Router<AppState> {
    Router::new()
        .route("/ping", get(handlers::health::ping))
        .route("/health", get(handlers::health::health_check))
}
