//! Application state shared across all handlers and middleware.

use std::sync::Arc;

use guestlist_core::config::AppConfig;
use guestlist_database::Stores;
use guestlist_service::{GuestAdmissionService, SeatingCapacityService};

/// Application state containing all shared dependencies.
///
/// Passed to every Axum handler via `State<AppState>`.
/// All fields are `Arc`-wrapped for cheap cloning across tasks.
#[derive(Clone)]
pub struct AppState {
    /// Application configuration
    pub config: Arc<AppConfig>,
    /// Backing stores, kept for health checks
    pub stores: Stores,
    /// Seating capacity and table service
    pub seating_service: Arc<SeatingCapacityService>,
    /// Guest admission service
    pub guest_service: Arc<GuestAdmissionService>,
}

impl AppState {
    /// Wires the services on top of the given stores.
    pub fn new(config: AppConfig, stores: Stores) -> Self {
        let seating_service = Arc::new(SeatingCapacityService::new(
            Arc::clone(&stores.tables),
            Arc::clone(&stores.capacity),
        ));
        let guest_service = Arc::new(GuestAdmissionService::new(
            Arc::clone(&stores.guests),
            Arc::clone(&seating_service),
        ));

        Self {
            config: Arc::new(config),
            stores,
            seating_service,
            guest_service,
        }
    }
}
