//! Seating capacity and table management.

pub mod service;

pub use service::SeatingCapacityService;
