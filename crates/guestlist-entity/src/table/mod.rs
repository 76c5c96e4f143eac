//! Event table and seating entities.

pub mod model;

pub use model::{EventTable, Seating};
