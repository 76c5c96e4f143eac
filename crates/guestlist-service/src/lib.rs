//! # guestlist-service
//!
//! Business logic for Guestlist. Two services sit on top of the store
//! contracts from `guestlist-database`:
//!
//! - [`SeatingCapacityService`] answers free-seat queries and manages tables.
//! - [`GuestAdmissionService`] registers guests and owns every
//!   arrival-status transition.
//!
//! Services follow constructor injection: all dependencies are provided at
//! construction time as `Arc` handles.

pub mod guest;
pub mod table;
pub mod validation;

pub use guest::GuestAdmissionService;
pub use table::SeatingCapacityService;
