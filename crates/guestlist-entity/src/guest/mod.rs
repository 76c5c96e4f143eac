//! Guest domain entities.

pub mod model;
pub mod status;

pub use model::{Guest, GuestArrival, GuestListing, NewGuest};
pub use status::GuestStatus;
