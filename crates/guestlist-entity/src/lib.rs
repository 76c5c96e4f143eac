//! # guestlist-entity
//!
//! Domain entity models for Guestlist. Every struct in this crate
//! represents a database table row or a read projection. Database entities
//! derive `sqlx::FromRow` in addition to the serde traits.

pub mod guest;
pub mod table;

pub use guest::{Guest, GuestArrival, GuestListing, GuestStatus, NewGuest};
pub use table::{EventTable, Seating};
