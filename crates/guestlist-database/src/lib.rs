//! # guestlist-database
//!
//! Persistence for Guestlist: the store contracts the services are written
//! against, their PostgreSQL implementations, and a process-local store
//! used by tests and the `memory` provider.

pub mod connection;
pub mod memory;
pub mod provider;
pub mod repositories;
pub mod store;

pub use connection::DatabasePool;
pub use memory::MemoryStore;
pub use provider::Stores;
pub use store::{CapacityView, GuestStore, TableStore};
