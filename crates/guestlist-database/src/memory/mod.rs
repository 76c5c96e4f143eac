//! Process-local store implementing every persistence contract.
//!
//! Used by the `memory` provider and by tests that need a real store
//! without PostgreSQL.

mod store;

pub use store::MemoryStore;
