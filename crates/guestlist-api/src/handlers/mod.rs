//! HTTP request handlers.

pub mod guest;
pub mod health;
pub mod table;
