//! Request and response bodies.

pub mod request;
pub mod response;

pub use request::{ArrivalRequest, CreateTableRequest, RegisterGuestRequest};
pub use response::{
    GuestsResponse, HealthResponse, NameResponse, SeatsEmptyResponse, TableResponse,
    TablesResponse,
};
