//! Guest registration and admission.

pub mod service;

pub use service::GuestAdmissionService;
