//! Contact management.

pub mod service;

pub use service::ContactService;
