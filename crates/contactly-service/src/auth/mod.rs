//! Authentication and session lifecycle.

pub mod service;

pub use service::{AuthService, RegisterRequest};
