//! # contactly-service
//!
//! Business logic service layer for Contactly. Each service orchestrates
//! stores, credential primitives, and mail delivery to implement
//! application-level use cases.
//!
//! Services follow constructor injection: all dependencies are provided
//! at construction time via `Arc` references, and stateful collaborators
//! sit behind traits so the flows are testable without infrastructure.

pub mod auth;
pub mod contact;

pub use auth::{AuthService, RegisterRequest};
pub use contact::ContactService;
