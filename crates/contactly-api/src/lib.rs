//! # contactly-api
//!
//! HTTP API layer for Contactly built on Axum.
//!
//! Provides the REST endpoints, extractors, DTOs, error mapping, and the
//! server runner that wires the whole application together.

pub mod app;
pub mod dto;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod router;
pub mod state;

pub use app::build_app;
pub use error::{ApiError, ApiResult};
pub use state::AppState;
