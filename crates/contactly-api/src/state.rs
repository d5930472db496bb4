//! Application state shared across all handlers.

use std::sync::Arc;

use contactly_core::config::AppConfig;
use contactly_service::{AuthService, ContactService};

/// Application state passed to every Axum handler via `State<AppState>`.
///
/// All fields are `Arc`-wrapped for cheap cloning across tasks.
#[derive(Clone)]
pub struct AppState {
    /// Application configuration.
    pub config: Arc<AppConfig>,
    /// Authentication and session lifecycle service.
    pub auth_service: Arc<AuthService>,
    /// Contact CRUD service.
    pub contact_service: Arc<ContactService>,
}
