//! Route definitions for the Contactly HTTP API.
//!
//! All routes are organized by domain and mounted under `/api`. The router
//! receives `AppState` and passes it to all handlers via Axum's `State`
//! extractor.

use axum::{
    Router,
    routing::{delete, get, patch, post},
};
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::state::AppState;

/// Builds the complete Axum router with all routes.
pub fn build_router(state: AppState) -> Router {
    let api_routes = Router::new()
        .merge(auth_routes())
        .merge(contact_routes())
        .merge(health_routes());

    Router::new()
        .nest("/api", api_routes)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Auth endpoints: register, login, refresh, logout, password reset, me.
fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/auth/register", post(handlers::auth::register))
        .route("/auth/login", post(handlers::auth::login))
        .route("/auth/refresh", post(handlers::auth::refresh))
        .route("/auth/logout", post(handlers::auth::logout))
        .route(
            "/auth/send-reset-email",
            post(handlers::auth::send_reset_email),
        )
        .route("/auth/reset-password", post(handlers::auth::reset_password))
        .route("/auth/me", get(handlers::auth::me))
}

/// Contact CRUD endpoints, all requiring an authenticated caller.
fn contact_routes() -> Router<AppState> {
    Router::new()
        .route("/contacts", get(handlers::contact::list))
        .route("/contacts", post(handlers::contact::create))
        .route("/contacts/{id}", get(handlers::contact::get))
        .route("/contacts/{id}", patch(handlers::contact::update))
        .route("/contacts/{id}", delete(handlers::contact::delete))
}

/// Health endpoint.
fn health_routes() -> Router<AppState> {
    Router::new().route("/health", get(handlers::health::health))
}
