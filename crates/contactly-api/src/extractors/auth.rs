//! `AuthUser` extractor — pulls the bearer token from the Authorization
//! header and resolves it to a live session.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;

use contactly_core::error::AppError;
use contactly_entity::session::Session;
use contactly_entity::user::User;

use crate::error::ApiError;
use crate::state::AppState;

/// Authenticated caller context available to handlers.
#[derive(Debug, Clone)]
pub struct AuthUser {
    /// The user owning the session.
    pub user: User,
    /// The session the access token resolved to.
    pub session: Session,
}

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let auth_header = parts
            .headers
            .get("authorization")
            .and_then(|v| v.to_str().ok())
            .ok_or_else(|| AppError::unauthorized("Missing Authorization header"))?;

        let token = auth_header
            .strip_prefix("Bearer ")
            .ok_or_else(|| AppError::unauthorized("Invalid Authorization header format"))?;

        let (user, session) = state.auth_service.authenticate(token).await?;

        Ok(AuthUser { user, session })
    }
}
