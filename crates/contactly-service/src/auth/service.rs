//! Authentication service — registration, login, token rotation, logout,
//! and password reset.
//!
//! Session lifecycle: absent → active (login) → rotated (refresh creates a
//! replacement record) → absent (logout, or superseded by a new login).
//! Every expiry decision goes through the injected clock.

use std::sync::Arc;

use chrono::Duration;
use tracing::{info, warn};
use uuid::Uuid;

use contactly_auth::password::PasswordHasher;
use contactly_auth::token::{ResetTokenIssuer, generate_token};
use contactly_core::config::auth::AuthConfig;
use contactly_core::error::AppError;
use contactly_core::traits::{Clock, Mailer};
use contactly_database::store::{CredentialStore, SessionStore};
use contactly_entity::session::{CreateSession, Session};
use contactly_entity::user::{CreateUser, User};
use contactly_mailer::template::ResetPasswordEmail;

/// Data for registering a new user.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct RegisterRequest {
    /// Display name.
    pub name: String,
    /// Email address.
    pub email: String,
    /// Plaintext password.
    pub password: String,
    /// Phone number (optional).
    pub phone: Option<String>,
}

/// Orchestrates the full authentication flow.
pub struct AuthService {
    /// User credential store.
    users: Arc<dyn CredentialStore>,
    /// Session store.
    sessions: Arc<dyn SessionStore>,
    /// Password hasher.
    hasher: Arc<PasswordHasher>,
    /// Signed reset-token issuer.
    reset_tokens: Arc<ResetTokenIssuer>,
    /// Outbound mail delivery.
    mailer: Arc<dyn Mailer>,
    /// Time source.
    clock: Arc<dyn Clock>,
    /// Auth configuration (TTLs, reset-link domain).
    config: AuthConfig,
}

impl AuthService {
    /// Creates a new auth service.
    pub fn new(
        users: Arc<dyn CredentialStore>,
        sessions: Arc<dyn SessionStore>,
        hasher: Arc<PasswordHasher>,
        reset_tokens: Arc<ResetTokenIssuer>,
        mailer: Arc<dyn Mailer>,
        clock: Arc<dyn Clock>,
        config: AuthConfig,
    ) -> Self {
        Self {
            users,
            sessions,
            hasher,
            reset_tokens,
            mailer,
            clock,
            config,
        }
    }

    /// Registers a new user.
    ///
    /// Fails with `Conflict` when the email is already taken. The returned
    /// entity carries the password hash internally but never serializes it.
    pub async fn register(&self, req: RegisterRequest) -> Result<User, AppError> {
        if self.users.find_by_email(&req.email).await?.is_some() {
            return Err(AppError::conflict("Email in use"));
        }

        let password_hash = self.hasher.hash_password(&req.password)?;

        let user = self
            .users
            .create(&CreateUser {
                name: req.name,
                email: req.email,
                password_hash,
                phone: req.phone,
            })
            .await?;

        info!(user_id = %user.id, "User registered");
        Ok(user)
    }

    /// Authenticates a user by email and password and opens a session.
    ///
    /// An unknown email and a wrong password fail with the identical error
    /// so callers cannot probe which emails are registered. Any prior
    /// session for the user is superseded by the new one.
    pub async fn login(&self, email: &str, password: &str) -> Result<Session, AppError> {
        let user = self
            .users
            .find_by_email(email)
            .await?
            .ok_or_else(|| AppError::unauthorized("Email or password is incorrect"))?;

        let matches = self.hasher.verify_password(password, &user.password_hash)?;
        if !matches {
            return Err(AppError::unauthorized("Email or password is incorrect"));
        }

        let session = self
            .sessions
            .replace_for_user(&self.mint_session(user.id))
            .await?;

        info!(user_id = %user.id, session_id = %session.id, "User logged in");
        Ok(session)
    }

    /// Rotates a session's token pair.
    ///
    /// Lookup is by the exact (id, refresh token) pair; a wrong id and a
    /// stale token fail the same way. Rotation is one-shot: the old refresh
    /// token is permanently dead the instant the replacement exists, and the
    /// replacement carries a new session id.
    pub async fn refresh(
        &self,
        session_id: Uuid,
        refresh_token: &str,
    ) -> Result<Session, AppError> {
        let session = self
            .sessions
            .find_by_id_and_refresh_token(session_id, refresh_token)
            .await?
            .ok_or_else(|| AppError::unauthorized("Session not found"))?;

        if session.refresh_expired_at(self.clock.now()) {
            return Err(AppError::unauthorized("Session token expired"));
        }

        let new_session = self
            .sessions
            .replace_for_user(&self.mint_session(session.user_id))
            .await?;

        info!(
            user_id = %session.user_id,
            old_session_id = %session.id,
            new_session_id = %new_session.id,
            "Session rotated"
        );
        Ok(new_session)
    }

    /// Ends a session. Deleting a non-existent session id is not an error.
    pub async fn logout(&self, session_id: Uuid) -> Result<(), AppError> {
        self.sessions.delete_by_id(session_id).await?;
        info!(session_id = %session_id, "Session deleted");
        Ok(())
    }

    /// Issues a reset token for the user and emails them the reset link.
    ///
    /// The token is issued before dispatch; if delivery fails the token is
    /// already valid and stays usable until its natural expiry.
    pub async fn request_password_reset(&self, email: &str) -> Result<(), AppError> {
        let user = self
            .users
            .find_by_email(email)
            .await?
            .ok_or_else(|| AppError::not_found("User not found"))?;

        let token = self.reset_tokens.issue(user.id, &user.email)?;
        let link = format!(
            "{}/reset-password?token={}",
            self.config.app_domain, token
        );

        let message = ResetPasswordEmail {
            name: &user.name,
            link: &link,
        };

        if let Err(e) = self
            .mailer
            .send(&user.email, message.subject(), &message.render())
            .await
        {
            warn!(user_id = %user.id, error = %e, "Reset email dispatch failed");
            return Err(AppError::external_service(
                "Failed to send the email, please try again later",
            ));
        }

        info!(user_id = %user.id, "Reset email sent");
        Ok(())
    }

    /// Resets a user's password using a signed reset token.
    ///
    /// The user looked up by the embedded id must still carry the embedded
    /// email; a record altered after issuance invalidates the token. A
    /// successful reset deletes any existing session for the user.
    pub async fn reset_password(&self, token: &str, new_password: &str) -> Result<(), AppError> {
        let claims = self.reset_tokens.verify(token)?;

        let user = self
            .users
            .find_by_id(claims.sub)
            .await?
            .filter(|u| u.email == claims.email)
            .ok_or_else(|| AppError::not_found("User not found"))?;

        let password_hash = self.hasher.hash_password(new_password)?;
        self.users.update_password(user.id, &password_hash).await?;

        // Forced logout: a password reset must invalidate prior sessions.
        self.sessions.delete_by_user_id(user.id).await?;

        info!(user_id = %user.id, "Password reset");
        Ok(())
    }

    /// Resolves an access token to its session and owning user.
    ///
    /// Serves the HTTP layer's bearer extractor.
    pub async fn authenticate(&self, access_token: &str) -> Result<(User, Session), AppError> {
        let session = self
            .sessions
            .find_by_access_token(access_token)
            .await?
            .ok_or_else(|| AppError::unauthorized("Session not found"))?;

        if session.access_expired_at(self.clock.now()) {
            return Err(AppError::unauthorized("Access token expired"));
        }

        let user = self
            .users
            .find_by_id(session.user_id)
            .await?
            .ok_or_else(|| AppError::unauthorized("Session not found"))?;

        Ok((user, session))
    }

    /// Builds a fresh session payload with a new token pair and the
    /// configured expiry windows.
    fn mint_session(&self, user_id: Uuid) -> CreateSession {
        let now = self.clock.now();
        CreateSession {
            user_id,
            access_token: generate_token(),
            refresh_token: generate_token(),
            access_expires_at: now + Duration::minutes(self.config.access_ttl_minutes as i64),
            refresh_expires_at: now + Duration::days(self.config.refresh_ttl_days as i64),
        }
    }
}
