//! Session entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// An active user session binding a user to one token pair.
///
/// Sessions are created on login or refresh and destroyed on logout, on
/// refresh (the old row is removed before the new one is created), or
/// implicitly superseded by a new login. At most one session exists per
/// user at any time; the store enforces this with a unique constraint on
/// `user_id`.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Session {
    /// Unique session identifier.
    pub id: Uuid,
    /// The user this session belongs to.
    pub user_id: Uuid,
    /// Opaque bearer token authorizing API calls.
    pub access_token: String,
    /// Opaque bearer token used solely to mint a new token pair.
    pub refresh_token: String,
    /// When the access token expires.
    pub access_expires_at: DateTime<Utc>,
    /// When the refresh token expires.
    pub refresh_expires_at: DateTime<Utc>,
    /// When the session was created (login or rotation time).
    pub created_at: DateTime<Utc>,
}

impl Session {
    /// Check whether the access token has expired at the given instant.
    pub fn access_expired_at(&self, now: DateTime<Utc>) -> bool {
        now > self.access_expires_at
    }

    /// Check whether the refresh token has expired at the given instant.
    pub fn refresh_expired_at(&self, now: DateTime<Utc>) -> bool {
        now > self.refresh_expires_at
    }
}

/// Data required to create a new session.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateSession {
    /// The user this session belongs to.
    pub user_id: Uuid,
    /// Access token.
    pub access_token: String,
    /// Refresh token.
    pub refresh_token: String,
    /// Access token expiry.
    pub access_expires_at: DateTime<Utc>,
    /// Refresh token expiry.
    pub refresh_expires_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    #[test]
    fn test_expiry_checks() {
        let now = Utc::now();
        let session = Session {
            id: Uuid::new_v4(),
            user_id: Uuid::new_v4(),
            access_token: "a".to_string(),
            refresh_token: "r".to_string(),
            access_expires_at: now + Duration::minutes(15),
            refresh_expires_at: now + Duration::days(30),
            created_at: now,
        };

        assert!(!session.access_expired_at(now));
        assert!(session.access_expired_at(now + Duration::minutes(16)));
        assert!(!session.refresh_expired_at(now + Duration::days(29)));
        assert!(session.refresh_expired_at(now + Duration::days(31)));
    }
}
