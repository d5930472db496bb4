//! Claims embedded in signed reset tokens.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Claims payload of a password-reset token.
///
/// The token is self-contained: validity is established by signature and
/// embedded expiry alone, never by a store lookup, which is why reset
/// tokens cannot be revoked before natural expiry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResetClaims {
    /// Subject: the user id.
    pub sub: Uuid,
    /// Email of the user at issuance time.
    pub email: String,
    /// Issued-at timestamp (seconds since epoch).
    pub iat: i64,
    /// Expiration timestamp (seconds since epoch).
    pub exp: i64,
}

impl ResetClaims {
    /// Returns the expiration as a `DateTime<Utc>`.
    pub fn expires_at(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp(self.exp, 0)
    }
}
