//! Authentication configuration.

use serde::{Deserialize, Serialize};

/// Authentication, session, and reset-token configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthConfig {
    /// Secret key for signing reset tokens (HMAC-SHA256).
    #[serde(default = "default_jwt_secret")]
    pub jwt_secret: String,
    /// Access token TTL in minutes.
    #[serde(default = "default_access_ttl")]
    pub access_ttl_minutes: u64,
    /// Refresh token TTL in days.
    #[serde(default = "default_refresh_ttl")]
    pub refresh_ttl_days: u64,
    /// Reset token TTL in minutes.
    #[serde(default = "default_reset_ttl")]
    pub reset_ttl_minutes: u64,
    /// Minimum password length.
    #[serde(default = "default_password_min")]
    pub password_min_length: usize,
    /// Public base URL used to build reset-password links.
    #[serde(default = "default_app_domain")]
    pub app_domain: String,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            jwt_secret: default_jwt_secret(),
            access_ttl_minutes: default_access_ttl(),
            refresh_ttl_days: default_refresh_ttl(),
            reset_ttl_minutes: default_reset_ttl(),
            password_min_length: default_password_min(),
            app_domain: default_app_domain(),
        }
    }
}

fn default_jwt_secret() -> String {
    "CHANGE_ME_IN_PRODUCTION".to_string()
}

fn default_access_ttl() -> u64 {
    15
}

fn default_refresh_ttl() -> u64 {
    30
}

fn default_reset_ttl() -> u64 {
    5
}

fn default_password_min() -> usize {
    8
}

fn default_app_domain() -> String {
    "http://localhost:3000".to_string()
}
