//! SMTP delivery configuration.

use serde::{Deserialize, Serialize};

/// SMTP relay settings for outbound mail.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SmtpConfig {
    /// SMTP server hostname.
    #[serde(default = "default_host")]
    pub host: String,
    /// SMTP server port (587 for STARTTLS).
    #[serde(default = "default_port")]
    pub port: u16,
    /// Username for SMTP authentication.
    #[serde(default)]
    pub username: Option<String>,
    /// Password for SMTP authentication.
    #[serde(default)]
    pub password: Option<String>,
    /// Sender address for outbound mail.
    #[serde(default = "default_from")]
    pub from: String,
}

impl Default for SmtpConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            username: None,
            password: None,
            from: default_from(),
        }
    }
}

fn default_host() -> String {
    "localhost".to_string()
}

fn default_port() -> u16 {
    587
}

fn default_from() -> String {
    "noreply@contactly.local".to_string()
}
