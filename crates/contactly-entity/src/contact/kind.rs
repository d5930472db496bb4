//! Contact type enumeration.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Category of a contact.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "contact_type", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum ContactKind {
    /// Work contact.
    Work,
    /// Home contact.
    Home,
    /// Personal contact.
    Personal,
}

impl ContactKind {
    /// Return the kind as a lowercase string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Work => "work",
            Self::Home => "home",
            Self::Personal => "personal",
        }
    }
}

impl Default for ContactKind {
    fn default() -> Self {
        Self::Personal
    }
}

impl fmt::Display for ContactKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ContactKind {
    type Err = contactly_core::AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "work" => Ok(Self::Work),
            "home" => Ok(Self::Home),
            "personal" => Ok(Self::Personal),
            _ => Err(contactly_core::AppError::validation(format!(
                "Invalid contact type: '{s}'. Expected one of: work, home, personal"
            ))),
        }
    }
}
