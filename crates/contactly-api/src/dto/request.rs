//! Request DTOs with validation.

use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use contactly_entity::contact::ContactKind;

/// Registration request body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct RegisterRequest {
    /// Display name.
    #[validate(length(min = 1, max = 100, message = "Name is required"))]
    pub name: String,
    /// Email address.
    #[validate(email(message = "Invalid email address"))]
    pub email: String,
    /// Password.
    #[validate(length(min = 8, message = "Password must be at least 8 characters"))]
    pub password: String,
    /// Phone number.
    pub phone: Option<String>,
}

/// Login request body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct LoginRequest {
    /// Email address.
    #[validate(email(message = "Invalid email address"))]
    pub email: String,
    /// Password.
    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

/// Token refresh request body. The pair must match an existing session.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RefreshRequest {
    /// Session id returned at login.
    pub session_id: Uuid,
    /// Refresh token returned at login.
    pub refresh_token: String,
}

/// Password reset email request body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct SendResetEmailRequest {
    /// Email address of the account to reset.
    #[validate(email(message = "Invalid email address"))]
    pub email: String,
}

/// Password reset request body carrying the emailed token.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ResetPasswordRequest {
    /// Signed reset token from the email link.
    #[validate(length(min = 1, message = "Token is required"))]
    pub token: String,
    /// New password.
    #[validate(length(min = 8, message = "Password must be at least 8 characters"))]
    pub password: String,
}

/// Create contact request body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateContactRequest {
    /// Contact name.
    #[validate(length(min = 1, max = 100, message = "Name is required"))]
    pub name: String,
    /// Phone number.
    #[validate(length(min = 1, max = 30, message = "Phone number is required"))]
    pub phone_number: String,
    /// Email address.
    #[validate(email(message = "Invalid email address"))]
    pub email: Option<String>,
    /// Favourite flag.
    #[serde(default)]
    pub is_favourite: bool,
    /// Contact category.
    #[serde(default)]
    pub contact_type: ContactKind,
    /// Photo URL.
    pub photo: Option<String>,
}

/// Partial contact update request body. Absent fields are left unchanged.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct UpdateContactRequest {
    /// Contact name.
    #[validate(length(min = 1, max = 100, message = "Name must not be empty"))]
    pub name: Option<String>,
    /// Phone number.
    #[validate(length(min = 1, max = 30, message = "Phone number must not be empty"))]
    pub phone_number: Option<String>,
    /// Email address.
    #[validate(email(message = "Invalid email address"))]
    pub email: Option<String>,
    /// Favourite flag.
    pub is_favourite: Option<bool>,
    /// Contact category.
    pub contact_type: Option<ContactKind>,
    /// Photo URL.
    pub photo: Option<String>,
}
