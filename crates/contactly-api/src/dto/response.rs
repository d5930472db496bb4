//! Response DTOs.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use contactly_core::types::PageResponse;
use contactly_entity::contact::Contact;
use contactly_entity::session::Session;
use contactly_entity::user::User;

/// Standard success response wrapper.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T: Serialize> {
    /// Whether the request was successful.
    pub success: bool,
    /// Response data.
    pub data: T,
}

impl<T: Serialize> ApiResponse<T> {
    /// Creates a successful response.
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data,
        }
    }
}

/// Simple message response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    /// Message.
    pub message: String,
}

/// User summary for responses. Never carries the password hash.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserResponse {
    /// User id.
    pub id: Uuid,
    /// Display name.
    pub name: String,
    /// Email address.
    pub email: String,
    /// Phone number.
    pub phone: Option<String>,
    /// Created at.
    pub created_at: DateTime<Utc>,
    /// Updated at.
    pub updated_at: DateTime<Utc>,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            name: user.name,
            email: user.email,
            phone: user.phone,
            created_at: user.created_at,
            updated_at: user.updated_at,
        }
    }
}

/// Session token pair returned by login and refresh.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionResponse {
    /// Session id, required for refresh and rotated with it.
    pub session_id: Uuid,
    /// Short-lived access token.
    pub access_token: String,
    /// Long-lived refresh token.
    pub refresh_token: String,
    /// Access token expiration.
    pub access_expires_at: DateTime<Utc>,
    /// Refresh token expiration.
    pub refresh_expires_at: DateTime<Utc>,
}

impl From<Session> for SessionResponse {
    fn from(session: Session) -> Self {
        Self {
            session_id: session.id,
            access_token: session.access_token,
            refresh_token: session.refresh_token,
            access_expires_at: session.access_expires_at,
            refresh_expires_at: session.refresh_expires_at,
        }
    }
}

/// Contact as returned by the API.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContactResponse {
    /// Contact id.
    pub id: Uuid,
    /// Contact name.
    pub name: String,
    /// Phone number.
    pub phone_number: String,
    /// Email address.
    pub email: Option<String>,
    /// Favourite flag.
    pub is_favourite: bool,
    /// Contact category.
    pub contact_type: String,
    /// Photo URL.
    pub photo: Option<String>,
    /// Created at.
    pub created_at: DateTime<Utc>,
    /// Updated at.
    pub updated_at: DateTime<Utc>,
}

impl From<Contact> for ContactResponse {
    fn from(contact: Contact) -> Self {
        Self {
            id: contact.id,
            name: contact.name,
            phone_number: contact.phone_number,
            email: contact.email,
            is_favourite: contact.is_favourite,
            contact_type: contact.contact_type.as_str().to_string(),
            photo: contact.photo,
            created_at: contact.created_at,
            updated_at: contact.updated_at,
        }
    }
}

/// Paginated response wrapper.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaginatedResponse<T: Serialize> {
    /// Items in this page.
    pub items: Vec<T>,
    /// Current page.
    pub page: u64,
    /// Items per page.
    pub per_page: u64,
    /// Total item count.
    pub total_items: u64,
    /// Total pages.
    pub total_pages: u64,
    /// Whether a later page exists.
    pub has_next: bool,
    /// Whether an earlier page exists.
    pub has_previous: bool,
}

impl From<PageResponse<Contact>> for PaginatedResponse<ContactResponse> {
    fn from(page: PageResponse<Contact>) -> Self {
        Self {
            items: page.items.into_iter().map(ContactResponse::from).collect(),
            page: page.page,
            per_page: page.page_size,
            total_items: page.total_items,
            total_pages: page.total_pages,
            has_next: page.has_next,
            has_previous: page.has_previous,
        }
    }
}
