//! Store contracts consumed by the service layer.
//!
//! Services depend only on these traits; the PostgreSQL repositories and
//! the in-memory stores both implement them. Keeping the contracts at this
//! seam lets the auth flow be tested without a running database.

use async_trait::async_trait;
use uuid::Uuid;

use contactly_core::result::AppResult;
use contactly_core::types::pagination::{PageRequest, PageResponse};
use contactly_entity::contact::{Contact, ContactSort, CreateContact, UpdateContact};
use contactly_entity::session::{CreateSession, Session};
use contactly_entity::user::{CreateUser, User};

/// Persistence contract for user credentials.
#[async_trait]
pub trait CredentialStore: Send + Sync + 'static {
    /// Find a user by email. The match is exact and case-sensitive.
    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>>;

    /// Find a user by primary key.
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<User>>;

    /// Create a new user. Fails with `Conflict` when the email is taken.
    async fn create(&self, data: &CreateUser) -> AppResult<User>;

    /// Replace a user's password hash. Fails with `NotFound` for an
    /// unknown user id.
    async fn update_password(&self, user_id: Uuid, password_hash: &str) -> AppResult<()>;
}

/// Persistence contract for sessions.
///
/// The store must guarantee at most one session per user: `replace_for_user`
/// removes any existing session for the owning user and inserts the new one
/// atomically, so concurrent login/refresh calls for the same user cannot
/// both end up with a live session.
#[async_trait]
pub trait SessionStore: Send + Sync + 'static {
    /// Find the session owned by a user, if any.
    async fn find_by_user_id(&self, user_id: Uuid) -> AppResult<Option<Session>>;

    /// Find a session by the exact (id, refresh token) pair.
    async fn find_by_id_and_refresh_token(
        &self,
        id: Uuid,
        refresh_token: &str,
    ) -> AppResult<Option<Session>>;

    /// Find a session by its access token.
    async fn find_by_access_token(&self, access_token: &str) -> AppResult<Option<Session>>;

    /// Delete any session for the owning user, then create the given one.
    async fn replace_for_user(&self, data: &CreateSession) -> AppResult<Session>;

    /// Delete the session owned by a user, if any.
    async fn delete_by_user_id(&self, user_id: Uuid) -> AppResult<()>;

    /// Delete a session by id. Deleting a non-existent id is not an error.
    async fn delete_by_id(&self, id: Uuid) -> AppResult<()>;
}

/// Persistence contract for contacts. All operations are scoped to the
/// owning user.
#[async_trait]
pub trait ContactStore: Send + Sync + 'static {
    /// Fetch one page of a user's contacts with the given sort.
    async fn find_page(
        &self,
        user_id: Uuid,
        page: &PageRequest,
        sort: &ContactSort,
    ) -> AppResult<PageResponse<Contact>>;

    /// Find a contact by id, only if owned by the user.
    async fn find_by_id(&self, user_id: Uuid, id: Uuid) -> AppResult<Option<Contact>>;

    /// Create a new contact.
    async fn create(&self, data: &CreateContact) -> AppResult<Contact>;

    /// Apply a partial update. Returns `None` when the contact does not
    /// exist or is owned by a different user.
    async fn update(
        &self,
        user_id: Uuid,
        id: Uuid,
        data: &UpdateContact,
    ) -> AppResult<Option<Contact>>;

    /// Delete a contact. Returns `true` if a row was removed.
    async fn delete(&self, user_id: Uuid, id: Uuid) -> AppResult<bool>;
}
