//! Per-user contact CRUD with pagination.

use std::sync::Arc;

use tracing::info;
use uuid::Uuid;

use contactly_core::error::AppError;
use contactly_core::types::pagination::{PageRequest, PageResponse};
use contactly_database::store::ContactStore;
use contactly_entity::contact::{Contact, ContactSort, CreateContact, UpdateContact};

/// Manages a user's contacts. Every operation is scoped to the owning
/// user; a contact owned by someone else behaves as if it did not exist.
pub struct ContactService {
    /// Contact store.
    contacts: Arc<dyn ContactStore>,
}

impl ContactService {
    /// Creates a new contact service.
    pub fn new(contacts: Arc<dyn ContactStore>) -> Self {
        Self { contacts }
    }

    /// Lists one page of the user's contacts.
    pub async fn list(
        &self,
        user_id: Uuid,
        page: PageRequest,
        sort: ContactSort,
    ) -> Result<PageResponse<Contact>, AppError> {
        self.contacts.find_page(user_id, &page, &sort).await
    }

    /// Fetches a single contact.
    pub async fn get(&self, user_id: Uuid, contact_id: Uuid) -> Result<Contact, AppError> {
        self.contacts
            .find_by_id(user_id, contact_id)
            .await?
            .ok_or_else(|| AppError::not_found("Contact not found"))
    }

    /// Creates a new contact for the user.
    pub async fn create(&self, data: CreateContact) -> Result<Contact, AppError> {
        let contact = self.contacts.create(&data).await?;
        info!(user_id = %contact.user_id, contact_id = %contact.id, "Contact created");
        Ok(contact)
    }

    /// Applies a partial update to a contact.
    pub async fn update(
        &self,
        user_id: Uuid,
        contact_id: Uuid,
        data: UpdateContact,
    ) -> Result<Contact, AppError> {
        self.contacts
            .update(user_id, contact_id, &data)
            .await?
            .ok_or_else(|| AppError::not_found("Contact not found"))
    }

    /// Deletes a contact.
    pub async fn delete(&self, user_id: Uuid, contact_id: Uuid) -> Result<(), AppError> {
        let deleted = self.contacts.delete(user_id, contact_id).await?;
        if !deleted {
            return Err(AppError::not_found("Contact not found"));
        }
        info!(user_id = %user_id, contact_id = %contact_id, "Contact deleted");
        Ok(())
    }
}
