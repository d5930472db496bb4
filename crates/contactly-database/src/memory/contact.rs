//! In-memory contact store.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::Mutex;
use uuid::Uuid;

use contactly_core::result::AppResult;
use contactly_core::types::pagination::{PageRequest, PageResponse};
use contactly_core::types::sort::SortOrder;
use contactly_entity::contact::{
    Contact, ContactSort, ContactSortField, CreateContact, UpdateContact,
};

use crate::store::ContactStore;

/// In-memory contact store keyed by contact id.
#[derive(Debug, Clone, Default)]
pub struct MemoryContactStore {
    /// Protected contact map.
    contacts: Arc<Mutex<HashMap<Uuid, Contact>>>,
}

impl MemoryContactStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

fn compare(a: &Contact, b: &Contact, field: ContactSortField) -> std::cmp::Ordering {
    match field {
        ContactSortField::Name => a.name.cmp(&b.name),
        ContactSortField::PhoneNumber => a.phone_number.cmp(&b.phone_number),
        ContactSortField::IsFavourite => a.is_favourite.cmp(&b.is_favourite),
        ContactSortField::ContactType => a.contact_type.as_str().cmp(b.contact_type.as_str()),
        ContactSortField::CreatedAt => a.created_at.cmp(&b.created_at),
    }
}

#[async_trait]
impl ContactStore for MemoryContactStore {
    async fn find_page(
        &self,
        user_id: Uuid,
        page: &PageRequest,
        sort: &ContactSort,
    ) -> AppResult<PageResponse<Contact>> {
        let contacts = self.contacts.lock().await;

        let mut owned: Vec<Contact> = contacts
            .values()
            .filter(|c| c.user_id == user_id)
            .cloned()
            .collect();

        owned.sort_by(|a, b| {
            let ord = compare(a, b, sort.field);
            match sort.order {
                SortOrder::Asc => ord,
                SortOrder::Desc => ord.reverse(),
            }
        });

        let total = owned.len() as u64;
        let items: Vec<Contact> = owned
            .into_iter()
            .skip(page.offset() as usize)
            .take(page.limit() as usize)
            .collect();

        Ok(PageResponse::new(items, page.page, page.page_size, total))
    }

    async fn find_by_id(&self, user_id: Uuid, id: Uuid) -> AppResult<Option<Contact>> {
        let contacts = self.contacts.lock().await;
        Ok(contacts.get(&id).filter(|c| c.user_id == user_id).cloned())
    }

    async fn create(&self, data: &CreateContact) -> AppResult<Contact> {
        let mut contacts = self.contacts.lock().await;

        let now = Utc::now();
        let contact = Contact {
            id: Uuid::new_v4(),
            user_id: data.user_id,
            name: data.name.clone(),
            phone_number: data.phone_number.clone(),
            email: data.email.clone(),
            is_favourite: data.is_favourite,
            contact_type: data.contact_type,
            photo: data.photo.clone(),
            created_at: now,
            updated_at: now,
        };
        contacts.insert(contact.id, contact.clone());
        Ok(contact)
    }

    async fn update(
        &self,
        user_id: Uuid,
        id: Uuid,
        data: &UpdateContact,
    ) -> AppResult<Option<Contact>> {
        let mut contacts = self.contacts.lock().await;

        let Some(contact) = contacts.get_mut(&id).filter(|c| c.user_id == user_id) else {
            return Ok(None);
        };

        if let Some(name) = &data.name {
            contact.name = name.clone();
        }
        if let Some(phone_number) = &data.phone_number {
            contact.phone_number = phone_number.clone();
        }
        if let Some(email) = &data.email {
            contact.email = Some(email.clone());
        }
        if let Some(is_favourite) = data.is_favourite {
            contact.is_favourite = is_favourite;
        }
        if let Some(contact_type) = data.contact_type {
            contact.contact_type = contact_type;
        }
        if let Some(photo) = &data.photo {
            contact.photo = Some(photo.clone());
        }
        contact.updated_at = Utc::now();

        Ok(Some(contact.clone()))
    }

    async fn delete(&self, user_id: Uuid, id: Uuid) -> AppResult<bool> {
        let mut contacts = self.contacts.lock().await;
        match contacts.get(&id) {
            Some(c) if c.user_id == user_id => {
                contacts.remove(&id);
                Ok(true)
            }
            _ => Ok(false),
        }
    }
}
