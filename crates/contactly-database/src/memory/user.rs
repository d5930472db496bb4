//! In-memory credential store.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::Mutex;
use uuid::Uuid;

use contactly_core::error::AppError;
use contactly_core::result::AppResult;
use contactly_entity::user::{CreateUser, User};

use crate::store::CredentialStore;

/// In-memory credential store keyed by user id.
#[derive(Debug, Clone, Default)]
pub struct MemoryUserStore {
    /// Protected user map.
    users: Arc<Mutex<HashMap<Uuid, User>>>,
}

impl MemoryUserStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl CredentialStore for MemoryUserStore {
    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>> {
        let users = self.users.lock().await;
        Ok(users.values().find(|u| u.email == email).cloned())
    }

    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<User>> {
        let users = self.users.lock().await;
        Ok(users.get(&id).cloned())
    }

    async fn create(&self, data: &CreateUser) -> AppResult<User> {
        let mut users = self.users.lock().await;

        if users.values().any(|u| u.email == data.email) {
            return Err(AppError::conflict("Email in use"));
        }

        let now = Utc::now();
        let user = User {
            id: Uuid::new_v4(),
            name: data.name.clone(),
            email: data.email.clone(),
            password_hash: data.password_hash.clone(),
            phone: data.phone.clone(),
            created_at: now,
            updated_at: now,
        };
        users.insert(user.id, user.clone());
        Ok(user)
    }

    async fn update_password(&self, user_id: Uuid, password_hash: &str) -> AppResult<()> {
        let mut users = self.users.lock().await;
        match users.get_mut(&user_id) {
            Some(user) => {
                user.password_hash = password_hash.to_string();
                user.updated_at = Utc::now();
                Ok(())
            }
            None => Err(AppError::not_found(format!("User {user_id} not found"))),
        }
    }
}
