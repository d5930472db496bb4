//! In-memory session store.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::Mutex;
use uuid::Uuid;

use contactly_core::result::AppResult;
use contactly_entity::session::{CreateSession, Session};

use crate::store::SessionStore;

/// In-memory session store keyed by session id.
///
/// `replace_for_user` holds the map lock across the delete and insert, so
/// the one-session-per-user invariant holds exactly as it does under the
/// database's unique constraint.
#[derive(Debug, Clone, Default)]
pub struct MemorySessionStore {
    /// Protected session map.
    sessions: Arc<Mutex<HashMap<Uuid, Session>>>,
}

impl MemorySessionStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of live sessions (test helper).
    pub async fn len(&self) -> usize {
        self.sessions.lock().await.len()
    }

    /// Whether the store holds no sessions.
    pub async fn is_empty(&self) -> bool {
        self.sessions.lock().await.is_empty()
    }
}

#[async_trait]
impl SessionStore for MemorySessionStore {
    async fn find_by_user_id(&self, user_id: Uuid) -> AppResult<Option<Session>> {
        let sessions = self.sessions.lock().await;
        Ok(sessions.values().find(|s| s.user_id == user_id).cloned())
    }

    async fn find_by_id_and_refresh_token(
        &self,
        id: Uuid,
        refresh_token: &str,
    ) -> AppResult<Option<Session>> {
        let sessions = self.sessions.lock().await;
        Ok(sessions
            .get(&id)
            .filter(|s| s.refresh_token == refresh_token)
            .cloned())
    }

    async fn find_by_access_token(&self, access_token: &str) -> AppResult<Option<Session>> {
        let sessions = self.sessions.lock().await;
        Ok(sessions
            .values()
            .find(|s| s.access_token == access_token)
            .cloned())
    }

    async fn replace_for_user(&self, data: &CreateSession) -> AppResult<Session> {
        let mut sessions = self.sessions.lock().await;
        sessions.retain(|_, s| s.user_id != data.user_id);

        let session = Session {
            id: Uuid::new_v4(),
            user_id: data.user_id,
            access_token: data.access_token.clone(),
            refresh_token: data.refresh_token.clone(),
            access_expires_at: data.access_expires_at,
            refresh_expires_at: data.refresh_expires_at,
            created_at: Utc::now(),
        };
        sessions.insert(session.id, session.clone());
        Ok(session)
    }

    async fn delete_by_user_id(&self, user_id: Uuid) -> AppResult<()> {
        let mut sessions = self.sessions.lock().await;
        sessions.retain(|_, s| s.user_id != user_id);
        Ok(())
    }

    async fn delete_by_id(&self, id: Uuid) -> AppResult<()> {
        let mut sessions = self.sessions.lock().await;
        sessions.remove(&id);
        Ok(())
    }
}
