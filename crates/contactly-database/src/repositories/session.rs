//! Session repository implementation.

use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use contactly_core::error::{AppError, ErrorKind};
use contactly_core::result::AppResult;
use contactly_entity::session::{CreateSession, Session};

use crate::store::SessionStore;

/// Repository for session records.
///
/// The `sessions.user_id` column carries a UNIQUE constraint, which is what
/// keeps the one-session-per-user invariant correct across multiple
/// concurrent service instances.
#[derive(Debug, Clone)]
pub struct SessionRepository {
    pool: PgPool,
}

impl SessionRepository {
    /// Create a new session repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl SessionStore for SessionRepository {
    async fn find_by_user_id(&self, user_id: Uuid) -> AppResult<Option<Session>> {
        sqlx::query_as::<_, Session>("SELECT * FROM sessions WHERE user_id = $1")
            .bind(user_id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to find session by user", e)
            })
    }

    async fn find_by_id_and_refresh_token(
        &self,
        id: Uuid,
        refresh_token: &str,
    ) -> AppResult<Option<Session>> {
        sqlx::query_as::<_, Session>("SELECT * FROM sessions WHERE id = $1 AND refresh_token = $2")
            .bind(id)
            .bind(refresh_token)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find session", e))
    }

    async fn find_by_access_token(&self, access_token: &str) -> AppResult<Option<Session>> {
        sqlx::query_as::<_, Session>("SELECT * FROM sessions WHERE access_token = $1")
            .bind(access_token)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(
                    ErrorKind::Database,
                    "Failed to find session by access token",
                    e,
                )
            })
    }

    async fn replace_for_user(&self, data: &CreateSession) -> AppResult<Session> {
        // Delete-then-create runs in one transaction so a crash between the
        // two statements cannot leave the user without a recoverable state,
        // and the unique constraint serializes concurrent replacements.
        let mut tx = self.pool.begin().await.map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to begin transaction", e)
        })?;

        sqlx::query("DELETE FROM sessions WHERE user_id = $1")
            .bind(data.user_id)
            .execute(&mut *tx)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to delete prior session", e)
            })?;

        let session = sqlx::query_as::<_, Session>(
            "INSERT INTO sessions \
             (user_id, access_token, refresh_token, access_expires_at, refresh_expires_at) \
             VALUES ($1, $2, $3, $4, $5) \
             RETURNING *",
        )
        .bind(data.user_id)
        .bind(&data.access_token)
        .bind(&data.refresh_token)
        .bind(data.access_expires_at)
        .bind(data.refresh_expires_at)
        .fetch_one(&mut *tx)
        .await
        .map_err(|e| match e {
            sqlx::Error::Database(ref db_err)
                if db_err.constraint() == Some("sessions_user_id_key") =>
            {
                AppError::conflict("User already has an active session")
            }
            _ => AppError::with_source(ErrorKind::Database, "Failed to create session", e),
        })?;

        tx.commit().await.map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to commit session replacement", e)
        })?;

        Ok(session)
    }

    async fn delete_by_user_id(&self, user_id: Uuid) -> AppResult<()> {
        sqlx::query("DELETE FROM sessions WHERE user_id = $1")
            .bind(user_id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to delete user sessions", e)
            })?;
        Ok(())
    }

    async fn delete_by_id(&self, id: Uuid) -> AppResult<()> {
        sqlx::query("DELETE FROM sessions WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to delete session", e)
            })?;
        Ok(())
    }
}
