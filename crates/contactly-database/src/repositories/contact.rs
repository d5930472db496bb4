//! Contact repository implementation.

use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use contactly_core::error::{AppError, ErrorKind};
use contactly_core::result::AppResult;
use contactly_core::types::pagination::{PageRequest, PageResponse};
use contactly_entity::contact::{Contact, ContactSort, CreateContact, UpdateContact};

use crate::store::ContactStore;

/// Repository for contact records.
#[derive(Debug, Clone)]
pub struct ContactRepository {
    pool: PgPool,
}

impl ContactRepository {
    /// Create a new contact repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ContactStore for ContactRepository {
    async fn find_page(
        &self,
        user_id: Uuid,
        page: &PageRequest,
        sort: &ContactSort,
    ) -> AppResult<PageResponse<Contact>> {
        let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM contacts WHERE user_id = $1")
            .bind(user_id)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to count contacts", e)
            })?;

        // Sort column comes from a whitelisted enum, never from raw input.
        let query = format!(
            "SELECT * FROM contacts WHERE user_id = $1 ORDER BY {} {} LIMIT $2 OFFSET $3",
            sort.field.as_column(),
            sort.order.as_sql(),
        );

        let contacts = sqlx::query_as::<_, Contact>(&query)
            .bind(user_id)
            .bind(page.limit() as i64)
            .bind(page.offset() as i64)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to list contacts", e)
            })?;

        Ok(PageResponse::new(
            contacts,
            page.page,
            page.page_size,
            total as u64,
        ))
    }

    async fn find_by_id(&self, user_id: Uuid, id: Uuid) -> AppResult<Option<Contact>> {
        sqlx::query_as::<_, Contact>("SELECT * FROM contacts WHERE id = $1 AND user_id = $2")
            .bind(id)
            .bind(user_id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find contact", e))
    }

    async fn create(&self, data: &CreateContact) -> AppResult<Contact> {
        sqlx::query_as::<_, Contact>(
            "INSERT INTO contacts \
             (user_id, name, phone_number, email, is_favourite, contact_type, photo) \
             VALUES ($1, $2, $3, $4, $5, $6, $7) \
             RETURNING *",
        )
        .bind(data.user_id)
        .bind(&data.name)
        .bind(&data.phone_number)
        .bind(&data.email)
        .bind(data.is_favourite)
        .bind(data.contact_type)
        .bind(&data.photo)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to create contact", e))
    }

    async fn update(
        &self,
        user_id: Uuid,
        id: Uuid,
        data: &UpdateContact,
    ) -> AppResult<Option<Contact>> {
        sqlx::query_as::<_, Contact>(
            "UPDATE contacts SET name = COALESCE($3, name), \
                                 phone_number = COALESCE($4, phone_number), \
                                 email = COALESCE($5, email), \
                                 is_favourite = COALESCE($6, is_favourite), \
                                 contact_type = COALESCE($7, contact_type), \
                                 photo = COALESCE($8, photo), \
                                 updated_at = NOW() \
             WHERE id = $1 AND user_id = $2 RETURNING *",
        )
        .bind(id)
        .bind(user_id)
        .bind(&data.name)
        .bind(&data.phone_number)
        .bind(&data.email)
        .bind(data.is_favourite)
        .bind(data.contact_type)
        .bind(&data.photo)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to update contact", e))
    }

    async fn delete(&self, user_id: Uuid, id: Uuid) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM contacts WHERE id = $1 AND user_id = $2")
            .bind(id)
            .bind(user_id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to delete contact", e)
            })?;

        Ok(result.rows_affected() > 0)
    }
}
