use anyhow::Context;
use sqlx::PgPool;
use tracing::instrument;

use crate::utils::errors::AppError;
use crate::utils::pagination::{PaginationMeta, PaginationParams};

use super::model::{Contact, CreateContactDto, PaginatedContactsResponse};

pub struct ContactService;

impl ContactService {
    #[instrument(skip(db, dto))]
    pub async fn create(db: &PgPool, dto: CreateContactDto) -> Result<Contact, AppError> {
        sqlx::query_as::<_, Contact>(
            r#"
            INSERT INTO contacts (name, email, message)
            VALUES ($1, $2, $3)
            RETURNING *
            "#,
        )
        .bind(&dto.name)
        .bind(&dto.email)
        .bind(&dto.message)
        .fetch_one(db)
        .await
        .context("Failed to record contact message")
        .map_err(AppError::database)
    }

    #[instrument(skip(db))]
    pub async fn list(
        db: &PgPool,
        pagination: &PaginationParams,
    ) -> Result<PaginatedContactsResponse, AppError> {
        let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM contacts")
            .fetch_one(db)
            .await
            .context("Failed to count contact messages")
            .map_err(AppError::database)?;

        let contacts = sqlx::query_as::<_, Contact>(
            "SELECT * FROM contacts ORDER BY created_at DESC LIMIT $1 OFFSET $2",
        )
        .bind(pagination.limit())
        .bind(pagination.offset())
        .fetch_all(db)
        .await
        .context("Failed to fetch contact messages")
        .map_err(AppError::database)?;

        Ok(PaginatedContactsResponse {
            data: contacts,
            meta: PaginationMeta::new(total, pagination.limit(), pagination.offset()),
        })
    }
}
