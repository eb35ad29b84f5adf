use anyhow::Context;
use sqlx::PgPool;
use tracing::instrument;

use crate::modules::users::model::User;
use crate::utils::errors::AppError;
use crate::utils::pagination::{PaginationMeta, PaginationParams};

use super::model::{CreateFundingDto, Funding, FundingTotal, PaginatedFundingsResponse};

pub struct FundingService;

impl FundingService {
    #[instrument(skip(db, user, dto), fields(user_id = %user.id))]
    pub async fn create(
        db: &PgPool,
        user: &User,
        dto: CreateFundingDto,
    ) -> Result<Funding, AppError> {
        sqlx::query_as::<_, Funding>(
            r#"
            INSERT INTO fundings (user_id, email, name, amount)
            VALUES ($1, $2, $3, $4)
            RETURNING *
            "#,
        )
        .bind(user.id)
        .bind(&user.email)
        .bind(&user.name)
        .bind(dto.amount)
        .fetch_one(db)
        .await
        .context("Failed to record funding")
        .map_err(AppError::database)
    }

    #[instrument(skip(db))]
    pub async fn list(
        db: &PgPool,
        pagination: &PaginationParams,
    ) -> Result<PaginatedFundingsResponse, AppError> {
        let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM fundings")
            .fetch_one(db)
            .await
            .context("Failed to count fundings")
            .map_err(AppError::database)?;

        let fundings = sqlx::query_as::<_, Funding>(
            "SELECT * FROM fundings ORDER BY created_at DESC LIMIT $1 OFFSET $2",
        )
        .bind(pagination.limit())
        .bind(pagination.offset())
        .fetch_all(db)
        .await
        .context("Failed to fetch fundings")
        .map_err(AppError::database)?;

        Ok(PaginatedFundingsResponse {
            data: fundings,
            meta: PaginationMeta::new(total, pagination.limit(), pagination.offset()),
        })
    }

    /// Sums every recorded contribution.
    #[instrument(skip(db))]
    pub async fn total(db: &PgPool) -> Result<FundingTotal, AppError> {
        let total: i64 =
            sqlx::query_scalar("SELECT COALESCE(SUM(amount), 0)::BIGINT FROM fundings")
                .fetch_one(db)
                .await
                .context("Failed to sum fundings")
                .map_err(AppError::database)?;

        Ok(FundingTotal { total })
    }
}
