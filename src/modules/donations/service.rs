use anyhow::Context;
use sqlx::{PgPool, Postgres, QueryBuilder};
use tracing::instrument;
use uuid::Uuid;

use crate::middleware::role::ensure_owner_or_admin;
use crate::modules::users::model::User;
use crate::utils::errors::AppError;
use crate::utils::pagination::{PaginationMeta, PaginationParams};

use super::model::{
    CreateDonationRequestDto, DonationFilterParams, DonationRequest, DonationStatus,
    PaginatedDonationsResponse, UpdateOutcome,
};

fn push_filters(query: &mut QueryBuilder<'_, Postgres>, filter: &DonationFilterParams) {
    if let Some(status) = filter.status {
        query.push(" AND donation_status = ").push_bind(status);
    }
    if let Some(blood_group) = &filter.blood_group {
        query.push(" AND blood_group = ").push_bind(blood_group.clone());
    }
    if let Some(district) = &filter.district {
        query.push(" AND district = ").push_bind(district.clone());
    }
}

pub struct DonationService;

impl DonationService {
    #[instrument(skip(db, user, dto), fields(requester_id = %user.id))]
    pub async fn create(
        db: &PgPool,
        user: &User,
        dto: CreateDonationRequestDto,
    ) -> Result<DonationRequest, AppError> {
        sqlx::query_as::<_, DonationRequest>(
            r#"
            INSERT INTO donation_requests
                (requester_id, recipient_name, blood_group, district, hospital, address,
                 donation_date, message)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            RETURNING *
            "#,
        )
        .bind(user.id)
        .bind(&dto.recipient_name)
        .bind(&dto.blood_group)
        .bind(&dto.district)
        .bind(&dto.hospital)
        .bind(&dto.address)
        .bind(dto.donation_date)
        .bind(&dto.message)
        .fetch_one(db)
        .await
        .context("Failed to create donation request")
        .map_err(AppError::database)
    }

    #[instrument(skip(db))]
    pub async fn list(
        db: &PgPool,
        filter: &DonationFilterParams,
        pagination: &PaginationParams,
    ) -> Result<PaginatedDonationsResponse, AppError> {
        let mut count_query =
            QueryBuilder::<Postgres>::new("SELECT COUNT(*) FROM donation_requests WHERE TRUE");
        push_filters(&mut count_query, filter);
        let total: i64 = count_query
            .build_query_scalar()
            .fetch_one(db)
            .await
            .context("Failed to count donation requests")
            .map_err(AppError::database)?;

        let mut query =
            QueryBuilder::<Postgres>::new("SELECT * FROM donation_requests WHERE TRUE");
        push_filters(&mut query, filter);
        query.push(" ORDER BY created_at DESC LIMIT ");
        query.push_bind(pagination.limit());
        query.push(" OFFSET ");
        query.push_bind(pagination.offset());

        let requests = query
            .build_query_as::<DonationRequest>()
            .fetch_all(db)
            .await
            .context("Failed to fetch donation requests")
            .map_err(AppError::database)?;

        Ok(PaginatedDonationsResponse {
            data: requests,
            meta: PaginationMeta::new(total, pagination.limit(), pagination.offset()),
        })
    }

    #[instrument(skip(db))]
    pub async fn get(db: &PgPool, id: Uuid) -> Result<DonationRequest, AppError> {
        sqlx::query_as::<_, DonationRequest>("SELECT * FROM donation_requests WHERE id = $1")
            .bind(id)
            .fetch_optional(db)
            .await
            .context("Failed to fetch donation request")
            .map_err(AppError::database)?
            .ok_or_else(|| AppError::not_found("Donation request not found"))
    }

    /// Records the caller as the donor and moves the request to
    /// `inprogress`.
    ///
    /// The update is filtered on `pending`, so responding to a request
    /// someone already took is a no-op reported as zero modified rows
    /// rather than an error.
    #[instrument(skip(db, user), fields(donor_id = %user.id))]
    pub async fn respond(db: &PgPool, user: &User, id: Uuid) -> Result<UpdateOutcome, AppError> {
        let result = sqlx::query(
            r#"
            UPDATE donation_requests
            SET donation_status = 'inprogress',
                donor_name = $2,
                donor_email = $3
            WHERE id = $1
              AND donation_status = 'pending'
            "#,
        )
        .bind(id)
        .bind(&user.name)
        .bind(&user.email)
        .execute(db)
        .await
        .context("Failed to respond to donation request")
        .map_err(AppError::database)?;

        Ok(UpdateOutcome {
            modified: result.rows_affected(),
        })
    }

    /// Sets the lifecycle status; the requester or an admin only.
    #[instrument(skip(db, user))]
    pub async fn update_status(
        db: &PgPool,
        user: &User,
        id: Uuid,
        status: DonationStatus,
    ) -> Result<DonationRequest, AppError> {
        let request = Self::get(db, id).await?;
        ensure_owner_or_admin(user, request.requester_id)?;

        sqlx::query_as::<_, DonationRequest>(
            "UPDATE donation_requests SET donation_status = $2 WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .bind(status)
        .fetch_optional(db)
        .await
        .context("Failed to update donation request status")
        .map_err(AppError::database)?
        .ok_or_else(|| AppError::not_found("Donation request not found"))
    }

    #[instrument(skip(db, user))]
    pub async fn delete(db: &PgPool, user: &User, id: Uuid) -> Result<(), AppError> {
        let request = Self::get(db, id).await?;
        ensure_owner_or_admin(user, request.requester_id)?;

        sqlx::query("DELETE FROM donation_requests WHERE id = $1")
            .bind(id)
            .execute(db)
            .await
            .context("Failed to delete donation request")
            .map_err(AppError::database)?;

        Ok(())
    }
}
