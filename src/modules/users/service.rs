use anyhow::Context;
use sqlx::{PgPool, Postgres, QueryBuilder};
use tracing::instrument;
use uuid::Uuid;

use crate::utils::errors::AppError;
use crate::utils::pagination::{PaginationMeta, PaginationParams};

use super::model::{
    PaginatedUsersResponse, RequestMerchantDto, User, UserFilterParams, UserRole, UserStatus,
    transitions,
};

pub struct UserService;

impl UserService {
    /// Lists every non-admin account, newest first.
    #[instrument(skip(db))]
    pub async fn list_non_admin(
        db: &PgPool,
        filter: &UserFilterParams,
        pagination: &PaginationParams,
    ) -> Result<PaginatedUsersResponse, AppError> {
        let mut count_query =
            QueryBuilder::<Postgres>::new("SELECT COUNT(*) FROM users WHERE role <> 'admin'");
        if let Some(district) = &filter.district {
            count_query.push(" AND district = ").push_bind(district);
        }
        let total: i64 = count_query
            .build_query_scalar()
            .fetch_one(db)
            .await
            .context("Failed to count users")
            .map_err(AppError::database)?;

        let mut query =
            QueryBuilder::<Postgres>::new("SELECT * FROM users WHERE role <> 'admin'");
        if let Some(district) = &filter.district {
            query.push(" AND district = ").push_bind(district);
        }
        query.push(" ORDER BY created_at DESC LIMIT ");
        query.push_bind(pagination.limit());
        query.push(" OFFSET ");
        query.push_bind(pagination.offset());

        let users = query
            .build_query_as::<User>()
            .fetch_all(db)
            .await
            .context("Failed to fetch users")
            .map_err(AppError::database)?;

        Ok(PaginatedUsersResponse {
            data: users,
            meta: PaginationMeta::new(total, pagination.limit(), pagination.offset()),
        })
    }

    /// Files a merchant request for the calling user.
    ///
    /// The update is keyed on the absence of a pending request, so two
    /// concurrent requests resolve to a single filed envelope.
    #[instrument(skip(db, user), fields(user_id = %user.id))]
    pub async fn request_merchant(
        db: &PgPool,
        user: &User,
        dto: RequestMerchantDto,
    ) -> Result<User, AppError> {
        transitions::request_allowed(user.role_request_status)?;

        let updated = sqlx::query_as::<_, User>(
            r#"
            UPDATE users
            SET role_request_type = 'merchant',
                role_request_status = 'pending',
                role_requested_at = now(),
                shop_name = $2,
                shop_address = $3,
                status = 'active',
                updated_at = now()
            WHERE id = $1
              AND role_request_status IS DISTINCT FROM 'pending'
            RETURNING *
            "#,
        )
        .bind(user.id)
        .bind(&dto.shop_name)
        .bind(&dto.shop_address)
        .fetch_optional(db)
        .await
        .context("Failed to file merchant request")
        .map_err(AppError::database)?;

        updated.ok_or_else(|| transitions::TransitionError::AlreadyPending.into())
    }

    /// Approves a pending merchant request: grants the role and activates
    /// an account still waiting on its first approval.
    #[instrument(skip(db))]
    pub async fn approve_merchant(db: &PgPool, id: Uuid) -> Result<User, AppError> {
        let updated = sqlx::query_as::<_, User>(
            r#"
            UPDATE users
            SET role = 'merchant',
                role_request_status = 'approved',
                status = CASE WHEN status = 'pending' THEN 'active'::user_status ELSE status END,
                updated_at = now()
            WHERE id = $1
              AND role_request_type = 'merchant'
              AND role_request_status = 'pending'
            RETURNING *
            "#,
        )
        .bind(id)
        .fetch_optional(db)
        .await
        .context("Failed to approve merchant request")
        .map_err(AppError::database)?;

        updated.ok_or_else(|| transitions::TransitionError::NoSuchRequest.into())
    }

    /// Rejects a pending merchant request: the role reverts to customer and
    /// the account standing is left untouched, so the user may reapply.
    #[instrument(skip(db))]
    pub async fn reject_merchant(db: &PgPool, id: Uuid) -> Result<User, AppError> {
        let updated = sqlx::query_as::<_, User>(
            r#"
            UPDATE users
            SET role = 'customer',
                role_request_status = 'rejected',
                updated_at = now()
            WHERE id = $1
              AND role_request_type = 'merchant'
              AND role_request_status = 'pending'
            RETURNING *
            "#,
        )
        .bind(id)
        .fetch_optional(db)
        .await
        .context("Failed to reject merchant request")
        .map_err(AppError::database)?;

        updated.ok_or_else(|| transitions::TransitionError::NoSuchRequest.into())
    }

    /// Sets a role verbatim, no request envelope required.
    #[instrument(skip(db))]
    pub async fn update_role(db: &PgPool, id: Uuid, role: UserRole) -> Result<User, AppError> {
        sqlx::query_as::<_, User>(
            "UPDATE users SET role = $2, updated_at = now() WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .bind(role)
        .fetch_optional(db)
        .await
        .context("Failed to update role")
        .map_err(AppError::database)?
        .ok_or_else(|| AppError::not_found("User not found"))
    }

    /// Sets a status verbatim. Repeating the same status is not an error.
    #[instrument(skip(db))]
    pub async fn update_status(
        db: &PgPool,
        id: Uuid,
        status: UserStatus,
    ) -> Result<User, AppError> {
        sqlx::query_as::<_, User>(
            "UPDATE users SET status = $2, updated_at = now() WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .bind(status)
        .fetch_optional(db)
        .await
        .context("Failed to update status")
        .map_err(AppError::database)?
        .ok_or_else(|| AppError::not_found("User not found"))
    }

    #[instrument(skip(db))]
    pub async fn delete_user(db: &PgPool, id: Uuid) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM users WHERE id = $1")
            .bind(id)
            .execute(db)
            .await
            .context("Failed to delete user")
            .map_err(AppError::database)?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found("User not found"));
        }

        Ok(())
    }
}
