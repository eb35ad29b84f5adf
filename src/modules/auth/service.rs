use anyhow::Context;
use sqlx::PgPool;
use tracing::instrument;

use lifelink_auth::Claims;

use crate::modules::users::model::User;
use crate::utils::errors::AppError;

use super::model::AddUserDto;

pub struct IdentityService;

impl IdentityService {
    /// Resolves verified claims to a local user record.
    ///
    /// One atomic statement per invocation: a first-seen email creates the
    /// record with the customer/active defaults and `login_count = 1`, a
    /// known email bumps the counter. Emails are lowercased before they
    /// reach the unique key.
    #[instrument(skip(db, claims), fields(email = %claims.email))]
    pub async fn resolve(db: &PgPool, claims: &Claims) -> Result<User, AppError> {
        let email = claims.email.trim().to_lowercase();

        sqlx::query_as::<_, User>(
            r#"
            INSERT INTO users (email, name)
            VALUES ($1, $2)
            ON CONFLICT (email) DO UPDATE
            SET login_count = users.login_count + 1,
                updated_at = now()
            RETURNING *
            "#,
        )
        .bind(&email)
        .bind(&claims.name)
        .fetch_one(db)
        .await
        .context("Failed to resolve identity")
        .map_err(AppError::database)
    }

    /// Upserts a user's profile by email.
    ///
    /// Profile fields are refreshed; role, status, and the role-request
    /// envelope are left exactly as they are.
    #[instrument(skip(db, dto), fields(email = %dto.email))]
    pub async fn upsert_profile(db: &PgPool, dto: AddUserDto) -> Result<User, AppError> {
        let email = dto.email.trim().to_lowercase();

        sqlx::query_as::<_, User>(
            r#"
            INSERT INTO users (email, name, blood_group, district)
            VALUES ($1, $2, $3, $4)
            ON CONFLICT (email) DO UPDATE
            SET name = EXCLUDED.name,
                blood_group = COALESCE(EXCLUDED.blood_group, users.blood_group),
                district = COALESCE(EXCLUDED.district, users.district),
                updated_at = now()
            RETURNING *
            "#,
        )
        .bind(&email)
        .bind(&dto.name)
        .bind(&dto.blood_group)
        .bind(&dto.district)
        .fetch_one(db)
        .await
        .context("Failed to upsert user")
        .map_err(AppError::database)
    }
}
