//! Out-of-band administrative commands.
//!
//! The admin role is never reachable through the API; the only way to mint
//! one is the `create-admin` command wired up in `main`.

use anyhow::Context;
use sqlx::PgPool;

use crate::modules::users::model::User;

/// Creates (or promotes) an admin account for the given email.
pub async fn create_admin(pool: &PgPool, name: &str, email: &str) -> anyhow::Result<User> {
    let email = email.trim().to_lowercase();

    let user = sqlx::query_as::<_, User>(
        r#"
        INSERT INTO users (email, name, role, status)
        VALUES ($1, $2, 'admin', 'active')
        ON CONFLICT (email) DO UPDATE
        SET role = 'admin',
            status = 'active',
            updated_at = now()
        RETURNING *
        "#,
    )
    .bind(&email)
    .bind(name)
    .fetch_one(pool)
    .await
    .context("Failed to create admin")?;

    Ok(user)
}
