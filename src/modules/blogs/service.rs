use anyhow::Context;
use sqlx::PgPool;
use tracing::instrument;
use uuid::Uuid;

use crate::middleware::role::ensure_owner_or_admin;
use crate::modules::users::model::User;
use crate::utils::errors::AppError;
use crate::utils::pagination::{PaginationMeta, PaginationParams};

use super::model::{Blog, BlogFilterParams, BlogStatus, CreateBlogDto, PaginatedBlogsResponse};

pub struct BlogService;

impl BlogService {
    #[instrument(skip(db, user, dto), fields(author_id = %user.id))]
    pub async fn create(db: &PgPool, user: &User, dto: CreateBlogDto) -> Result<Blog, AppError> {
        sqlx::query_as::<_, Blog>(
            r#"
            INSERT INTO blogs (author_id, title, content)
            VALUES ($1, $2, $3)
            RETURNING *
            "#,
        )
        .bind(user.id)
        .bind(&dto.title)
        .bind(&dto.content)
        .fetch_one(db)
        .await
        .context("Failed to create blog post")
        .map_err(AppError::database)
    }

    #[instrument(skip(db))]
    pub async fn list(
        db: &PgPool,
        filter: &BlogFilterParams,
        pagination: &PaginationParams,
    ) -> Result<PaginatedBlogsResponse, AppError> {
        let status = filter.status.unwrap_or(BlogStatus::Published);

        let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM blogs WHERE status = $1")
            .bind(status)
            .fetch_one(db)
            .await
            .context("Failed to count blog posts")
            .map_err(AppError::database)?;

        let blogs = sqlx::query_as::<_, Blog>(
            "SELECT * FROM blogs WHERE status = $1 ORDER BY created_at DESC LIMIT $2 OFFSET $3",
        )
        .bind(status)
        .bind(pagination.limit())
        .bind(pagination.offset())
        .fetch_all(db)
        .await
        .context("Failed to fetch blog posts")
        .map_err(AppError::database)?;

        Ok(PaginatedBlogsResponse {
            data: blogs,
            meta: PaginationMeta::new(total, pagination.limit(), pagination.offset()),
        })
    }

    #[instrument(skip(db))]
    pub async fn get(db: &PgPool, id: Uuid) -> Result<Blog, AppError> {
        sqlx::query_as::<_, Blog>("SELECT * FROM blogs WHERE id = $1")
            .bind(id)
            .fetch_optional(db)
            .await
            .context("Failed to fetch blog post")
            .map_err(AppError::database)?
            .ok_or_else(|| AppError::not_found("Blog post not found"))
    }

    /// Publishes a post. Publishing an already-published post is a no-op.
    #[instrument(skip(db))]
    pub async fn publish(db: &PgPool, id: Uuid) -> Result<Blog, AppError> {
        sqlx::query_as::<_, Blog>(
            "UPDATE blogs SET status = 'published' WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .fetch_optional(db)
        .await
        .context("Failed to publish blog post")
        .map_err(AppError::database)?
        .ok_or_else(|| AppError::not_found("Blog post not found"))
    }

    #[instrument(skip(db, user))]
    pub async fn delete(db: &PgPool, user: &User, id: Uuid) -> Result<(), AppError> {
        let blog = Self::get(db, id).await?;
        ensure_owner_or_admin(user, blog.author_id)?;

        sqlx::query("DELETE FROM blogs WHERE id = $1")
            .bind(id)
            .execute(db)
            .await
            .context("Failed to delete blog post")
            .map_err(AppError::database)?;

        Ok(())
    }
}
