use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;
use validator::Validate;

use crate::utils::pagination::PaginationMeta;

/// Publication state of a blog post.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type, ToSchema)]
#[sqlx(type_name = "blog_status", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum BlogStatus {
    Draft,
    Published,
}

/// A blog post.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Blog {
    pub id: Uuid,
    pub author_id: Uuid,
    pub title: String,
    pub content: String,
    pub status: BlogStatus,
    pub created_at: DateTime<Utc>,
}

/// DTO for creating a blog post. Posts start as drafts.
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct CreateBlogDto {
    #[validate(length(min = 1, message = "title must not be empty"))]
    pub title: String,
    #[validate(length(min = 1, message = "content must not be empty"))]
    pub content: String,
}

/// Query parameters for listing blog posts. Without an explicit status the
/// listing shows published posts only.
#[derive(Debug, Default, Deserialize, ToSchema, IntoParams)]
pub struct BlogFilterParams {
    pub status: Option<BlogStatus>,
}

/// Paginated blog listing.
#[derive(Debug, Serialize, ToSchema)]
pub struct PaginatedBlogsResponse {
    pub data: Vec<Blog>,
    pub meta: PaginationMeta,
}
