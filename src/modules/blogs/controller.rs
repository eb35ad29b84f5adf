use axum::Json;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use uuid::Uuid;

use crate::middleware::auth::CurrentUser;
use crate::middleware::role::{RequireActive, RequireAdmin};
use crate::modules::auth::controller::ErrorResponse;
use crate::state::AppState;
use crate::utils::errors::AppError;
use crate::utils::pagination::PaginationParams;
use crate::validator::ValidatedJson;

use super::model::{Blog, BlogFilterParams, CreateBlogDto, PaginatedBlogsResponse};
use super::service::BlogService;

/// Create a blog post
#[utoipa::path(
    post,
    path = "/api/blogs",
    request_body = CreateBlogDto,
    responses(
        (status = 201, description = "Blog post created as a draft", body = Blog),
        (status = 400, description = "Bad request - validation error", body = ErrorResponse),
        (status = 401, description = "Unauthorized - missing or invalid token", body = ErrorResponse),
        (status = 403, description = "Forbidden - account not active", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Blogs"
)]
pub async fn create_blog(
    State(state): State<AppState>,
    RequireActive(user): RequireActive,
    ValidatedJson(dto): ValidatedJson<CreateBlogDto>,
) -> Result<(StatusCode, Json<Blog>), AppError> {
    let blog = BlogService::create(&state.db, &user, dto).await?;
    Ok((StatusCode::CREATED, Json(blog)))
}

/// List blog posts
#[utoipa::path(
    get,
    path = "/api/blogs",
    params(BlogFilterParams, PaginationParams),
    responses(
        (status = 200, description = "Paginated list of blog posts", body = PaginatedBlogsResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Blogs"
)]
pub async fn get_blogs(
    State(state): State<AppState>,
    Query(filter): Query<BlogFilterParams>,
    Query(pagination): Query<PaginationParams>,
) -> Result<Json<PaginatedBlogsResponse>, AppError> {
    let blogs = BlogService::list(&state.db, &filter, &pagination).await?;
    Ok(Json(blogs))
}

/// Get a blog post by id
#[utoipa::path(
    get,
    path = "/api/blogs/{id}",
    params(("id" = Uuid, Path, description = "Blog post ID")),
    responses(
        (status = 200, description = "Blog post", body = Blog),
        (status = 404, description = "Blog post not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Blogs"
)]
pub async fn get_blog(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Blog>, AppError> {
    let blog = BlogService::get(&state.db, id).await?;
    Ok(Json(blog))
}

/// Publish a blog post
#[utoipa::path(
    patch,
    path = "/api/blogs/{id}/publish",
    params(("id" = Uuid, Path, description = "Blog post ID")),
    responses(
        (status = 200, description = "Published blog post", body = Blog),
        (status = 401, description = "Unauthorized - missing or invalid token", body = ErrorResponse),
        (status = 403, description = "Forbidden - admin role required", body = ErrorResponse),
        (status = 404, description = "Blog post not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Blogs"
)]
pub async fn publish_blog(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Path(id): Path<Uuid>,
) -> Result<Json<Blog>, AppError> {
    let blog = BlogService::publish(&state.db, id).await?;
    Ok(Json(blog))
}

/// Delete a blog post
#[utoipa::path(
    delete,
    path = "/api/blogs/{id}",
    params(("id" = Uuid, Path, description = "Blog post ID")),
    responses(
        (status = 204, description = "Blog post deleted"),
        (status = 401, description = "Unauthorized - missing or invalid token", body = ErrorResponse),
        (status = 403, description = "Forbidden - not the author or an admin", body = ErrorResponse),
        (status = 404, description = "Blog post not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Blogs"
)]
pub async fn delete_blog(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, AppError> {
    BlogService::delete(&state.db, &user, id).await?;
    Ok(StatusCode::NO_CONTENT)
}
