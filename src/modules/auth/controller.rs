use axum::Json;
use axum::extract::State;
use utoipa::ToSchema;

use crate::middleware::auth::CurrentUser;
use crate::modules::users::model::{RequestMerchantDto, User};
use crate::modules::users::service::UserService;
use crate::state::AppState;
use crate::utils::errors::AppError;
use crate::validator::ValidatedJson;

use super::model::AddUserDto;
use super::service::IdentityService;

#[derive(ToSchema)]
pub struct ErrorResponse {
    pub error: String,
}

/// Register or refresh a user by email
#[utoipa::path(
    post,
    path = "/api/auth/add-user",
    request_body = AddUserDto,
    responses(
        (status = 200, description = "User created or refreshed", body = User),
        (status = 400, description = "Bad request - validation error", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Authentication"
)]
pub async fn add_user(
    State(state): State<AppState>,
    ValidatedJson(dto): ValidatedJson<AddUserDto>,
) -> Result<Json<User>, AppError> {
    let user = IdentityService::upsert_profile(&state.db, dto).await?;
    Ok(Json(user))
}

/// Get the resolved user for the presented token
#[utoipa::path(
    get,
    path = "/api/auth/me",
    responses(
        (status = 200, description = "Resolved user record", body = User),
        (status = 401, description = "Unauthorized - missing or invalid token", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Authentication"
)]
pub async fn me(CurrentUser(user): CurrentUser) -> Result<Json<User>, AppError> {
    Ok(Json(user))
}

/// Request promotion to the merchant role
#[utoipa::path(
    post,
    path = "/api/auth/request-merchant",
    request_body = RequestMerchantDto,
    responses(
        (status = 200, description = "Request filed and awaiting review", body = User),
        (status = 400, description = "Bad request - validation error or a request is already pending", body = ErrorResponse),
        (status = 401, description = "Unauthorized - missing or invalid token", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Authentication"
)]
pub async fn request_merchant(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    ValidatedJson(dto): ValidatedJson<RequestMerchantDto>,
) -> Result<Json<User>, AppError> {
    let user = UserService::request_merchant(&state.db, &user, dto).await?;
    Ok(Json(user))
}
