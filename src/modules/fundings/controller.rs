use axum::Json;
use axum::extract::{Query, State};
use axum::http::StatusCode;

use crate::middleware::auth::CurrentUser;
use crate::modules::auth::controller::ErrorResponse;
use crate::state::AppState;
use crate::utils::errors::AppError;
use crate::utils::pagination::PaginationParams;
use crate::validator::ValidatedJson;

use super::model::{CreateFundingDto, Funding, FundingTotal, PaginatedFundingsResponse};
use super::service::FundingService;

/// Record a funding contribution
#[utoipa::path(
    post,
    path = "/api/fundings",
    request_body = CreateFundingDto,
    responses(
        (status = 201, description = "Funding recorded", body = Funding),
        (status = 400, description = "Bad request - validation error", body = ErrorResponse),
        (status = 401, description = "Unauthorized - missing or invalid token", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Fundings"
)]
pub async fn create_funding(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    ValidatedJson(dto): ValidatedJson<CreateFundingDto>,
) -> Result<(StatusCode, Json<Funding>), AppError> {
    let funding = FundingService::create(&state.db, &user, dto).await?;
    Ok((StatusCode::CREATED, Json(funding)))
}

/// List funding contributions
#[utoipa::path(
    get,
    path = "/api/fundings",
    params(PaginationParams),
    responses(
        (status = 200, description = "Paginated list of fundings", body = PaginatedFundingsResponse),
        (status = 401, description = "Unauthorized - missing or invalid token", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Fundings"
)]
pub async fn get_fundings(
    State(state): State<AppState>,
    CurrentUser(_user): CurrentUser,
    Query(pagination): Query<PaginationParams>,
) -> Result<Json<PaginatedFundingsResponse>, AppError> {
    let fundings = FundingService::list(&state.db, &pagination).await?;
    Ok(Json(fundings))
}

/// Get the sum of all contributions
#[utoipa::path(
    get,
    path = "/api/fundings/total",
    responses(
        (status = 200, description = "Total funding amount", body = FundingTotal),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Fundings"
)]
pub async fn get_funding_total(
    State(state): State<AppState>,
) -> Result<Json<FundingTotal>, AppError> {
    let total = FundingService::total(&state.db).await?;
    Ok(Json(total))
}
