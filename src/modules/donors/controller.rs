use axum::Json;
use axum::extract::{Query, State};

use crate::modules::auth::controller::ErrorResponse;
use crate::state::AppState;
use crate::utils::errors::AppError;

use super::model::{DonorSummary, SearchDonorsDynamicParams, SearchDonorsParams};
use super::service::DonorService;

/// Search donors by blood group
#[utoipa::path(
    get,
    path = "/api/search-donors",
    params(SearchDonorsParams),
    responses(
        (status = 200, description = "Matching donors", body = Vec<DonorSummary>),
        (status = 400, description = "Bad request - missing or malformed blood group", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Donors"
)]
pub async fn search_donors(
    State(state): State<AppState>,
    Query(params): Query<SearchDonorsParams>,
) -> Result<Json<Vec<DonorSummary>>, AppError> {
    let donors = DonorService::search(&state.db, &params).await?;
    Ok(Json(donors))
}

/// Search donors by any combination of fields
#[utoipa::path(
    get,
    path = "/api/search-donors-dynamic",
    params(SearchDonorsDynamicParams),
    responses(
        (status = 200, description = "Matching donors", body = Vec<DonorSummary>),
        (status = 400, description = "Bad request - malformed blood group", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Donors"
)]
pub async fn search_donors_dynamic(
    State(state): State<AppState>,
    Query(params): Query<SearchDonorsDynamicParams>,
) -> Result<Json<Vec<DonorSummary>>, AppError> {
    let donors = DonorService::search_dynamic(&state.db, &params).await?;
    Ok(Json(donors))
}
