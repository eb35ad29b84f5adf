use axum::Json;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use uuid::Uuid;

use crate::middleware::auth::CurrentUser;
use crate::middleware::role::RequireActive;
use crate::modules::auth::controller::ErrorResponse;
use crate::state::AppState;
use crate::utils::errors::AppError;
use crate::utils::pagination::PaginationParams;
use crate::validator::ValidatedJson;

use super::model::{
    CreateDonationRequestDto, DonationFilterParams, DonationRequest, PaginatedDonationsResponse,
    UpdateDonationStatusDto, UpdateOutcome,
};
use super::service::DonationService;

/// Create a donation request
#[utoipa::path(
    post,
    path = "/api/donations",
    request_body = CreateDonationRequestDto,
    responses(
        (status = 201, description = "Donation request created, pending a donor", body = DonationRequest),
        (status = 400, description = "Bad request - validation error", body = ErrorResponse),
        (status = 401, description = "Unauthorized - missing or invalid token", body = ErrorResponse),
        (status = 403, description = "Forbidden - account not active", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Donations"
)]
pub async fn create_donation_request(
    State(state): State<AppState>,
    RequireActive(user): RequireActive,
    ValidatedJson(dto): ValidatedJson<CreateDonationRequestDto>,
) -> Result<(StatusCode, Json<DonationRequest>), AppError> {
    let request = DonationService::create(&state.db, &user, dto).await?;
    Ok((StatusCode::CREATED, Json(request)))
}

/// List donation requests
#[utoipa::path(
    get,
    path = "/api/donations",
    params(DonationFilterParams, PaginationParams),
    responses(
        (status = 200, description = "Paginated list of donation requests", body = PaginatedDonationsResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Donations"
)]
pub async fn get_donation_requests(
    State(state): State<AppState>,
    Query(filter): Query<DonationFilterParams>,
    Query(pagination): Query<PaginationParams>,
) -> Result<Json<PaginatedDonationsResponse>, AppError> {
    let requests = DonationService::list(&state.db, &filter, &pagination).await?;
    Ok(Json(requests))
}

/// Get a donation request by id
#[utoipa::path(
    get,
    path = "/api/donations/{id}",
    params(("id" = Uuid, Path, description = "Donation request ID")),
    responses(
        (status = 200, description = "Donation request", body = DonationRequest),
        (status = 404, description = "Donation request not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Donations"
)]
pub async fn get_donation_request(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<DonationRequest>, AppError> {
    let request = DonationService::get(&state.db, id).await?;
    Ok(Json(request))
}

/// Respond to a pending donation request as a donor
#[utoipa::path(
    patch,
    path = "/api/donations/{id}/respond",
    params(("id" = Uuid, Path, description = "Donation request ID")),
    responses(
        (status = 200, description = "Modified count; zero when the request was no longer pending", body = UpdateOutcome),
        (status = 401, description = "Unauthorized - missing or invalid token", body = ErrorResponse),
        (status = 403, description = "Forbidden - account not active", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Donations"
)]
pub async fn respond_to_donation_request(
    State(state): State<AppState>,
    RequireActive(user): RequireActive,
    Path(id): Path<Uuid>,
) -> Result<Json<UpdateOutcome>, AppError> {
    let outcome = DonationService::respond(&state.db, &user, id).await?;
    Ok(Json(outcome))
}

/// Set the lifecycle status of a donation request
#[utoipa::path(
    patch,
    path = "/api/donations/{id}/status",
    params(("id" = Uuid, Path, description = "Donation request ID")),
    request_body = UpdateDonationStatusDto,
    responses(
        (status = 200, description = "Updated donation request", body = DonationRequest),
        (status = 400, description = "Bad request - validation error", body = ErrorResponse),
        (status = 401, description = "Unauthorized - missing or invalid token", body = ErrorResponse),
        (status = 403, description = "Forbidden - not the requester or an admin", body = ErrorResponse),
        (status = 404, description = "Donation request not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Donations"
)]
pub async fn update_donation_status(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Path(id): Path<Uuid>,
    ValidatedJson(dto): ValidatedJson<UpdateDonationStatusDto>,
) -> Result<Json<DonationRequest>, AppError> {
    let request = DonationService::update_status(&state.db, &user, id, dto.status).await?;
    Ok(Json(request))
}

/// Delete a donation request
#[utoipa::path(
    delete,
    path = "/api/donations/{id}",
    params(("id" = Uuid, Path, description = "Donation request ID")),
    responses(
        (status = 204, description = "Donation request deleted"),
        (status = 401, description = "Unauthorized - missing or invalid token", body = ErrorResponse),
        (status = 403, description = "Forbidden - not the requester or an admin", body = ErrorResponse),
        (status = 404, description = "Donation request not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Donations"
)]
pub async fn delete_donation_request(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, AppError> {
    DonationService::delete(&state.db, &user, id).await?;
    Ok(StatusCode::NO_CONTENT)
}
