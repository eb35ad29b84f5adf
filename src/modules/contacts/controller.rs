use axum::Json;
use axum::extract::{Query, State};
use axum::http::StatusCode;

use crate::middleware::role::RequireAdmin;
use crate::modules::auth::controller::ErrorResponse;
use crate::state::AppState;
use crate::utils::errors::AppError;
use crate::utils::pagination::PaginationParams;
use crate::validator::ValidatedJson;

use super::model::{Contact, CreateContactDto, PaginatedContactsResponse};
use super::service::ContactService;

/// Leave a message through the contact form
#[utoipa::path(
    post,
    path = "/api/contacts",
    request_body = CreateContactDto,
    responses(
        (status = 201, description = "Message recorded", body = Contact),
        (status = 400, description = "Bad request - validation error", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Contacts"
)]
pub async fn create_contact(
    State(state): State<AppState>,
    ValidatedJson(dto): ValidatedJson<CreateContactDto>,
) -> Result<(StatusCode, Json<Contact>), AppError> {
    let contact = ContactService::create(&state.db, dto).await?;
    Ok((StatusCode::CREATED, Json(contact)))
}

/// Read the contact mailbox
#[utoipa::path(
    get,
    path = "/api/contacts",
    params(PaginationParams),
    responses(
        (status = 200, description = "Paginated mailbox", body = PaginatedContactsResponse),
        (status = 401, description = "Unauthorized - missing or invalid token", body = ErrorResponse),
        (status = 403, description = "Forbidden - admin role required", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Contacts"
)]
pub async fn get_contacts(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Query(pagination): Query<PaginationParams>,
) -> Result<Json<PaginatedContactsResponse>, AppError> {
    let contacts = ContactService::list(&state.db, &pagination).await?;
    Ok(Json(contacts))
}
