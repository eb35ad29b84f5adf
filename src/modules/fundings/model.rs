use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::utils::pagination::PaginationMeta;

/// A recorded funding contribution. `amount` is in major currency units as
/// submitted by the contributor.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Funding {
    pub id: Uuid,
    pub user_id: Uuid,
    pub email: String,
    pub name: String,
    pub amount: i64,
    pub created_at: DateTime<Utc>,
}

/// DTO for recording a funding contribution. The contributor's identity
/// comes from the token, not the payload.
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct CreateFundingDto {
    #[validate(range(min = 1, message = "amount must be at least 1"))]
    pub amount: i64,
}

/// Paginated funding listing.
#[derive(Debug, Serialize, ToSchema)]
pub struct PaginatedFundingsResponse {
    pub data: Vec<Funding>,
    pub meta: PaginationMeta,
}

/// Sum of all recorded contributions.
#[derive(Debug, Serialize, ToSchema)]
pub struct FundingTotal {
    pub total: i64,
}
