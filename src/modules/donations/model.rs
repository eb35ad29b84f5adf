use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;
use validator::Validate;

use crate::utils::pagination::PaginationMeta;

/// Lifecycle of a donation request.
///
/// `pending` until a donor responds, `inprogress` while the donation is
/// being arranged, then `done` or `canceled` by the requester (or an
/// admin).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type, ToSchema)]
#[sqlx(type_name = "donation_status", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum DonationStatus {
    Pending,
    Inprogress,
    Done,
    Canceled,
}

/// A request for blood donation.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct DonationRequest {
    pub id: Uuid,
    pub requester_id: Uuid,
    pub recipient_name: String,
    pub blood_group: String,
    pub district: String,
    pub hospital: String,
    pub address: String,
    pub donation_date: NaiveDate,
    pub message: Option<String>,
    pub donation_status: DonationStatus,
    pub donor_name: Option<String>,
    pub donor_email: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// DTO for creating a donation request. The lifecycle status is not part
/// of the payload; every new request starts out `pending`.
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct CreateDonationRequestDto {
    #[validate(length(min = 1, message = "recipient_name must not be empty"))]
    pub recipient_name: String,
    #[validate(length(min = 2, message = "blood_group must be a full group such as A+"))]
    pub blood_group: String,
    #[validate(length(min = 1, message = "district must not be empty"))]
    pub district: String,
    #[validate(length(min = 1, message = "hospital must not be empty"))]
    pub hospital: String,
    #[validate(length(min = 1, message = "address must not be empty"))]
    pub address: String,
    pub donation_date: NaiveDate,
    pub message: Option<String>,
}

/// DTO for the explicit status transition route.
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct UpdateDonationStatusDto {
    pub status: DonationStatus,
}

/// Query parameters for listing donation requests.
#[derive(Debug, Default, Deserialize, ToSchema, IntoParams)]
pub struct DonationFilterParams {
    pub status: Option<DonationStatus>,
    /// Blood group in display form, e.g. `A+`
    pub blood_group: Option<String>,
    pub district: Option<String>,
}

/// Paginated donation request listing.
#[derive(Debug, Serialize, ToSchema)]
pub struct PaginatedDonationsResponse {
    pub data: Vec<DonationRequest>,
    pub meta: PaginationMeta,
}

/// Outcome of a conditional update. A `modified` count of zero means the
/// filter matched nothing, which for the respond route is the expected
/// result of responding twice.
#[derive(Debug, Serialize, ToSchema)]
pub struct UpdateOutcome {
    pub modified: u64,
}
