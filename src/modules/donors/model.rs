use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::{IntoParams, ToSchema};

/// Public view of a donor: enough to reach out, nothing more.
#[derive(Debug, Clone, Serialize, FromRow, ToSchema)]
pub struct DonorSummary {
    pub name: String,
    pub email: String,
    pub blood_group: Option<String>,
    pub district: Option<String>,
}

/// Query parameters for the exact donor search.
#[derive(Debug, Default, Deserialize, ToSchema, IntoParams)]
pub struct SearchDonorsParams {
    /// Blood group in wire encoding, e.g. `Ap` for A+ or `Om` for O-
    pub blood_group: Option<String>,
    pub district: Option<String>,
}

/// Query parameters for the dynamic donor search; any combination of
/// fields narrows the result.
#[derive(Debug, Default, Deserialize, ToSchema, IntoParams)]
pub struct SearchDonorsDynamicParams {
    /// Blood group in wire encoding, e.g. `Ap` for A+ or `Om` for O-
    pub blood_group: Option<String>,
    pub district: Option<String>,
    /// Substring match on the donor's name
    pub name: Option<String>,
}
