use serde::Deserialize;
use utoipa::ToSchema;
use validator::Validate;

/// DTO for the public upsert-by-email registration route.
///
/// Role and status never travel in this payload: a fresh record gets the
/// customer/active defaults and an existing record keeps its grants, so
/// re-registering cannot escalate anyone.
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct AddUserDto {
    #[validate(email(message = "email must be a valid email address"))]
    pub email: String,
    #[validate(length(min = 1, message = "name must not be empty"))]
    pub name: String,
    pub blood_group: Option<String>,
    pub district: Option<String>,
}
