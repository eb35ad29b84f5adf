//! User entity, role/status vocabulary, and the role-request state machine.
//!
//! `role` and `status` are the authoritative grants checked by every guard.
//! The `role_request_*` columns hold the approval envelope that records how
//! a grant came to be: a rejected request leaves `status` untouched so the
//! user can reapply later, and an approved one documents which admin flow
//! promoted the account.
//!
//! The transition rules live in [`transitions`] as pure functions; the
//! service applies each of them as a single conditional update keyed on the
//! expected prior state.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;
use validator::Validate;

use crate::utils::pagination::PaginationMeta;

/// Authoritative role grant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type, ToSchema)]
#[sqlx(type_name = "user_role", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    Admin,
    Merchant,
    Customer,
}

/// Account standing, orthogonal to the role.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type, ToSchema)]
#[sqlx(type_name = "user_status", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum UserStatus {
    Active,
    Pending,
    Blocked,
}

/// Role a user can request through the approval workflow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type, ToSchema)]
#[sqlx(type_name = "role_request_type", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum RoleRequestType {
    Merchant,
}

/// Lifecycle of a role request: `pending` until an admin resolves it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type, ToSchema)]
#[sqlx(type_name = "role_request_status", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum RoleRequestStatus {
    Pending,
    Approved,
    Rejected,
}

/// A user record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow, ToSchema)]
pub struct User {
    pub id: Uuid,
    pub email: String,
    pub name: String,
    pub role: UserRole,
    pub status: UserStatus,
    pub login_count: i64,
    pub blood_group: Option<String>,
    pub district: Option<String>,
    pub shop_name: Option<String>,
    pub shop_address: Option<String>,
    pub role_request_type: Option<RoleRequestType>,
    pub role_request_status: Option<RoleRequestStatus>,
    pub role_requested_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// DTO for filing a merchant role request.
///
/// Shop details ride along with the request so an approved merchant has a
/// storefront to show from the moment the grant lands.
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct RequestMerchantDto {
    #[validate(length(min = 1, message = "shop_name must not be empty"))]
    pub shop_name: String,
    pub shop_address: Option<String>,
}

/// DTO for the admin route that sets a role verbatim.
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct UpdateRoleDto {
    pub role: UserRole,
}

/// DTO for the admin route that sets a status verbatim.
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct UpdateStatusDto {
    pub status: UserStatus,
}

/// Query parameters for the admin user listing.
#[derive(Debug, Default, Deserialize, ToSchema, IntoParams)]
pub struct UserFilterParams {
    /// Filter by district, exact match
    pub district: Option<String>,
}

/// Paginated user listing.
#[derive(Debug, Serialize, ToSchema)]
pub struct PaginatedUsersResponse {
    pub data: Vec<User>,
    pub meta: PaginationMeta,
}

/// Pure transition rules for the role-request workflow.
///
/// `null → pending → {approved, rejected}`; the terminal states may
/// re-enter `pending` through a fresh request, but never while one is
/// outstanding. Each function answers one question and the service mirrors
/// it in the `WHERE` clause of the corresponding update, so a concurrent
/// reviewer racing on the same user resolves to exactly one winner.
pub mod transitions {
    use super::{RoleRequestStatus, RoleRequestType, UserRole, UserStatus};
    use crate::utils::errors::AppError;

    /// Why a requested transition is not allowed.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub enum TransitionError {
        /// A request is already awaiting review
        AlreadyPending,
        /// No pending request of the expected type exists
        NoSuchRequest,
    }

    impl From<TransitionError> for AppError {
        fn from(err: TransitionError) -> Self {
            match err {
                TransitionError::AlreadyPending => {
                    AppError::conflict("A merchant request is already pending")
                }
                TransitionError::NoSuchRequest => {
                    AppError::not_found("No pending merchant request for this user")
                }
            }
        }
    }

    /// Checks whether a fresh merchant request may be filed.
    pub fn request_allowed(current: Option<RoleRequestStatus>) -> Result<(), TransitionError> {
        match current {
            Some(RoleRequestStatus::Pending) => Err(TransitionError::AlreadyPending),
            None | Some(RoleRequestStatus::Approved) | Some(RoleRequestStatus::Rejected) => Ok(()),
        }
    }

    /// Checks whether an admin may approve or reject.
    pub fn review_allowed(
        request_type: Option<RoleRequestType>,
        request_status: Option<RoleRequestStatus>,
    ) -> Result<(), TransitionError> {
        match (request_type, request_status) {
            (Some(RoleRequestType::Merchant), Some(RoleRequestStatus::Pending)) => Ok(()),
            _ => Err(TransitionError::NoSuchRequest),
        }
    }

    /// Field values after a review resolves.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct ReviewEffects {
        pub role: UserRole,
        pub request_status: RoleRequestStatus,
        pub status: UserStatus,
    }

    /// Approval grants the role and activates an account still waiting on
    /// its first approval.
    pub fn approval_effects(current_status: UserStatus) -> ReviewEffects {
        ReviewEffects {
            role: UserRole::Merchant,
            request_status: RoleRequestStatus::Approved,
            status: match current_status {
                UserStatus::Pending => UserStatus::Active,
                other => other,
            },
        }
    }

    /// Rejection reverts the role and leaves the account standing untouched.
    pub fn rejection_effects(current_status: UserStatus) -> ReviewEffects {
        ReviewEffects {
            role: UserRole::Customer,
            request_status: RoleRequestStatus::Rejected,
            status: current_status,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::transitions::{
        TransitionError, approval_effects, rejection_effects, request_allowed, review_allowed,
    };
    use super::*;

    #[test]
    fn test_request_allowed_from_fresh_account() {
        assert!(request_allowed(None).is_ok());
    }

    #[test]
    fn test_request_allowed_after_resolution() {
        assert!(request_allowed(Some(RoleRequestStatus::Approved)).is_ok());
        assert!(request_allowed(Some(RoleRequestStatus::Rejected)).is_ok());
    }

    #[test]
    fn test_request_rejected_while_pending() {
        assert_eq!(
            request_allowed(Some(RoleRequestStatus::Pending)),
            Err(TransitionError::AlreadyPending)
        );
    }

    #[test]
    fn test_review_requires_pending_merchant_request() {
        assert!(
            review_allowed(
                Some(RoleRequestType::Merchant),
                Some(RoleRequestStatus::Pending)
            )
            .is_ok()
        );
    }

    #[test]
    fn test_review_rejected_without_request() {
        assert_eq!(
            review_allowed(None, None),
            Err(TransitionError::NoSuchRequest)
        );
    }

    #[test]
    fn test_review_rejected_after_resolution() {
        for resolved in [RoleRequestStatus::Approved, RoleRequestStatus::Rejected] {
            assert_eq!(
                review_allowed(Some(RoleRequestType::Merchant), Some(resolved)),
                Err(TransitionError::NoSuchRequest)
            );
        }
    }

    #[test]
    fn test_approval_grants_merchant_role() {
        let effects = approval_effects(UserStatus::Active);
        assert_eq!(effects.role, UserRole::Merchant);
        assert_eq!(effects.request_status, RoleRequestStatus::Approved);
        assert_eq!(effects.status, UserStatus::Active);
    }

    #[test]
    fn test_approval_activates_pending_account() {
        assert_eq!(approval_effects(UserStatus::Pending).status, UserStatus::Active);
    }

    #[test]
    fn test_approval_leaves_blocked_account_blocked() {
        assert_eq!(approval_effects(UserStatus::Blocked).status, UserStatus::Blocked);
    }

    #[test]
    fn test_rejection_reverts_role_and_keeps_status() {
        for status in [UserStatus::Active, UserStatus::Pending, UserStatus::Blocked] {
            let effects = rejection_effects(status);
            assert_eq!(effects.role, UserRole::Customer);
            assert_eq!(effects.request_status, RoleRequestStatus::Rejected);
            assert_eq!(effects.status, status);
        }
    }

    #[test]
    fn test_role_serializes_lowercase() {
        assert_eq!(
            serde_json::to_string(&UserRole::Merchant).unwrap(),
            r#""merchant""#
        );
        assert_eq!(
            serde_json::to_string(&UserStatus::Blocked).unwrap(),
            r#""blocked""#
        );
    }
}
