//! Role and status guards.
//!
//! Guards compose left-to-right on [`CurrentUser`]: a role or status check
//! without a credential fails closed with 401 because the user must resolve
//! before the check can run. Two forms are provided, mirroring how routes
//! are wired: `from_fn_with_state` middleware for nesting whole routers,
//! and extractors plus `ensure_*` helpers for per-handler checks.

use axum::{
    extract::{FromRequestParts, Request, State},
    http::request::Parts,
    middleware::Next,
    response::{IntoResponse, Response},
};
use uuid::Uuid;

use crate::middleware::auth::CurrentUser;
use crate::modules::users::model::{User, UserRole, UserStatus};
use crate::state::AppState;
use crate::utils::errors::AppError;

/// Requires the caller to hold the expected role.
pub fn ensure_role(user: &User, expected: UserRole) -> Result<(), AppError> {
    if user.role != expected {
        return Err(AppError::forbidden(format!(
            "Access denied. Required role: {:?}, but user has role: {:?}",
            expected, user.role
        )));
    }

    Ok(())
}

/// Requires an active account. Distinct message from the role mismatch so
/// a caller can tell a standing problem from a privilege problem.
pub fn ensure_active(user: &User) -> Result<(), AppError> {
    if user.status != UserStatus::Active {
        return Err(AppError::forbidden("Your account has not been approved yet"));
    }

    Ok(())
}

/// Requires the caller to own the record or be an admin.
pub fn ensure_owner_or_admin(user: &User, owner_id: Uuid) -> Result<(), AppError> {
    if user.role != UserRole::Admin && user.id != owner_id {
        return Err(AppError::forbidden(
            "Access denied. You do not own this resource.",
        ));
    }

    Ok(())
}

/// Middleware guarding a whole router behind the admin role.
///
/// The resolved user is cached in the request extensions, so handlers
/// beneath this layer extract [`CurrentUser`] without a second resolution.
pub async fn require_admin(State(state): State<AppState>, req: Request, next: Next) -> Response {
    let (mut parts, body) = req.into_parts();

    let user = match CurrentUser::from_request_parts(&mut parts, &state).await {
        Ok(CurrentUser(user)) => user,
        Err(err) => return err.into_response(),
    };

    if let Err(err) = ensure_role(&user, UserRole::Admin) {
        return err.into_response();
    }

    next.run(Request::from_parts(parts, body)).await
}

/// Extractor requiring the admin role.
#[derive(Debug, Clone)]
pub struct RequireAdmin(pub User);

impl FromRequestParts<AppState> for RequireAdmin {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let CurrentUser(user) = CurrentUser::from_request_parts(parts, state).await?;
        ensure_role(&user, UserRole::Admin)?;
        Ok(RequireAdmin(user))
    }
}

/// Extractor requiring the merchant role.
#[derive(Debug, Clone)]
pub struct RequireMerchant(pub User);

impl FromRequestParts<AppState> for RequireMerchant {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let CurrentUser(user) = CurrentUser::from_request_parts(parts, state).await?;
        ensure_role(&user, UserRole::Merchant)?;
        Ok(RequireMerchant(user))
    }
}

/// Extractor requiring an active account, any role.
#[derive(Debug, Clone)]
pub struct RequireActive(pub User);

impl FromRequestParts<AppState> for RequireActive {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let CurrentUser(user) = CurrentUser::from_request_parts(parts, state).await?;
        ensure_active(&user)?;
        Ok(RequireActive(user))
    }
}
