use axum::{
    extract::FromRequestParts,
    http::{header, request::Parts},
};

use lifelink_auth::{AuthError, Claims};

use crate::modules::auth::service::IdentityService;
use crate::modules::users::model::User;
use crate::state::AppState;
use crate::utils::errors::AppError;

/// Extractor that validates the bearer token and yields its claims.
///
/// This establishes *who* is calling, nothing more: roles and statuses are
/// looked up through [`CurrentUser`], which is what guards compose on.
#[derive(Debug, Clone)]
pub struct AuthUser(pub Claims);

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let auth_header = parts
            .headers
            .get(header::AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            .ok_or_else(|| AppError::unauthorized("Missing authorization header"))?;

        let token = auth_header
            .strip_prefix("Bearer ")
            .ok_or_else(|| AppError::unauthorized("Invalid authorization header format"))?;

        let claims = lifelink_auth::verify_token(token, &state.jwt_config).map_err(|err| {
            match err {
                AuthError::MissingEmailClaim => {
                    AppError::unauthorized("Token does not identify an account")
                }
                _ => AppError::unauthorized("Invalid or expired token"),
            }
        })?;

        Ok(AuthUser(claims))
    }
}

// Request-extension cache so a guard chain resolves the user exactly once
// per request, however many guards run.
#[derive(Debug, Clone)]
struct CachedUser(User);

/// Extractor that resolves the caller's user record.
///
/// On the first extraction in a request this verifies the token and runs
/// the identity upsert (create on first sight, otherwise bump the login
/// counter); later extractions reuse the cached record.
#[derive(Debug, Clone)]
pub struct CurrentUser(pub User);

impl FromRequestParts<AppState> for CurrentUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        if let Some(CachedUser(user)) = parts.extensions.get::<CachedUser>() {
            return Ok(CurrentUser(user.clone()));
        }

        let AuthUser(claims) = AuthUser::from_request_parts(parts, state).await?;
        let user = IdentityService::resolve(&state.db, &claims).await?;
        parts.extensions.insert(CachedUser(user.clone()));

        Ok(CurrentUser(user))
    }
}
