use anyhow::{Error, anyhow};
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use serde_json::json;
use utoipa::ToSchema;

/// A single field-level validation failure.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct FieldViolation {
    pub path: String,
    pub message: String,
}

/// Application error carried through handlers and middleware.
///
/// The status code decides the response class; the error carries the
/// client-facing message for 4xx responses. 5xx responses always render a
/// generic body, with the cause going to the log instead of the wire.
#[derive(Debug)]
pub struct AppError {
    pub status: StatusCode,
    pub error: Error,
    pub violations: Option<Vec<FieldViolation>>,
}

impl AppError {
    pub fn new<E>(status: StatusCode, err: E) -> Self
    where
        E: Into<Error>,
    {
        Self {
            status,
            error: err.into(),
            violations: None,
        }
    }

    pub fn internal<E>(err: E) -> Self
    where
        E: Into<Error>,
    {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, err)
    }

    pub fn database<E>(err: E) -> Self
    where
        E: Into<Error>,
    {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, err)
    }

    pub fn bad_request(msg: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, anyhow!(msg.into()))
    }

    pub fn unauthorized(msg: impl Into<String>) -> Self {
        Self::new(StatusCode::UNAUTHORIZED, anyhow!(msg.into()))
    }

    pub fn forbidden(msg: impl Into<String>) -> Self {
        Self::new(StatusCode::FORBIDDEN, anyhow!(msg.into()))
    }

    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::new(StatusCode::NOT_FOUND, anyhow!(msg.into()))
    }

    /// Duplicate-state rejection (e.g. a second role request while one is
    /// pending). Carried as 400 on the wire.
    pub fn conflict(msg: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, anyhow!(msg.into()))
    }

    /// Schema violation with one entry per failed field.
    pub fn validation(mut violations: Vec<FieldViolation>) -> Self {
        violations.sort_by(|a, b| a.path.cmp(&b.path));
        Self {
            status: StatusCode::BAD_REQUEST,
            error: anyhow!("Validation failed"),
            violations: Some(violations),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let message = if self.status.is_server_error() {
            tracing::error!(error = ?self.error, "request failed");
            "Internal server error".to_string()
        } else {
            self.error.to_string()
        };

        let body = match self.violations {
            Some(violations) => Json(json!({
                "error": message,
                "violations": violations,
            })),
            None => Json(json!({ "error": message })),
        };

        (self.status, body).into_response()
    }
}

impl<E> From<E> for AppError
where
    E: Into<Error>,
{
    fn from(err: E) -> Self {
        AppError::internal(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_error_keeps_message() {
        let response = AppError::forbidden("Access denied").into_response();
        assert_eq!(response.status(), StatusCode::FORBIDDEN);
    }

    #[test]
    fn test_conflict_maps_to_bad_request() {
        let response = AppError::conflict("A merchant request is already pending").into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_sqlx_error_maps_to_internal() {
        let err = AppError::from(sqlx::Error::RowNotFound);
        assert_eq!(err.status, StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_validation_violations_sorted_by_path() {
        let err = AppError::validation(vec![
            FieldViolation {
                path: "name".to_string(),
                message: "name is required".to_string(),
            },
            FieldViolation {
                path: "email".to_string(),
                message: "email is invalid".to_string(),
            },
        ]);
        let violations = err.violations.as_ref().unwrap();
        assert_eq!(violations[0].path, "email");
        assert_eq!(violations[1].path, "name");
    }
}
