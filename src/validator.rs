//! Request body validation.
//!
//! [`ValidatedJson`] is a total barrier between the wire and the services:
//! a body that fails deserialization or schema validation is rejected with
//! one [`FieldViolation`] per failed field before any persistence call
//! runs. Validation itself is pure; the same input always produces the
//! same violation set.

use axum::{
    Json,
    extract::{FromRequest, Request, rejection::JsonRejection},
};
use serde::de::DeserializeOwned;
use validator::{Validate, ValidationErrors};

use crate::utils::errors::{AppError, FieldViolation};

fn collect_violations(errors: &ValidationErrors) -> Vec<FieldViolation> {
    errors
        .field_errors()
        .iter()
        .flat_map(|(field, errors)| {
            errors.iter().map(move |error| FieldViolation {
                path: field.to_string(),
                message: error
                    .message
                    .as_ref()
                    .map(|msg| msg.to_string())
                    .unwrap_or_else(|| format!("{} is invalid", field)),
            })
        })
        .collect()
}

#[derive(Debug, Clone, Copy, Default)]
pub struct ValidatedJson<T>(pub T);

impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection| {
                let error_msg = rejection.body_text();

                if error_msg.contains("missing field") {
                    let field = error_msg
                        .split("missing field `")
                        .nth(1)
                        .and_then(|s| s.split('`').next())
                        .unwrap_or("unknown");
                    return AppError::validation(vec![FieldViolation {
                        path: field.to_string(),
                        message: format!("{} is required", field),
                    }]);
                }

                if error_msg.contains("invalid type") {
                    return AppError::bad_request("Invalid field type in request");
                }

                if matches!(rejection, JsonRejection::MissingJsonContentType(_)) {
                    return AppError::bad_request(
                        "Missing 'Content-Type: application/json' header",
                    );
                }

                AppError::bad_request("Invalid request body")
            })?;

        value
            .validate()
            .map_err(|errors| AppError::validation(collect_violations(&errors)))?;

        Ok(ValidatedJson(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, Deserialize, Validate)]
    struct SampleDto {
        #[validate(email(message = "email must be a valid email address"))]
        email: String,
        #[validate(length(min = 1, message = "name must not be empty"))]
        name: String,
    }

    #[test]
    fn test_valid_input_has_no_violations() {
        let dto = SampleDto {
            email: "a@x.com".to_string(),
            name: "A".to_string(),
        };
        assert!(dto.validate().is_ok());
    }

    #[test]
    fn test_one_violation_per_failed_field() {
        let dto = SampleDto {
            email: "not-an-email".to_string(),
            name: "".to_string(),
        };
        let errors = dto.validate().unwrap_err();
        let violations = collect_violations(&errors);
        assert_eq!(violations.len(), 2);
        assert!(violations.iter().any(|v| v.path == "email"));
        assert!(violations.iter().any(|v| v.path == "name"));
    }

    #[test]
    fn test_violation_carries_message() {
        let dto = SampleDto {
            email: "a@x.com".to_string(),
            name: "".to_string(),
        };
        let errors = dto.validate().unwrap_err();
        let violations = collect_violations(&errors);
        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].message, "name must not be empty");
    }

    #[test]
    fn test_validation_is_deterministic() {
        let dto = SampleDto {
            email: "nope".to_string(),
            name: "".to_string(),
        };
        let first: Vec<String> = {
            let errors = dto.validate().unwrap_err();
            let mut v = collect_violations(&errors);
            v.sort_by(|a, b| a.path.cmp(&b.path));
            v.into_iter().map(|v| format!("{}: {}", v.path, v.message)).collect()
        };
        let second: Vec<String> = {
            let errors = dto.validate().unwrap_err();
            let mut v = collect_violations(&errors);
            v.sort_by(|a, b| a.path.cmp(&b.path));
            v.into_iter().map(|v| format!("{}: {}", v.path, v.message)).collect()
        };
        assert_eq!(first, second);
    }
}
