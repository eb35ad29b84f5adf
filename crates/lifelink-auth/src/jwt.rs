//! Token creation and verification.
//!
//! Tokens are HS256-signed JWTs carrying the [`Claims`] of this crate.
//! Verification checks the signature and expiry, then requires a non-empty
//! email claim: a token that does not identify an email address cannot be
//! linked to a user record and is treated as invalid.

use chrono::Utc;
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};

use crate::claims::Claims;
use crate::config::JwtConfig;

/// Errors produced when creating or verifying a token.
#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    #[error("failed to create token: {0}")]
    TokenCreation(#[source] jsonwebtoken::errors::Error),
    #[error("invalid or expired token")]
    InvalidToken,
    #[error("token does not carry an email claim")]
    MissingEmailClaim,
}

/// Creates a signed bearer token for the given identity.
///
/// # Errors
///
/// Returns [`AuthError::TokenCreation`] if encoding fails (e.g. an invalid
/// secret key).
pub fn create_token(email: &str, name: &str, jwt_config: &JwtConfig) -> Result<String, AuthError> {
    let now = Utc::now().timestamp();
    let exp = (now + jwt_config.token_expiry) as usize;

    let claims = Claims {
        email: email.to_string(),
        name: name.to_string(),
        exp,
        iat: now as usize,
    };

    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(jwt_config.secret.as_bytes()),
    )
    .map_err(AuthError::TokenCreation)
}

/// Verifies a bearer token and returns the embedded claims.
///
/// # Errors
///
/// Returns [`AuthError::InvalidToken`] if the signature is invalid or the
/// token has expired, and [`AuthError::MissingEmailClaim`] if the verified
/// token carries an empty email.
pub fn verify_token(token: &str, jwt_config: &JwtConfig) -> Result<Claims, AuthError> {
    let claims = decode::<Claims>(
        token,
        &DecodingKey::from_secret(jwt_config.secret.as_bytes()),
        &Validation::default(),
    )
    .map(|data| data.claims)
    .map_err(|_| AuthError::InvalidToken)?;

    if claims.email.trim().is_empty() {
        return Err(AuthError::MissingEmailClaim);
    }

    Ok(claims)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_config() -> JwtConfig {
        JwtConfig::new("unit-test-secret", 3600)
    }

    #[test]
    fn test_token_roundtrip() {
        let config = test_config();
        let token = create_token("donor@example.com", "Jane Donor", &config).unwrap();
        let claims = verify_token(&token, &config).unwrap();
        assert_eq!(claims.email, "donor@example.com");
        assert_eq!(claims.name, "Jane Donor");
        assert!(claims.exp > claims.iat);
    }

    #[test]
    fn test_expired_token_rejected() {
        let config = JwtConfig::new("unit-test-secret", -3600);
        let token = create_token("donor@example.com", "Jane Donor", &config).unwrap();
        assert!(matches!(
            verify_token(&token, &test_config()),
            Err(AuthError::InvalidToken)
        ));
    }

    #[test]
    fn test_wrong_secret_rejected() {
        let config = test_config();
        let token = create_token("donor@example.com", "Jane Donor", &config).unwrap();
        let other = JwtConfig::new("a-different-secret", 3600);
        assert!(matches!(
            verify_token(&token, &other),
            Err(AuthError::InvalidToken)
        ));
    }

    #[test]
    fn test_empty_email_claim_rejected() {
        let config = test_config();
        let token = create_token("", "Nameless", &config).unwrap();
        assert!(matches!(
            verify_token(&token, &config),
            Err(AuthError::MissingEmailClaim)
        ));
    }
}
