//! Claim structure for Lifelink bearer tokens.

use serde::{Deserialize, Serialize};

/// Claims embedded in a bearer token.
///
/// The token identifies a person, not a permission set: `email` is the
/// unique key that links the token to a local user record, and `name` is
/// carried only to create that record on first sight.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Email address asserted by the identity provider
    pub email: String,
    /// Display name asserted by the identity provider
    #[serde(default)]
    pub name: String,
    /// Token expiration timestamp (Unix timestamp)
    pub exp: usize,
    /// Token issued-at timestamp (Unix timestamp)
    pub iat: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_claims_serialize() {
        let claims = Claims {
            email: "test@example.com".to_string(),
            name: "Test User".to_string(),
            exp: 1234567890,
            iat: 1234567800,
        };
        let serialized = serde_json::to_string(&claims).unwrap();
        assert!(serialized.contains(r#""email":"test@example.com""#));
        assert!(serialized.contains(r#""name":"Test User""#));
    }

    #[test]
    fn test_claims_deserialize_without_name() {
        let json = r#"{"email":"a@x.com","exp":9999999999,"iat":1234567890}"#;
        let claims: Claims = serde_json::from_str(json).unwrap();
        assert_eq!(claims.email, "a@x.com");
        assert_eq!(claims.name, "");
    }

    #[test]
    fn test_claims_deserialize_without_email_fails() {
        let json = r#"{"name":"No Email","exp":9999999999,"iat":1234567890}"#;
        assert!(serde_json::from_str::<Claims>(json).is_err());
    }
}
