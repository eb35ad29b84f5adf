//! Token lifecycle through the public `lifelink-auth` surface.

use lifelink_auth::{AuthError, JwtConfig, create_token, verify_token};

fn config() -> JwtConfig {
    JwtConfig::new("token-suite-secret", 3600)
}

#[test]
fn test_roundtrip_preserves_identity() {
    let token = create_token("donor@example.com", "Jane Donor", &config()).unwrap();
    let claims = verify_token(&token, &config()).unwrap();
    assert_eq!(claims.email, "donor@example.com");
    assert_eq!(claims.name, "Jane Donor");
}

#[test]
fn test_expiry_is_enforced() {
    let stale = JwtConfig::new("token-suite-secret", -7200);
    let token = create_token("donor@example.com", "Jane Donor", &stale).unwrap();
    assert!(matches!(
        verify_token(&token, &config()),
        Err(AuthError::InvalidToken)
    ));
}

#[test]
fn test_signature_is_enforced() {
    let token = create_token("donor@example.com", "Jane Donor", &config()).unwrap();
    let other = JwtConfig::new("not-the-same-secret", 3600);
    assert!(matches!(
        verify_token(&token, &other),
        Err(AuthError::InvalidToken)
    ));
}

#[test]
fn test_email_claim_is_required() {
    let token = create_token("   ", "Spacey", &config()).unwrap();
    assert!(matches!(
        verify_token(&token, &config()),
        Err(AuthError::MissingEmailClaim)
    ));
}
