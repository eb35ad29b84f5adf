//! # Lifelink Auth
//!
//! Bearer-token claims and verification for the Lifelink API.
//!
//! Identity is established by an external provider: a signed bearer token
//! carries the holder's email and display name and nothing else. Roles and
//! account statuses are authoritative in the database, never in the token,
//! so a token survives role changes without re-issuance.
//!
//! This crate provides:
//!
//! - [`claims`]: the [`Claims`] structure embedded in bearer tokens
//! - [`jwt`]: token creation and verification utilities
//! - [`JwtConfig`]: secret and expiry settings, loadable from the environment
//!
//! # Example
//!
//! ```ignore
//! use lifelink_auth::{JwtConfig, create_token, verify_token};
//!
//! let config = JwtConfig::from_env();
//! let token = create_token("donor@example.com", "Jane Donor", &config)?;
//! let claims = verify_token(&token, &config)?;
//! assert_eq!(claims.email, "donor@example.com");
//! ```

pub mod claims;
pub mod config;
pub mod jwt;

// Re-export commonly used types at crate root
pub use claims::Claims;
pub use config::JwtConfig;
pub use jwt::{AuthError, create_token, verify_token};
