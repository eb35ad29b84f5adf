//! Middleware for request processing.
//!
//! # Authorization chain
//!
//! 1. Client sends `Authorization: Bearer <token>`
//! 2. [`auth::AuthUser`] verifies the token and extracts the claims
//! 3. [`auth::CurrentUser`] resolves the local user record (creating it on
//!    first sight, bumping the login counter otherwise) and caches it on
//!    the request
//! 4. [`role`] guards check the resolved role and account status
//! 5. The handler runs if every guard passed
//!
//! # Example
//!
//! ```ignore
//! use crate::middleware::auth::CurrentUser;
//! use crate::middleware::role::{RequireMerchant, ensure_active};
//!
//! // Any authenticated caller
//! async fn me(CurrentUser(user): CurrentUser) -> impl IntoResponse { /* ... */ }
//!
//! // Active merchants only
//! async fn create_product(RequireMerchant(user): RequireMerchant) -> impl IntoResponse {
//!     ensure_active(&user)?;
//!     // ...
//! }
//! ```

pub mod auth;
pub mod role;
