//! Configuration for the Lifelink API.
//!
//! Each submodule loads one concern from environment variables and hands it
//! to [`crate::state::init_app_state`], which constructs every service
//! handle explicitly; nothing is initialized as a module-load side effect.
//!
//! # Modules
//!
//! - [`cors`]: allowed CORS origins
//! - [`database`]: PostgreSQL connection URL
//! - [`jwt`]: bearer-token secret and expiry (re-exported from `lifelink-auth`)
//! - [`stripe`]: payment provider credentials and currency

pub mod cors;
pub mod database;
pub mod jwt;
pub mod stripe;
