//! # Lifelink DB
//!
//! Database pool initialization for the Lifelink API.
//!
//! The connection URL is passed in explicitly rather than read from the
//! environment here, so callers own the configuration and tests can point
//! the pool wherever they need.
//!
//! # Example
//!
//! ```ignore
//! let pool = lifelink_db::connect_pool("postgres://localhost/lifelink").await?;
//! ```

use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;

/// Connects a PostgreSQL pool to the given URL.
///
/// The returned pool is cheaply cloneable and is shared process-wide; it is
/// the only resource boundary between the service and the database.
///
/// # Errors
///
/// Returns the underlying [`sqlx::Error`] if the connection cannot be
/// established.
pub async fn connect_pool(database_url: &str) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(10)
        .connect(database_url)
        .await
}

/// Creates a pool without establishing a connection.
///
/// Connections are opened on first use. Intended for tests that exercise
/// request paths which reject before any query runs.
///
/// # Errors
///
/// Returns [`sqlx::Error`] if the URL cannot be parsed.
pub fn lazy_pool(database_url: &str) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new().connect_lazy(database_url)
}
