use std::fmt;
use std::sync::Arc;

use anyhow::Context;
use sqlx::PgPool;

use crate::config::cors::CorsConfig;
use crate::config::database::DatabaseConfig;
use crate::config::jwt::JwtConfig;
use crate::config::stripe::StripeConfig;
use crate::modules::payments::provider::{PaymentProvider, StripeClient};

/// Shared application state.
///
/// Every service handle is constructed here and injected into the router;
/// nothing reads the environment or opens connections after startup.
#[derive(Clone)]
pub struct AppState {
    pub db: PgPool,
    pub jwt_config: JwtConfig,
    pub cors_config: CorsConfig,
    pub stripe_config: StripeConfig,
    pub payments: Arc<dyn PaymentProvider>,
}

impl fmt::Debug for AppState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppState").finish_non_exhaustive()
    }
}

pub async fn init_app_state() -> anyhow::Result<AppState> {
    let database = DatabaseConfig::from_env()?;
    let db = lifelink_db::connect_pool(&database.url)
        .await
        .context("Failed to connect to database")?;

    let stripe_config = StripeConfig::from_env();

    Ok(AppState {
        db,
        jwt_config: JwtConfig::from_env(),
        cors_config: CorsConfig::from_env(),
        payments: Arc::new(StripeClient::new(stripe_config.clone())),
        stripe_config,
    })
}
