use std::env;

use anyhow::Context;

/// PostgreSQL connection settings.
#[derive(Clone, Debug)]
pub struct DatabaseConfig {
    pub url: String,
}

impl DatabaseConfig {
    /// Reads `DATABASE_URL`. Unlike the other config sections this one has
    /// no usable default, so startup fails fast when it is missing.
    pub fn from_env() -> anyhow::Result<Self> {
        let url = env::var("DATABASE_URL").context("DATABASE_URL must be set")?;
        Ok(Self { url })
    }
}
