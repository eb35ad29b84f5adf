//! Payment provider abstraction.
//!
//! The provider is the only outbound dependency besides the database. It is
//! held behind a trait object in the application state so tests can swap in
//! a recording stub, and the Stripe client below is the production
//! implementation.

use anyhow::{Context, anyhow};
use async_trait::async_trait;
use serde::Deserialize;

use crate::config::stripe::StripeConfig;

/// A created payment intent.
#[derive(Debug, Clone)]
pub struct PaymentIntent {
    pub id: String,
    pub client_secret: String,
}

/// Creates a payment intent from an amount in minor currency units and a
/// currency code.
#[async_trait]
pub trait PaymentProvider: Send + Sync {
    async fn create_intent(
        &self,
        amount_minor: i64,
        currency: &str,
    ) -> anyhow::Result<PaymentIntent>;
}

/// Stripe-backed [`PaymentProvider`].
pub struct StripeClient {
    http: reqwest::Client,
    config: StripeConfig,
}

impl StripeClient {
    pub fn new(config: StripeConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            config,
        }
    }
}

#[derive(Debug, Deserialize)]
struct StripeIntentBody {
    id: String,
    client_secret: String,
}

#[async_trait]
impl PaymentProvider for StripeClient {
    async fn create_intent(
        &self,
        amount_minor: i64,
        currency: &str,
    ) -> anyhow::Result<PaymentIntent> {
        let url = format!("{}/v1/payment_intents", self.config.api_base);

        let response = self
            .http
            .post(&url)
            .basic_auth(&self.config.secret_key, None::<&str>)
            .form(&[
                ("amount", amount_minor.to_string()),
                ("currency", currency.to_string()),
                ("payment_method_types[]", "card".to_string()),
            ])
            .send()
            .await
            .context("Payment provider request failed")?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(anyhow!(
                "Payment provider returned {}: {}",
                status,
                body
            ));
        }

        let body: StripeIntentBody = response
            .json()
            .await
            .context("Payment provider returned an unexpected body")?;

        Ok(PaymentIntent {
            id: body.id,
            client_secret: body.client_secret,
        })
    }
}
