use std::env;

/// Payment provider settings.
///
/// `currency` is the fixed minor-unit currency code used for every intent;
/// `api_base` is overridable so tests can point the client at a stub.
#[derive(Clone, Debug)]
pub struct StripeConfig {
    pub secret_key: String,
    pub currency: String,
    pub api_base: String,
}

impl StripeConfig {
    pub fn from_env() -> Self {
        Self {
            secret_key: env::var("STRIPE_SECRET_KEY")
                .unwrap_or_else(|_| "sk_test_change-in-production".to_string()),
            currency: env::var("STRIPE_CURRENCY").unwrap_or_else(|_| "usd".to_string()),
            api_base: env::var("STRIPE_API_BASE")
                .unwrap_or_else(|_| "https://api.stripe.com".to_string()),
        }
    }
}
