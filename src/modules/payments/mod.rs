pub mod controller;
pub mod model;
pub mod provider;
pub mod router;

pub use model::*;
pub use provider::{PaymentIntent, PaymentProvider, StripeClient};
pub use router::init_payments_router;
