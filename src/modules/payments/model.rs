use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// DTO for creating a payment intent. `amount` is in major currency units;
/// the conversion to minor units happens server-side.
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct CreatePaymentIntentDto {
    #[validate(range(min = 1, max = 999_999, message = "amount must be between 1 and 999999"))]
    pub amount: i64,
}

/// The client secret the frontend needs to confirm the payment.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct PaymentIntentResponse {
    pub client_secret: String,
}
