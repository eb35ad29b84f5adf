use axum::Json;
use axum::extract::State;

use crate::modules::auth::controller::ErrorResponse;
use crate::state::AppState;
use crate::utils::errors::AppError;
use crate::validator::ValidatedJson;

use super::model::{CreatePaymentIntentDto, PaymentIntentResponse};

/// Create a payment intent
#[utoipa::path(
    post,
    path = "/api/payments/create-payment-intent",
    request_body = CreatePaymentIntentDto,
    responses(
        (status = 200, description = "Client secret for confirming the payment", body = PaymentIntentResponse),
        (status = 400, description = "Bad request - validation error", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Payments"
)]
pub async fn create_payment_intent(
    State(state): State<AppState>,
    ValidatedJson(dto): ValidatedJson<CreatePaymentIntentDto>,
) -> Result<Json<PaymentIntentResponse>, AppError> {
    // Providers count in minor units; the wire carries major units.
    let amount_minor = dto.amount * 100;

    let intent = state
        .payments
        .create_intent(amount_minor, &state.stripe_config.currency)
        .await
        .map_err(AppError::internal)?;

    Ok(Json(PaymentIntentResponse {
        client_secret: intent.client_secret,
    }))
}
