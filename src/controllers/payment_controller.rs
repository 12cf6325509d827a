// src/controllers/payment_controller.rs

use actix_web::{post, web, HttpResponse};

use crate::error::AppError;
use crate::models::payment::{to_minor_units, PaymentIntentForm, PaymentIntentResponse};
use crate::state::AppState;

/// POST /create-payment-intent
/// Converts `price` to minor units and asks the gateway for a card payment
/// intent. The price is forwarded as-is; the gateway rejects bad amounts.
#[post("/create-payment-intent")]
pub async fn create_payment_intent(
    form: web::Json<PaymentIntentForm>,
    data: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let gateway = data.payments.as_ref().ok_or(AppError::GatewayNotConfigured)?;
    let amount = to_minor_units(form.price);
    let intent = gateway.create_intent(amount).await?;

    Ok(HttpResponse::Ok().json(PaymentIntentResponse {
        client_secret: intent.client_secret,
    }))
}
