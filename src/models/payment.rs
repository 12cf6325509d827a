// src/models/payment.rs

use serde::{Deserialize, Serialize};

/// Request body for POST /create-payment-intent. `price` is in major units.
#[derive(Debug, Deserialize)]
pub struct PaymentIntentForm {
    pub price: f64,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentIntentResponse {
    pub client_secret: String,
}

/// The parts of a gateway payment intent the service hands back.
#[derive(Debug, Clone, Deserialize)]
pub struct PaymentIntent {
    pub id: String,
    pub client_secret: String,
}

/// Converts a major-unit price to the gateway's integer minor units,
/// truncating any fraction of a cent. Sign is not checked.
pub fn to_minor_units(price: f64) -> i64 {
    (price * 100.0).trunc() as i64
}
