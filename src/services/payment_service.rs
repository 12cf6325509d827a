// src/services/payment_service.rs

use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;

use crate::error::AppError;
use crate::models::payment::PaymentIntent;

/// Mints payment intents. One call per request; no retries, no idempotency key.
#[async_trait]
pub trait PaymentGateway: Send + Sync {
    async fn create_intent(&self, amount: i64) -> Result<PaymentIntent, AppError>;
}

/// Stripe's `/v1/payment_intents` endpoint, card payments only.
pub struct StripeGateway {
    client: Client,
    secret_key: String,
    api_base: String,
    currency: String,
}

impl StripeGateway {
    pub fn new(secret_key: String, api_base: String, currency: String) -> Self {
        Self {
            client: Client::new(),
            secret_key,
            api_base: api_base.trim_end_matches('/').to_string(),
            currency,
        }
    }
}

#[async_trait]
impl PaymentGateway for StripeGateway {
    async fn create_intent(&self, amount: i64) -> Result<PaymentIntent, AppError> {
        let url = format!("{}/v1/payment_intents", self.api_base);
        let params = [
            ("amount", amount.to_string()),
            ("currency", self.currency.clone()),
            ("payment_method_types[]", "card".to_string()),
        ];

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.secret_key)
            .form(&params)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(AppError::Gateway(gateway_error_message(status.as_u16(), &body)));
        }

        let intent = response.json::<PaymentIntent>().await?;
        log::debug!("Created payment intent {}", intent.id);
        Ok(intent)
    }
}

/// Pulls `error.message` out of a gateway error body, falling back to the status.
fn gateway_error_message(status: u16, body: &str) -> String {
    serde_json::from_str::<Value>(body)
        .ok()
        .and_then(|v| v["error"]["message"].as_str().map(str::to_string))
        .map(|message| format!("{} ({})", message, status))
        .unwrap_or_else(|| format!("gateway responded with status {}", status))
}
