//! Reqwest-backed Stripe adapter.
//!
//! Owns transport details only: form encoding, bearer authentication and mapping of
//! Stripe's error documents. Nothing is retried.

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;

use crate::server::{error::gateway::GatewayError, gateway::PaymentGateway};

pub const DEFAULT_STRIPE_API_URL: &str = "https://api.stripe.com";

const PAYMENT_CURRENCY: &str = "usd";
const PAYMENT_METHOD_TYPE: &str = "card";

#[derive(Deserialize)]
struct PaymentIntentResponse {
    client_secret: Option<String>,
}

#[derive(Deserialize)]
struct StripeErrorResponse {
    error: StripeErrorDetail,
}

#[derive(Deserialize)]
struct StripeErrorDetail {
    message: Option<String>,
}

pub struct StripeGateway {
    client: Client,
    api_url: String,
    secret_key: Option<String>,
}

impl StripeGateway {
    /// Creates the adapter.
    ///
    /// A missing `secret_key` is accepted here; every call then fails with
    /// `GatewayError::MissingSecretKey`.
    pub fn new(client: Client, api_url: impl Into<String>, secret_key: Option<String>) -> Self {
        Self {
            client,
            api_url: api_url.into(),
            secret_key,
        }
    }

    fn payment_intents_url(&self) -> String {
        format!("{}/v1/payment_intents", self.api_url.trim_end_matches('/'))
    }
}

#[async_trait]
impl PaymentGateway for StripeGateway {
    async fn create_payment_intent(&self, amount: i64) -> Result<String, GatewayError> {
        let Some(secret_key) = self.secret_key.as_deref() else {
            return Err(GatewayError::MissingSecretKey);
        };

        let response = self
            .client
            .post(self.payment_intents_url())
            .bearer_auth(secret_key)
            .form(&[
                ("amount", amount.to_string()),
                ("currency", PAYMENT_CURRENCY.to_string()),
                ("payment_method_types[]", PAYMENT_METHOD_TYPE.to_string()),
            ])
            .send()
            .await?;

        let status = response.status();
        let body = response.bytes().await?;

        if !status.is_success() {
            return Err(rejection(status.as_u16(), body.as_ref()));
        }

        let intent: PaymentIntentResponse = serde_json::from_slice(body.as_ref())
            .map_err(|e| GatewayError::InvalidResponse(e.to_string()))?;

        intent.client_secret.ok_or(GatewayError::MissingClientSecret)
    }
}

/// Extracts Stripe's own error message, falling back to the raw body.
fn rejection(status: u16, body: &[u8]) -> GatewayError {
    let message = serde_json::from_slice::<StripeErrorResponse>(body)
        .ok()
        .and_then(|parsed| parsed.error.message)
        .unwrap_or_else(|| String::from_utf8_lossy(body).into_owned());

    GatewayError::Rejected { status, message }
}
