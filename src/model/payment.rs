use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use serde_json::Value;

/// Body of the payment intent call; `price` is a decimal amount in dollars.
#[derive(Deserialize, Debug, Clone, Default, ToSchema)]
pub struct CreatePaymentIntentDto {
    pub price: Option<Value>,
}

#[derive(Serialize, Deserialize, Debug, Clone, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PaymentIntentDto {
    pub client_secret: String,
}
