//! Outbound payment processor integration.
//!
//! Controllers and services only see the [`PaymentGateway`] trait; the Stripe adapter
//! is selected at startup and tests substitute their own implementation.

pub mod stripe;

use async_trait::async_trait;

use crate::server::error::gateway::GatewayError;

/// Creates payment intents with an external processor.
#[async_trait]
pub trait PaymentGateway: Send + Sync {
    /// Creates a card payment intent in US dollars.
    ///
    /// # Arguments
    /// - `amount` - Amount in minor units (cents)
    ///
    /// # Returns
    /// - `Ok(String)` - Client secret the browser uses to confirm the payment
    /// - `Err(GatewayError)` - The processor could not be reached or refused the request
    async fn create_payment_intent(&self, amount: i64) -> Result<String, GatewayError>;
}
