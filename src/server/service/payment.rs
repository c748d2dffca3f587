//! Payment service.
//!
//! Payment intents are not linked to any stored application.

use crate::server::{
    error::AppError, gateway::PaymentGateway, model::payment::CreatePaymentIntentParam,
};

pub struct PaymentService<'a> {
    gateway: &'a dyn PaymentGateway,
}

impl<'a> PaymentService<'a> {
    pub fn new(gateway: &'a dyn PaymentGateway) -> Self {
        Self { gateway }
    }

    /// Creates a payment intent and returns its client secret.
    ///
    /// # Returns
    /// - `Ok(String)` - Client secret from the processor
    /// - `Err(AppError::GatewayErr)` - The processor failed; its message is kept verbatim
    pub async fn create_payment_intent(
        &self,
        param: CreatePaymentIntentParam,
    ) -> Result<String, AppError> {
        let client_secret = self.gateway.create_payment_intent(param.amount).await?;

        tracing::debug!("Created payment intent for {} cents", param.amount);

        Ok(client_secret)
    }
}
