use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

/// Failures of the external payment processor.
///
/// None of these are retried; each is reported to the caller as 502 Bad Gateway with
/// the error text unchanged.
#[derive(Error, Debug)]
pub enum GatewayError {
    /// No secret key was configured for the processor.
    #[error("Payment gateway secret key is not configured")]
    MissingSecretKey,

    /// The request never produced a response (connection, TLS, timeout).
    #[error(transparent)]
    Request(#[from] reqwest::Error),

    /// The processor answered with an error document.
    #[error("{message}")]
    Rejected {
        /// HTTP status returned by the processor
        status: u16,
        /// The processor's own error message
        message: String,
    },

    /// The processor answered successfully but without a client secret.
    #[error("Payment gateway response did not contain a client secret")]
    MissingClientSecret,

    /// The processor's response body could not be decoded.
    #[error("Invalid payment gateway response: {0}")]
    InvalidResponse(String),
}

impl IntoResponse for GatewayError {
    fn into_response(self) -> Response {
        tracing::warn!("Payment gateway error: {}", self);

        (
            StatusCode::BAD_GATEWAY,
            Json(ErrorDto {
                error: self.to_string(),
            }),
        )
            .into_response()
    }
}
