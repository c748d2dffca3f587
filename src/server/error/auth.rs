use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

#[derive(Error, Debug)]
pub enum AuthError {
    /// The access policy needs a caller identity but the request carried none.
    ///
    /// Results in a 401 Unauthorized response.
    #[error("Request does not identify the calling user")]
    MissingIdentity,

    /// The caller identity does not match any stored user.
    ///
    /// Results in a 401 Unauthorized response.
    #[error("User {0} not found in database")]
    UnknownUser(String),

    /// The caller is known but lacks the permission required by the endpoint.
    ///
    /// Results in a 403 Forbidden response. The reason is logged, not returned.
    #[error("Access denied for user {0}: {1}")]
    AccessDenied(String, String),
}

/// Converts authorization errors into HTTP responses.
///
/// Maps authorization errors to status codes with generic client-facing messages:
/// - `MissingIdentity` / `UnknownUser` → 401 Unauthorized
/// - `AccessDenied` → 403 Forbidden
///
/// Details are logged at debug level for diagnostics.
impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        tracing::debug!("{}", self);

        match self {
            Self::MissingIdentity | Self::UnknownUser(_) => (
                StatusCode::UNAUTHORIZED,
                Json(ErrorDto {
                    error: "Unauthorized access".to_string(),
                }),
            )
                .into_response(),
            Self::AccessDenied(_, _) => (
                StatusCode::FORBIDDEN,
                Json(ErrorDto {
                    error: "Forbidden access".to_string(),
                }),
            )
                .into_response(),
        }
    }
}
