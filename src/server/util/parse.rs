use axum::{extract::rejection::JsonRejection, Json};
use serde_json::Value;

use crate::server::error::AppError;

/// Parses a store identifier from a path segment.
///
/// Malformed identifiers are a client error, reported separately from identifiers
/// that are well formed but match no document.
///
/// # Arguments
/// - `value` - The path segment to parse
///
/// # Returns
/// - `Ok(i32)` - Successfully parsed identifier
/// - `Err(AppError::BadRequest)` - The value is not a valid identifier
pub fn parse_id(value: &str) -> Result<i32, AppError> {
    value
        .parse::<i32>()
        .map_err(|_| AppError::BadRequest(format!("Invalid id '{}'", value)))
}

/// Coerces a JSON number or numeric string into a finite `f64`.
///
/// # Arguments
/// - `field` - Field name used in the error message
/// - `value` - Raw JSON value supplied by the caller
///
/// # Returns
/// - `Ok(f64)` - The numeric value
/// - `Err(AppError::BadRequest)` - The value is not a finite number
pub fn parse_amount(field: &str, value: &Value) -> Result<f64, AppError> {
    let amount = match value {
        Value::Number(number) => number.as_f64(),
        Value::String(text) => text.trim().parse::<f64>().ok(),
        _ => None,
    };

    match amount {
        Some(amount) if amount.is_finite() => Ok(amount),
        _ => Err(AppError::BadRequest(format!(
            "Field '{}' must be a number",
            field
        ))),
    }
}

/// Unwraps a JSON body, reporting malformed or mistyped bodies as bad requests.
pub fn json_body<T>(payload: Result<Json<T>, JsonRejection>) -> Result<T, AppError> {
    payload
        .map(|Json(body)| body)
        .map_err(|rejection| AppError::BadRequest(rejection.body_text()))
}

/// Returns the trimmed value when present and non-empty.
pub fn non_empty(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
