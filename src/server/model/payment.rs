//! Payment intent parameters.

use crate::{
    model::payment::CreatePaymentIntentDto,
    server::{error::AppError, util::parse::parse_amount},
};

/// Validated payment intent request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CreatePaymentIntentParam {
    /// Amount in minor units (cents).
    pub amount: i64,
}

impl CreatePaymentIntentParam {
    /// Validates the price and converts it from dollars to cents.
    ///
    /// # Returns
    /// - `Ok(CreatePaymentIntentParam)` - Price is a positive finite number
    /// - `Err(AppError::BadRequest)` - Price missing, non-numeric, or not positive
    pub fn from_dto(dto: CreatePaymentIntentDto) -> Result<Self, AppError> {
        let price = dto
            .price
            .ok_or_else(|| AppError::BadRequest("Field 'price' is required".to_string()))?;
        let price = parse_amount("price", &price)?;

        let amount = to_minor_units(price).ok_or_else(|| {
            AppError::BadRequest("Field 'price' must be a positive amount".to_string())
        })?;

        Ok(Self { amount })
    }
}

/// Converts a dollar amount to whole cents, rounding half away from zero.
///
/// Returns `None` for amounts that round to zero cents or below, or that do not fit.
pub fn to_minor_units(price: f64) -> Option<i64> {
    let cents = (price * 100.0).round();

    if cents >= 1.0 && cents <= i64::MAX as f64 {
        Some(cents as i64)
    } else {
        None
    }
}
