use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        payment::{CreatePaymentIntentDto, PaymentIntentDto},
    },
    server::{
        error::AppError, model::payment::CreatePaymentIntentParam,
        service::payment::PaymentService, state::AppState, util::parse::json_body,
    },
};

/// Tag for grouping payment endpoints in OpenAPI documentation
pub static PAYMENT_TAG: &str = "payment";

/// POST /create-payment-intent - Start a card payment
///
/// # Request Body
/// - `price`: Amount in dollars, converted to cents
///
/// # Returns
/// - `200 OK`: `{"clientSecret": ...}`
/// - `400 Bad Request`: Missing, non-numeric or non-positive price
/// - `502 Bad Gateway`: The payment processor failed; its message is returned unchanged
#[utoipa::path(
    post,
    path = "/create-payment-intent",
    tag = PAYMENT_TAG,
    request_body = CreatePaymentIntentDto,
    responses(
        (status = 200, description = "Client secret of the new payment intent", body = PaymentIntentDto),
        (status = 400, description = "Missing, non-numeric or non-positive price", body = ErrorDto),
        (status = 502, description = "Payment processor failed", body = ErrorDto)
    ),
)]
pub async fn create_payment_intent(
    State(state): State<AppState>,
    payload: Result<Json<CreatePaymentIntentDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let param = CreatePaymentIntentParam::from_dto(json_body(payload)?)?;

    let payment_service = PaymentService::new(state.payment_gateway.as_ref());
    let client_secret = payment_service.create_payment_intent(param).await?;

    Ok((StatusCode::OK, Json(PaymentIntentDto { client_secret })))
}
