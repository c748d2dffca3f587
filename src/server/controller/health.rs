use axum::Json;
use utoipa::OpenApi;

use crate::server::doc::ApiDoc;

/// Tag for grouping health and documentation endpoints in OpenAPI documentation
pub static HEALTH_TAG: &str = "health";

/// GET / - Liveness text
///
/// Answers without touching the store so that it works while the store is down.
#[utoipa::path(
    get,
    path = "/",
    tag = HEALTH_TAG,
    responses(
        (status = 200, description = "Server is running", body = String)
    ),
)]
pub async fn root() -> &'static str {
    "LoanLink Server is running"
}

/// GET /api-docs/openapi.json - OpenAPI document describing every route
pub async fn openapi() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}
