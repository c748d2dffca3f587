use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{DeleteResultDto, ErrorDto, InsertOneResultDto},
        loan_application::{ApplyLoanDto, LoanApplicationDto},
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::loan_application::{ApplyLoanParam, LoanApplication},
        service::loan_application::LoanApplicationService,
        state::AppState,
        util::parse::{json_body, parse_id},
    },
};

/// Tag for grouping loan application endpoints in OpenAPI documentation
pub static APPLICATION_TAG: &str = "application";

fn into_dtos(applications: Vec<LoanApplication>) -> Vec<LoanApplicationDto> {
    applications.into_iter().map(|a| a.into_dto()).collect()
}

/// POST /apply-loan - Submit a loan application
///
/// `status`, `applicationFeeStatus` and `application_date` are assigned by the server;
/// caller-supplied values for them are discarded.
///
/// # Returns
/// - `201 Created`: Insert summary
/// - `400 Bad Request`: Missing required fields or non-numeric amount
#[utoipa::path(
    post,
    path = "/apply-loan",
    tag = APPLICATION_TAG,
    request_body = ApplyLoanDto,
    responses(
        (status = 201, description = "Application stored as pending and unpaid", body = InsertOneResultDto),
        (status = 400, description = "Missing required field or invalid amount", body = ErrorDto),
        (status = 503, description = "Store unreachable", body = ErrorDto)
    ),
)]
pub async fn apply_loan(
    State(state): State<AppState>,
    payload: Result<Json<ApplyLoanDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let param = ApplyLoanParam::from_dto(json_body(payload)?)?;

    let db = state.store.connection().await?;
    let application_service = LoanApplicationService::new(db);
    let id = application_service.apply(param).await?;

    Ok((StatusCode::CREATED, Json(InsertOneResultDto::new(id))))
}

/// GET /loan-applications - List every application, most recent first
#[utoipa::path(
    get,
    path = "/loan-applications",
    tag = APPLICATION_TAG,
    responses(
        (status = 200, description = "Every application, most recent first", body = Vec<LoanApplicationDto>),
        (status = 503, description = "Store unreachable", body = ErrorDto)
    ),
)]
pub async fn get_all_applications(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let db = state.store.connection().await?;
    let application_service = LoanApplicationService::new(db);
    let applications = application_service.get_all().await?;

    Ok((StatusCode::OK, Json(into_dtos(applications))))
}

/// GET /loan-applications/user/{email} and /my-loans/{email} - List one applicant's applications
#[utoipa::path(
    get,
    path = "/loan-applications/user/{email}",
    tag = APPLICATION_TAG,
params(
        ("email" = String, Path, description = "Applicant email")
    ),
    responses(
        (status = 200, description = "The applicant's applications", body = Vec<LoanApplicationDto>),
        (status = 503, description = "Store unreachable", body = ErrorDto)
    ),
)]
pub async fn get_user_applications(
    State(state): State<AppState>,
    Path(email): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let db = state.store.connection().await?;
    let application_service = LoanApplicationService::new(db);
    let applications = application_service.get_by_user_email(&email).await?;

    Ok((StatusCode::OK, Json(into_dtos(applications))))
}

/// GET /pending-loans - List applications awaiting review
#[utoipa::path(
    get,
    path = "/pending-loans",
    tag = APPLICATION_TAG,
    responses(
        (status = 200, description = "Applications awaiting review", body = Vec<LoanApplicationDto>),
        (status = 503, description = "Store unreachable", body = ErrorDto)
    ),
)]
pub async fn get_pending_applications(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let db = state.store.connection().await?;
    let application_service = LoanApplicationService::new(db);
    let applications = application_service.get_pending().await?;

    Ok((StatusCode::OK, Json(into_dtos(applications))))
}

/// DELETE /loan-applications/{id} - Cancel an application
///
/// # Authentication
/// Requires the applicant or an admin when role-based access is configured
///
/// # Returns
/// - `200 OK`: Delete summary
/// - `400 Bad Request`: Malformed id
/// - `404 Not Found`: No application has that id
#[utoipa::path(
    delete,
    path = "/loan-applications/{id}",
    tag = APPLICATION_TAG,
params(
        ("id" = i32, Path, description = "Application ID")
    ),
    responses(
        (status = 200, description = "Delete summary", body = DeleteResultDto),
        (status = 400, description = "Malformed id", body = ErrorDto),
        (status = 403, description = "Caller is neither the applicant nor an admin", body = ErrorDto),
        (status = 404, description = "Application not found", body = ErrorDto),
        (status = 503, description = "Store unreachable", body = ErrorDto)
    ),
)]
pub async fn cancel_application(
    State(state): State<AppState>,
    Path(id): Path<String>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_id(&id)?;

    let auth_guard = AuthGuard::new(&state, &headers);
    auth_guard.require(&[Permission::ApplicationOwner(id)]).await?;

    let db = state.store.connection().await?;
    let application_service = LoanApplicationService::new(db);
    let deleted = application_service.cancel(id).await?;

    Ok((StatusCode::OK, Json(DeleteResultDto::new(deleted))))
}
