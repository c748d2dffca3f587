use axum::{
    extract::{rejection::JsonRejection, Path, Query, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{DeleteResultDto, ErrorDto, InsertOneResultDto, UpdateResultDto},
        loan::{LoanDto, LoanInputDto, LoanSearchQuery},
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::loan::{CreateLoanParam, LoanChange, UpdateLoanParam},
        service::loan::LoanService,
        state::AppState,
        util::parse::{json_body, parse_id},
    },
};

/// Tag for grouping catalog endpoints in OpenAPI documentation
pub static LOAN_TAG: &str = "loan";

/// GET /loans - List the catalog
///
/// # Query Parameters
/// - `search`: Optional term matched case-insensitively against title and category
///
/// # Returns
/// - `200 OK`: JSON array of loans (possibly empty)
/// - `503 Service Unavailable`: Store unreachable
#[utoipa::path(
    get,
    path = "/loans",
    tag = LOAN_TAG,
params(
        ("search" = Option<String>, Query, description = "Term matched against title and category")
    ),
    responses(
        (status = 200, description = "Matching loans", body = Vec<LoanDto>),
        (status = 503, description = "Store unreachable", body = ErrorDto)
    ),
)]
pub async fn get_loans(
    State(state): State<AppState>,
    Query(query): Query<LoanSearchQuery>,
) -> Result<impl IntoResponse, AppError> {
    let db = state.store.connection().await?;
    let loan_service = LoanService::new(db);
    let loans = loan_service
        .search(query.search.as_deref(), state.loan_search_enabled)
        .await?;

    let loans_dto: Vec<LoanDto> = loans.into_iter().map(|l| l.into_dto()).collect();

    Ok((StatusCode::OK, Json(loans_dto)))
}

/// POST /loans - Add a loan to the catalog
///
/// # Authentication
/// Requires the admin role when role-based access is configured
///
/// # Returns
/// - `201 Created`: Insert summary
/// - `400 Bad Request`: Missing title or category
#[utoipa::path(
    post,
    path = "/loans",
    tag = LOAN_TAG,
    request_body = LoanInputDto,
    responses(
        (status = 201, description = "Loan added", body = InsertOneResultDto),
        (status = 400, description = "Missing title or category", body = ErrorDto),
        (status = 403, description = "Caller is not an admin", body = ErrorDto),
        (status = 503, description = "Store unreachable", body = ErrorDto)
    ),
)]
pub async fn create_loan(
    State(state): State<AppState>,
    headers: HeaderMap,
    payload: Result<Json<LoanInputDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let param = CreateLoanParam::from_dto(json_body(payload)?)?;

    let auth_guard = AuthGuard::new(&state, &headers);
    auth_guard.require(&[Permission::Admin]).await?;

    let db = state.store.connection().await?;
    let loan_service = LoanService::new(db);
    let id = loan_service.create(param).await?;

    Ok((StatusCode::CREATED, Json(InsertOneResultDto::new(id))))
}

/// GET /loans/{id} - Get a loan
///
/// # Returns
/// - `200 OK`: The loan document
/// - `400 Bad Request`: Malformed id
/// - `404 Not Found`: No loan has that id
#[utoipa::path(
    get,
    path = "/loans/{id}",
    tag = LOAN_TAG,
params(
        ("id" = i32, Path, description = "Loan ID")
    ),
    responses(
        (status = 200, description = "The loan", body = LoanDto),
        (status = 400, description = "Malformed id", body = ErrorDto),
        (status = 404, description = "Loan not found", body = ErrorDto),
        (status = 503, description = "Store unreachable", body = ErrorDto)
    ),
)]
pub async fn get_loan(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_id(&id)?;

    let db = state.store.connection().await?;
    let loan_service = LoanService::new(db);
    let loan = loan_service.get_by_id(id).await?;

    Ok((StatusCode::OK, Json(loan.into_dto())))
}

/// PUT /loans/{id} - Update provided fields of a loan
///
/// # Authentication
/// Requires the admin role when role-based access is configured
///
/// # Returns
/// - `200 OK`: Update summary; `modifiedCount` is 0 when nothing changed
/// - `400 Bad Request`: Malformed id or blank title/category
/// - `404 Not Found`: No loan has that id
#[utoipa::path(
    put,
    path = "/loans/{id}",
    tag = LOAN_TAG,
params(
        ("id" = i32, Path, description = "Loan ID")
    ),
    request_body = LoanInputDto,
    responses(
        (status = 200, description = "Update summary", body = UpdateResultDto),
        (status = 400, description = "Malformed id or blank title/category", body = ErrorDto),
        (status = 403, description = "Caller is not an admin", body = ErrorDto),
        (status = 404, description = "Loan not found", body = ErrorDto),
        (status = 503, description = "Store unreachable", body = ErrorDto)
    ),
)]
pub async fn update_loan(
    State(state): State<AppState>,
    Path(id): Path<String>,
    headers: HeaderMap,
    payload: Result<Json<LoanInputDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_id(&id)?;
    let param = UpdateLoanParam::from_dto(json_body(payload)?)?;

    let auth_guard = AuthGuard::new(&state, &headers);
    auth_guard.require(&[Permission::Admin]).await?;

    let db = state.store.connection().await?;
    let loan_service = LoanService::new(db);
    let change = loan_service.update(id, param).await?;

    Ok((
        StatusCode::OK,
        Json(UpdateResultDto::matched_one(change == LoanChange::Updated)),
    ))
}

/// DELETE /loans/{id} - Remove a loan from the catalog
///
/// # Authentication
/// Requires the admin role when role-based access is configured
///
/// # Returns
/// - `200 OK`: Delete summary
/// - `400 Bad Request`: Malformed id
/// - `404 Not Found`: No loan has that id
#[utoipa::path(
    delete,
    path = "/loans/{id}",
    tag = LOAN_TAG,
params(
        ("id" = i32, Path, description = "Loan ID")
    ),
    responses(
        (status = 200, description = "Delete summary", body = DeleteResultDto),
        (status = 400, description = "Malformed id", body = ErrorDto),
        (status = 403, description = "Caller is not an admin", body = ErrorDto),
        (status = 404, description = "Loan not found", body = ErrorDto),
        (status = 503, description = "Store unreachable", body = ErrorDto)
    ),
)]
pub async fn delete_loan(
    State(state): State<AppState>,
    Path(id): Path<String>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_id(&id)?;

    let auth_guard = AuthGuard::new(&state, &headers);
    auth_guard.require(&[Permission::Admin]).await?;

    let db = state.store.connection().await?;
    let loan_service = LoanService::new(db);
    let deleted = loan_service.delete(id).await?;

    Ok((StatusCode::OK, Json(DeleteResultDto::new(deleted))))
}
