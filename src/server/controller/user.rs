use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    Json,
};

use crate::{
    model::{
        api::{ErrorDto, InsertOneResultDto, UpdateResultDto},
        user::{SetRoleDto, UpsertUserDto, UserDto, UserRoleDto},
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::user::{RoleChange, SetRoleParam, UpsertUserOutcome, UpsertUserParam},
        service::user::UserService,
        state::AppState,
        util::parse::json_body,
    },
};

/// Tag for grouping user endpoints in OpenAPI documentation
pub static USER_TAG: &str = "user";

/// POST /user - Record a login
///
/// Creates the user on first login with the requested role or the configured default.
/// Later logins only advance `last_loggedIn`.
///
/// # Request Body
/// - `email`: Required, identifies the user
/// - `role`: Optional, only used when the user is created
/// - any other field: stored as profile data at creation
///
/// # Returns
/// - `200 OK`: Insert summary for a new user, update summary for an existing one
/// - `400 Bad Request`: Missing email or unknown role
/// - `503 Service Unavailable`: Store unreachable
#[utoipa::path(
    post,
    path = "/user",
    tag = USER_TAG,
    request_body = UpsertUserDto,
    responses(
        (status = 200, description = "Insert summary for a new user, update summary otherwise", body = InsertOneResultDto),
        (status = 400, description = "Missing email or unknown role", body = ErrorDto),
        (status = 503, description = "Store unreachable", body = ErrorDto)
    ),
)]
pub async fn upsert_user(
    State(state): State<AppState>,
    payload: Result<Json<UpsertUserDto>, JsonRejection>,
) -> Result<Response, AppError> {
    let param = UpsertUserParam::from_dto(json_body(payload)?)?;

    let db = state.store.connection().await?;
    let user_service = UserService::new(db);
    let outcome = user_service
        .upsert(param, state.default_user_role)
        .await?;

    let response = match outcome {
        UpsertUserOutcome::Inserted { id } => {
            (StatusCode::OK, Json(InsertOneResultDto::new(id))).into_response()
        }
        UpsertUserOutcome::Matched { modified } => {
            (StatusCode::OK, Json(UpdateResultDto::matched_one(modified))).into_response()
        }
    };

    Ok(response)
}

/// GET /users - List every user
///
/// # Authentication
/// Requires the admin role when role-based access is configured
///
/// # Returns
/// - `200 OK`: JSON array of users, unpaginated
/// - `503 Service Unavailable`: Store unreachable
#[utoipa::path(
    get,
    path = "/users",
    tag = USER_TAG,
    responses(
        (status = 200, description = "Every user", body = Vec<UserDto>),
        (status = 403, description = "Caller is not an admin", body = ErrorDto),
        (status = 503, description = "Store unreachable", body = ErrorDto)
    ),
)]
pub async fn get_all_users(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let auth_guard = AuthGuard::new(&state, &headers);
    auth_guard.require(&[Permission::Admin]).await?;

    let db = state.store.connection().await?;
    let user_service = UserService::new(db);
    let users = user_service.get_all().await?;

    let users_dto: Vec<UserDto> = users.into_iter().map(|u| u.into_dto()).collect();

    Ok((StatusCode::OK, Json(users_dto)))
}

/// GET /users/{email} - Get a user by email
///
/// # Returns
/// - `200 OK`: The user document
/// - `404 Not Found`: No user has that email
#[utoipa::path(
    get,
    path = "/users/{email}",
    tag = USER_TAG,
params(
        ("email" = String, Path, description = "User email")
    ),
    responses(
        (status = 200, description = "The user", body = UserDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 503, description = "Store unreachable", body = ErrorDto)
    ),
)]
pub async fn get_user(
    State(state): State<AppState>,
    Path(email): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let db = state.store.connection().await?;
    let user_service = UserService::new(db);
    let user = user_service.get_by_email(&email).await?;

    Ok((StatusCode::OK, Json(user.into_dto())))
}

/// GET /user/role/{email} - Get only the role of a user
///
/// # Returns
/// - `200 OK`: `{"role": ...}`
/// - `404 Not Found`: No user has that email
#[utoipa::path(
    get,
    path = "/user/role/{email}",
    tag = USER_TAG,
params(
        ("email" = String, Path, description = "User email")
    ),
    responses(
        (status = 200, description = "The user's role", body = UserRoleDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 503, description = "Store unreachable", body = ErrorDto)
    ),
)]
pub async fn get_user_role(
    State(state): State<AppState>,
    Path(email): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let db = state.store.connection().await?;
    let user_service = UserService::new(db);
    let user = user_service.get_by_email(&email).await?;

    Ok((StatusCode::OK, Json(user.into_role_dto())))
}

/// PATCH /users/role/{email} - Change a user's role
///
/// # Authentication
/// Requires the admin or manager role when role-based access is configured
///
/// # Request Body
/// - `role`: One of `borrower`, `manager`, `admin`
///
/// # Returns
/// - `200 OK`: Update summary; `modifiedCount` is 0 when the role was already set
/// - `400 Bad Request`: Missing or unassignable role
/// - `404 Not Found`: No user has that email
#[utoipa::path(
    patch,
    path = "/users/role/{email}",
    tag = USER_TAG,
params(
        ("email" = String, Path, description = "User email")
    ),
    request_body = SetRoleDto,
    responses(
        (status = 200, description = "Update summary", body = UpdateResultDto),
        (status = 400, description = "Missing or unassignable role", body = ErrorDto),
        (status = 403, description = "Caller is not an admin or manager", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 503, description = "Store unreachable", body = ErrorDto)
    ),
)]
pub async fn set_user_role(
    State(state): State<AppState>,
    Path(email): Path<String>,
    headers: HeaderMap,
    payload: Result<Json<SetRoleDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let param = SetRoleParam::from_dto(email, json_body(payload)?)?;

    let auth_guard = AuthGuard::new(&state, &headers);
    auth_guard.require(&[Permission::Staff]).await?;

    let db = state.store.connection().await?;
    let user_service = UserService::new(db);
    let change = user_service.set_role(param).await?;

    Ok((
        StatusCode::OK,
        Json(UpdateResultDto::matched_one(change == RoleChange::Updated)),
    ))
}
