use std::sync::Arc;

use axum::http::{HeaderMap, HeaderValue};
use entity::sea_orm_active_enums::UserRole;
use test_utils::{builder::TestBuilder, factory};

use crate::server::{
    error::{auth::AuthError, AppError},
    middleware::auth::{AuthGuard, OpenAccess, Permission, RoleAccess, USER_EMAIL_HEADER},
    testing::{test_state, test_state_with, FakeGateway},
};

mod open_access;
mod role_access;

fn caller(email: &str) -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(USER_EMAIL_HEADER, HeaderValue::from_str(email).unwrap());
    headers
}
