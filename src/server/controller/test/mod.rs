use std::sync::Arc;

use axum::{
    body::Body,
    http::{Method, Request, StatusCode},
    Router,
};
use sea_orm::DatabaseConnection;
use serde_json::{json, Value};
use test_utils::{builder::TestBuilder, factory};
use tower::ServiceExt;

use crate::server::{
    middleware::auth::{AccessPolicy, OpenAccess, RoleAccess, USER_EMAIL_HEADER},
    startup::build_app,
    state::AppState,
    testing::{test_state, test_state_with, FakeGateway},
};


/// Fresh in-memory database with every table.
async fn database() -> DatabaseConnection {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    test.into_database().await.unwrap()
}

/// Application with the open policy; the returned connection shares the app's database.
async fn open_app() -> (Router, DatabaseConnection) {
    let db = database().await;
    (build_app(test_state(db.clone())), db)
}

async fn app_with(
    policy: Arc<dyn AccessPolicy>,
    gateway: Arc<FakeGateway>,
) -> (Router, DatabaseConnection) {
    let db = database().await;
    (build_app(test_state_with(db.clone(), policy, gateway)), db)
}

/// Sends one request and returns the status with the body parsed as JSON.
///
/// Non-JSON bodies are returned as a JSON string.
async fn send(
    app: &Router,
    method: Method,
    uri: &str,
    caller: Option<&str>,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let mut request = Request::builder().method(method).uri(uri);
    if let Some(email) = caller {
        request = request.header(USER_EMAIL_HEADER, email);
    }

    let request = match body {
        Some(body) => request
            .header("content-type", "application/json")
            .body(Body::from(body.to_string())),
        None => request.body(Body::empty()),
    }
    .unwrap();

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();

    let body = serde_json::from_slice(&bytes)
        .unwrap_or_else(|_| Value::String(String::from_utf8_lossy(&bytes).into_owned()));

    (status, body)
}

async fn get(app: &Router, uri: &str) -> (StatusCode, Value) {
    send(app, Method::GET, uri, None, None).await
}

async fn post(app: &Router, uri: &str, body: Value) -> (StatusCode, Value) {
    send(app, Method::POST, uri, None, Some(body)).await
}
