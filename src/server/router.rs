use axum::{
    routing::{delete, get, patch, post},
    Router,
};

use crate::server::{
    controller::{
        health::{openapi, root},
        loan::{create_loan, delete_loan, get_loan, get_loans, update_loan},
        loan_application::{
            apply_loan, cancel_application, get_all_applications, get_pending_applications,
            get_user_applications,
        },
        payment::create_payment_intent,
        user::{get_all_users, get_user, get_user_role, set_user_role, upsert_user},
    },
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(root))
        .route("/api-docs/openapi.json", get(openapi))
        // Catalog
        .route("/loans", get(get_loans).post(create_loan))
        .route(
            "/loans/{id}",
            get(get_loan).put(update_loan).delete(delete_loan),
        )
        // Users
        .route("/user", post(upsert_user))
        .route("/users", get(get_all_users))
        .route("/users/{email}", get(get_user))
        .route("/user/role/{email}", get(get_user_role))
        .route("/users/role/{email}", patch(set_user_role))
        // Applications
        .route("/apply-loan", post(apply_loan))
        .route("/loan-applications", get(get_all_applications))
        .route("/loan-applications/user/{email}", get(get_user_applications))
        .route("/my-loans/{email}", get(get_user_applications))
        .route("/pending-loans", get(get_pending_applications))
        .route("/loan-applications/{id}", delete(cancel_application))
        // Payments
        .route("/create-payment-intent", post(create_payment_intent))
}
