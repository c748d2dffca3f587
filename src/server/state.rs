//! Application state shared across all request handlers.
//!
//! This module defines the `AppState` struct which holds all shared resources and
//! dependencies needed by the application. The state is initialized once during startup
//! and then cloned for each request handler through Axum's state extraction.
//!
//! The state includes:
//! - Store handle that connects lazily on first use
//! - Payment gateway used to create payment intents
//! - Access policy consulted before protected operations
//! - Behavioural switches read from configuration

use std::sync::Arc;

use entity::sea_orm_active_enums::UserRole;

use crate::server::{
    gateway::PaymentGateway, middleware::auth::AccessPolicy, store::StoreHandle,
};

/// Application state containing shared resources and dependencies.
///
/// All fields are cheap to clone: trait objects and the store handle sit behind `Arc`,
/// the remaining fields are `Copy`.
#[derive(Clone)]
pub struct AppState {
    /// Memoized store connection.
    ///
    /// Handlers await `store.connection()` per request; the first successful
    /// connection is reused by every later request.
    pub store: Arc<StoreHandle>,

    /// Payment processor adapter.
    pub payment_gateway: Arc<dyn PaymentGateway>,

    /// Authorization decision point for protected endpoints.
    pub access_policy: Arc<dyn AccessPolicy>,

    /// Role given to users created by the login upsert without an explicit role.
    pub default_user_role: UserRole,

    /// Whether the catalog listing honours the `search` query parameter.
    pub loan_search_enabled: bool,
}

impl AppState {
    /// Creates a new application state with the provided dependencies.
    ///
    /// # Arguments
    /// - `store` - Lazily connecting store handle
    /// - `payment_gateway` - Payment processor adapter
    /// - `access_policy` - Authorization policy
    /// - `default_user_role` - Role assigned at user creation when none is requested
    /// - `loan_search_enabled` - Whether catalog search filters results
    ///
    /// # Returns
    /// - `AppState` - Initialized application state ready for use
    pub fn new(
        store: Arc<StoreHandle>,
        payment_gateway: Arc<dyn PaymentGateway>,
        access_policy: Arc<dyn AccessPolicy>,
        default_user_role: UserRole,
        loan_search_enabled: bool,
    ) -> Self {
        Self {
            store,
            payment_gateway,
            access_policy,
            default_user_role,
            loan_search_enabled,
        }
    }
}
