//! Server-side API backend and business logic.
//!
//! This module contains the complete backend implementation for the loan marketplace,
//! including API endpoints, business logic, data access, and the payment processor
//! integration. The backend uses Axum as the web framework and SeaORM for database
//! operations.
//!
//! # Architecture
//!
//! The server follows a layered architecture with clear separation of concerns:
//!
//! - **Controller Layer** (`controller/`) - HTTP request handlers, access control, and DTO conversion
//! - **Service Layer** (`service/`) - Business logic orchestration between controllers and data layer
//! - **Data Layer** (`data/`) - Database operations and entity-to-domain model conversion
//! - **Model Layer** (`model/`) - Domain models and operation-specific parameter types
//! - **Error Layer** (`error/`) - Application error types and HTTP response mapping
//! - **Middleware** (`middleware/`) - Pluggable access policies and the guard controllers call
//!
//! # Infrastructure
//!
//! Supporting modules provide application infrastructure:
//!
//! - **Configuration** (`config`) - Environment-based application configuration
//! - **State** (`state`) - Shared application state (store handle, gateway, policy)
//! - **Store** (`store`) - Lazily established, memoized database connection
//! - **Gateway** (`gateway/`) - Payment processor adapter
//! - **Startup** (`startup`) - Assembly of state, layers and the store warm-up
//! - **Router** (`router`) - Axum route configuration
//! - **Doc** (`doc`) - OpenAPI document assembled from the controller annotations
//!
//! # Request Flow
//!
//! A typical request flows through these layers:
//!
//! 1. **Router** receives HTTP request and routes to appropriate controller
//! 2. **Controller** parses input into params, rejecting malformed input with 400
//! 3. **Middleware** `AuthGuard` asks the configured access policy for permission
//! 4. **Controller** awaits the store connection and calls the service
//! 5. **Service** executes business logic, orchestrates data operations
//! 6. **Data** queries database, converts entities to domain models
//! 7. **Controller** converts domain model to DTO, returns HTTP response

pub mod config;
pub mod controller;
pub mod data;
pub mod doc;
pub mod error;
pub mod gateway;
pub mod middleware;
pub mod model;
pub mod router;
pub mod service;
pub mod startup;
pub mod state;
pub mod store;
pub mod util;
