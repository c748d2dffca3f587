//! Service layer for business logic and orchestration.
//!
//! This module contains the service layer of the application, which sits between the
//! controller (API) layer and the data (repository) layer. Services are responsible for:
//!
//! - **Business Logic**: Applying configured behaviour such as default roles and search
//! - **Outcome Mapping**: Turning "no matching document" into not-found errors
//! - **Domain Models**: Working with domain models rather than DTOs or entity models
//! - **External Calls**: Delegating payment intent creation to the configured gateway

pub mod loan;
pub mod loan_application;
pub mod payment;
pub mod user;
