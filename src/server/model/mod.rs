//! Domain models and operation-specific parameter types.
//!
//! Domain models are built from entity models at the repository boundary and turned into
//! DTOs by controllers. Parameter types validate request DTOs before any store access.

pub mod loan;
pub mod loan_application;
pub mod payment;
pub mod user;
