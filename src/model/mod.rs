//! Request and response DTOs exchanged over the JSON API.

pub mod api;
pub mod loan;
pub mod loan_application;
pub mod payment;
pub mod user;
