//! HTTP request handlers.
//!
//! Controllers parse path, query and body input into parameter types, consult the
//! access policy through `AuthGuard`, await the store connection, call a service and
//! render the result as a DTO.

pub mod health;
pub mod loan;
pub mod loan_application;
pub mod payment;
pub mod user;

#[cfg(test)]
mod test;
