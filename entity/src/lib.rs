//! SeaORM entities for the LoanLink store.

pub mod prelude;

pub mod loan;
pub mod loan_application;
pub mod sea_orm_active_enums;
pub mod user;
