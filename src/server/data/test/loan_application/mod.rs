use crate::server::{
    data::loan_application::LoanApplicationRepository,
    model::loan_application::{ApplicationFeeStatus, ApplicationStatus, ApplyLoanParam},
};
use chrono::{Duration, Utc};
use sea_orm::DbErr;
use serde_json::json;
use test_utils::{builder::TestBuilder, factory};

mod create;
mod delete;
mod get_all;
mod get_by_user_email;
mod get_pending;
