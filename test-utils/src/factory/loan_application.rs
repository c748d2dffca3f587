//! Loan application factory for creating submitted applications.

use crate::factory::helpers::{empty_details, next_id};
use chrono::{DateTime, Utc};
use entity::sea_orm_active_enums::{ApplicationFeeStatus, ApplicationStatus};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test loan applications with customizable fields.
///
/// Unlike the server's apply operation, the factory lets tests pick any status and
/// application date so that ordering and filtering can be exercised.
pub struct LoanApplicationFactory<'a> {
    db: &'a DatabaseConnection,
    user_email: String,
    loan_title: String,
    loan_amount: f64,
    category: String,
    status: ApplicationStatus,
    application_fee_status: ApplicationFeeStatus,
    application_date: DateTime<Utc>,
}

impl<'a> LoanApplicationFactory<'a> {
    /// Creates a new LoanApplicationFactory with default values.
    ///
    /// Defaults:
    /// - user_email: `"applicant{id}@example.com"`
    /// - loan_title: `"Loan {id}"`
    /// - loan_amount: `1000.0`
    /// - status: `Pending`, fee status: `Unpaid`
    /// - application_date: now
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            user_email: format!("applicant{}@example.com", id),
            loan_title: format!("Loan {}", id),
            loan_amount: 1000.0,
            category: "Personal".to_string(),
            status: ApplicationStatus::Pending,
            application_fee_status: ApplicationFeeStatus::Unpaid,
            application_date: Utc::now(),
        }
    }

    pub fn user_email(mut self, user_email: impl Into<String>) -> Self {
        self.user_email = user_email.into();
        self
    }

    pub fn loan_amount(mut self, loan_amount: f64) -> Self {
        self.loan_amount = loan_amount;
        self
    }

    pub fn status(mut self, status: ApplicationStatus) -> Self {
        self.status = status;
        self
    }

    pub fn application_date(mut self, application_date: DateTime<Utc>) -> Self {
        self.application_date = application_date;
        self
    }

    /// Builds and inserts the application entity into the database.
    pub async fn build(self) -> Result<entity::loan_application::Model, DbErr> {
        entity::loan_application::ActiveModel {
            user_email: ActiveValue::Set(self.user_email),
            loan_title: ActiveValue::Set(self.loan_title),
            loan_amount: ActiveValue::Set(self.loan_amount),
            category: ActiveValue::Set(self.category),
            first_name: ActiveValue::Set("Test".to_string()),
            last_name: ActiveValue::Set("Applicant".to_string()),
            status: ActiveValue::Set(self.status),
            application_fee_status: ActiveValue::Set(self.application_fee_status),
            details: ActiveValue::Set(empty_details()),
            application_date: ActiveValue::Set(self.application_date),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a pending application for the given applicant email.
pub async fn create_loan_application(
    db: &DatabaseConnection,
    user_email: impl Into<String>,
) -> Result<entity::loan_application::Model, DbErr> {
    LoanApplicationFactory::new(db)
        .user_email(user_email)
        .build()
        .await
}
