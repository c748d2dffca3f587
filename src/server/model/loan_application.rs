//! Loan application domain models and parameters.

use chrono::{DateTime, Utc};
use sea_orm::ActiveEnum;
use serde_json::{Map, Value};

pub use entity::sea_orm_active_enums::{ApplicationFeeStatus, ApplicationStatus};

use crate::{
    model::loan_application::{ApplyLoanDto, LoanApplicationDto},
    server::{
        error::AppError,
        util::{
            document,
            parse::{non_empty, parse_amount},
        },
    },
};

/// Application keys the server assigns itself; caller values are discarded.
const RESERVED_APPLICATION_KEYS: &[&str] = &[
    "_id",
    "id",
    "status",
    "applicationFeeStatus",
    "application_date",
];

/// Submitted loan application.
#[derive(Debug, Clone, PartialEq)]
pub struct LoanApplication {
    pub id: i32,
    pub user_email: String,
    pub loan_title: String,
    pub loan_amount: f64,
    pub category: String,
    pub first_name: String,
    pub last_name: String,
    pub status: ApplicationStatus,
    pub application_fee_status: ApplicationFeeStatus,
    /// Remaining application fields (contact number, income, reason, ...).
    pub details: Map<String, Value>,
    pub application_date: DateTime<Utc>,
}

impl LoanApplication {
    pub fn into_dto(self) -> LoanApplicationDto {
        LoanApplicationDto {
            id: self.id,
            user_email: self.user_email,
            loan_title: self.loan_title,
            loan_amount: self.loan_amount,
            category: self.category,
            first_name: self.first_name,
            last_name: self.last_name,
            status: self.status.to_value(),
            application_fee_status: self.application_fee_status.to_value(),
            application_date: self.application_date,
            details: self.details,
        }
    }

    /// Converts an entity model to an application domain model at the repository boundary.
    pub fn from_entity(entity: entity::loan_application::Model) -> Self {
        Self {
            id: entity.id,
            user_email: entity.user_email,
            loan_title: entity.loan_title,
            loan_amount: entity.loan_amount,
            category: entity.category,
            first_name: entity.first_name,
            last_name: entity.last_name,
            status: entity.status,
            application_fee_status: entity.application_fee_status,
            details: document::details_map(entity.details),
            application_date: entity.application_date,
        }
    }
}

/// Validated application payload.
///
/// Carries no status, fee status or date: the repository assigns those.
#[derive(Debug, Clone)]
pub struct ApplyLoanParam {
    pub user_email: String,
    pub loan_title: String,
    pub loan_amount: f64,
    pub category: String,
    pub first_name: String,
    pub last_name: String,
    pub details: Value,
}

impl ApplyLoanParam {
    /// Validates an application payload.
    ///
    /// All required fields are checked before failing so that the caller sees every
    /// missing field at once.
    ///
    /// # Returns
    /// - `Ok(ApplyLoanParam)` - All required fields present, amount numeric
    /// - `Err(AppError::BadRequest)` - Missing required fields or non-numeric amount
    pub fn from_dto(dto: ApplyLoanDto) -> Result<Self, AppError> {
        let loan_title = non_empty(dto.loan_title);
        let category = non_empty(dto.category);
        let first_name = non_empty(dto.first_name);
        let last_name = non_empty(dto.last_name);
        let user_email = non_empty(dto.user_email);
        let loan_amount = dto
            .loan_amount
            .filter(|v| !v.is_null() && v.as_str().map_or(true, |s| !s.trim().is_empty()));

        let missing: Vec<&str> = [
            ("loanTitle", loan_title.is_none()),
            ("loanAmount", loan_amount.is_none()),
            ("category", category.is_none()),
            ("firstName", first_name.is_none()),
            ("lastName", last_name.is_none()),
            ("userEmail", user_email.is_none()),
        ]
        .into_iter()
        .filter_map(|(field, absent)| absent.then_some(field))
        .collect();

        match (
            loan_title,
            loan_amount,
            category,
            first_name,
            last_name,
            user_email,
        ) {
            (
                Some(loan_title),
                Some(loan_amount),
                Some(category),
                Some(first_name),
                Some(last_name),
                Some(user_email),
            ) => Ok(Self {
                user_email,
                loan_title,
                loan_amount: parse_amount("loanAmount", &loan_amount)?,
                category,
                first_name,
                last_name,
                details: document::into_details(dto.details, RESERVED_APPLICATION_KEYS),
            }),
            _ => Err(AppError::BadRequest(format!(
                "Missing required fields: {}",
                missing.join(", ")
            ))),
        }
    }
}
