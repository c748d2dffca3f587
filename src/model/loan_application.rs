use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use serde_json::{Map, Value};

/// Body of the apply call.
///
/// `loan_amount` is kept as raw JSON so that both numbers and numeric strings are
/// accepted. Fields not listed here are stored with the application.
#[derive(Deserialize, Debug, Clone, Default, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ApplyLoanDto {
    pub loan_title: Option<String>,
    pub loan_amount: Option<Value>,
    pub category: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub user_email: Option<String>,
    #[serde(flatten)]
    pub details: Map<String, Value>,
}

#[derive(Serialize, Deserialize, Debug, Clone, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct LoanApplicationDto {
    #[serde(rename = "_id")]
    pub id: i32,
    pub user_email: String,
    pub loan_title: String,
    pub loan_amount: f64,
    pub category: String,
    pub first_name: String,
    pub last_name: String,
    pub status: String,
    pub application_fee_status: String,
    #[serde(rename = "application_date")]
    pub application_date: DateTime<Utc>,
    #[serde(flatten)]
    pub details: Map<String, Value>,
}
