use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use serde_json::{Map, Value};

/// Body of the loan create and update calls.
///
/// On update every field is optional and only provided fields are written. `title`
/// takes precedence over `loanTitle` when both are sent. Values of the optional
/// typed fields are kept as sent and sorted into columns by the server.
#[derive(Deserialize, Debug, Clone, Default, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct LoanInputDto {
    pub title: Option<String>,
    pub loan_title: Option<String>,
    pub category: Option<String>,
    pub description: Option<Value>,
    pub interest_rate: Option<Value>,
    pub max_loan_limit: Option<Value>,
    #[serde(flatten)]
    pub details: Map<String, Value>,
}

#[derive(Serialize, Deserialize, Debug, Clone, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct LoanDto {
    #[serde(rename = "_id")]
    pub id: i32,
    pub title: String,
    pub category: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub interest_rate: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_loan_limit: Option<f64>,
    #[serde(rename = "created_at")]
    pub created_at: DateTime<Utc>,
    #[serde(flatten)]
    pub details: Map<String, Value>,
}

/// Query string of the catalog listing.
#[derive(Deserialize, Debug, Clone, Default)]
pub struct LoanSearchQuery {
    pub search: Option<String>,
}
