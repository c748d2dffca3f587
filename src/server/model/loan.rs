//! Loan catalog domain models and parameters.

use chrono::{DateTime, Utc};
use serde_json::{Map, Value};

use crate::{
    model::loan::{LoanDto, LoanInputDto},
    server::{
        error::AppError,
        util::{document, parse::non_empty},
    },
};

/// Catalog keys owned by the server.
const RESERVED_LOAN_KEYS: &[&str] = &["_id", "id", "created_at"];

const DESCRIPTION_KEY: &str = "description";
const INTEREST_RATE_KEY: &str = "interestRate";
const MAX_LOAN_LIMIT_KEY: &str = "maxLoanLimit";

/// Loan product offered in the catalog.
#[derive(Debug, Clone, PartialEq)]
pub struct Loan {
    pub id: i32,
    pub title: String,
    pub category: String,
    pub description: Option<String>,
    pub interest_rate: Option<f64>,
    pub max_loan_limit: Option<f64>,
    /// Remaining catalog fields (required documents, EMI plans, images, ...).
    pub details: Map<String, Value>,
    pub created_at: DateTime<Utc>,
}

impl Loan {
    pub fn into_dto(self) -> LoanDto {
        LoanDto {
            id: self.id,
            title: self.title,
            category: self.category,
            description: self.description,
            interest_rate: self.interest_rate,
            max_loan_limit: self.max_loan_limit,
            created_at: self.created_at,
            details: self.details,
        }
    }

    /// Converts an entity model to a loan domain model at the repository boundary.
    pub fn from_entity(entity: entity::loan::Model) -> Self {
        Self {
            id: entity.id,
            title: entity.title,
            category: entity.category,
            description: entity.description,
            interest_rate: entity.interest_rate,
            max_loan_limit: entity.max_loan_limit,
            details: document::details_map(entity.details),
            created_at: entity.created_at,
        }
    }
}

/// Parameters for adding a loan to the catalog.
#[derive(Debug, Clone)]
pub struct CreateLoanParam {
    pub title: String,
    pub category: String,
    pub description: Option<String>,
    pub interest_rate: Option<f64>,
    pub max_loan_limit: Option<f64>,
    pub details: Value,
}

impl CreateLoanParam {
    /// Validates a new catalog entry; `title` and `category` are required.
    pub fn from_dto(dto: LoanInputDto) -> Result<Self, AppError> {
        let title = non_empty(dto.title.or(dto.loan_title))
            .ok_or_else(|| AppError::BadRequest("Field 'title' is required".to_string()))?;
        let category = non_empty(dto.category)
            .ok_or_else(|| AppError::BadRequest("Field 'category' is required".to_string()))?;

        let mut details = dto.details;
        let description = text_or_detail(&mut details, DESCRIPTION_KEY, dto.description);
        let interest_rate = number_or_detail(&mut details, INTEREST_RATE_KEY, dto.interest_rate);
        let max_loan_limit =
            number_or_detail(&mut details, MAX_LOAN_LIMIT_KEY, dto.max_loan_limit);

        Ok(Self {
            title,
            category,
            description,
            interest_rate,
            max_loan_limit,
            details: document::into_details(details, RESERVED_LOAN_KEYS),
        })
    }
}

/// Partial update of a catalog entry; `None` leaves the stored value untouched.
#[derive(Debug, Clone, Default)]
pub struct UpdateLoanParam {
    pub title: Option<String>,
    pub category: Option<String>,
    pub description: Option<String>,
    pub interest_rate: Option<f64>,
    pub max_loan_limit: Option<f64>,
    /// Free-form fields merged key by key into the stored ones.
    pub details: Map<String, Value>,
}

impl UpdateLoanParam {
    /// Validates a patch; provided `title` and `category` must not be blank.
    pub fn from_dto(dto: LoanInputDto) -> Result<Self, AppError> {
        let title = match dto.title.or(dto.loan_title) {
            Some(title) => Some(non_empty(Some(title)).ok_or_else(|| {
                AppError::BadRequest("Field 'title' must not be empty".to_string())
            })?),
            None => None,
        };
        let category = match dto.category {
            Some(category) => Some(non_empty(Some(category)).ok_or_else(|| {
                AppError::BadRequest("Field 'category' must not be empty".to_string())
            })?),
            None => None,
        };

        let mut fields = dto.details;
        let description = text_or_detail(&mut fields, DESCRIPTION_KEY, dto.description);
        let interest_rate = number_or_detail(&mut fields, INTEREST_RATE_KEY, dto.interest_rate);
        let max_loan_limit = number_or_detail(&mut fields, MAX_LOAN_LIMIT_KEY, dto.max_loan_limit);

        let details = document::details_map(document::into_details(fields, RESERVED_LOAN_KEYS));

        Ok(Self {
            title,
            category,
            description,
            interest_rate,
            max_loan_limit,
            details,
        })
    }

    /// Applies the patch to a stored loan, returning the resulting row.
    ///
    /// A typed field lives either in its column or under its key in `details`, never
    /// both: writing one side clears the other.
    pub fn apply_to(self, mut model: entity::loan::Model) -> entity::loan::Model {
        let mut written = Vec::new();

        if let Some(title) = self.title {
            model.title = title;
        }
        if let Some(category) = self.category {
            model.category = category;
        }
        if let Some(description) = self.description {
            model.description = Some(description);
            written.push(DESCRIPTION_KEY);
        }
        if let Some(interest_rate) = self.interest_rate {
            model.interest_rate = Some(interest_rate);
            written.push(INTEREST_RATE_KEY);
        }
        if let Some(max_loan_limit) = self.max_loan_limit {
            model.max_loan_limit = Some(max_loan_limit);
            written.push(MAX_LOAN_LIMIT_KEY);
        }

        if !self.details.is_empty() {
            if self.details.contains_key(DESCRIPTION_KEY) {
                model.description = None;
            }
            if self.details.contains_key(INTEREST_RATE_KEY) {
                model.interest_rate = None;
            }
            if self.details.contains_key(MAX_LOAN_LIMIT_KEY) {
                model.max_loan_limit = None;
            }
            model.details = document::merge_details(model.details, self.details);
        }

        if !written.is_empty() {
            model.details =
                document::into_details(document::details_map(model.details), &written);
        }

        model
    }
}

/// Keeps a string value for its column; any other value stays a free-form field.
fn text_or_detail(
    details: &mut Map<String, Value>,
    key: &str,
    value: Option<Value>,
) -> Option<String> {
    match value? {
        Value::String(text) => Some(text),
        other => {
            details.insert(key.to_string(), other);
            None
        }
    }
}

/// Keeps a numeric value for its column; any other value stays a free-form field.
fn number_or_detail(
    details: &mut Map<String, Value>,
    key: &str,
    value: Option<Value>,
) -> Option<f64> {
    match value? {
        Value::Number(number) => number.as_f64(),
        other => {
            details.insert(key.to_string(), other);
            None
        }
    }
}

/// Result of a catalog update on an existing loan.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoanChange {
    Updated,
    Unchanged,
}
