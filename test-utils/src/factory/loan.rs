//! Loan factory for creating catalog entries.

use crate::factory::helpers::{empty_details, next_id};
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test loan products with customizable fields.
pub struct LoanFactory<'a> {
    db: &'a DatabaseConnection,
    title: String,
    category: String,
    description: Option<String>,
    interest_rate: Option<f64>,
    max_loan_limit: Option<f64>,
    details: serde_json::Value,
}

impl<'a> LoanFactory<'a> {
    /// Creates a new LoanFactory with default values.
    ///
    /// Defaults:
    /// - title: `"Loan {id}"`
    /// - category: `"Personal"`
    /// - interest_rate: `5.5`
    /// - max_loan_limit: `10000.0`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            title: format!("Loan {}", id),
            category: "Personal".to_string(),
            description: None,
            interest_rate: Some(5.5),
            max_loan_limit: Some(10000.0),
            details: empty_details(),
        }
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn details(mut self, details: serde_json::Value) -> Self {
        self.details = details;
        self
    }

    /// Builds and inserts the loan entity into the database.
    pub async fn build(self) -> Result<entity::loan::Model, DbErr> {
        entity::loan::ActiveModel {
            title_search: ActiveValue::Set(self.title.to_lowercase()),
            title: ActiveValue::Set(self.title),
            category_search: ActiveValue::Set(self.category.to_lowercase()),
            category: ActiveValue::Set(self.category),
            description: ActiveValue::Set(self.description),
            interest_rate: ActiveValue::Set(self.interest_rate),
            max_loan_limit: ActiveValue::Set(self.max_loan_limit),
            details: ActiveValue::Set(self.details),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a loan with default values.
pub async fn create_loan(db: &DatabaseConnection) -> Result<entity::loan::Model, DbErr> {
    LoanFactory::new(db).build().await
}

/// Creates a loan with a specific title and category.
pub async fn create_loan_with_title(
    db: &DatabaseConnection,
    title: impl Into<String>,
    category: impl Into<String>,
) -> Result<entity::loan::Model, DbErr> {
    LoanFactory::new(db)
        .title(title)
        .category(category)
        .build()
        .await
}
