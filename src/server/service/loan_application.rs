//! Loan application service.
//!
//! Submissions always start out pending and unpaid; no operation here moves an
//! application to another status.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::loan_application::LoanApplicationRepository,
    error::AppError,
    model::loan_application::{ApplyLoanParam, LoanApplication},
};

pub struct LoanApplicationService<'a> {
    pub db: &'a DatabaseConnection,
}

impl<'a> LoanApplicationService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Submits an application, returning its ID.
    pub async fn apply(&self, param: ApplyLoanParam) -> Result<i32, AppError> {
        let application_repo = LoanApplicationRepository::new(self.db);
        let user_email = param.user_email.clone();
        let id = application_repo.create(param).await?;

        tracing::info!("User {} submitted loan application {}", user_email, id);

        Ok(id)
    }

    /// Every application, most recent first.
    pub async fn get_all(&self) -> Result<Vec<LoanApplication>, AppError> {
        let application_repo = LoanApplicationRepository::new(self.db);
        Ok(application_repo.get_all().await?)
    }

    /// Applications submitted by `email`.
    pub async fn get_by_user_email(&self, email: &str) -> Result<Vec<LoanApplication>, AppError> {
        let application_repo = LoanApplicationRepository::new(self.db);
        Ok(application_repo.get_by_user_email(email).await?)
    }

    /// Applications awaiting review.
    pub async fn get_pending(&self) -> Result<Vec<LoanApplication>, AppError> {
        let application_repo = LoanApplicationRepository::new(self.db);
        Ok(application_repo.get_pending().await?)
    }

    /// Cancels (hard-deletes) an application.
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of deleted applications (always 1)
    /// - `Err(AppError::NotFound)` - No application has that ID
    /// - `Err(AppError::DbErr)` - Database error during delete
    pub async fn cancel(&self, id: i32) -> Result<u64, AppError> {
        let application_repo = LoanApplicationRepository::new(self.db);

        match application_repo.delete(id).await? {
            0 => Err(AppError::NotFound(format!(
                "Loan application {} not found",
                id
            ))),
            deleted => {
                tracing::info!("Cancelled loan application {}", id);
                Ok(deleted)
            }
        }
    }
}
