//! Loan catalog service.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::loan::LoanRepository,
    error::AppError,
    model::loan::{CreateLoanParam, Loan, LoanChange, UpdateLoanParam},
};

pub struct LoanService<'a> {
    pub db: &'a DatabaseConnection,
}

impl<'a> LoanService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Lists the catalog, optionally filtered by a search term.
    ///
    /// A blank term is treated as no term. When `search_enabled` is false the term is
    /// ignored and the whole catalog is returned.
    pub async fn search(
        &self,
        term: Option<&str>,
        search_enabled: bool,
    ) -> Result<Vec<Loan>, AppError> {
        let term = term
            .map(str::trim)
            .filter(|term| search_enabled && !term.is_empty());

        let loan_repo = LoanRepository::new(self.db);
        let loans = loan_repo.search(term).await?;
        Ok(loans)
    }

    /// Retrieves a loan by ID.
    ///
    /// # Returns
    /// - `Ok(Loan)` - Loan found
    /// - `Err(AppError::NotFound)` - No loan has that ID
    /// - `Err(AppError::DbErr)` - Database error during query
    pub async fn get_by_id(&self, id: i32) -> Result<Loan, AppError> {
        let loan_repo = LoanRepository::new(self.db);

        loan_repo
            .get_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Loan {} not found", id)))
    }

    /// Adds a loan to the catalog, returning its ID.
    pub async fn create(&self, param: CreateLoanParam) -> Result<i32, AppError> {
        let loan_repo = LoanRepository::new(self.db);
        let id = loan_repo.create(param).await?;

        tracing::info!("Created loan {}", id);

        Ok(id)
    }

    /// Applies a partial update to a loan.
    ///
    /// # Returns
    /// - `Ok(LoanChange)` - Whether any stored value changed
    /// - `Err(AppError::NotFound)` - No loan has that ID
    /// - `Err(AppError::DbErr)` - Database error during update
    pub async fn update(&self, id: i32, param: UpdateLoanParam) -> Result<LoanChange, AppError> {
        let loan_repo = LoanRepository::new(self.db);

        loan_repo
            .update(id, param)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Loan {} not found", id)))
    }

    /// Removes a loan from the catalog.
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of deleted loans (always 1)
    /// - `Err(AppError::NotFound)` - No loan has that ID
    /// - `Err(AppError::DbErr)` - Database error during delete
    pub async fn delete(&self, id: i32) -> Result<u64, AppError> {
        let loan_repo = LoanRepository::new(self.db);

        match loan_repo.delete(id).await? {
            0 => Err(AppError::NotFound(format!("Loan {} not found", id))),
            deleted => {
                tracing::info!("Deleted loan {}", id);
                Ok(deleted)
            }
        }
    }
}
