//! User service for business logic.
//!
//! This module provides the `UserService` for managing user-related business logic.
//! It orchestrates the login upsert, lookups by email and role changes while working
//! with domain models rather than DTOs.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::user::UserRepository,
    error::AppError,
    model::user::{RoleChange, SetRoleParam, UpsertUserOutcome, UpsertUserParam, User, UserRole},
};

/// Service providing business logic for user management.
pub struct UserService<'a> {
    pub db: &'a DatabaseConnection,
}

impl<'a> UserService<'a> {
    /// Creates a new UserService instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `UserService` - New service instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Records a login, creating the user on first sight.
    ///
    /// # Arguments
    /// - `param` - Validated login payload
    /// - `default_role` - Configured role for users created without one
    ///
    /// # Returns
    /// - `Ok(UpsertUserOutcome)` - Whether the user was inserted or matched
    /// - `Err(AppError::DbErr)` - Database error during upsert
    pub async fn upsert(
        &self,
        param: UpsertUserParam,
        default_role: UserRole,
    ) -> Result<UpsertUserOutcome, AppError> {
        let user_repo = UserRepository::new(self.db);
        let outcome = user_repo.upsert(param, default_role).await?;
        Ok(outcome)
    }

    /// Retrieves a user by email.
    ///
    /// # Returns
    /// - `Ok(User)` - User found
    /// - `Err(AppError::NotFound)` - No user has that email
    /// - `Err(AppError::DbErr)` - Database error during query
    pub async fn get_by_email(&self, email: &str) -> Result<User, AppError> {
        let user_repo = UserRepository::new(self.db);

        user_repo
            .find_by_email(email)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("User {} not found", email)))
    }

    /// Changes a user's role.
    ///
    /// # Returns
    /// - `Ok(RoleChange)` - Whether the stored role actually changed
    /// - `Err(AppError::NotFound)` - No user has that email
    /// - `Err(AppError::DbErr)` - Database error during update
    pub async fn set_role(&self, param: SetRoleParam) -> Result<RoleChange, AppError> {
        let user_repo = UserRepository::new(self.db);

        let change = user_repo
            .set_role(&param.email, param.role)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("User {} not found", param.email)))?;

        if change == RoleChange::Updated {
            tracing::info!("Changed role of {} to {:?}", param.email, param.role);
        }

        Ok(change)
    }

    /// Retrieves every user.
    pub async fn get_all(&self) -> Result<Vec<User>, AppError> {
        let user_repo = UserRepository::new(self.db);
        let users = user_repo.get_all().await?;
        Ok(users)
    }
}
