//! User factory for creating test user entities.

use crate::factory::helpers::{empty_details, next_id};
use chrono::Utc;
use entity::sea_orm_active_enums::UserRole;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test users with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::user::UserFactory;
///
/// let user = UserFactory::new(&db)
///     .email("admin@example.com")
///     .role(UserRole::Admin)
///     .build()
///     .await?;
/// ```
pub struct UserFactory<'a> {
    db: &'a DatabaseConnection,
    email: String,
    role: UserRole,
    profile: serde_json::Value,
}

impl<'a> UserFactory<'a> {
    /// Creates a new UserFactory with default values.
    ///
    /// Defaults:
    /// - email: `"user{id}@example.com"` where id is auto-incremented
    /// - role: `UserRole::Borrower`
    /// - profile: empty object
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            email: format!("user{}@example.com", id),
            role: UserRole::Borrower,
            profile: empty_details(),
        }
    }

    /// Sets the email for the user.
    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.email = email.into();
        self
    }

    /// Sets the role for the user.
    pub fn role(mut self, role: UserRole) -> Self {
        self.role = role;
        self
    }

    /// Sets the free-form profile document for the user.
    pub fn profile(mut self, profile: serde_json::Value) -> Self {
        self.profile = profile;
        self
    }

    /// Builds and inserts the user entity into the database.
    ///
    /// Both `created_at` and `last_logged_in` are set to the current time.
    ///
    /// # Returns
    /// - `Ok(entity::user::Model)` - Created user entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::user::Model, DbErr> {
        let now = Utc::now();
        entity::user::ActiveModel {
            email: ActiveValue::Set(self.email),
            role: ActiveValue::Set(self.role),
            profile: ActiveValue::Set(self.profile),
            created_at: ActiveValue::Set(now),
            last_logged_in: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a user with default values.
///
/// Shorthand for `UserFactory::new(db).build().await`.
pub async fn create_user(db: &DatabaseConnection) -> Result<entity::user::Model, DbErr> {
    UserFactory::new(db).build().await
}

/// Creates a user with a specific email and role.
pub async fn create_user_with_role(
    db: &DatabaseConnection,
    email: impl Into<String>,
    role: UserRole,
) -> Result<entity::user::Model, DbErr> {
    UserFactory::new(db).email(email).role(role).build().await
}
