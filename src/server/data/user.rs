//! User data repository for database operations.
//!
//! This module provides the `UserRepository` for managing user records in the database.
//! It handles the login upsert, lookups by email, role changes and the unfiltered listing
//! with conversion between entity models and domain models at the infrastructure boundary.

use crate::server::model::user::{
    RoleChange, UpsertUserOutcome, UpsertUserParam, User, UserRole,
};
use chrono::Utc;
use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr,
    EntityTrait, QueryFilter, QueryOrder, SqlErr,
};

/// Repository providing database operations for user management.
pub struct UserRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserRepository<'a> {
    /// Creates a new UserRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `UserRepository` - New repository instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Upserts a user on login, keyed by email.
    ///
    /// When a user with the email exists, only `last_logged_in` is advanced; role and
    /// profile stay as they were at creation. Otherwise a user is inserted with
    /// `param.role` or `default_role`, and both timestamps set to now. A concurrent
    /// insert of the same email trips the unique index and falls back to the update.
    ///
    /// # Arguments
    /// - `param` - Validated login payload
    /// - `default_role` - Role assigned when the payload carries none
    ///
    /// # Returns
    /// - `Ok(UpsertUserOutcome::Inserted)` - A new user was created
    /// - `Ok(UpsertUserOutcome::Matched)` - An existing user was touched
    /// - `Err(DbErr)` - Database error during lookup, insert or update
    pub async fn upsert(
        &self,
        param: UpsertUserParam,
        default_role: UserRole,
    ) -> Result<UpsertUserOutcome, DbErr> {
        if self.find_by_email(&param.email).await?.is_some() {
            tracing::debug!("User {} already exists, updating last login", param.email);
            return self.touch_last_login(&param.email).await;
        }

        let now = Utc::now();
        let insert = entity::prelude::User::insert(entity::user::ActiveModel {
            email: ActiveValue::Set(param.email.clone()),
            role: ActiveValue::Set(param.role.unwrap_or(default_role)),
            profile: ActiveValue::Set(param.profile),
            created_at: ActiveValue::Set(now),
            last_logged_in: ActiveValue::Set(now),
            ..Default::default()
        })
        .exec(self.db)
        .await;

        match insert {
            Ok(result) => {
                tracing::debug!("Saved new user {}", param.email);
                Ok(UpsertUserOutcome::Inserted {
                    id: result.last_insert_id,
                })
            }
            Err(err) if matches!(err.sql_err(), Some(SqlErr::UniqueConstraintViolation(_))) => {
                tracing::debug!("User {} was created concurrently, updating last login", param.email);
                self.touch_last_login(&param.email).await
            }
            Err(err) => Err(err),
        }
    }

    /// Advances `last_logged_in` for the user with the given email.
    async fn touch_last_login(&self, email: &str) -> Result<UpsertUserOutcome, DbErr> {
        let result = entity::prelude::User::update_many()
            .filter(entity::user::Column::Email.eq(email))
            .col_expr(
                entity::user::Column::LastLoggedIn,
                Expr::value(Utc::now()),
            )
            .exec(self.db)
            .await?;

        Ok(UpsertUserOutcome::Matched {
            modified: result.rows_affected > 0,
        })
    }

    /// Finds a user by email.
    ///
    /// # Returns
    /// - `Ok(Some(User))` - User found
    /// - `Ok(None)` - No user has that email
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_email(&self, email: &str) -> Result<Option<User>, DbErr> {
        let entity = entity::prelude::User::find()
            .filter(entity::user::Column::Email.eq(email))
            .one(self.db)
            .await?;

        Ok(entity.map(User::from_entity))
    }

    /// Sets the role of the user with the given email.
    ///
    /// # Returns
    /// - `Ok(Some(RoleChange::Updated))` - Role replaced
    /// - `Ok(Some(RoleChange::Unchanged))` - User already had the role; nothing written
    /// - `Ok(None)` - No user has that email
    /// - `Err(DbErr)` - Database error during lookup or update
    pub async fn set_role(&self, email: &str, role: UserRole) -> Result<Option<RoleChange>, DbErr> {
        let Some(user) = entity::prelude::User::find()
            .filter(entity::user::Column::Email.eq(email))
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        if user.role == role {
            return Ok(Some(RoleChange::Unchanged));
        }

        let mut active: entity::user::ActiveModel = user.into();
        active.role = ActiveValue::Set(role);
        active.update(self.db).await?;

        Ok(Some(RoleChange::Updated))
    }

    /// Gets every user, unfiltered and unpaginated, in insertion order.
    pub async fn get_all(&self) -> Result<Vec<User>, DbErr> {
        let entities = entity::prelude::User::find()
            .order_by_asc(entity::user::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(User::from_entity).collect())
    }
}
