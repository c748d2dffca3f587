//! User domain models and parameters.
//!
//! Provides the domain model for marketplace users keyed by email, the role enum shared
//! with the store, and parameter types for the login upsert and role update operations.

use chrono::{DateTime, Utc};
use sea_orm::ActiveEnum;
use serde_json::{Map, Value};

pub use entity::sea_orm_active_enums::UserRole;

use crate::{
    model::user::{SetRoleDto, UpsertUserDto, UserDto, UserRoleDto},
    server::{
        error::AppError,
        util::{document, parse::non_empty},
    },
};

/// Profile keys owned by the server and never taken from the login payload.
const RESERVED_PROFILE_KEYS: &[&str] = &["_id", "id", "created_at", "last_loggedIn"];

/// Parses a role from its stored string form.
///
/// # Returns
/// - `Some(UserRole)` - The value names one of the known roles
/// - `None` - Unknown role name
pub fn parse_role(value: &str) -> Option<UserRole> {
    UserRole::try_from_value(&value.to_string()).ok()
}

/// Returns the stored string form of a role.
pub fn role_name(role: UserRole) -> String {
    role.to_value()
}

/// Whether the role can be granted through the role update operation.
///
/// `customer` only exists as a login default and cannot be assigned afterwards.
pub fn is_assignable(role: UserRole) -> bool {
    matches!(
        role,
        UserRole::Borrower | UserRole::Manager | UserRole::Admin
    )
}

/// Marketplace user keyed by email.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    /// Store-assigned identifier.
    pub id: i32,
    /// Unique email of the user.
    pub email: String,
    /// Current role.
    pub role: UserRole,
    /// Free-form profile fields sent at first login (name, photo, ...).
    pub profile: Map<String, Value>,
    /// When the user was first seen.
    pub created_at: DateTime<Utc>,
    /// When the user last called the login upsert.
    pub last_logged_in: DateTime<Utc>,
}

impl User {
    /// Converts the user domain model to a DTO for API responses.
    pub fn into_dto(self) -> UserDto {
        UserDto {
            id: self.id,
            email: self.email,
            role: role_name(self.role),
            created_at: self.created_at,
            last_logged_in: self.last_logged_in,
            profile: self.profile,
        }
    }

    /// Converts the user to its role-only projection.
    pub fn into_role_dto(self) -> UserRoleDto {
        UserRoleDto {
            role: role_name(self.role),
        }
    }

    /// Converts an entity model to a user domain model at the repository boundary.
    pub fn from_entity(entity: entity::user::Model) -> Self {
        Self {
            id: entity.id,
            email: entity.email,
            role: entity.role,
            profile: document::details_map(entity.profile),
            created_at: entity.created_at,
            last_logged_in: entity.last_logged_in,
        }
    }
}

/// Parameters for upserting a user on login.
#[derive(Debug, Clone)]
pub struct UpsertUserParam {
    /// Email identifying the user.
    pub email: String,
    /// Role requested by the caller; only applied when the user is created.
    pub role: Option<UserRole>,
    /// Profile fields stored when the user is created.
    pub profile: Value,
}

impl UpsertUserParam {
    /// Validates the login payload.
    ///
    /// # Returns
    /// - `Ok(UpsertUserParam)` - Payload has a non-empty email and a known role, if any
    /// - `Err(AppError::BadRequest)` - Email missing or role unknown
    pub fn from_dto(dto: UpsertUserDto) -> Result<Self, AppError> {
        let email = non_empty(dto.email)
            .ok_or_else(|| AppError::BadRequest("Field 'email' is required".to_string()))?;

        let role = match non_empty(dto.role) {
            Some(role) => Some(
                parse_role(&role)
                    .ok_or_else(|| AppError::BadRequest(format!("Invalid role '{}'", role)))?,
            ),
            None => None,
        };

        Ok(Self {
            email,
            role,
            profile: document::into_details(dto.profile, RESERVED_PROFILE_KEYS),
        })
    }
}

/// Result of the login upsert.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpsertUserOutcome {
    /// No user had the email; a new one was inserted.
    Inserted { id: i32 },
    /// A user with the email existed; only its last login time moved.
    Matched { modified: bool },
}

/// Parameters for changing a user's role.
#[derive(Debug, Clone)]
pub struct SetRoleParam {
    /// Email of the user to modify.
    pub email: String,
    /// Role to assign.
    pub role: UserRole,
}

impl SetRoleParam {
    /// Validates the requested role against the assignable set.
    ///
    /// # Returns
    /// - `Ok(SetRoleParam)` - Role is one of borrower, manager, admin
    /// - `Err(AppError::BadRequest)` - Role missing or outside the assignable set
    pub fn from_dto(email: String, dto: SetRoleDto) -> Result<Self, AppError> {
        let role = non_empty(dto.role)
            .ok_or_else(|| AppError::BadRequest("Field 'role' is required".to_string()))?;

        match parse_role(&role) {
            Some(parsed) if is_assignable(parsed) => Ok(Self {
                email,
                role: parsed,
            }),
            _ => Err(AppError::BadRequest(format!(
                "Invalid role '{}', expected one of borrower, manager, admin",
                role
            ))),
        }
    }
}

/// Result of a role update on an existing user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoleChange {
    /// The stored role was different and has been replaced.
    Updated,
    /// The stored role already equalled the requested one.
    Unchanged,
}
