use async_trait::async_trait;
use axum::http::HeaderMap;
use entity::sea_orm_active_enums::UserRole;

use crate::server::{
    data::{loan_application::LoanApplicationRepository, user::UserRepository},
    error::{auth::AuthError, AppError},
    state::AppState,
    store::StoreHandle,
};

/// Header carrying the email of the calling user.
pub const USER_EMAIL_HEADER: &str = "x-user-email";

pub enum Permission {
    /// Caller must be an admin.
    Admin,
    /// Caller must be an admin or a manager.
    Staff,
    /// Caller must have submitted the application with this ID, or be an admin.
    ApplicationOwner(i32),
}

/// Decides whether a caller may perform an operation.
#[async_trait]
pub trait AccessPolicy: Send + Sync {
    /// # Arguments
    /// - `store` - Store handle, for policies that look the caller up
    /// - `caller` - Email from the request, if any
    /// - `permissions` - Every permission the operation requires
    ///
    /// # Returns
    /// - `Ok(())` - The operation may proceed
    /// - `Err(AppError::AuthErr)` - Caller unidentified or lacking a permission
    /// - `Err(AppError::DbErr)` - The policy could not consult the store
    async fn authorize(
        &self,
        store: &StoreHandle,
        caller: Option<&str>,
        permissions: &[Permission],
    ) -> Result<(), AppError>;
}

/// Allows every request.
pub struct OpenAccess;

#[async_trait]
impl AccessPolicy for OpenAccess {
    async fn authorize(
        &self,
        _store: &StoreHandle,
        _caller: Option<&str>,
        _permissions: &[Permission],
    ) -> Result<(), AppError> {
        Ok(())
    }
}

/// Grants permissions from the stored role of the user named in [`USER_EMAIL_HEADER`].
pub struct RoleAccess;

#[async_trait]
impl AccessPolicy for RoleAccess {
    async fn authorize(
        &self,
        store: &StoreHandle,
        caller: Option<&str>,
        permissions: &[Permission],
    ) -> Result<(), AppError> {
        if permissions.is_empty() {
            return Ok(());
        }

        let Some(email) = caller else {
            return Err(AuthError::MissingIdentity.into());
        };

        let db = store.connection().await?;

        let Some(user) = UserRepository::new(db).find_by_email(email).await? else {
            return Err(AuthError::UnknownUser(email.to_string()).into());
        };

        for permission in permissions {
            match permission {
                Permission::Admin => {
                    if user.role != UserRole::Admin {
                        return Err(AuthError::AccessDenied(
                            user.email,
                            "Operation requires the admin role".to_string(),
                        )
                        .into());
                    }
                }
                Permission::Staff => {
                    if !matches!(user.role, UserRole::Admin | UserRole::Manager) {
                        return Err(AuthError::AccessDenied(
                            user.email,
                            "Operation requires the admin or manager role".to_string(),
                        )
                        .into());
                    }
                }
                Permission::ApplicationOwner(id) => {
                    if user.role == UserRole::Admin {
                        continue;
                    }

                    // A missing application is reported by the handler as not found.
                    let application = LoanApplicationRepository::new(db).get_by_id(*id).await?;
                    if let Some(application) = application {
                        if application.user_email != user.email {
                            return Err(AuthError::AccessDenied(
                                user.email,
                                format!("Loan application {} belongs to another user", id),
                            )
                            .into());
                        }
                    }
                }
            }
        }

        Ok(())
    }
}

pub struct AuthGuard<'a> {
    state: &'a AppState,
    headers: &'a HeaderMap,
}

impl<'a> AuthGuard<'a> {
    pub fn new(state: &'a AppState, headers: &'a HeaderMap) -> Self {
        Self { state, headers }
    }

    /// Email of the calling user, if the request names one.
    pub fn caller(&self) -> Option<&'a str> {
        self.headers
            .get(USER_EMAIL_HEADER)
            .and_then(|value| value.to_str().ok())
            .map(str::trim)
            .filter(|value| !value.is_empty())
    }

    pub async fn require(&self, permissions: &[Permission]) -> Result<(), AppError> {
        self.state
            .access_policy
            .authorize(&self.state.store, self.caller(), permissions)
            .await
    }
}
