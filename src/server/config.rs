use entity::sea_orm_active_enums::UserRole;

use crate::server::{
    error::{config::ConfigError, AppError},
    gateway::stripe::DEFAULT_STRIPE_API_URL,
};

const DEFAULT_PORT: u16 = 3000;

/// Which access policy guards protected endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccessPolicyKind {
    /// Every request is allowed.
    Open,
    /// Permissions come from the stored role of the caller named in `X-User-Email`.
    Role,
}

pub struct Config {
    pub database_url: String,

    pub stripe_secret_key: Option<String>,
    pub stripe_api_url: String,

    pub port: u16,

    pub default_user_role: UserRole,
    pub loan_search_enabled: bool,
    pub access_policy: AccessPolicyKind,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Builds the configuration from any variable source.
    ///
    /// Empty values count as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, AppError> {
        let var = |name: &str| lookup(name).filter(|value| !value.trim().is_empty());

        let database_url = var("DATABASE_URL")
            .ok_or_else(|| ConfigError::MissingEnvVar("DATABASE_URL".to_string()))?;

        let port = match var("PORT") {
            Some(value) => value.trim().parse::<u16>().map_err(|_| ConfigError::InvalidEnvVar {
                name: "PORT".to_string(),
                value,
                reason: "expected a port number".to_string(),
            })?,
            None => DEFAULT_PORT,
        };

        let default_user_role = match var("DEFAULT_USER_ROLE") {
            Some(value) => match value.trim() {
                "borrower" => UserRole::Borrower,
                "customer" => UserRole::Customer,
                _ => {
                    return Err(ConfigError::InvalidEnvVar {
                        name: "DEFAULT_USER_ROLE".to_string(),
                        value,
                        reason: "expected 'borrower' or 'customer'".to_string(),
                    }
                    .into())
                }
            },
            None => UserRole::Borrower,
        };

        let loan_search_enabled = match var("LOAN_SEARCH_ENABLED") {
            Some(value) => match value.trim() {
                "true" | "1" => true,
                "false" | "0" => false,
                _ => {
                    return Err(ConfigError::InvalidEnvVar {
                        name: "LOAN_SEARCH_ENABLED".to_string(),
                        value,
                        reason: "expected 'true' or 'false'".to_string(),
                    }
                    .into())
                }
            },
            None => true,
        };

        let access_policy = match var("ACCESS_POLICY") {
            Some(value) => match value.trim() {
                "open" => AccessPolicyKind::Open,
                "role" => AccessPolicyKind::Role,
                _ => {
                    return Err(ConfigError::InvalidEnvVar {
                        name: "ACCESS_POLICY".to_string(),
                        value,
                        reason: "expected 'open' or 'role'".to_string(),
                    }
                    .into())
                }
            },
            None => AccessPolicyKind::Open,
        };

        Ok(Self {
            database_url,
            stripe_secret_key: var("STRIPE_SECRET_KEY"),
            stripe_api_url: var("STRIPE_API_URL")
                .unwrap_or_else(|| DEFAULT_STRIPE_API_URL.to_string()),
            port,
            default_user_role,
            loan_search_enabled,
            access_policy,
        })
    }
}
