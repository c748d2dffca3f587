use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use serde_json::{Map, Value};

/// Body of the login upsert call.
///
/// Any field besides `email` and `role` is kept as part of the user's profile.
#[derive(Deserialize, Debug, Clone, Default, ToSchema)]
pub struct UpsertUserDto {
    pub email: Option<String>,
    pub role: Option<String>,
    #[serde(flatten)]
    pub profile: Map<String, Value>,
}

#[derive(Serialize, Deserialize, Debug, Clone, ToSchema)]
pub struct UserDto {
    #[serde(rename = "_id")]
    pub id: i32,
    pub email: String,
    pub role: String,
    pub created_at: DateTime<Utc>,
    #[serde(rename = "last_loggedIn")]
    pub last_logged_in: DateTime<Utc>,
    #[serde(flatten)]
    pub profile: Map<String, Value>,
}

/// Role-only projection of a user.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
pub struct UserRoleDto {
    pub role: String,
}

/// Body of the role update call.
#[derive(Deserialize, Debug, Clone, Default, ToSchema)]
pub struct SetRoleDto {
    pub role: Option<String>,
}
