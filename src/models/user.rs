//! User model and related types

use serde::{Deserialize, Serialize};
use serde_json::Value;
use utoipa::ToSchema;

/// Registered user. Credentials are kept and echoed as submitted, in plain text
/// and whatever their JSON type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct User {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Option<Object>)]
    pub username: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Option<Object>)]
    pub password: Option<Value>,
}

impl User {
    /// Exact match on both fields; an absent field only matches an absent field
    pub fn matches(&self, credentials: &Credentials) -> bool {
        self.username == credentials.username && self.password == credentials.password
    }
}

/// Register and login request body
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct Credentials {
    #[serde(default)]
    #[schema(value_type = Option<Object>)]
    pub username: Option<Value>,
    #[serde(default)]
    #[schema(value_type = Option<Object>)]
    pub password: Option<Value>,
}

impl From<Credentials> for User {
    fn from(c: Credentials) -> Self {
        Self {
            username: c.username,
            password: c.password,
        }
    }
}

/// Register / login response
#[derive(Debug, Serialize, ToSchema)]
pub struct UserResponse {
    pub message: String,
    pub user: User,
}
