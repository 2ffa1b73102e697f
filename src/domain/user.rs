//! User domain entity and related types.

use chrono::{DateTime, Utc};
use serde::Serialize;
use utoipa::ToSchema;

/// User domain entity
#[derive(Debug, Clone, Serialize)]
pub struct User {
    pub id: i32,
    /// First name
    pub name: String,
    /// Last name
    pub surname: String,
    /// `name surname`, fixed at creation
    pub full_name: String,
    pub email: String,
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    /// Soft delete timestamp (None = active, Some = deleted)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deleted_at: Option<DateTime<Utc>>,
}

/// Derive the display name stored alongside first and last name.
pub fn full_name(first_name: &str, last_name: &str) -> String {
    format!("{} {}", first_name, last_name)
}

/// Data needed to create a user. The password is still plaintext here.
#[derive(Clone)]
pub struct CreateUser {
    pub email: String,
    pub password: String,
    pub first_name: String,
    pub last_name: String,
}

impl std::fmt::Debug for CreateUser {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CreateUser")
            .field("email", &self.email)
            .field("password", &"[REDACTED]")
            .field("first_name", &self.first_name)
            .field("last_name", &self.last_name)
            .finish()
    }
}

/// Row to insert once the password has been hashed.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub name: String,
    pub surname: String,
    pub full_name: String,
    pub email: String,
    pub password_hash: String,
}

impl NewUser {
    pub fn new(first_name: String, last_name: String, email: String, password_hash: String) -> Self {
        Self {
            full_name: full_name(&first_name, &last_name),
            name: first_name,
            surname: last_name,
            email,
            password_hash,
        }
    }
}

/// User response (safe to return to client)
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    /// Unique user identifier
    #[schema(example = 1)]
    pub id: i32,
    /// First name
    #[schema(example = "Vincent")]
    pub name: String,
    /// Last name
    #[schema(example = "CAUSSE")]
    pub surname: String,
    /// First and last name joined at creation
    #[schema(example = "Vincent CAUSSE")]
    pub full_name: String,
    /// User email address
    #[schema(example = "vincent.causse@xanadu.com")]
    pub email: String,
    /// Account creation timestamp
    pub created_at: DateTime<Utc>,
    /// Last modification timestamp
    pub updated_at: DateTime<Utc>,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            name: user.name,
            surname: user.surname,
            full_name: user.full_name,
            email: user.email,
            created_at: user.created_at,
            updated_at: user.updated_at,
        }
    }
}

/// Subset of the user returned after a successful login
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UserSummary {
    #[schema(example = 1)]
    pub id: i32,
    #[schema(example = "vincent.causse@xanadu.com")]
    pub email: String,
    #[schema(example = "Vincent")]
    pub name: String,
    #[schema(example = "CAUSSE")]
    pub surname: String,
    #[schema(example = "Vincent CAUSSE")]
    pub full_name: String,
}

impl From<User> for UserSummary {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            email: user.email,
            name: user.name,
            surname: user.surname,
            full_name: user.full_name,
        }
    }
}
