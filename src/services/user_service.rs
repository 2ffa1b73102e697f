//! User service - Read access to user records.

use async_trait::async_trait;
use std::sync::Arc;

use crate::domain::User;
use crate::errors::{AppResult, OptionExt};
use crate::infra::UserRepository;

/// User service trait for dependency injection.
#[async_trait]
pub trait UserService: Send + Sync {
    /// Get active user by ID
    async fn get_user(&self, id: i32) -> AppResult<User>;

    /// List all active users
    async fn list_users(&self) -> AppResult<Vec<User>>;
}

/// Concrete implementation of UserService.
pub struct UserManager {
    users: Arc<dyn UserRepository>,
}

impl UserManager {
    /// Create new user service instance
    pub fn new(users: Arc<dyn UserRepository>) -> Self {
        Self { users }
    }
}

#[async_trait]
impl UserService for UserManager {
    async fn get_user(&self, id: i32) -> AppResult<User> {
        self.users.find_by_id(id).await?.ok_or_not_found()
    }

    async fn list_users(&self) -> AppResult<Vec<User>> {
        self.users.list().await
    }
}
