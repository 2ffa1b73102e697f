//! User repository implementation with soft delete support.

use async_trait::async_trait;
use sea_orm::{ColumnTrait, Condition, DatabaseConnection, QueryFilter, Select, Set};

use super::base::{ReadRepository, WriteRepository};
use super::entities::user::{self, ActiveModel, Entity as UserEntity};
use crate::domain::{NewUser, User};
use crate::errors::{AppError, AppResult};

#[cfg(test)]
use mockall::automock;

/// User repository trait for dependency injection.
///
/// All query methods exclude soft-deleted records.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Find active user by ID
    async fn find_by_id(&self, id: i32) -> AppResult<Option<User>>;

    /// Find the first active user with this email address
    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>>;

    /// Insert a new user. A taken email yields `AppError::Conflict("email")`.
    async fn create(&self, user: NewUser) -> AppResult<User>;

    /// List all active users
    async fn list(&self) -> AppResult<Vec<User>>;
}

/// Concrete implementation of UserRepository over a SeaORM connection
pub struct UserStore {
    db: DatabaseConnection,
}

impl UserStore {
    /// Create new repository instance
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

impl ReadRepository<UserEntity> for UserStore {
    fn db(&self) -> &DatabaseConnection {
        &self.db
    }

    fn scope(&self, query: Select<UserEntity>) -> Select<UserEntity> {
        query.filter(user::Column::DeletedAt.is_null())
    }
}

impl WriteRepository<UserEntity, ActiveModel> for UserStore {
    fn db(&self) -> &DatabaseConnection {
        &self.db
    }
}

#[async_trait]
impl UserRepository for UserStore {
    async fn find_by_id(&self, id: i32) -> AppResult<Option<User>> {
        let result = ReadRepository::<UserEntity>::find_by_id(self, id).await?;
        Ok(result.map(User::from))
    }

    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>> {
        let condition = Condition::all().add(user::Column::Email.eq(email));
        let result = ReadRepository::<UserEntity>::find_one_by(self, condition).await?;
        Ok(result.map(User::from))
    }

    async fn create(&self, user: NewUser) -> AppResult<User> {
        let now = chrono::Utc::now();
        let active_model = ActiveModel {
            name: Set(user.name),
            surname: Set(Some(user.surname)),
            full_name: Set(Some(user.full_name)),
            email: Set(user.email),
            password_hash: Set(user.password_hash),
            created_at: Set(now),
            updated_at: Set(now),
            deleted_at: Set(None),
            ..Default::default()
        };

        let model = WriteRepository::insert(self, active_model)
            .await
            .map_err(|e| AppError::from_insert(e, "email"))?;

        Ok(User::from(model))
    }

    async fn list(&self) -> AppResult<Vec<User>> {
        let models = ReadRepository::<UserEntity>::find_all(self).await?;
        Ok(models.into_iter().map(User::from).collect())
    }
}
