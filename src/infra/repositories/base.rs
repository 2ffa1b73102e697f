//! Base repository traits.
//!
//! Generic create / find-by-id / find-by-predicate operations over any SeaORM
//! entity. Domain repositories compose these and translate `DbErr` into
//! `AppError` at their own boundary.

use async_trait::async_trait;
use sea_orm::{
    ActiveModelBehavior, ActiveModelTrait, Condition, DatabaseConnection, DbErr, EntityTrait,
    IntoActiveModel, PrimaryKeyTrait, QueryFilter, Select,
};

/// Read operations (Query)
#[async_trait]
pub trait ReadRepository<E>: Send + Sync
where
    E: EntityTrait,
    E::Model: Send + Sync,
{
    /// Get database connection reference
    fn db(&self) -> &DatabaseConnection;

    /// Restrict every query issued by this repository (e.g. hide soft-deleted rows)
    fn scope(&self, query: Select<E>) -> Select<E> {
        query
    }

    /// Find entity by primary key
    async fn find_by_id(
        &self,
        id: <E::PrimaryKey as PrimaryKeyTrait>::ValueType,
    ) -> Result<Option<E::Model>, DbErr>
    where
        <E::PrimaryKey as PrimaryKeyTrait>::ValueType: Send,
    {
        self.scope(E::find_by_id(id)).one(self.db()).await
    }

    /// Find the first entity matching a condition
    async fn find_one_by(&self, condition: Condition) -> Result<Option<E::Model>, DbErr> {
        self.scope(E::find()).filter(condition).one(self.db()).await
    }

    /// Find all entities
    async fn find_all(&self) -> Result<Vec<E::Model>, DbErr> {
        self.scope(E::find()).all(self.db()).await
    }
}

/// Write operations (Command)
#[async_trait]
pub trait WriteRepository<E, A>: Send + Sync
where
    E: EntityTrait,
    E::Model: Send + Sync + IntoActiveModel<A>,
    A: ActiveModelTrait<Entity = E> + ActiveModelBehavior + Send + 'static,
{
    /// Get database connection reference
    fn db(&self) -> &DatabaseConnection;

    /// Insert new entity, returning the stored row
    async fn insert(&self, model: A) -> Result<E::Model, DbErr> {
        model.insert(self.db()).await
    }
}
