//! Infrastructure layer - Database connection, schema and repositories.

pub mod db;
pub mod repositories;

pub use db::{Database, Migrator};
pub use repositories::{UserRepository, UserStore};

#[cfg(test)]
pub use repositories::MockUserRepository;
