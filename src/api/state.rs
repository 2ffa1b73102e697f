//! Application state - Dependency injection container.
//!
//! Built once at startup and cloned into every handler; there is no global
//! database handle.

use std::sync::Arc;

use crate::infra::{Database, UserRepository, UserStore};
use crate::services::{AuthService, Authenticator, UserManager, UserService};

/// Application state containing all services.
#[derive(Clone)]
pub struct AppState {
    /// Registration and login
    pub auth_service: Arc<dyn AuthService>,
    /// User reads
    pub user_service: Arc<dyn UserService>,
    /// Database connection
    pub database: Arc<Database>,
}

impl AppState {
    /// Wire the services over a connected database.
    pub fn from_database(database: Arc<Database>) -> Self {
        let users: Arc<dyn UserRepository> = Arc::new(UserStore::new(database.get_connection()));

        Self {
            auth_service: Arc::new(Authenticator::new(users.clone())),
            user_service: Arc::new(UserManager::new(users)),
            database,
        }
    }

    /// Create application state with manually injected services.
    pub fn new(
        auth_service: Arc<dyn AuthService>,
        user_service: Arc<dyn UserService>,
        database: Arc<Database>,
    ) -> Self {
        Self {
            auth_service,
            user_service,
            database,
        }
    }
}
