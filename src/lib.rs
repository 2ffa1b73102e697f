//! Xanadu Users - a small user-management REST service.
//!
//! Users register with an email, a password and a name, can be listed or
//! fetched by id, and log in with email and password. Passwords are stored
//! as salted argon2 hashes and never leave the service.
//!
//! # Architecture Layers
//!
//! - **cli**: Command-line interface
//! - **commands**: CLI command implementations
//! - **config**: Application configuration and constants
//! - **domain**: User records, request shapes and password hashing
//! - **services**: Registration, login, reads and demo seeding
//! - **infra**: Database connection, migrations and the user store
//! - **api**: HTTP handlers, extractors and routes
//! - **errors**: Centralized error handling
//!
//! # CLI Usage
//!
//! ```bash
//! # Start the server (migrates and seeds the demo accounts)
//! cargo run -- serve
//!
//! # Run migrations
//! cargo run -- migrate up
//!
//! # Seed the demo accounts only
//! cargo run -- seed
//! ```

pub mod api;
pub mod cli;
pub mod commands;
pub mod config;
pub mod domain;
pub mod errors;
pub mod infra;
pub mod services;

// Re-export commonly used types at crate root
pub use api::{create_router, AppState};
pub use config::Config;
pub use domain::{Password, User};
pub use errors::{AppError, AppResult};
pub use infra::Database;
