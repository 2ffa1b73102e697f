//! Application services layer - Use cases and business logic.
//!
//! Services depend on the `UserRepository` abstraction, never on a concrete
//! connection, so they can be exercised with mocks.

mod auth_service;
pub mod seed;
mod user_service;

pub use auth_service::{AuthService, Authenticator};
pub use seed::{seed_demo_users, seed_users, DemoAccount, SeedReport};
pub use user_service::{UserManager, UserService};
