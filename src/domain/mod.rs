//! Domain layer - users and credential handling.

mod password;
mod user;

pub use password::{hash_password, verify_password, Password};
pub use user::{full_name, CreateUser, NewUser, User, UserResponse, UserSummary};
