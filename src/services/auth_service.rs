//! Authentication service - Registration and password login.
//!
//! No token or session is issued: a successful login only returns the user.

use async_trait::async_trait;
use std::sync::Arc;

use crate::domain::{CreateUser, NewUser, Password, User};
use crate::errors::{AppError, AppResult};
use crate::infra::UserRepository;

/// Verified against when the email is unknown, so both login failures cost
/// one argon2 verification. Well-formed, with the default argon2 parameters,
/// and matches no password.
const DUMMY_HASH: &str = "$argon2id$v=19$m=19456,t=2,p=1$c29tZXNhbHRzb21lc2FsdA$AAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAA";

/// Authentication service trait for dependency injection.
#[async_trait]
pub trait AuthService: Send + Sync {
    /// Hash the password and store a new user
    async fn register(&self, input: CreateUser) -> AppResult<User>;

    /// Check credentials. Unknown email and wrong password both yield
    /// `AppError::InvalidCredentials`.
    async fn login(&self, email: String, password: String) -> AppResult<User>;
}

/// Concrete implementation of AuthService backed by a user repository.
pub struct Authenticator {
    users: Arc<dyn UserRepository>,
}

impl Authenticator {
    /// Create new auth service instance
    pub fn new(users: Arc<dyn UserRepository>) -> Self {
        Self { users }
    }
}

#[async_trait]
impl AuthService for Authenticator {
    async fn register(&self, input: CreateUser) -> AppResult<User> {
        // Required fields are checked by the handler's ValidatedJson extractor.
        // Email uniqueness is left to the store's unique index.
        let password_hash = Password::new(&input.password)?.into_string();
        let new_user = NewUser::new(input.first_name, input.last_name, input.email, password_hash);

        let user = self.users.create(new_user).await?;
        tracing::info!(user_id = user.id, "User registered");
        Ok(user)
    }

    async fn login(&self, email: String, password: String) -> AppResult<User> {
        let user = self.users.find_by_email(&email).await?;

        let stored = Password::from_hash(match &user {
            Some(user) => user.password_hash.clone(),
            None => DUMMY_HASH.to_string(),
        });
        let password_valid = stored.verify(&password);

        match user {
            Some(user) if password_valid => Ok(user),
            _ => Err(AppError::InvalidCredentials),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infra::MockUserRepository;
    use chrono::Utc;
    use mockall::predicate::eq;
    use sea_orm::DbErr;

    fn stored_user(email: &str, plain: &str) -> User {
        User {
            id: 1,
            name: "Vincent".to_string(),
            surname: "CAUSSE".to_string(),
            full_name: "Vincent CAUSSE".to_string(),
            email: email.to_string(),
            password_hash: Password::new(plain).unwrap().into_string(),
            created_at: Utc::now(),
            updated_at: Utc::now(),
            deleted_at: None,
        }
    }

    fn create_input() -> CreateUser {
        CreateUser {
            email: "ada@example.com".to_string(),
            password: "analytical-engine".to_string(),
            first_name: "Ada".to_string(),
            last_name: "Lovelace".to_string(),
        }
    }

    #[test]
    fn test_dummy_hash_is_well_formed() {
        let parsed = argon2::PasswordHash::new(DUMMY_HASH).unwrap();
        assert_eq!(parsed.algorithm.as_str(), "argon2id");
        assert!(!Password::from_hash(DUMMY_HASH.to_string()).verify("Xanadu2025!"));
        assert!(!Password::from_hash(DUMMY_HASH.to_string()).verify(""));
    }

    #[tokio::test]
    async fn test_register_hashes_and_derives_full_name() {
        let mut repo = MockUserRepository::new();
        repo.expect_create()
            .withf(|new_user| {
                new_user.full_name == "Ada Lovelace"
                    && new_user.password_hash != "analytical-engine"
                    && Password::from_hash(new_user.password_hash.clone())
                        .verify("analytical-engine")
            })
            .times(1)
            .returning(|new_user| {
                Ok(User {
                    id: 7,
                    name: new_user.name,
                    surname: new_user.surname,
                    full_name: new_user.full_name,
                    email: new_user.email,
                    password_hash: new_user.password_hash,
                    created_at: Utc::now(),
                    updated_at: Utc::now(),
                    deleted_at: None,
                })
            });

        let service = Authenticator::new(Arc::new(repo));
        let user = service.register(create_input()).await.unwrap();

        assert_eq!(user.id, 7);
        assert_eq!(user.full_name, "Ada Lovelace");
    }

    #[tokio::test]
    async fn test_register_does_not_precheck_email() {
        let mut repo = MockUserRepository::new();
        repo.expect_find_by_email().never();
        repo.expect_create()
            .returning(|_| Err(AppError::conflict("email")));

        let service = Authenticator::new(Arc::new(repo));
        let err = service.register(create_input()).await.unwrap_err();

        assert!(matches!(err, AppError::Conflict(ref field) if field == "email"));
    }

    #[tokio::test]
    async fn test_login_success_returns_user() {
        let mut repo = MockUserRepository::new();
        repo.expect_find_by_email()
            .with(eq("vincent.causse@xanadu.com"))
            .returning(|email| Ok(Some(stored_user(email, "Xanadu2025!"))));

        let service = Authenticator::new(Arc::new(repo));
        let user = service
            .login("vincent.causse@xanadu.com".into(), "Xanadu2025!".into())
            .await
            .unwrap();

        assert_eq!(user.email, "vincent.causse@xanadu.com");
    }

    #[tokio::test]
    async fn test_login_wrong_password() {
        let mut repo = MockUserRepository::new();
        repo.expect_find_by_email()
            .returning(|email| Ok(Some(stored_user(email, "Xanadu2025!"))));

        let service = Authenticator::new(Arc::new(repo));
        let err = service
            .login("vincent.causse@xanadu.com".into(), "wrong".into())
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::InvalidCredentials));
    }

    #[tokio::test]
    async fn test_login_unknown_email_is_same_error() {
        let mut repo = MockUserRepository::new();
        repo.expect_find_by_email().returning(|_| Ok(None));

        let service = Authenticator::new(Arc::new(repo));
        let err = service
            .login("nobody@xanadu.com".into(), "Xanadu2025!".into())
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::InvalidCredentials));
    }

    #[tokio::test]
    async fn test_login_store_failure_propagates() {
        let mut repo = MockUserRepository::new();
        repo.expect_find_by_email()
            .returning(|_| Err(AppError::Database(DbErr::Custom("gone".into()))));

        let service = Authenticator::new(Arc::new(repo));
        let err = service
            .login("a@b.c".into(), "pw".into())
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::Database(_)));
    }
}
