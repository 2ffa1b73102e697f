//! Bootstrap seeding of the demo accounts.

use crate::config::DEMO_USERS;
use crate::domain::{NewUser, Password};
use crate::infra::UserRepository;

/// Account ensured at startup
#[derive(Debug, Clone, Copy)]
pub struct DemoAccount<'a> {
    pub first_name: &'a str,
    pub last_name: &'a str,
    pub email: &'a str,
    pub password: &'a str,
}

/// Outcome of a seeding run
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SeedReport {
    pub created: usize,
    pub skipped: usize,
    pub failed: usize,
}

/// The built-in demo accounts.
pub fn demo_accounts() -> Vec<DemoAccount<'static>> {
    DEMO_USERS
        .iter()
        .map(|&(first_name, last_name, email, password)| DemoAccount {
            first_name,
            last_name,
            email,
            password,
        })
        .collect()
}

/// Insert every account whose email is not already present.
///
/// Failures are logged per account and never abort the run.
pub async fn seed_users(users: &dyn UserRepository, accounts: &[DemoAccount<'_>]) -> SeedReport {
    let mut report = SeedReport::default();

    for account in accounts {
        match users.find_by_email(account.email).await {
            Ok(Some(_)) => {
                tracing::info!("User {} already exists, skipping", account.email);
                report.skipped += 1;
                continue;
            }
            Ok(None) => {}
            Err(e) => {
                tracing::error!("Error looking up user {}: {}", account.email, e);
                report.failed += 1;
                continue;
            }
        }

        let password_hash = match Password::new(account.password) {
            Ok(password) => password.into_string(),
            Err(e) => {
                tracing::error!("Error hashing password for {}: {}", account.email, e);
                report.failed += 1;
                continue;
            }
        };

        let new_user = NewUser::new(
            account.first_name.to_string(),
            account.last_name.to_string(),
            account.email.to_string(),
            password_hash,
        );

        match users.create(new_user).await {
            Ok(_) => {
                tracing::info!("Created user: {}", account.email);
                report.created += 1;
            }
            Err(e) => {
                tracing::error!("Error creating user {}: {}", account.email, e);
                report.failed += 1;
            }
        }
    }

    report
}

/// Ensure the built-in demo accounts exist.
pub async fn seed_demo_users(users: &dyn UserRepository) -> SeedReport {
    seed_users(users, &demo_accounts()).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::User;
    use crate::errors::AppError;
    use crate::infra::MockUserRepository;
    use chrono::Utc;

    fn existing(email: &str) -> User {
        User {
            id: 1,
            name: "Vincent".into(),
            surname: "CAUSSE".into(),
            full_name: "Vincent CAUSSE".into(),
            email: email.into(),
            password_hash: "hash".into(),
            created_at: Utc::now(),
            updated_at: Utc::now(),
            deleted_at: None,
        }
    }

    #[test]
    fn test_demo_accounts_are_the_two_xanadu_users() {
        let accounts = demo_accounts();
        let emails: Vec<_> = accounts.iter().map(|a| a.email).collect();
        assert_eq!(
            emails,
            vec!["vincent.causse@xanadu.com", "youcef.afane@xanadu.com"]
        );
    }

    #[tokio::test]
    async fn test_existing_accounts_are_skipped() {
        let mut repo = MockUserRepository::new();
        repo.expect_find_by_email()
            .returning(|email| Ok(Some(existing(email))));
        repo.expect_create().never();

        let report = seed_demo_users(&repo).await;
        assert_eq!(report, SeedReport { created: 0, skipped: 2, failed: 0 });
    }

    #[tokio::test]
    async fn test_missing_accounts_are_created_with_hash() {
        let mut repo = MockUserRepository::new();
        repo.expect_find_by_email().returning(|_| Ok(None));
        repo.expect_create()
            .withf(|u| u.password_hash != "Xanadu2025!" && u.full_name.contains(' '))
            .times(2)
            .returning(|u| {
                let mut user = existing(&u.email);
                user.full_name = u.full_name;
                Ok(user)
            });

        let report = seed_demo_users(&repo).await;
        assert_eq!(report.created, 2);
    }

    #[tokio::test]
    async fn test_one_failure_does_not_stop_the_other() {
        let mut repo = MockUserRepository::new();
        repo.expect_find_by_email().returning(|_| Ok(None));
        repo.expect_create().returning(|u| {
            if u.email.starts_with("vincent") {
                Err(AppError::internal("insert failed"))
            } else {
                Ok(existing(&u.email))
            }
        });

        let report = seed_demo_users(&repo).await;
        assert_eq!(report, SeedReport { created: 1, skipped: 0, failed: 1 });
    }
}
