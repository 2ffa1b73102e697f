//! Password hashing and verification.
//!
//! Plaintext passwords only ever live for the duration of one of these calls;
//! everything else in the crate holds the argon2 PHC string.

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};

use crate::errors::{AppError, AppResult};

/// Hash a plaintext password with a fresh random salt.
///
/// Uses the library's default argon2 parameters. Two calls with the same input
/// produce different hashes.
pub fn hash_password(plain_text: &str) -> AppResult<String> {
    let salt = SaltString::generate(&mut OsRng);
    let hash = argon2()
        .hash_password(plain_text.as_bytes(), &salt)
        .map_err(|e| AppError::HashingFailed(e.to_string()))?;
    Ok(hash.to_string())
}

/// Check a plaintext password against a stored hash.
///
/// A malformed hash is treated as a mismatch.
pub fn verify_password(plain_text: &str, hash: &str) -> bool {
    match PasswordHash::new(hash) {
        Ok(parsed) => argon2()
            .verify_password(plain_text.as_bytes(), &parsed)
            .is_ok(),
        Err(e) => {
            tracing::warn!("Stored password hash is malformed: {}", e);
            false
        }
    }
}

#[inline]
fn argon2() -> Argon2<'static> {
    Argon2::default()
}

/// Password value object wrapping a hash.
#[derive(Clone, PartialEq, Eq)]
pub struct Password {
    hash: String,
}

// Don't expose hash in debug output
impl std::fmt::Debug for Password {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Password")
            .field("hash", &"[REDACTED]")
            .finish()
    }
}

impl Password {
    /// Create a new password by hashing the plain text.
    pub fn new(plain_text: &str) -> AppResult<Self> {
        Ok(Self {
            hash: hash_password(plain_text)?,
        })
    }

    /// Wrap an existing hash (from database).
    pub fn from_hash(hash: String) -> Self {
        Self { hash }
    }

    /// Consume and return the hash string.
    pub fn into_string(self) -> String {
        self.hash
    }

    /// Verify a plain text password against this hash.
    pub fn verify(&self, plain_text: &str) -> bool {
        verify_password(plain_text, &self.hash)
    }
}
