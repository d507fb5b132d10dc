//! One-way password hashing

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHasher, SaltString},
    Argon2,
};
use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum HashError {
    #[error("password must not be empty")]
    EmptyPassword,

    #[error("failed to hash password: {0}")]
    Hash(String),
}

/// Hash a password using Argon2 with a fresh random salt.
///
/// Two calls on the same input yield different PHC strings.
pub fn hash_password(password: &str) -> Result<String, HashError> {
    if password.is_empty() {
        return Err(HashError::EmptyPassword);
    }

    let salt = SaltString::generate(&mut OsRng);
    let hash = Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map_err(|e| HashError::Hash(e.to_string()))?;
    Ok(hash.to_string())
}

/// Run [`hash_password`] on the blocking pool; Argon2 is deliberately slow.
pub async fn hash_password_blocking(password: String) -> anyhow::Result<String> {
    let hash = tokio::task::spawn_blocking(move || hash_password(&password)).await??;
    Ok(hash)
}
