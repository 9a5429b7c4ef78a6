//! Stored credential verification
//!
//! A stored credential is either an Argon2 PHC string or a plaintext demo
//! secret. Both paths compare in constant time.

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};
use thiserror::Error;

use crate::compare::constant_time_eq;

const PHC_ARGON2_PREFIX: &str = "$argon2";

#[derive(Error, Debug)]
pub enum PasswordError {
    #[error("Hash error: {0}")]
    HashError(String),
}

pub struct PasswordService;

impl PasswordService {
    pub fn hash(password: &str) -> Result<String, PasswordError> {
        let salt = SaltString::generate(&mut OsRng);
        let argon2 = Argon2::default();
        argon2
            .hash_password(password.as_bytes(), &salt)
            .map(|h| h.to_string())
            .map_err(|e| PasswordError::HashError(e.to_string()))
    }

    /// Check `password` against a stored credential.
    ///
    /// Returns `Ok(false)` on mismatch; `Err` only when a stored Argon2 string
    /// cannot be parsed.
    pub fn verify(password: &str, stored: &str) -> Result<bool, PasswordError> {
        if password.is_empty() {
            return Ok(false);
        }
        if Self::is_hashed(stored) {
            let parsed_hash = PasswordHash::new(stored)
                .map_err(|e| PasswordError::HashError(e.to_string()))?;
            return Ok(Argon2::default()
                .verify_password(password.as_bytes(), &parsed_hash)
                .is_ok());
        }
        Ok(constant_time_eq(password.as_bytes(), stored.as_bytes()))
    }

    pub fn is_hashed(stored: &str) -> bool {
        stored.starts_with(PHC_ARGON2_PREFIX)
    }
}
