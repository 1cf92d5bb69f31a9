//! Password hashing for the user system
//!
//! Hashes are Argon2id PHC strings (`$argon2id$v=19$...`), which carry their
//! own salt and cost parameters. Both functions are CPU-heavy; async callers
//! run them on the blocking pool.

use argon2::{
    Argon2,
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString, rand_core::OsRng},
};

use super::errors::UserError;
use crate::Result;

/// Hash `password` with a fresh random salt.
pub fn hash_password(password: &str) -> Result<String> {
    let salt = SaltString::generate(&mut OsRng);
    let hash = Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map_err(|e| UserError::HashingFailed {
            reason: e.to_string(),
        })?;
    Ok(hash.to_string())
}

/// Check `password` against a stored PHC string.
///
/// An unparsable stored hash is [`UserError::PasswordVerificationFailed`];
/// a mismatch is [`UserError::InvalidPassword`].
pub fn verify_password(password: &str, stored_hash: &str) -> Result<()> {
    let stored = PasswordHash::new(stored_hash).map_err(|_| UserError::PasswordVerificationFailed)?;
    Argon2::default()
        .verify_password(password.as_bytes(), &stored)
        .map_err(|_| UserError::InvalidPassword)?;
    Ok(())
}
