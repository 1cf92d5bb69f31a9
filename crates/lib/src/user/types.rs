//! Core data types for the user system

use serde::{Deserialize, Serialize};

/// A registered account.
///
/// Created on registration and never modified afterwards.
#[derive(Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct User {
    pub username: String,

    /// Argon2id PHC string
    pub password_hash: String,
}

impl User {
    pub fn new(username: impl Into<String>, password_hash: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password_hash: password_hash.into(),
        }
    }
}

impl std::fmt::Debug for User {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("User")
            .field("username", &self.username)
            .field("password_hash", &"[REDACTED]")
            .finish()
    }
}

/// Successful register/login result returned to clients.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AuthGrant {
    pub token: String,
    pub username: String,
}
