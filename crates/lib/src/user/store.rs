//! In-memory credential storage
//!
//! Users live for the lifetime of the process. The map sits behind one
//! `RwLock`; inserts check for an existing name inside the same write guard,
//! so concurrent registrations of one username cannot both succeed.

use std::collections::HashMap;
use std::sync::{PoisonError, RwLock};

use super::errors::UserError;
use super::types::User;
use crate::Result;

/// Username → [`User`] map shared by every request.
#[derive(Debug, Default)]
pub struct CredentialStore {
    users: RwLock<HashMap<String, User>>,
}

impl CredentialStore {
    /// Creates a new, empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a user unless the username is already taken.
    pub fn insert(&self, user: User) -> Result<()> {
        let mut users = self.users.write().unwrap_or_else(PoisonError::into_inner);
        if users.contains_key(&user.username) {
            return Err(UserError::UsernameAlreadyExists {
                username: user.username,
            }
            .into());
        }
        users.insert(user.username.clone(), user);
        Ok(())
    }

    /// Look up a user by name.
    pub fn get(&self, username: &str) -> Option<User> {
        self.users
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(username)
            .cloned()
    }

    pub fn contains(&self, username: &str) -> bool {
        self.users
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .contains_key(username)
    }

    /// Number of registered users.
    pub fn len(&self) -> usize {
        self.users.read().unwrap_or_else(PoisonError::into_inner).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// All registered usernames, sorted.
    pub fn usernames(&self) -> Vec<String> {
        let mut names: Vec<String> = self
            .users
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .keys()
            .cloned()
            .collect();
        names.sort();
        names
    }
}
