//! Error types for the user system
use thiserror::Error;

use crate::constants::{MIN_PASSWORD_LENGTH, MIN_USERNAME_LENGTH};

#[derive(Error, Debug)]
pub enum UserError {
    #[error("Username already exists")]
    UsernameAlreadyExists { username: String },

    #[error("Username must be at least {min} characters")]
    UsernameTooShort { min: usize },

    #[error("Password must be at least {min} characters")]
    PasswordTooShort { min: usize },

    #[error("Invalid password")]
    InvalidPassword,

    #[error("Password verification failed")]
    PasswordVerificationFailed,

    #[error("Password hashing failed: {reason}")]
    HashingFailed { reason: String },
}

impl UserError {
    /// Check if this error indicates a duplicate username.
    pub fn is_conflict(&self) -> bool {
        matches!(self, UserError::UsernameAlreadyExists { .. })
    }

    /// Check if this error came from rejecting caller input.
    pub fn is_validation_error(&self) -> bool {
        matches!(
            self,
            UserError::UsernameTooShort { .. } | UserError::PasswordTooShort { .. }
        )
    }
}

impl From<UserError> for crate::Error {
    fn from(err: UserError) -> Self {
        crate::Error::User(err)
    }
}

/// Check registration input against the minimum lengths.
///
/// Lengths are counted in characters, not bytes.
pub fn validate_new_credentials(username: &str, password: &str) -> Result<(), UserError> {
    if username.chars().count() < MIN_USERNAME_LENGTH {
        return Err(UserError::UsernameTooShort {
            min: MIN_USERNAME_LENGTH,
        });
    }
    if password.chars().count() < MIN_PASSWORD_LENGTH {
        return Err(UserError::PasswordTooShort {
            min: MIN_PASSWORD_LENGTH,
        });
    }
    Ok(())
}
