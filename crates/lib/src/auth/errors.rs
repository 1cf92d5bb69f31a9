//! Authentication error types for the aiguide library.

use thiserror::Error as ThisError;

use crate::Error;
use crate::constants::INVALID_CREDENTIALS_MESSAGE;

/// Errors that can occur during authentication operations.
#[non_exhaustive]
#[derive(Debug, ThisError)]
pub enum AuthError {
    /// Username or password absent (or empty) in the request.
    #[error("Username and password are required")]
    MissingCredentials,

    /// Unknown user or wrong password. Deliberately indistinguishable.
    #[error("{}", INVALID_CREDENTIALS_MESSAGE)]
    InvalidCredentials,

    /// No `Authorization` header, or one that is not `Bearer <token>`.
    #[error("Missing or malformed bearer authorization header")]
    MissingBearer,

    /// The token could not be decoded or its signature did not verify.
    #[error("Invalid token: {reason}")]
    InvalidToken {
        /// Description of what was wrong with the token
        reason: String,
    },

    /// The token was valid but its expiry has passed.
    #[error("Token expired at {expired_at}")]
    TokenExpired {
        /// Expiry as seconds since Unix epoch
        expired_at: u64,
    },

    /// The configured signing secret is unusable.
    #[error("Invalid token secret: {reason}")]
    InvalidSecret {
        /// Why the secret was rejected
        reason: String,
    },
}

impl AuthError {
    /// Check if this error came from rejecting caller input.
    pub fn is_validation_error(&self) -> bool {
        matches!(self, AuthError::MissingCredentials)
    }

    /// Check if this error means the caller is not authenticated.
    pub fn is_authentication_error(&self) -> bool {
        matches!(
            self,
            AuthError::InvalidCredentials
                | AuthError::MissingBearer
                | AuthError::InvalidToken { .. }
                | AuthError::TokenExpired { .. }
        )
    }

    /// Check if this error concerns a bearer token rather than a login attempt.
    pub fn is_token_error(&self) -> bool {
        matches!(
            self,
            AuthError::MissingBearer | AuthError::InvalidToken { .. } | AuthError::TokenExpired { .. }
        )
    }
}

impl From<AuthError> for Error {
    fn from(err: AuthError) -> Self {
        Error::Auth(err)
    }
}
