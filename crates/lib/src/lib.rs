//!
//! aiguide: an authenticated chat service that points people at AI tools.
//!
//! ## Core Concepts
//!
//! * **Credential store (`user::CredentialStore`)**: In-memory map of usernames to Argon2id password hashes.
//! * **Auth service (`auth::AuthService`)**: Registration, login and stateless signed session tokens.
//! * **Catalog (`catalog::Catalog`)**: The keyword-to-category table, each category carrying a list of tools.
//! * **Topic matcher (`catalog::TopicMatcher`)**: Picks a category and a tool for a free-text query.
//! * **Chat handler (`chat::ChatHandler`)**: Bearer-token gate in front of the matcher.
//! * **Server (`server`)**: The axum router exposing all of the above as JSON endpoints.

pub mod auth;
pub mod catalog;
pub mod chat;
pub mod clock;
pub mod constants;
pub mod random;
pub mod server;
pub mod user;

pub use clock::{Clock, FixedClock, SystemClock};
pub use random::{FixedRandom, RandomSource, SeededRandom, ThreadRandom};

/// Result type used throughout the aiguide library.
pub type Result<T> = std::result::Result<T, Error>;

/// Broad classification of an [`Error`], one per response class of the HTTP surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Malformed or missing input.
    Validation,
    /// The resource already exists.
    Conflict,
    /// Bad credentials or a missing/invalid bearer token.
    Authentication,
    /// Anything unexpected. Details are logged, never returned to callers.
    Internal,
}

/// Common error type for the aiguide library.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialize(#[from] serde_json::Error),

    /// Structured errors from the user module
    #[error(transparent)]
    User(user::UserError),

    /// Structured errors from the auth module
    #[error(transparent)]
    Auth(auth::AuthError),

    /// Structured errors from the catalog module
    #[error(transparent)]
    Catalog(catalog::CatalogError),

    /// Structured errors from the chat module
    #[error(transparent)]
    Chat(chat::ChatError),

    /// A background task panicked or was cancelled.
    #[error("Task failed: {0}")]
    Task(#[from] tokio::task::JoinError),
}

impl Error {
    /// Get the originating module for this error.
    pub fn module(&self) -> &'static str {
        match self {
            Error::User(_) => "user",
            Error::Auth(_) => "auth",
            Error::Catalog(_) => "catalog",
            Error::Chat(_) => "chat",
            Error::Io(_) => "io",
            Error::Serialize(_) => "serialize",
            Error::Task(_) => "task",
        }
    }

    /// Classify this error.
    pub fn kind(&self) -> ErrorKind {
        if self.is_validation_error() {
            ErrorKind::Validation
        } else if self.is_conflict() {
            ErrorKind::Conflict
        } else if self.is_authentication_error() {
            ErrorKind::Authentication
        } else {
            ErrorKind::Internal
        }
    }

    /// Check if this error is validation-related.
    pub fn is_validation_error(&self) -> bool {
        match self {
            Error::User(user_err) => user_err.is_validation_error(),
            Error::Auth(auth_err) => auth_err.is_validation_error(),
            Error::Chat(chat_err) => chat_err.is_validation_error(),
            _ => false,
        }
    }

    /// Check if this error indicates a conflict (already exists).
    pub fn is_conflict(&self) -> bool {
        match self {
            Error::User(user_err) => user_err.is_conflict(),
            _ => false,
        }
    }

    /// Check if this error is authentication-related.
    pub fn is_authentication_error(&self) -> bool {
        match self {
            Error::Auth(auth_err) => auth_err.is_authentication_error(),
            _ => false,
        }
    }

    /// Check if this error came from loading or validating a catalog.
    pub fn is_catalog_error(&self) -> bool {
        matches!(self, Error::Catalog(_))
    }

    /// Check if this error is I/O related.
    pub fn is_io_error(&self) -> bool {
        match self {
            Error::Io(_) => true,
            Error::Catalog(catalog_err) => catalog_err.is_io_error(),
            _ => false,
        }
    }
}
