//! User system
//!
//! Accounts are a username plus an Argon2id password hash, held in a
//! [`CredentialStore`]. Token issuance lives in [`crate::auth`].

pub mod crypto;
pub mod errors;
pub mod store;
pub mod types;

pub use errors::{UserError, validate_new_credentials};
pub use store::CredentialStore;
pub use types::{AuthGrant, User};
