//! Authentication for aiguide
//!
//! [`AuthService`] registers users, checks passwords and issues signed,
//! stateless session tokens. Nothing about a session is stored server-side:
//! a token is valid exactly when its signature verifies and its expiry lies
//! in the future.

pub mod errors;
pub mod service;
pub mod token;

pub use errors::AuthError;
pub use service::AuthService;
pub use token::{TokenClaims, TokenSigner};
