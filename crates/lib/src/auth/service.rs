//! Registration, login and token verification.

use std::sync::{Arc, OnceLock};
use std::time::Duration;

use zeroize::Zeroizing;

use super::errors::AuthError;
use super::token::{TokenClaims, TokenSigner};
use crate::Result;
use crate::clock::Clock;
use crate::constants::DEFAULT_TOKEN_TTL_DAYS;
use crate::user::{AuthGrant, CredentialStore, User, crypto, validate_new_credentials};

const SECS_PER_DAY: u64 = 24 * 60 * 60;

/// Hash verified when the username is unknown, so a miss costs as much as a wrong password.
fn dummy_hash() -> &'static str {
    static DUMMY: OnceLock<String> = OnceLock::new();
    DUMMY.get_or_init(|| crypto::hash_password("aiguide-dummy-password").unwrap_or_default())
}

/// Credential checks and token issuance over a [`CredentialStore`].
#[derive(Debug)]
pub struct AuthService {
    store: Arc<CredentialStore>,
    signer: TokenSigner,
    clock: Arc<dyn Clock>,
    token_ttl: Duration,
}

impl AuthService {
    /// Create a service issuing tokens valid for the default seven days.
    pub fn new(store: Arc<CredentialStore>, signer: TokenSigner, clock: Arc<dyn Clock>) -> Self {
        Self {
            store,
            signer,
            clock,
            token_ttl: Duration::from_secs(DEFAULT_TOKEN_TTL_DAYS * SECS_PER_DAY),
        }
    }

    /// Override the token lifetime.
    pub fn with_token_ttl(mut self, token_ttl: Duration) -> Self {
        self.token_ttl = token_ttl;
        self
    }

    pub fn token_ttl(&self) -> Duration {
        self.token_ttl
    }

    pub fn store(&self) -> &Arc<CredentialStore> {
        &self.store
    }

    /// Create an account and log it in.
    ///
    /// Fails with [`AuthError::MissingCredentials`] on empty fields, a
    /// validation error on short ones, and a conflict if the username is taken.
    pub async fn register(&self, username: &str, password: &str) -> Result<AuthGrant> {
        if username.is_empty() || password.is_empty() {
            return Err(AuthError::MissingCredentials.into());
        }
        validate_new_credentials(username, password)?;

        // Cheap early rejection; the insert below is the authoritative check.
        if self.store.contains(username) {
            return Err(crate::user::UserError::UsernameAlreadyExists {
                username: username.to_string(),
            }
            .into());
        }

        let password = Zeroizing::new(password.to_string());
        let password_hash =
            tokio::task::spawn_blocking(move || crypto::hash_password(password.as_str())).await??;

        self.store.insert(User::new(username, password_hash))?;
        tracing::info!("Registered new user: {username}");

        self.grant(username)
    }

    /// Check a username/password pair and issue a token.
    ///
    /// Unknown users and wrong passwords fail identically with
    /// [`AuthError::InvalidCredentials`].
    pub async fn login(&self, username: &str, password: &str) -> Result<AuthGrant> {
        if username.is_empty() || password.is_empty() {
            return Err(AuthError::MissingCredentials.into());
        }

        let stored = self.store.get(username);
        let known = stored.is_some();
        let password_hash = stored.map(|user| user.password_hash);
        let password = Zeroizing::new(password.to_string());

        let verified = tokio::task::spawn_blocking(move || match password_hash {
            Some(hash) => crypto::verify_password(password.as_str(), &hash),
            None => crypto::verify_password(password.as_str(), dummy_hash()),
        })
        .await?;

        if !known || verified.is_err() {
            tracing::debug!("Rejected login for {username}");
            return Err(AuthError::InvalidCredentials.into());
        }

        tracing::debug!("User logged in: {username}");
        self.grant(username)
    }

    /// Return the username a token was issued to, if it is genuine and unexpired.
    pub fn verify_token(&self, token: &str) -> Result<String> {
        let claims = self.signer.verify(token, self.clock.now_secs()).inspect_err(|e| {
            tracing::warn!("Rejected token: {e}");
        })?;
        Ok(claims.sub)
    }

    /// Sign a fresh token for `username`.
    pub fn issue_token(&self, username: &str) -> Result<String> {
        let iat = self.clock.now_secs();
        let claims = TokenClaims {
            sub: username.to_string(),
            iat,
            // An oversized lifetime pins expiry at the end of time rather than wrapping.
            exp: iat.saturating_add(self.token_ttl.as_secs()),
        };
        self.signer.sign(&claims)
    }

    fn grant(&self, username: &str) -> Result<AuthGrant> {
        Ok(AuthGrant {
            token: self.issue_token(username)?,
            username: username.to_string(),
        })
    }
}
