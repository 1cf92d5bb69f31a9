//! Stateless session tokens
//!
//! A token is `base64url(claims JSON) "." base64url(signature)`, where the
//! signature is Ed25519 over the encoded claims. The signing key is derived
//! from a shared secret with SHA-256, so every process configured with the
//! same secret accepts the same tokens.

use base64ct::{Base64UrlUnpadded, Encoding};
use ed25519_dalek::{Signature, Signer, SigningKey, Verifier, VerifyingKey};
use rand::rngs::OsRng;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use zeroize::Zeroizing;

use super::errors::AuthError;
use crate::Result;

/// Size of Ed25519 signatures in bytes
pub const ED25519_SIGNATURE_SIZE: usize = 64;

/// Claims carried inside a session token.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TokenClaims {
    /// Username the token was issued to
    pub sub: String,
    /// Issued-at, seconds since Unix epoch
    pub iat: u64,
    /// Expiry, seconds since Unix epoch
    pub exp: u64,
}

/// Signs and verifies session tokens.
pub struct TokenSigner {
    signing_key: SigningKey,
    verifying_key: VerifyingKey,
}

impl std::fmt::Debug for TokenSigner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("TokenSigner([REDACTED])")
    }
}

impl TokenSigner {
    /// Derive the signing key from a shared secret.
    pub fn from_secret(secret: impl AsRef<[u8]>) -> Result<Self> {
        let secret = secret.as_ref();
        if secret.is_empty() {
            return Err(AuthError::InvalidSecret {
                reason: "secret must not be empty".to_string(),
            }
            .into());
        }

        let seed: Zeroizing<[u8; 32]> = Zeroizing::new(Sha256::digest(secret).into());
        Ok(Self::from_signing_key(SigningKey::from_bytes(&seed)))
    }

    /// Random key for this process only. Tokens die with the process.
    pub fn generate() -> Self {
        Self::from_signing_key(SigningKey::generate(&mut OsRng))
    }

    fn from_signing_key(signing_key: SigningKey) -> Self {
        let verifying_key = signing_key.verifying_key();
        Self {
            signing_key,
            verifying_key,
        }
    }

    /// Encode and sign the claims.
    pub fn sign(&self, claims: &TokenClaims) -> Result<String> {
        let payload = Base64UrlUnpadded::encode_string(&serde_json::to_vec(claims)?);
        let signature = self.signing_key.sign(payload.as_bytes());
        let signature = Base64UrlUnpadded::encode_string(&signature.to_bytes());
        Ok(format!("{payload}.{signature}"))
    }

    /// Check the signature and expiry of a token and return its claims.
    ///
    /// `now` is seconds since Unix epoch; the token is valid while `now < exp`.
    pub fn verify(&self, token: &str, now: u64) -> Result<TokenClaims> {
        let (payload, signature) = token.split_once('.').ok_or_else(|| invalid("malformed"))?;

        let signature_bytes =
            Base64UrlUnpadded::decode_vec(signature).map_err(|_| invalid("bad signature encoding"))?;
        let signature_array: [u8; ED25519_SIGNATURE_SIZE] = signature_bytes
            .try_into()
            .map_err(|_| invalid("bad signature length"))?;
        self.verifying_key
            .verify(payload.as_bytes(), &Signature::from_bytes(&signature_array))
            .map_err(|_| invalid("signature mismatch"))?;

        let claims_bytes =
            Base64UrlUnpadded::decode_vec(payload).map_err(|_| invalid("bad payload encoding"))?;
        let claims: TokenClaims =
            serde_json::from_slice(&claims_bytes).map_err(|_| invalid("bad payload"))?;

        if now >= claims.exp {
            return Err(AuthError::TokenExpired {
                expired_at: claims.exp,
            }
            .into());
        }
        Ok(claims)
    }
}

fn invalid(reason: &str) -> AuthError {
    AuthError::InvalidToken {
        reason: reason.to_string(),
    }
}
