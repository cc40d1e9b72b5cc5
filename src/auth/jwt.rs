//! Default JWT signer (HS256).
//!
//! Tokens are signed with a shared secret and stamped with `iat`/`exp` at
//! signing time; all payload entries are flattened into the claim set
//! alongside them. [`JwtSigner::verify`] is the decode counterpart used by
//! consumers that terminate the auth header.

use async_trait::async_trait;
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};

use crate::error::AuthError;
use crate::payload::AuthPayload;

use super::TokenSigner;

/// Default token lifetime (seconds).
const DEFAULT_TOKEN_TTL_SECS: i64 = 3600;

#[derive(Debug, Clone, Serialize, Deserialize)]
struct Claims {
    iat: i64,
    exp: i64,
    #[serde(flatten)]
    payload: AuthPayload,
}

/// HS256 JWT signer with a configurable lifetime.
#[derive(Clone)]
pub struct JwtSigner {
    secret: SecretString,
    ttl_secs: i64,
}

impl std::fmt::Debug for JwtSigner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtSigner")
            .field("ttl_secs", &self.ttl_secs)
            .finish()
    }
}

impl JwtSigner {
    /// Create a signer from a shared secret.
    pub fn new(secret: impl Into<String>) -> Self {
        Self {
            secret: SecretString::from(secret.into()),
            ttl_secs: DEFAULT_TOKEN_TTL_SECS,
        }
    }

    /// Override the token lifetime.
    pub fn with_ttl(mut self, ttl_secs: i64) -> Self {
        self.ttl_secs = ttl_secs;
        self
    }

    pub fn validate(&self) -> Result<(), AuthError> {
        if self.secret.expose_secret().trim().is_empty() {
            return Err(AuthError::ConfigurationError(
                "JWT signing secret cannot be empty".to_string(),
            ));
        }
        if self.ttl_secs <= 0 {
            return Err(AuthError::ConfigurationError(
                "JWT token lifetime must be positive".to_string(),
            ));
        }
        Ok(())
    }

    /// Decode and validate a token produced by [`TokenSigner::sign`],
    /// returning its claim map without the `iat`/`exp` registered claims.
    pub fn verify(&self, token: &str) -> Result<AuthPayload, AuthError> {
        self.validate()?;
        let key = DecodingKey::from_secret(self.secret.expose_secret().as_bytes());
        let data = decode::<Claims>(token, &key, &Validation::new(Algorithm::HS256))?;
        Ok(data.claims.payload)
    }
}

#[async_trait]
impl TokenSigner for JwtSigner {
    async fn sign(&self, claims: &AuthPayload) -> Result<String, AuthError> {
        self.validate()?;
        let now = chrono::Utc::now().timestamp();
        let claims = Claims {
            iat: now,
            exp: now + self.ttl_secs,
            payload: claims.clone(),
        };

        let key = EncodingKey::from_secret(self.secret.expose_secret().as_bytes());
        let token = encode(&Header::new(Algorithm::HS256), &claims, &key)?;
        tracing::debug!(claims = claims.payload.len(), "issued auth token");
        Ok(token)
    }
}
