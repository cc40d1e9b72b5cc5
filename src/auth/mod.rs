//! Token creation.
//!
//! This module defines the signing seam ([`TokenSigner`]) and the step that
//! injects the caller identity (access code + user id) into the claim map
//! before signing. The signing algorithm itself is opaque to callers; the
//! default implementation lives in [`jwt`].

use async_trait::async_trait;
use serde_json::Value;

use crate::context::AuthContext;
use crate::error::AuthError;
use crate::payload::AuthPayload;

pub mod jwt;

/// An asynchronous token signer.
///
/// Notes:
/// - The interface is async so that remote signers (KMS, separate signing
///   service) fit behind the same seam as the local JWT default.
/// - Implementations must be `Send + Sync`; one signer is shared across every
///   request a context issues.
#[async_trait]
pub trait TokenSigner: Send + Sync {
    /// Sign the claim map into an opaque token string.
    async fn sign(&self, claims: &AuthPayload) -> Result<String, AuthError>;
}

/// A signer returning a fixed token regardless of claims, useful for tests
/// and scenarios where the token is managed externally.
pub struct StaticTokenSigner {
    token: String,
}

impl StaticTokenSigner {
    /// Create a new static token signer.
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
        }
    }
}

#[async_trait]
impl TokenSigner for StaticTokenSigner {
    async fn sign(&self, _claims: &AuthPayload) -> Result<String, AuthError> {
        Ok(self.token.clone())
    }
}

/// Combine the context's access code and user id with `payload` and sign the
/// result, producing a fresh token.
///
/// Payload entries win over the identity fields on key collision. An unset
/// access code or user id is simply omitted from the claim set. Signer
/// failures propagate unchanged.
pub async fn create_auth_token(
    ctx: &AuthContext,
    payload: AuthPayload,
) -> Result<String, AuthError> {
    let mut claims = AuthPayload::new();
    if let Some(access_code) = ctx.vaults().access_code() {
        claims.insert("accessCode".to_string(), Value::String(access_code.to_string()));
    }
    if let Some(user_id) = ctx.user_id() {
        claims.insert("userId".to_string(), Value::String(user_id.to_string()));
    }
    claims.extend(payload);

    ctx.signer().sign(&claims).await
}
