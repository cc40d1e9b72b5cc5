//! Header assembly for outgoing requests.

use reqwest::header::{HeaderMap, HeaderValue};

use crate::auth::create_auth_token;
use crate::context::AuthContext;
use crate::error::AuthError;
use crate::payload::{self, AuthPayload, provider_auth_payload};
use crate::provider::Provider;

/// Name of the request header carrying the signed auth token.
pub const AUTH_HEADER: &str = "x-chat-auth";

/// Inputs to [`create_header_with_auth`]. All fields optional.
#[derive(Debug, Clone, Default)]
pub struct AuthParams {
    headers: Option<HeaderMap>,
    payload: Option<AuthPayload>,
    provider: Option<Provider>,
}

impl AuthParams {
    pub fn new() -> Self {
        Self::default()
    }

    /// Caller headers to merge the auth header into.
    pub fn with_headers(mut self, headers: HeaderMap) -> Self {
        self.headers = Some(headers);
        self
    }

    /// Extra claims to embed into the signed token.
    pub fn with_payload(mut self, payload: AuthPayload) -> Self {
        self.payload = Some(payload);
        self
    }

    /// Provider whose credentials should be embedded.
    pub fn with_provider(mut self, provider: Provider) -> Self {
        self.provider = Some(provider);
        self
    }
}

/// Build the header set for an outgoing request.
///
/// Starting from the caller payload, merges in the provider's derived
/// credential payload and then the provider-registry override (override >
/// derived > caller on key collision), signs the result, and returns the
/// caller headers with [`AUTH_HEADER`] inserted. The token header replaces
/// any caller-supplied header of the same name.
///
/// The signing step is the only await point; each call signs a fresh token
/// from the state the context currently holds.
pub async fn create_header_with_auth(
    ctx: &AuthContext,
    params: AuthParams,
) -> Result<HeaderMap, AuthError> {
    let mut claims = params.payload.unwrap_or_default();

    if let Some(provider) = &params.provider {
        payload::merge(&mut claims, provider_auth_payload(provider, ctx.vaults()));
        if let Some(key_vaults) = ctx.registry().key_vaults(provider) {
            payload::merge(&mut claims, key_vaults.clone());
        }
        tracing::debug!(provider = %provider, claims = claims.len(), "merged provider auth payload");
    }

    let token = create_auth_token(ctx, claims).await?;

    let mut headers = params.headers.unwrap_or_default();
    let value = HeaderValue::from_str(&token).map_err(|e| {
        AuthError::InvalidHeaderValue(format!("auth token is not a valid header value: {e}"))
    })?;
    headers.insert(AUTH_HEADER, value);
    Ok(headers)
}
