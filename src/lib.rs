//! # Chat Auth - Signed Request Headers for Multi-Provider Chat Clients
//!
//! This crate builds per-request authentication headers for chat clients that
//! talk to many LLM providers. It selects provider-specific credentials from
//! explicit key-vault configuration, shapes them into a claim payload, embeds
//! the payload together with the user identity into a signed token, and
//! returns a header set carrying that token.
//!
#![deny(unsafe_code)]

//! ## Quick Start
//!
//! ```rust,no_run
//! use chat_auth::prelude::*;
//!
//! # async fn run() -> Result<(), AuthError> {
//! let vaults = KeyVaults::new()
//!     .with_password("instance-access-code")
//!     .with_bedrock(
//!         BedrockKeyVault::new()
//!             .with_access_key_id("AKIA...")
//!             .with_secret_access_key("wJal...")
//!             .with_region("us-east-1"),
//!     );
//!
//! let ctx = AuthContext::new(JwtSigner::new("signing-secret"))
//!     .with_user_id("user-1")
//!     .with_vaults(vaults);
//!
//! let headers = create_header_with_auth(
//!     &ctx,
//!     AuthParams::new().with_provider(Provider::Bedrock),
//! )
//! .await?;
//! assert!(headers.contains_key(AUTH_HEADER));
//! # Ok(())
//! # }
//! ```
//!
//! ## Design
//!
//! - **Explicit state**: everything a call reads lives in an [`AuthContext`]
//!   passed by reference; there are no ambient singletons.
//! - **Provider dispatch**: known providers are an enum with one credential
//!   shape per variant and an explicit `Custom` fallback, so the selector
//!   stays exhaustiveness-checked as providers are added.
//! - **Opaque signing**: token production sits behind the async
//!   [`auth::TokenSigner`] seam; [`auth::jwt::JwtSigner`] is the default.
//! - **Silent degradation**: unset credential fields are omitted from the
//!   signed payload rather than raising errors.

pub mod auth;
pub mod context;
pub mod error;
pub mod headers;
pub mod payload;
pub mod provider;
pub mod registry;
pub mod vaults;

/// Common imports for building authenticated headers.
pub mod prelude {
    pub use crate::auth::jwt::JwtSigner;
    pub use crate::auth::{StaticTokenSigner, TokenSigner, create_auth_token};
    pub use crate::context::AuthContext;
    pub use crate::error::AuthError;
    pub use crate::headers::{AUTH_HEADER, AuthParams, create_header_with_auth};
    pub use crate::payload::{AuthPayload, provider_auth_payload};
    pub use crate::provider::Provider;
    pub use crate::registry::ProviderRegistry;
    pub use crate::vaults::{
        AzureKeyVault, BedrockKeyVault, CloudflareKeyVault, GenericKeyVault, KeyVaults,
        OllamaKeyVault, WenxinKeyVault,
    };
}
