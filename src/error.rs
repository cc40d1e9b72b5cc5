//! Error types for header construction and token signing.

use thiserror::Error;

/// Errors produced while building authenticated request headers.
///
/// Missing credential fields are never errors: they are omitted from the
/// signed payload instead. Failures here are limited to unusable signer
/// configuration and values that cannot be represented on the wire.
#[derive(Debug, Error)]
pub enum AuthError {
    /// Signer configuration is unusable (e.g. an empty signing secret).
    #[error("Configuration error: {0}")]
    ConfigurationError(String),

    /// Token signing or verification failed in the underlying JWT library.
    ///
    /// Propagated unchanged; this crate adds no retry or wrapping on top.
    #[error("Token signing error: {0}")]
    TokenSigning(#[from] jsonwebtoken::errors::Error),

    /// A produced token (or caller value) is not a valid HTTP header value.
    #[error("Invalid header value: {0}")]
    InvalidHeaderValue(String),
}
