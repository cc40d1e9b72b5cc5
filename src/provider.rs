//! Provider identifiers.

use serde::{Deserialize, Serialize};

/// Identifies the model provider a request authenticates against.
///
/// Providers with a dedicated credential shape get their own variant; every
/// other identifier maps to `Custom(name)` and resolves through the generic
/// key-vault lookup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Provider {
    Bedrock,
    Wenxin,
    Azure,
    Ollama,
    Cloudflare,
    Custom(String),
}

impl std::fmt::Display for Provider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Bedrock => write!(f, "bedrock"),
            Self::Wenxin => write!(f, "wenxin"),
            Self::Azure => write!(f, "azure"),
            Self::Ollama => write!(f, "ollama"),
            Self::Cloudflare => write!(f, "cloudflare"),
            Self::Custom(name) => write!(f, "{name}"),
        }
    }
}

impl Provider {
    /// Construct a `Provider` from a provider name string.
    /// Known names map to concrete variants; others map to `Custom(name)`.
    pub fn from_name(name: &str) -> Self {
        match name {
            "bedrock" => Self::Bedrock,
            "wenxin" => Self::Wenxin,
            "azure" => Self::Azure,
            "ollama" => Self::Ollama,
            "cloudflare" => Self::Cloudflare,
            other => Self::Custom(other.to_string()),
        }
    }
}
