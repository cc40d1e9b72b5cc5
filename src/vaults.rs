//! Per-provider key-vault configuration.
//!
//! A key vault is the bag of locally stored credentials and settings for one
//! provider. Vaults deserialize from the camelCase JSON shape the client
//! persists, and every field is optional: an unset field is simply left out
//! of the signed payload later on.
//!
//! Secret-bearing fields are stored as [`SecretString`] so accidental `Debug`
//! output stays redacted.

use std::collections::HashMap;

use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;

use crate::provider::Provider;

/// AWS Bedrock credentials and region settings.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct BedrockKeyVault {
    pub access_key_id: Option<String>,
    pub secret_access_key: Option<SecretString>,
    pub region: Option<String>,
    pub session_token: Option<SecretString>,
}

impl BedrockKeyVault {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_access_key_id(mut self, access_key_id: impl Into<String>) -> Self {
        self.access_key_id = Some(access_key_id.into());
        self
    }

    pub fn with_secret_access_key(mut self, secret_access_key: impl Into<String>) -> Self {
        self.secret_access_key = Some(SecretString::from(secret_access_key.into()));
        self
    }

    pub fn with_region(mut self, region: impl Into<String>) -> Self {
        self.region = Some(region.into());
        self
    }

    pub fn with_session_token(mut self, session_token: impl Into<String>) -> Self {
        self.session_token = Some(SecretString::from(session_token.into()));
        self
    }
}

/// Baidu Wenxin (ERNIE) access/secret key pair.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct WenxinKeyVault {
    pub access_key: Option<String>,
    pub secret_key: Option<SecretString>,
}

impl WenxinKeyVault {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_access_key(mut self, access_key: impl Into<String>) -> Self {
        self.access_key = Some(access_key.into());
        self
    }

    pub fn with_secret_key(mut self, secret_key: impl Into<String>) -> Self {
        self.secret_key = Some(SecretString::from(secret_key.into()));
        self
    }
}

/// Azure OpenAI key, API version and resource endpoint.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AzureKeyVault {
    pub api_key: Option<SecretString>,
    pub api_version: Option<String>,
    pub endpoint: Option<String>,
}

impl AzureKeyVault {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(SecretString::from(api_key.into()));
        self
    }

    pub fn with_api_version(mut self, api_version: impl Into<String>) -> Self {
        self.api_version = Some(api_version.into());
        self
    }

    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = Some(endpoint.into());
        self
    }
}

/// Ollama endpoint. Local deployments carry no key material.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct OllamaKeyVault {
    #[serde(rename = "baseURL")]
    pub base_url: Option<String>,
}

impl OllamaKeyVault {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }
}

/// Cloudflare Workers AI key plus either a gateway base URL or an account id.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CloudflareKeyVault {
    pub api_key: Option<SecretString>,
    #[serde(rename = "baseURLOrAccountID")]
    pub base_url_or_account_id: Option<String>,
}

impl CloudflareKeyVault {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(SecretString::from(api_key.into()));
        self
    }

    pub fn with_base_url_or_account_id(mut self, value: impl Into<String>) -> Self {
        self.base_url_or_account_id = Some(value.into());
        self
    }
}

/// Credential shape shared by every provider without a dedicated vault:
/// an API key and an optional endpoint override.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct GenericKeyVault {
    pub api_key: Option<SecretString>,
    #[serde(rename = "baseURL")]
    pub base_url: Option<String>,
}

impl GenericKeyVault {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(SecretString::from(api_key.into()));
        self
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }
}

/// The user's complete key-vault configuration.
///
/// Providers with a dedicated credential shape have a typed field; all other
/// providers live in the flattened map keyed by provider name. `password` is
/// the instance access code embedded into every signed token.
///
/// Read-only from this crate's perspective: header assembly takes the vaults
/// by reference and never writes back.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct KeyVaults {
    pub password: Option<SecretString>,
    pub bedrock: BedrockKeyVault,
    pub wenxin: WenxinKeyVault,
    pub azure: AzureKeyVault,
    pub ollama: OllamaKeyVault,
    pub cloudflare: CloudflareKeyVault,
    #[serde(flatten)]
    pub providers: HashMap<String, GenericKeyVault>,
}

impl KeyVaults {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_password(mut self, password: impl Into<String>) -> Self {
        self.password = Some(SecretString::from(password.into()));
        self
    }

    pub fn with_bedrock(mut self, bedrock: BedrockKeyVault) -> Self {
        self.bedrock = bedrock;
        self
    }

    pub fn with_wenxin(mut self, wenxin: WenxinKeyVault) -> Self {
        self.wenxin = wenxin;
        self
    }

    pub fn with_azure(mut self, azure: AzureKeyVault) -> Self {
        self.azure = azure;
        self
    }

    pub fn with_ollama(mut self, ollama: OllamaKeyVault) -> Self {
        self.ollama = ollama;
        self
    }

    pub fn with_cloudflare(mut self, cloudflare: CloudflareKeyVault) -> Self {
        self.cloudflare = cloudflare;
        self
    }

    /// Register the generic vault for a provider without a dedicated shape.
    pub fn with_provider(mut self, provider: impl Into<String>, vault: GenericKeyVault) -> Self {
        self.providers.insert(provider.into(), vault);
        self
    }

    /// Generic vault lookup keyed by the provider's wire name.
    pub fn vault(&self, provider: &Provider) -> Option<&GenericKeyVault> {
        self.providers.get(&provider.to_string())
    }

    /// The instance access code, if one is configured.
    pub fn access_code(&self) -> Option<&str> {
        self.password.as_ref().map(|p| p.expose_secret())
    }
}
