//! Provider-registry key-vault overrides.

use std::collections::HashMap;

use serde::Deserialize;

use crate::payload::AuthPayload;
use crate::provider::Provider;

/// Per-provider key-vault overrides from the provider registry.
///
/// Entries are raw claim maps keyed by provider wire name and are merged over
/// the derived provider payload during header assembly, so a registry entry
/// can override any derived field (or add fields the derived shape lacks).
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProviderRegistry {
    #[serde(flatten)]
    key_vaults: HashMap<String, AuthPayload>,
}

impl ProviderRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register the key-vault override map for a provider.
    pub fn with_key_vaults(mut self, provider: &Provider, key_vaults: AuthPayload) -> Self {
        self.key_vaults.insert(provider.to_string(), key_vaults);
        self
    }

    /// The key-vault override map for `provider`, if one is registered.
    pub fn key_vaults(&self, provider: &Provider) -> Option<&AuthPayload> {
        self.key_vaults.get(&provider.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;

    #[test]
    fn deserializes_flattened_provider_map() {
        let json = r#"{
            "openai": { "apiKey": "sk-override", "baseURL": "https://proxy.example.com/v1" },
            "ollama": { "baseURL": "http://10.0.0.2:11434" }
        }"#;

        let registry: ProviderRegistry = serde_json::from_str(json).unwrap();
        let openai = registry
            .key_vaults(&Provider::from_name("openai"))
            .unwrap();
        assert_eq!(openai["apiKey"], "sk-override");
        assert!(registry.key_vaults(&Provider::Azure).is_none());
    }

    #[test]
    fn lookup_uses_provider_wire_name() {
        let mut vaults = AuthPayload::new();
        vaults.insert("baseURL".into(), Value::String("http://10.0.0.2:11434".into()));

        let registry = ProviderRegistry::new().with_key_vaults(&Provider::Ollama, vaults);
        assert!(registry.key_vaults(&Provider::Ollama).is_some());
        assert!(registry.key_vaults(&Provider::Bedrock).is_none());
    }
}
