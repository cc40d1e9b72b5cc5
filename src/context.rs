//! Explicit client auth state.

use std::sync::Arc;

use crate::auth::TokenSigner;
use crate::registry::ProviderRegistry;
use crate::vaults::KeyVaults;

/// Everything header assembly reads: the user identity, the key-vault
/// configuration, the provider-registry overrides, and the token signer.
///
/// The context is plain data passed by reference into each call; nothing in
/// this crate holds it globally or writes to it. Clone is cheap (the signer
/// is shared behind an `Arc`).
#[derive(Clone)]
pub struct AuthContext {
    user_id: Option<String>,
    vaults: KeyVaults,
    registry: ProviderRegistry,
    signer: Arc<dyn TokenSigner>,
}

impl std::fmt::Debug for AuthContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthContext")
            .field("user_id", &self.user_id)
            .field("vaults", &self.vaults)
            .field("registry", &self.registry)
            .finish()
    }
}

impl AuthContext {
    /// Create a context around a signer, with empty configuration.
    pub fn new(signer: impl TokenSigner + 'static) -> Self {
        Self {
            user_id: None,
            vaults: KeyVaults::default(),
            registry: ProviderRegistry::default(),
            signer: Arc::new(signer),
        }
    }

    pub fn with_user_id(mut self, user_id: impl Into<String>) -> Self {
        self.user_id = Some(user_id.into());
        self
    }

    pub fn with_vaults(mut self, vaults: KeyVaults) -> Self {
        self.vaults = vaults;
        self
    }

    pub fn with_registry(mut self, registry: ProviderRegistry) -> Self {
        self.registry = registry;
        self
    }

    pub fn user_id(&self) -> Option<&str> {
        self.user_id.as_deref()
    }

    pub fn vaults(&self) -> &KeyVaults {
        &self.vaults
    }

    pub fn registry(&self) -> &ProviderRegistry {
        &self.registry
    }

    pub fn signer(&self) -> &dyn TokenSigner {
        self.signer.as_ref()
    }
}
