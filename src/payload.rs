//! Provider auth payloads.
//!
//! The payload is the ad-hoc claim map embedded into the signed token. Field
//! names are the exact camelCase wire names token consumers parse
//! (`apiKey`, `awsAccessKeyId`, `baseURL`, ...), so they are spelled out here
//! rather than derived from struct fields.

use secrecy::ExposeSecret;
use serde_json::Value;

use crate::provider::Provider;
use crate::vaults::KeyVaults;

/// Ad-hoc claim map merged into the signed token.
pub type AuthPayload = serde_json::Map<String, Value>;

/// Merge `overlay` into `base`, overlay entries winning on key collision.
pub fn merge(base: &mut AuthPayload, overlay: AuthPayload) {
    base.extend(overlay);
}

fn insert(payload: &mut AuthPayload, key: &str, value: impl Into<String>) {
    payload.insert(key.to_string(), Value::String(value.into()));
}

fn insert_opt(payload: &mut AuthPayload, key: &str, value: Option<&str>) {
    if let Some(value) = value {
        insert(payload, key, value);
    }
}

/// Derive the claim fields required to authenticate against `provider`,
/// reading from the passed-in key-vault configuration.
///
/// Pure: no side effects, no errors. Unset vault fields are omitted from the
/// returned map.
///
/// The Bedrock and Wenxin synthetic `apiKey` fields concatenate their key
/// pairs in opposite orders (secret-before-access vs access-before-secret).
/// Token consumers split these strings positionally, so both orders are
/// load-bearing and must not be normalized.
pub fn provider_auth_payload(provider: &Provider, vaults: &KeyVaults) -> AuthPayload {
    let mut payload = AuthPayload::new();

    match provider {
        Provider::Bedrock => {
            let bedrock = &vaults.bedrock;
            let secret_access_key = bedrock
                .secret_access_key
                .as_ref()
                .map(|s| s.expose_secret())
                .unwrap_or_default();
            let access_key_id = bedrock.access_key_id.as_deref().unwrap_or_default();

            insert(
                &mut payload,
                "apiKey",
                format!("{secret_access_key}{access_key_id}"),
            );
            insert_opt(&mut payload, "awsAccessKeyId", bedrock.access_key_id.as_deref());
            insert_opt(&mut payload, "awsRegion", bedrock.region.as_deref());
            insert_opt(
                &mut payload,
                "awsSecretAccessKey",
                bedrock.secret_access_key.as_ref().map(|s| s.expose_secret()),
            );
            insert_opt(
                &mut payload,
                "awsSessionToken",
                bedrock.session_token.as_ref().map(|s| s.expose_secret()),
            );
        }

        Provider::Wenxin => {
            let wenxin = &vaults.wenxin;
            let access_key = wenxin.access_key.as_deref().unwrap_or_default();
            let secret_key = wenxin
                .secret_key
                .as_ref()
                .map(|s| s.expose_secret())
                .unwrap_or_default();

            insert(&mut payload, "apiKey", format!("{access_key}{secret_key}"));
            insert_opt(&mut payload, "wenxinAccessKey", wenxin.access_key.as_deref());
            insert_opt(
                &mut payload,
                "wenxinSecretKey",
                wenxin.secret_key.as_ref().map(|s| s.expose_secret()),
            );
        }

        Provider::Azure => {
            let azure = &vaults.azure;
            insert_opt(
                &mut payload,
                "apiKey",
                azure.api_key.as_ref().map(|s| s.expose_secret()),
            );
            insert_opt(&mut payload, "azureApiVersion", azure.api_version.as_deref());
            insert_opt(&mut payload, "baseURL", azure.endpoint.as_deref());
        }

        Provider::Ollama => {
            insert_opt(&mut payload, "baseURL", vaults.ollama.base_url.as_deref());
        }

        Provider::Cloudflare => {
            let cloudflare = &vaults.cloudflare;
            insert_opt(
                &mut payload,
                "apiKey",
                cloudflare.api_key.as_ref().map(|s| s.expose_secret()),
            );
            insert_opt(
                &mut payload,
                "cloudflareBaseURLOrAccountID",
                cloudflare.base_url_or_account_id.as_deref(),
            );
        }

        Provider::Custom(_) => {
            if let Some(vault) = vaults.vault(provider) {
                insert_opt(
                    &mut payload,
                    "apiKey",
                    vault.api_key.as_ref().map(|s| s.expose_secret()),
                );
                insert_opt(&mut payload, "baseURL", vault.base_url.as_deref());
            }
        }
    }

    payload
}
