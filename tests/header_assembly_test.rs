use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue};
use serde_json::Value;

use chat_auth::auth::TokenSigner;
use chat_auth::error::AuthError;
use chat_auth::payload::AuthPayload;
use chat_auth::prelude::*;

/// Signer that records the claim map it was handed, so tests can assert on
/// exactly what reaches the signing step. Clones share the recording.
#[derive(Clone)]
struct RecordingSigner {
    seen: Arc<Mutex<Option<AuthPayload>>>,
}

impl RecordingSigner {
    fn new() -> Self {
        Self {
            seen: Arc::new(Mutex::new(None)),
        }
    }

    fn seen(&self) -> AuthPayload {
        self.seen.lock().unwrap().clone().expect("sign was called")
    }
}

#[async_trait]
impl TokenSigner for RecordingSigner {
    async fn sign(&self, claims: &AuthPayload) -> Result<String, AuthError> {
        *self.seen.lock().unwrap() = Some(claims.clone());
        Ok("recorded-token".to_string())
    }
}

fn payload(entries: &[(&str, &str)]) -> AuthPayload {
    entries
        .iter()
        .map(|(k, v)| (k.to_string(), Value::String(v.to_string())))
        .collect()
}

#[tokio::test]
async fn auth_header_is_present_and_overrides_caller_header() {
    let mut caller = HeaderMap::new();
    caller.insert(AUTH_HEADER, HeaderValue::from_static("stale-token"));
    caller.insert("accept", HeaderValue::from_static("text/event-stream"));

    let ctx = AuthContext::new(JwtSigner::new("it-secret"));
    let headers = create_header_with_auth(&ctx, AuthParams::new().with_headers(caller))
        .await
        .unwrap();

    let token = headers.get(AUTH_HEADER).unwrap().to_str().unwrap();
    assert_ne!(token, "stale-token");
    assert_eq!(headers.get("accept").unwrap(), "text/event-stream");
}

#[tokio::test]
async fn without_provider_only_caller_payload_and_identity_are_signed() {
    // Vaults are fully populated, but no provider is named: none of it may
    // leak into the claim set.
    let vaults = KeyVaults::new()
        .with_password("code-1")
        .with_bedrock(
            BedrockKeyVault::new()
                .with_access_key_id("A")
                .with_secret_access_key("B"),
        )
        .with_provider("openai", GenericKeyVault::new().with_api_key("sk-x"));

    let recorder = RecordingSigner::new();
    let ctx = AuthContext::new(recorder.clone())
        .with_user_id("user-7")
        .with_vaults(vaults);

    let caller_payload = payload(&[("trace", "abc")]);
    create_header_with_auth(
        &ctx,
        AuthParams::new().with_payload(caller_payload.clone()),
    )
    .await
    .unwrap();

    let mut expected = payload(&[("accessCode", "code-1"), ("userId", "user-7")]);
    expected.extend(caller_payload);
    assert_eq!(recorder.seen(), expected);
}

#[tokio::test]
async fn registry_override_beats_derived_payload_beats_caller_payload() {
    let vaults = KeyVaults::new().with_provider(
        "openai",
        GenericKeyVault::new()
            .with_api_key("vault-key")
            .with_base_url("https://api.openai.com/v1"),
    );
    let registry = ProviderRegistry::new().with_key_vaults(
        &Provider::from_name("openai"),
        payload(&[("apiKey", "override-key")]),
    );

    let recorder = RecordingSigner::new();
    let ctx = AuthContext::new(recorder.clone())
        .with_vaults(vaults)
        .with_registry(registry);

    create_header_with_auth(
        &ctx,
        AuthParams::new()
            .with_provider(Provider::from_name("openai"))
            .with_payload(payload(&[("apiKey", "caller-key"), ("trace", "abc")])),
    )
    .await
    .unwrap();

    let seen = recorder.seen();
    // Override wins over both the vault-derived key and the caller's.
    assert_eq!(seen["apiKey"], "override-key");
    // Derived fields without an override survive.
    assert_eq!(seen["baseURL"], "https://api.openai.com/v1");
    // Caller fields without collisions survive.
    assert_eq!(seen["trace"], "abc");
}

#[tokio::test]
async fn issued_jwt_round_trips_provider_credentials() {
    let signer = JwtSigner::new("it-secret");
    let vaults = KeyVaults::new()
        .with_password("code-1")
        .with_bedrock(
            BedrockKeyVault::new()
                .with_access_key_id("A")
                .with_secret_access_key("B")
                .with_region("us-east-1"),
        );

    let ctx = AuthContext::new(signer.clone())
        .with_user_id("user-7")
        .with_vaults(vaults);

    let headers = create_header_with_auth(
        &ctx,
        AuthParams::new().with_provider(Provider::Bedrock),
    )
    .await
    .unwrap();

    let token = headers.get(AUTH_HEADER).unwrap().to_str().unwrap();
    let claims = signer.verify(token).unwrap();

    assert_eq!(claims["accessCode"], "code-1");
    assert_eq!(claims["userId"], "user-7");
    assert_eq!(claims["apiKey"], "BA");
    assert_eq!(claims["awsAccessKeyId"], "A");
    assert_eq!(claims["awsSecretAccessKey"], "B");
    assert_eq!(claims["awsRegion"], "us-east-1");
}

#[tokio::test]
async fn each_call_signs_a_fresh_token_from_current_state() {
    let signer = JwtSigner::new("it-secret");
    let ctx_a = AuthContext::new(signer.clone()).with_user_id("user-a");
    let ctx_b = AuthContext::new(signer.clone()).with_user_id("user-b");

    let headers_a = create_header_with_auth(&ctx_a, AuthParams::new()).await.unwrap();
    let headers_b = create_header_with_auth(&ctx_b, AuthParams::new()).await.unwrap();

    let claims_a = signer
        .verify(headers_a.get(AUTH_HEADER).unwrap().to_str().unwrap())
        .unwrap();
    let claims_b = signer
        .verify(headers_b.get(AUTH_HEADER).unwrap().to_str().unwrap())
        .unwrap();
    assert_eq!(claims_a["userId"], "user-a");
    assert_eq!(claims_b["userId"], "user-b");
}
