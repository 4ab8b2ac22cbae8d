//! Integration tests for the phone-auth relay.
//!
//! Drives the domain service and handlers through the same ServerDeps the
//! HTTP boundary uses, with a mock magic-auth client recording exactly what
//! the relay sent to the API.

use std::sync::Arc;

use axum::extract::Extension;
use serde_json::json;

use glide::models::{AuthenticateResponse, PlmnDto, UseCase};
use server_core::domains::phone_auth::models::{CredentialProcessRequest, PreparationRequest};
use server_core::domains::phone_auth::{service, PhoneAuthError};
use server_core::kernel::{BaseMagicAuthService, MockMagicAuthService, ServerDeps};
use server_core::server::app::{build_deps, AppState};
use server_core::server::routes::health_handler;
use server_core::Config;

// ============================================================================
// Test Helpers
// ============================================================================

fn deps_with_mock(mock: &Arc<MockMagicAuthService>) -> ServerDeps {
    let magic_auth: Arc<dyn BaseMagicAuthService> = mock.clone();
    ServerDeps::new(Some(magic_auth), true, true)
}

fn config_without_credentials() -> Config {
    Config {
        port: 3001,
        glide_client_id: None,
        glide_client_secret: None,
        glide_api_base_url: None,
    }
}

fn preparation_request(body: serde_json::Value) -> PreparationRequest {
    serde_json::from_value(body).expect("valid preparation request")
}

fn credential_process_request(body: serde_json::Value) -> CredentialProcessRequest {
    serde_json::from_value(body).expect("valid process request")
}

// ============================================================================
// Prepare flow
// ============================================================================

#[tokio::test]
async fn test_get_phone_number_defaults_carrier_and_omits_consent() {
    let mock = Arc::new(MockMagicAuthService::new());
    let deps = deps_with_mock(&mock);

    let request = preparation_request(json!({ "use_case": "GetPhoneNumber" }));
    let shaped = service::prepare(&deps, request).await.unwrap();

    // The relay normalized the tag, substituted the default carrier, and
    // sent no consent block
    let calls = mock.prepare_calls();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].use_case, UseCase::GetPhoneNumber);
    assert_eq!(calls[0].use_case.as_str(), "GET_PHONE_NUMBER");
    assert_eq!(calls[0].plmn, Some(PlmnDto::new("310", "160")));
    assert!(calls[0].phone_number.is_none());
    assert!(calls[0].consent_data.is_none());

    // And passed the well-formed prepare response through
    assert!(shaped.get("protocol").is_some());
    assert!(shaped.get("data").is_some());
}

#[tokio::test]
async fn test_verify_phone_number_passes_phone_through_without_default() {
    let mock = Arc::new(MockMagicAuthService::new());
    let deps = deps_with_mock(&mock);

    let request = preparation_request(json!({
        "use_case": "VerifyPhoneNumber",
        "phone_number": "+15551234567",
    }));
    service::prepare(&deps, request).await.unwrap();

    let calls = mock.prepare_calls();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].use_case, UseCase::VerifyPhoneNumber);
    assert_eq!(calls[0].phone_number.as_deref(), Some("+15551234567"));
    assert_eq!(calls[0].plmn, None);
}

#[tokio::test]
async fn test_invalid_use_case_never_reaches_the_api() {
    let mock = Arc::new(MockMagicAuthService::new());
    let deps = deps_with_mock(&mock);

    let request = preparation_request(json!({ "use_case": "RevokePhoneNumber" }));
    let error = service::prepare(&deps, request).await.unwrap_err();

    assert!(matches!(error, PhoneAuthError::InvalidUseCase(_)));
    assert_eq!(mock.prepare_call_count(), 0);
}

// ============================================================================
// Process flow
// ============================================================================

#[tokio::test]
async fn test_process_returns_api_verdict_verbatim() {
    let mock = Arc::new(
        MockMagicAuthService::new().with_process_response(AuthenticateResponse {
            success: Some(true),
            phone_number: Some("+15551234567".to_string()),
            verified: Some(true),
            extra: {
                let mut extra = serde_json::Map::new();
                extra.insert("transaction_id".to_string(), json!("txn_42"));
                extra
            },
        }),
    );
    let deps = deps_with_mock(&mock);

    let request = credential_process_request(json!({
        "response": { "protocol": "openid4vp", "data": { "vp_token": "tok" } },
        "session": { "session_id": "sess_1" },
        "phoneNumber": "+15551234567",
    }));

    let result = service::process_credential(&deps, request).await.unwrap();
    let body = serde_json::to_value(&result).unwrap();

    // No filtering, no re-wrapping: the API's own fields survive untouched
    assert_eq!(body["success"], json!(true));
    assert_eq!(body["verified"], json!(true));
    assert_eq!(body["transaction_id"], json!("txn_42"));

    let calls = mock.process_calls();
    assert_eq!(calls[0].phone_number.as_deref(), Some("+15551234567"));
}

#[tokio::test]
async fn test_malformed_opaque_values_fail_before_the_api_call() {
    let mock = Arc::new(MockMagicAuthService::new());
    let deps = deps_with_mock(&mock);

    let request = credential_process_request(json!({
        "response": { "data": {} },
        "session": { "session_id": "sess_1" },
    }));

    let error = service::process_credential(&deps, request)
        .await
        .unwrap_err();
    assert!(matches!(error, PhoneAuthError::MalformedPayload { .. }));
    assert_eq!(mock.process_call_count(), 0);
}

// ============================================================================
// Initialization gate
// ============================================================================

#[tokio::test]
async fn test_missing_credentials_gate_both_operations() {
    // build_deps with no credentials must not construct any client
    let deps = build_deps(&config_without_credentials());
    assert!(!deps.initialized());

    let prepare_error = service::prepare(
        &deps,
        preparation_request(json!({ "use_case": "GetPhoneNumber" })),
    )
    .await
    .unwrap_err();
    assert!(matches!(prepare_error, PhoneAuthError::NotInitialized));

    let process_error = service::process_credential(
        &deps,
        credential_process_request(json!({
            "response": { "protocol": "openid4vp", "data": {} },
            "session": { "session_id": "sess_1" },
        })),
    )
    .await
    .unwrap_err();
    assert!(matches!(process_error, PhoneAuthError::NotInitialized));
}

#[tokio::test]
async fn test_health_reports_credential_state() {
    let deps = build_deps(&config_without_credentials());
    let state = AppState {
        deps: Arc::new(deps),
    };

    let response = health_handler(Extension(state)).await;
    let body = serde_json::to_value(&response.0).unwrap();

    assert_eq!(body["status"], json!("ok"));
    assert_eq!(body["glide_initialized"], json!(false));
    assert_eq!(body["env"]["has_client_id"], json!(false));
    assert_eq!(body["env"]["has_client_secret"], json!(false));
}
