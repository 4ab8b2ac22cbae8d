//! Wire types for the Glide magic-auth API.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Verification flow requested by the caller.
///
/// The API receives these in SCREAMING_SNAKE_CASE (`GET_PHONE_NUMBER`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum UseCase {
    GetPhoneNumber,
    VerifyPhoneNumber,
}

impl UseCase {
    /// Look up a use case by its wire name.
    ///
    /// Returns `None` for names outside the enumeration; callers decide
    /// whether that is an error.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "GET_PHONE_NUMBER" => Some(UseCase::GetPhoneNumber),
            "VERIFY_PHONE_NUMBER" => Some(UseCase::VerifyPhoneNumber),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            UseCase::GetPhoneNumber => "GET_PHONE_NUMBER",
            UseCase::VerifyPhoneNumber => "VERIFY_PHONE_NUMBER",
        }
    }
}

/// Mobile carrier identifier (mobile country code + mobile network code).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlmnDto {
    pub mcc: String,
    pub mnc: String,
}

impl PlmnDto {
    pub fn new(mcc: impl Into<String>, mnc: impl Into<String>) -> Self {
        Self {
            mcc: mcc.into(),
            mnc: mnc.into(),
        }
    }
}

/// User-consent text shown during the verification flow.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConsentData {
    pub consent_text: String,
    pub policy_link: String,
    pub policy_text: String,
}

/// Request body for `MagicAuthService::prepare`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthPrepareRequest {
    pub use_case: UseCase,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub plmn: Option<PlmnDto>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub consent_data: Option<ConsentData>,
}

/// Credential payload produced by the client-side digital-credential
/// exchange. `data` carries the protocol-specific body untouched.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DigitalCredentialResponse {
    pub protocol: String,
    pub data: Value,
}

/// Session payload returned by `prepare` and echoed back on `process`.
///
/// Only `session_id` is required; any other fields the API put in the
/// session travel through the flatten map untouched.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionPayload {
    pub session_id: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Request body for `MagicAuthService::process_credential`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthProcessRequest {
    pub credential_response: DigitalCredentialResponse,
    pub session: SessionPayload,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,
}

/// Older prepare response envelope still emitted by some API versions.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthRequestEnvelope {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub protocol: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub request: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub session: Option<Value>,
}

/// Response of `MagicAuthService::prepare`.
///
/// Three shapes share this type: the current format (`protocol` + `data`),
/// the legacy `auth_request` envelope, and an eligibility refusal
/// (`eligible: false` with an optional carrier name and reason).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthPrepareResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub protocol: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub session: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub eligible: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub carrier_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auth_request: Option<AuthRequestEnvelope>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Response of `MagicAuthService::process_credential`, returned to callers
/// verbatim. The API's own `success` indicator is the source of truth;
/// unknown fields are preserved through the flatten map.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthenticateResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub success: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub verified: Option<bool>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_use_case_lookup_known_names() {
        assert_eq!(
            UseCase::from_name("GET_PHONE_NUMBER"),
            Some(UseCase::GetPhoneNumber)
        );
        assert_eq!(
            UseCase::from_name("VERIFY_PHONE_NUMBER"),
            Some(UseCase::VerifyPhoneNumber)
        );
    }

    #[test]
    fn test_use_case_lookup_rejects_unknown_and_unnormalized() {
        assert_eq!(UseCase::from_name("GetPhoneNumber"), None);
        assert_eq!(UseCase::from_name("DELETE_PHONE_NUMBER"), None);
        assert_eq!(UseCase::from_name(""), None);
    }

    #[test]
    fn test_prepare_request_omits_absent_optionals() {
        let request = AuthPrepareRequest {
            use_case: UseCase::GetPhoneNumber,
            phone_number: None,
            plmn: Some(PlmnDto::new("310", "160")),
            consent_data: None,
        };

        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(
            value,
            json!({
                "use_case": "GET_PHONE_NUMBER",
                "plmn": { "mcc": "310", "mnc": "160" }
            })
        );
    }

    #[test]
    fn test_session_payload_requires_session_id() {
        let missing: Result<SessionPayload, _> =
            serde_json::from_value(json!({ "nonce": "abc" }));
        assert!(missing.is_err());

        let session: SessionPayload =
            serde_json::from_value(json!({ "session_id": "sess_1", "nonce": "abc" }))
                .unwrap();
        assert_eq!(session.session_id, "sess_1");
        assert_eq!(session.extra.get("nonce"), Some(&json!("abc")));
    }

    #[test]
    fn test_authenticate_response_preserves_unknown_fields() {
        let response: AuthenticateResponse = serde_json::from_value(json!({
            "success": true,
            "phone_number": "+15551234567",
            "carrier": "T-Mobile USA"
        }))
        .unwrap();

        assert_eq!(response.success, Some(true));
        let back = serde_json::to_value(&response).unwrap();
        assert_eq!(back["carrier"], json!("T-Mobile USA"));
    }
}
