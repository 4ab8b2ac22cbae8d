//! Inbound request bodies for the phone-auth endpoints.
//!
//! The frontend speaks a mix of snake_case and camelCase; these types pin
//! down the wire names exactly so the mapping onto the Glide shapes stays in
//! one place (the domain service).

use serde::Deserialize;
use serde_json::Value;

/// Body of POST /api/phone-auth/prepare.
#[derive(Debug, Clone, Deserialize)]
pub struct PreparationRequest {
    /// Mixed-case tag such as "GetPhoneNumber"; normalized before the
    /// enumeration lookup.
    pub use_case: String,
    #[serde(default)]
    pub phone_number: Option<String>,
    #[serde(default)]
    pub plmn: Option<Plmn>,
    #[serde(default)]
    pub consent_data: Option<ConsentDataInput>,
}

/// Carrier identifier as the frontend sends it. Either part may be missing;
/// the pair only counts when both are present.
#[derive(Debug, Clone, Deserialize)]
pub struct Plmn {
    #[serde(default)]
    pub mcc: Option<String>,
    #[serde(default)]
    pub mnc: Option<String>,
}

/// Consent block, camelCase on the wire.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConsentDataInput {
    pub consent_text: String,
    pub policy_link: String,
    pub policy_text: String,
}

/// Body of POST /api/phone-auth/process.
///
/// `response` and `session` stay opaque here; the domain service converts
/// them to the Glide shapes and rejects them as malformed if required
/// sub-fields are missing.
#[derive(Debug, Clone, Deserialize)]
pub struct CredentialProcessRequest {
    pub response: Value,
    pub session: Value,
    #[serde(default, rename = "phoneNumber")]
    pub phone_number: Option<String>,
}
