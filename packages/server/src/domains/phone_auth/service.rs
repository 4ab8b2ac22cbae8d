//! Request normalization and credential processing.
//!
//! The two operations mirror the Glide flow pair: `prepare` reshapes an
//! inbound preparation request into the API's call format and starts the
//! flow, `process_credential` converts the opaque credential/session values
//! into the API's typed shapes and forwards them. Neither holds any state;
//! the only precondition is the initialization gate in [`ServerDeps`].

use serde_json::{Map, Value};

use glide::models::{
    AuthPrepareRequest, AuthPrepareResponse, AuthProcessRequest, AuthenticateResponse,
    ConsentData, DigitalCredentialResponse, PlmnDto, SessionPayload, UseCase,
};

use super::errors::PhoneAuthError;
use super::models::{CredentialProcessRequest, PreparationRequest};
use super::normalize::normalize_use_case;
use crate::kernel::ServerDeps;

/// Default carrier substituted when a request carries neither a phone number
/// nor a complete plmn pair (T-Mobile USA).
const DEFAULT_PLMN_MCC: &str = "310";
const DEFAULT_PLMN_MNC: &str = "160";

/// Map an inbound preparation request onto the Glide call format.
///
/// Pure construction; the network call happens in [`prepare`].
pub fn build_prepare_request(
    request: &PreparationRequest,
) -> Result<AuthPrepareRequest, PhoneAuthError> {
    let name = normalize_use_case(&request.use_case);
    let use_case = UseCase::from_name(&name)
        .ok_or_else(|| PhoneAuthError::InvalidUseCase(request.use_case.clone()))?;

    // The pair only counts when both parts are present
    let plmn = request.plmn.as_ref().and_then(|plmn| {
        match (plmn.mcc.as_ref(), plmn.mnc.as_ref()) {
            (Some(mcc), Some(mnc)) => Some(PlmnDto::new(mcc.clone(), mnc.clone())),
            _ => None,
        }
    });

    // Neither a phone number nor a complete pair: substitute the default
    // carrier instead of rejecting the request
    let plmn = match (&request.phone_number, plmn) {
        (None, None) => Some(PlmnDto::new(DEFAULT_PLMN_MCC, DEFAULT_PLMN_MNC)),
        (_, plmn) => plmn,
    };

    let consent_data = request.consent_data.as_ref().map(|consent| ConsentData {
        consent_text: consent.consent_text.clone(),
        policy_link: consent.policy_link.clone(),
        policy_text: consent.policy_text.clone(),
    });

    Ok(AuthPrepareRequest {
        use_case,
        phone_number: request.phone_number.clone(),
        plmn,
        consent_data,
    })
}

/// Normalize a preparation request, invoke the Glide prepare flow, and shape
/// the response for the frontend.
pub async fn prepare(
    deps: &ServerDeps,
    request: PreparationRequest,
) -> Result<Value, PhoneAuthError> {
    let magic_auth = deps
        .magic_auth
        .as_ref()
        .ok_or(PhoneAuthError::NotInitialized)?;

    let payload = build_prepare_request(&request)?;
    tracing::debug!(
        use_case = payload.use_case.as_str(),
        has_phone = payload.phone_number.is_some(),
        "calling magic-auth prepare"
    );

    let response = magic_auth.prepare(&payload).await?;
    shape_prepare_response(response)
}

/// Convert the opaque credential/session values, invoke the Glide process
/// flow, and return its verdict verbatim.
pub async fn process_credential(
    deps: &ServerDeps,
    request: CredentialProcessRequest,
) -> Result<AuthenticateResponse, PhoneAuthError> {
    let magic_auth = deps
        .magic_auth
        .as_ref()
        .ok_or(PhoneAuthError::NotInitialized)?;

    let credential_response: DigitalCredentialResponse = serde_json::from_value(request.response)
        .map_err(|source| PhoneAuthError::MalformedPayload {
            field: "response",
            source,
        })?;
    let session: SessionPayload = serde_json::from_value(request.session).map_err(|source| {
        PhoneAuthError::MalformedPayload {
            field: "session",
            source,
        }
    })?;

    let payload = AuthProcessRequest {
        credential_response,
        session,
        phone_number: request.phone_number,
    };

    tracing::debug!("calling magic-auth process-credential");
    Ok(magic_auth.process_credential(&payload).await?)
}

/// Shape a prepare response for the frontend.
///
/// Three cases: an eligibility refusal becomes CarrierNotSupported, the
/// current format (`protocol` + `data`) passes through untouched, and the
/// legacy `auth_request` envelope is lifted into the current format.
fn shape_prepare_response(response: AuthPrepareResponse) -> Result<Value, PhoneAuthError> {
    if response.eligible == Some(false) {
        return Err(PhoneAuthError::CarrierNotSupported {
            carrier_name: response.carrier_name,
            reason: response.reason,
        });
    }

    if response.protocol.is_some() && response.data.is_some() {
        return serde_json::to_value(&response)
            .map_err(|e| PhoneAuthError::Sdk(anyhow::Error::new(e)));
    }

    if let Some(envelope) = response.auth_request {
        let mut shaped = Map::new();
        shaped.insert(
            "protocol".to_string(),
            Value::String(
                envelope
                    .protocol
                    .unwrap_or_else(|| "secure-auth-v1".to_string()),
            ),
        );
        if let Some(request) = envelope.request {
            shaped.insert("data".to_string(), request);
        }
        if let Some(session) = envelope.session {
            shaped.insert("session".to_string(), session);
        }
        return Ok(Value::Object(shaped));
    }

    Err(PhoneAuthError::Sdk(anyhow::anyhow!(
        "unexpected prepare response format from Glide"
    )))
}
