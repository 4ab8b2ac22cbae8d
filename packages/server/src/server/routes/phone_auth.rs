use axum::{extract::Extension, Json};
use serde_json::Value;

use glide::models::AuthenticateResponse;

use crate::domains::phone_auth::models::{CredentialProcessRequest, PreparationRequest};
use crate::domains::phone_auth::{service, PhoneAuthError};
use crate::server::app::AppState;

/// POST /api/phone-auth/prepare
///
/// Normalizes the inbound request and starts a Glide verification flow.
pub async fn prepare_handler(
    Extension(state): Extension<AppState>,
    Json(request): Json<PreparationRequest>,
) -> Result<Json<Value>, PhoneAuthError> {
    tracing::info!(use_case = %request.use_case, "/api/phone-auth/prepare");
    let response = service::prepare(&state.deps, request).await?;
    Ok(Json(response))
}

/// POST /api/phone-auth/process
///
/// Forwards the client-side credential to Glide and returns its verdict
/// verbatim, success indicator included.
pub async fn process_handler(
    Extension(state): Extension<AppState>,
    Json(request): Json<CredentialProcessRequest>,
) -> Result<Json<AuthenticateResponse>, PhoneAuthError> {
    tracing::info!("/api/phone-auth/process");
    let result = service::process_credential(&state.deps, request).await?;
    Ok(Json(result))
}
