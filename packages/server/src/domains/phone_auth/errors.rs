use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use thiserror::Error;

/// Failures the phone-auth relay surfaces to the HTTP boundary
#[derive(Error, Debug)]
pub enum PhoneAuthError {
    #[error("Glide client not initialized. Check your credentials.")]
    NotInitialized,

    #[error("Unknown use case: {0}")]
    InvalidUseCase(String),

    #[error("Malformed {field} payload: {source}")]
    MalformedPayload {
        field: &'static str,
        #[source]
        source: serde_json::Error,
    },

    #[error("Carrier not supported")]
    CarrierNotSupported {
        carrier_name: Option<String>,
        reason: Option<String>,
    },

    #[error("Glide call failed: {0}")]
    Sdk(#[from] anyhow::Error),
}

impl IntoResponse for PhoneAuthError {
    fn into_response(self) -> Response {
        match self {
            PhoneAuthError::NotInitialized => {
                tracing::warn!("phone-auth call rejected: client not initialized");
                error_response(StatusCode::SERVICE_UNAVAILABLE, &self.to_string())
            }
            PhoneAuthError::InvalidUseCase(_) | PhoneAuthError::MalformedPayload { .. } => {
                tracing::warn!(error = %self, "rejecting phone-auth request");
                error_response(StatusCode::BAD_REQUEST, &self.to_string())
            }
            PhoneAuthError::CarrierNotSupported {
                carrier_name,
                reason,
            } => {
                tracing::warn!(?carrier_name, ?reason, "carrier not eligible");
                let body = json!({
                    "error": "CARRIER_NOT_SUPPORTED",
                    "message": reason
                        .clone()
                        .unwrap_or_else(|| "This carrier is not supported".to_string()),
                    "details": {
                        "eligible": false,
                        "carrier_name": carrier_name,
                        "reason": reason,
                    },
                });
                (StatusCode::BAD_REQUEST, Json(body)).into_response()
            }
            PhoneAuthError::Sdk(ref error) => {
                tracing::error!(error = %error, "Glide call failed");
                error_response(StatusCode::INTERNAL_SERVER_ERROR, &self.to_string())
            }
        }
    }
}

fn error_response(status: StatusCode, message: &str) -> Response {
    (status, Json(json!({ "error": message }))).into_response()
}
