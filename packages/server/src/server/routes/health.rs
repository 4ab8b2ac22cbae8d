use axum::{extract::Extension, Json};
use serde::Serialize;

use crate::server::app::AppState;

#[derive(Serialize)]
pub struct HealthResponse {
    status: String,
    glide_initialized: bool,
    env: EnvHealth,
}

#[derive(Serialize)]
pub struct EnvHealth {
    has_client_id: bool,
    has_client_secret: bool,
}

/// Health check endpoint
///
/// Reports whether the Glide client came up at startup and which of the two
/// credentials were present, so a misconfigured deployment is visible
/// without tailing logs.
pub async fn health_handler(Extension(state): Extension<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        glide_initialized: state.deps.initialized(),
        env: EnvHealth {
            has_client_id: state.deps.has_client_id,
            has_client_secret: state.deps.has_client_secret,
        },
    })
}
