//! Application setup and server configuration.

use std::sync::Arc;

use axum::{
    extract::Extension,
    routing::{get, post},
    Router,
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use glide::{GlideClient, GlideOptions};

use crate::config::Config;
use crate::kernel::{BaseMagicAuthService, GlideAdapter, ServerDeps};
use crate::server::routes::{health_handler, prepare_handler, process_handler};

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub deps: Arc<ServerDeps>,
}

/// Construct the dependency container from configuration.
///
/// The Glide client is built exactly once, here, and only when both
/// credentials are present; otherwise the phone-auth endpoints stay gated
/// behind NotInitialized for the lifetime of the process.
pub fn build_deps(config: &Config) -> ServerDeps {
    let has_client_id = config.glide_client_id.is_some();
    let has_client_secret = config.glide_client_secret.is_some();

    let magic_auth: Option<Arc<dyn BaseMagicAuthService>> = match (
        config.glide_client_id.clone(),
        config.glide_client_secret.clone(),
    ) {
        (Some(client_id), Some(client_secret)) => {
            let options = GlideOptions {
                client_id,
                client_secret,
                api_base_url: config.glide_api_base_url.clone(),
            };
            match GlideClient::new(options) {
                Ok(client) => {
                    tracing::info!("Glide client initialized");
                    Some(Arc::new(GlideAdapter::new(Arc::new(client))))
                }
                Err(e) => {
                    tracing::warn!(error = %e, "Failed to construct Glide client");
                    None
                }
            }
        }
        _ => {
            tracing::warn!("Missing Glide credentials. Client not initialized.");
            None
        }
    };

    ServerDeps::new(magic_auth, has_client_id, has_client_secret)
}

/// Build the Axum application router
pub fn build_app(config: &Config) -> Router {
    build_app_with_deps(build_deps(config))
}

/// Router over an already-built dependency container (tests inject mocks
/// through this seam)
pub fn build_app_with_deps(deps: ServerDeps) -> Router {
    let app_state = AppState {
        deps: Arc::new(deps),
    };

    // CORS: the relay is called from arbitrary frontend origins
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/api/phone-auth/prepare", post(prepare_handler))
        .route("/api/phone-auth/process", post(process_handler))
        .route("/api/health", get(health_handler))
        .layer(Extension(app_state))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}
