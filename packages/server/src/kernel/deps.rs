//! Server dependencies (using traits for testability)
//!
//! This module provides the dependency container shared by the phone-auth
//! handlers. The Glide client sits behind a trait abstraction so the domain
//! service can be tested with a mock.

use anyhow::Result;
use async_trait::async_trait;
use std::sync::Arc;

use glide::models::{
    AuthPrepareRequest, AuthPrepareResponse, AuthProcessRequest, AuthenticateResponse,
};
use glide::GlideClient;

use crate::kernel::BaseMagicAuthService;

// =============================================================================
// GlideClient Adapter (implements BaseMagicAuthService trait)
// =============================================================================

/// Wrapper around the Glide client that implements the BaseMagicAuthService
/// trait
pub struct GlideAdapter(pub Arc<GlideClient>);

impl GlideAdapter {
    pub fn new(client: Arc<GlideClient>) -> Self {
        Self(client)
    }
}

#[async_trait]
impl BaseMagicAuthService for GlideAdapter {
    async fn prepare(&self, request: &AuthPrepareRequest) -> Result<AuthPrepareResponse> {
        Ok(self.0.magic_auth.prepare(request).await?)
    }

    async fn process_credential(
        &self,
        request: &AuthProcessRequest,
    ) -> Result<AuthenticateResponse> {
        Ok(self.0.magic_auth.process_credential(request).await?)
    }
}

// =============================================================================
// ServerDeps
// =============================================================================

/// Server dependencies accessible to handlers.
///
/// Built once at startup and never mutated afterwards. `magic_auth` is the
/// initialization gate: `None` means the Glide credentials were absent at
/// process start, and every phone-auth call fails with NotInitialized.
#[derive(Clone)]
pub struct ServerDeps {
    pub magic_auth: Option<Arc<dyn BaseMagicAuthService>>,
    pub has_client_id: bool,
    pub has_client_secret: bool,
}

impl ServerDeps {
    pub fn new(
        magic_auth: Option<Arc<dyn BaseMagicAuthService>>,
        has_client_id: bool,
        has_client_secret: bool,
    ) -> Self {
        Self {
            magic_auth,
            has_client_id,
            has_client_secret,
        }
    }

    pub fn initialized(&self) -> bool {
        self.magic_auth.is_some()
    }
}
