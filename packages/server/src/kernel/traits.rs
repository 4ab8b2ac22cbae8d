// Trait definitions for dependency injection
//
// These are INFRASTRUCTURE traits only - no business logic.
// Business logic (request normalization, payload conversion) lives in the
// phone_auth domain and uses these traits.
//
// Naming convention: Base* for trait names (e.g., BaseMagicAuthService)

use anyhow::Result;
use async_trait::async_trait;

use glide::models::{
    AuthPrepareRequest, AuthPrepareResponse, AuthProcessRequest, AuthenticateResponse,
};

// =============================================================================
// Magic Auth Trait (Infrastructure - Glide verification flows)
// =============================================================================

#[async_trait]
pub trait BaseMagicAuthService: Send + Sync {
    /// Start a verification flow with the already-normalized payload
    async fn prepare(&self, request: &AuthPrepareRequest) -> Result<AuthPrepareResponse>;

    /// Submit a client-side credential for verification
    async fn process_credential(
        &self,
        request: &AuthProcessRequest,
    ) -> Result<AuthenticateResponse>;
}
