// MockMagicAuthService - mock implementation for testing
//
// Records every call it receives and replays canned responses, so tests can
// assert both the payload the relay built and the behavior on API failures.

use anyhow::Result;
use async_trait::async_trait;
use std::sync::{Arc, Mutex};

use glide::models::{
    AuthPrepareRequest, AuthPrepareResponse, AuthProcessRequest, AuthenticateResponse,
};

use super::BaseMagicAuthService;

pub struct MockMagicAuthService {
    prepare_responses: Arc<Mutex<Vec<AuthPrepareResponse>>>,
    process_responses: Arc<Mutex<Vec<AuthenticateResponse>>>,
    prepare_calls: Arc<Mutex<Vec<AuthPrepareRequest>>>,
    process_calls: Arc<Mutex<Vec<AuthProcessRequest>>>,
    fail: bool,
}

impl MockMagicAuthService {
    pub fn new() -> Self {
        Self {
            prepare_responses: Arc::new(Mutex::new(Vec::new())),
            process_responses: Arc::new(Mutex::new(Vec::new())),
            prepare_calls: Arc::new(Mutex::new(Vec::new())),
            process_calls: Arc::new(Mutex::new(Vec::new())),
            fail: false,
        }
    }

    /// Mock whose every call fails, for exercising the SDK-failure path
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::new()
        }
    }

    /// Queue a prepare response to be returned (falls back to a minimal
    /// well-formed response when the queue is empty)
    pub fn with_prepare_response(self, response: AuthPrepareResponse) -> Self {
        self.prepare_responses.lock().unwrap().push(response);
        self
    }

    /// Queue a process response to be returned
    pub fn with_process_response(self, response: AuthenticateResponse) -> Self {
        self.process_responses.lock().unwrap().push(response);
        self
    }

    /// Get all prepare payloads the relay sent
    pub fn prepare_calls(&self) -> Vec<AuthPrepareRequest> {
        self.prepare_calls.lock().unwrap().clone()
    }

    /// Get all process payloads the relay sent
    pub fn process_calls(&self) -> Vec<AuthProcessRequest> {
        self.process_calls.lock().unwrap().clone()
    }

    pub fn prepare_call_count(&self) -> usize {
        self.prepare_calls.lock().unwrap().len()
    }

    pub fn process_call_count(&self) -> usize {
        self.process_calls.lock().unwrap().len()
    }

    fn default_prepare_response() -> AuthPrepareResponse {
        AuthPrepareResponse {
            protocol: Some("secure-auth-v1".to_string()),
            data: Some(serde_json::json!({})),
            session: Some(serde_json::json!({ "session_id": "sess_mock" })),
            eligible: None,
            carrier_name: None,
            reason: None,
            auth_request: None,
            extra: serde_json::Map::new(),
        }
    }

    fn default_process_response() -> AuthenticateResponse {
        AuthenticateResponse {
            success: Some(true),
            phone_number: None,
            verified: Some(true),
            extra: serde_json::Map::new(),
        }
    }
}

impl Default for MockMagicAuthService {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl BaseMagicAuthService for MockMagicAuthService {
    async fn prepare(&self, request: &AuthPrepareRequest) -> Result<AuthPrepareResponse> {
        self.prepare_calls.lock().unwrap().push(request.clone());
        if self.fail {
            anyhow::bail!("mock magic-auth prepare failure");
        }
        let queued = self.prepare_responses.lock().unwrap().pop();
        Ok(queued.unwrap_or_else(Self::default_prepare_response))
    }

    async fn process_credential(
        &self,
        request: &AuthProcessRequest,
    ) -> Result<AuthenticateResponse> {
        self.process_calls.lock().unwrap().push(request.clone());
        if self.fail {
            anyhow::bail!("mock magic-auth process failure");
        }
        let queued = self.process_responses.lock().unwrap().pop();
        Ok(queued.unwrap_or_else(Self::default_process_response))
    }
}
