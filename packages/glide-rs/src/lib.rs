//! Client for the Glide magic-auth API.
//!
//! Thin typed wrapper: callers build the request DTOs from [`models`], the
//! client signs each call with the client id/secret pair and decodes the
//! response. Session handling, carrier routing, and everything else behind
//! the API stays on the Glide side.

pub mod models;

use std::time::Duration;

use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::models::{
    AuthPrepareRequest, AuthPrepareResponse, AuthProcessRequest, AuthenticateResponse,
};

/// Sandbox environment base URL. Production deployments override it through
/// [`GlideOptions::api_base_url`].
pub const SANDBOX_API_BASE_URL: &str = "https://api.sandbox.glideidentity.app";

const PREPARE_PATH: &str = "/magic-auth/v2/prepare";
const PROCESS_CREDENTIAL_PATH: &str = "/magic-auth/v2/process-credential";

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Debug, Clone)]
pub struct GlideOptions {
    pub client_id: String,
    pub client_secret: String,
    /// Overrides [`SANDBOX_API_BASE_URL`] when set.
    pub api_base_url: Option<String>,
}

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("request to Glide failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Glide API error ({status}): {body}")]
    Api { status: StatusCode, body: String },

    #[error("failed to parse Glide response: {0}")]
    Parse(#[source] reqwest::Error),
}

/// Entry point to the API. Cheap to clone; the underlying HTTP client is
/// shared.
#[derive(Debug, Clone)]
pub struct GlideClient {
    pub magic_auth: MagicAuthService,
}

impl GlideClient {
    pub fn new(options: GlideOptions) -> Result<Self, Error> {
        let http = Client::builder().timeout(REQUEST_TIMEOUT).build()?;

        let base_url = options
            .api_base_url
            .clone()
            .unwrap_or_else(|| SANDBOX_API_BASE_URL.to_string());

        Ok(Self {
            magic_auth: MagicAuthService {
                http,
                base_url,
                client_id: options.client_id,
                client_secret: options.client_secret,
            },
        })
    }
}

/// Phone-number verification flows (prepare → client-side credential
/// exchange → process).
#[derive(Debug, Clone)]
pub struct MagicAuthService {
    http: Client,
    base_url: String,
    client_id: String,
    client_secret: String,
}

impl MagicAuthService {
    /// Start a verification flow for the given use case.
    pub async fn prepare(
        &self,
        request: &AuthPrepareRequest,
    ) -> Result<AuthPrepareResponse, Error> {
        self.post(PREPARE_PATH, request).await
    }

    /// Submit the credential produced by the client-side exchange and get
    /// the verification verdict.
    pub async fn process_credential(
        &self,
        request: &AuthProcessRequest,
    ) -> Result<AuthenticateResponse, Error> {
        self.post(PROCESS_CREDENTIAL_PATH, request).await
    }

    async fn post<B, T>(&self, path: &str, body: &B) -> Result<T, Error>
    where
        B: Serialize,
        T: DeserializeOwned,
    {
        let url = format!("{}{}", self.base_url, path);

        let response = self
            .http
            .post(url)
            .basic_auth(&self.client_id, Some(&self.client_secret))
            .json(body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(Error::Api { status, body });
        }

        response.json::<T>().await.map_err(Error::Parse)
    }
}
