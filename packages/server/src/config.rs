use anyhow::{Context, Result};
use dotenvy::dotenv;
use std::env;

/// Application configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    /// Glide credentials are optional on purpose: when either is missing
    /// the server still starts and the phone-auth endpoints answer with a
    /// not-initialized failure instead of the process crashing.
    pub glide_client_id: Option<String>,
    pub glide_client_secret: Option<String>,
    pub glide_api_base_url: Option<String>,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        // Load .env file if present (development)
        let _ = dotenv();

        Ok(Self {
            port: env::var("PORT")
                .unwrap_or_else(|_| "3001".to_string())
                .parse()
                .context("PORT must be a valid number")?,
            glide_client_id: env::var("GLIDE_CLIENT_ID").ok(),
            glide_client_secret: env::var("GLIDE_CLIENT_SECRET").ok(),
            glide_api_base_url: env::var("GLIDE_API_BASE_URL").ok(),
        })
    }

    /// Both credentials present, so the Glide client can be constructed.
    pub fn has_glide_credentials(&self) -> bool {
        self.glide_client_id.is_some() && self.glide_client_secret.is_some()
    }
}
