use std::env;

use anyhow::Result;

/// Central configuration loaded from environment variables.
///
/// The API key is a secret and comes from the environment only (never
/// hardcoded). The .env file is loaded automatically at startup via dotenvy.
pub struct Config {
    /// Analysis backend base URL (defaults to http://localhost:8000).
    pub api_url: String,
    /// Opaque credential sent as the X-API-KEY request header.
    pub api_key: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Only the URL has a default — the API key is required for anything
    /// that uploads audio.
    pub fn load() -> Result<Self> {
        Ok(Self {
            api_url: env::var("CALLWARDEN_API_URL")
                .unwrap_or_else(|_| callwarden::client::DEFAULT_API_URL.to_string()),
            api_key: env::var("CALLWARDEN_API_KEY").unwrap_or_default(),
        })
    }

    /// Check that the API key is configured.
    /// Call this before any operation that uploads audio to the backend.
    pub fn require_api_key(&self) -> Result<()> {
        if self.api_key.is_empty() {
            anyhow::bail!(
                "CALLWARDEN_API_KEY not set. Add it to your .env file.\n\
                 The analysis backend rejects unauthenticated uploads."
            );
        }
        Ok(())
    }
}
