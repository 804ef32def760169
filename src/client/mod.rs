// HTTP client for the audio analysis backend.
//
// A thin reqwest wrapper: one multipart upload endpoint plus a health
// probe. Every failure is classified into the closed AnalyzeError taxonomy
// at this boundary — callers match on the enum, never on message text.

pub mod error;

pub use error::AnalyzeError;

use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;
use tracing::debug;

use crate::analysis::model::AnalysisResult;

/// Default backend endpoint for local development.
pub const DEFAULT_API_URL: &str = "http://localhost:8000";

/// Response from the backend's `/health` endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct HealthStatus {
    pub status: String,
    #[serde(default)]
    pub version: Option<String>,
}

/// Authenticated client for the analysis backend.
///
/// The API key is an opaque static credential attached to every request as
/// the `X-API-KEY` header.
pub struct AnalyzerClient {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl AnalyzerClient {
    /// Create a new client pointing at the given base URL.
    pub fn new(base_url: &str, api_key: &str) -> Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent("callwarden/0.1")
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.to_string(),
        })
    }

    /// Upload a call recording for analysis.
    ///
    /// The file goes up as the `audio` multipart part, with an optional
    /// `language` hint part. Returns the parsed analysis record, or one
    /// terminal AnalyzeError — there is no automatic retry.
    pub async fn analyze(
        &self,
        audio_path: &Path,
        language_hint: Option<&str>,
    ) -> Result<AnalysisResult, AnalyzeError> {
        let bytes = tokio::fs::read(audio_path)
            .await
            .map_err(|_| AnalyzeError::CorruptFile)?;
        if bytes.is_empty() {
            return Err(AnalyzeError::EmptyFile);
        }

        let file_name = audio_path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "call.wav".to_string());

        let mut form = reqwest::multipart::Form::new()
            .part("audio", reqwest::multipart::Part::bytes(bytes).file_name(file_name));
        if let Some(language) = language_hint {
            form = form.text("language", language.to_string());
        }

        let url = format!("{}/analyze-call", self.base_url);
        debug!(url = %url, "uploading audio for analysis");

        let response = self
            .client
            .post(&url)
            .header("X-API-KEY", &self.api_key)
            .multipart(form)
            .send()
            .await
            .map_err(AnalyzeError::NetworkUnreachable)?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(AnalyzeError::NetworkUnreachable)?;

        if !status.is_success() {
            return Err(error::classify_error_body(status.as_u16(), &body));
        }

        serde_json::from_str(&body).map_err(AnalyzeError::MalformedResponse)
    }

    /// Probe the backend's health endpoint.
    pub async fn health(&self) -> Result<HealthStatus, AnalyzeError> {
        let url = format!("{}/health", self.base_url);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(AnalyzeError::NetworkUnreachable)?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(AnalyzeError::NetworkUnreachable)?;

        if !status.is_success() {
            return Err(error::classify_error_body(status.as_u16(), &body));
        }

        serde_json::from_str(&body).map_err(AnalyzeError::MalformedResponse)
    }
}
