//! Cohere provider implementation for AlphaChat
//!
//! Connects to the Cohere chat endpoint to generate replies. The API base
//! is overridable so tests can point the provider at a mock server.

use crate::config::CohereConfig;
use crate::error::{AlphachatError, Result};
use crate::providers::Provider;

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Environment variable holding the Cohere API credential
pub const COHERE_API_KEY_ENV: &str = "COHERE_API_KEY";

/// Default Cohere API base URL
const DEFAULT_API_BASE: &str = "https://api.cohere.com";

/// Request timeout for chat calls
const REQUEST_TIMEOUT: Duration = Duration::from_secs(120);

/// Cohere API provider
///
/// Sends one chat request per [`Provider::generate`] call. The credential
/// is resolved at construction time, from the config file if present or
/// from the `COHERE_API_KEY` environment variable otherwise; a missing
/// credential is a construction error, which makes it startup-fatal.
///
/// # Examples
///
/// ```no_run
/// use alphachat::config::CohereConfig;
/// use alphachat::providers::{CohereProvider, Provider};
///
/// # async fn example() -> alphachat::error::Result<()> {
/// let config = CohereConfig::default();
/// let provider = CohereProvider::new(config)?;
/// let reply = provider.generate("command-nightly", "Human: Hello\nAI (answer clearly and completely):").await?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct CohereProvider {
    client: Client,
    config: CohereConfig,
    api_key: String,
}

/// Request body for the Cohere chat endpoint
#[derive(Debug, Serialize)]
struct CohereChatRequest<'a> {
    model: &'a str,
    message: &'a str,
}

/// Response body from the Cohere chat endpoint
#[derive(Debug, Deserialize)]
struct CohereChatResponse {
    #[serde(default)]
    text: String,
}

impl CohereProvider {
    /// Create a new Cohere provider instance
    ///
    /// # Arguments
    ///
    /// * `config` - Cohere configuration (API base override, optional key)
    ///
    /// # Errors
    ///
    /// Returns `MissingCredentials` if no API key is configured and the
    /// `COHERE_API_KEY` environment variable is unset or empty, or a
    /// provider error if HTTP client initialization fails.
    pub fn new(config: CohereConfig) -> Result<Self> {
        let api_key = config
            .api_key
            .clone()
            .or_else(|| std::env::var(COHERE_API_KEY_ENV).ok())
            .filter(|key| !key.trim().is_empty())
            .ok_or_else(|| AlphachatError::MissingCredentials("cohere".to_string()))?;

        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .user_agent("alphachat/0.1.0")
            .build()
            .map_err(|e| {
                AlphachatError::Provider(format!("Failed to create HTTP client: {}", e))
            })?;

        tracing::info!(
            "Initialized Cohere provider: api_base={}",
            config.api_base.as_deref().unwrap_or(DEFAULT_API_BASE)
        );

        Ok(Self {
            client,
            config,
            api_key,
        })
    }

    /// Full URL of the chat endpoint
    fn chat_endpoint(&self) -> String {
        format!(
            "{}/v1/chat",
            self.config.api_base.as_deref().unwrap_or(DEFAULT_API_BASE)
        )
    }
}

#[async_trait]
impl Provider for CohereProvider {
    fn name(&self) -> &str {
        "cohere"
    }

    async fn generate(&self, model: &str, prompt: &str) -> Result<String> {
        let url = self.chat_endpoint();
        tracing::debug!(model, url = %url, chars = prompt.len(), "Sending chat request");

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(&CohereChatRequest {
                model,
                message: prompt,
            })
            .send()
            .await
            .map_err(|e| AlphachatError::Provider(format!("Request to Cohere failed: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            tracing::warn!(%status, "Cohere returned an error");
            return Err(AlphachatError::Provider(format!(
                "Cohere returned error {}: {}",
                status, body
            ))
            .into());
        }

        let parsed: CohereChatResponse = response.json().await.map_err(|e| {
            AlphachatError::Provider(format!("Failed to parse Cohere response: {}", e))
        })?;

        Ok(parsed.text)
    }
}
