//! OpenAI chat completions client

use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;
use tracing::debug;

use crate::llm::core::{
    error::LlmError,
    provider::LlmProvider,
    types::{Completion, CompletionRequest},
};

use super::mapper::{error_from_response, from_openai_response, to_openai_request};
use super::types::ChatCompletionResponse;

/// Default provider root
pub const DEFAULT_BASE_URL: &str = "https://api.openai.com";
const COMPLETIONS_PATH: &str = "/v1/chat/completions";

/// Client for OpenAI-compatible chat completion endpoints
pub struct OpenAiClient {
    /// HTTP client for making requests
    http_client: Client,
    /// Bearer credential
    api_key: String,
    /// Full endpoint URL (base + COMPLETIONS_PATH)
    url: String,
}

impl OpenAiClient {
    /// Create a new client
    ///
    /// # Arguments
    ///
    /// * `api_key` - Bearer credential
    /// * `base_url` - Provider root; a trailing slash is ignored
    /// * `timeout` - Total time allowed for one completion request
    ///
    /// # Errors
    ///
    /// Returns an error if the key is blank or the HTTP client cannot be built.
    pub fn new(api_key: &str, base_url: &str, timeout: Duration) -> Result<Self, LlmError> {
        let api_key = api_key.trim();
        if api_key.is_empty() {
            return Err(LlmError::AuthenticationError(
                "API key must not be empty".to_string(),
            ));
        }

        let http_client = Client::builder()
            .connect_timeout(Duration::from_secs(5))
            .timeout(timeout)
            .build()
            .map_err(|e| LlmError::HttpError {
                status: 0,
                body: format!("Failed to create HTTP client: {}", e),
            })?;

        Ok(Self {
            http_client,
            api_key: api_key.to_string(),
            url: build_endpoint_url(base_url),
        })
    }

    /// The endpoint this client posts to
    pub fn endpoint(&self) -> &str {
        &self.url
    }
}

fn build_endpoint_url(base_url: &str) -> String {
    format!("{}{}", base_url.trim_end_matches('/'), COMPLETIONS_PATH)
}

#[async_trait]
impl LlmProvider for OpenAiClient {
    async fn complete(&self, request: CompletionRequest) -> Result<Completion, LlmError> {
        let body = to_openai_request(request);
        debug!(model = %body.model, messages = body.messages.len(), "Sending chat completion request");

        let response = self
            .http_client
            .post(&self.url)
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(error_from_response(status.as_u16(), body));
        }

        let parsed: ChatCompletionResponse = response.json().await?;
        Ok(from_openai_response(parsed))
    }
}
