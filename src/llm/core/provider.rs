//! Provider trait for LLM implementations

use async_trait::async_trait;
use std::sync::Arc;
use std::time::Duration;

use super::{
    error::LlmError,
    types::{Completion, CompletionRequest},
};
use crate::llm::openai::OpenAiClient;

/// Main interface that all completion provider implementations must satisfy
#[async_trait]
pub trait LlmProvider: Send + Sync {
    /// Generate a completion for the given conversation
    ///
    /// This is the single suspending call made per chat request. Any failure,
    /// including a timeout, is returned as an `LlmError`; implementations do
    /// not retry.
    async fn complete(&self, request: CompletionRequest) -> Result<Completion, LlmError>;
}

/// Create the completion provider used by the chat pipeline
///
/// # Arguments
///
/// * `api_key` - Bearer credential for the provider
/// * `base_url` - Provider root, e.g. `https://api.openai.com`
/// * `timeout` - Upper bound for a single completion request
///
/// # Example
///
/// ```rust,no_run
/// use std::time::Duration;
/// use nit_backend::llm::create_provider;
///
/// let provider = create_provider("sk-...", "https://api.openai.com", Duration::from_secs(60))?;
/// # Ok::<(), nit_backend::llm::LlmError>(())
/// ```
pub fn create_provider(
    api_key: &str,
    base_url: &str,
    timeout: Duration,
) -> Result<Arc<dyn LlmProvider>, LlmError> {
    let client = OpenAiClient::new(api_key, base_url, timeout)?;
    Ok(Arc::new(client))
}
