//! Error types for the LLM layer

use std::error::Error as StdError;
use thiserror::Error;

/// Longest raw upstream body echoed back in `detail`
pub const MAX_DETAIL_CHARS: usize = 512;

/// Errors that can occur when using LLM providers
#[derive(Debug, Error)]
pub enum LlmError {
    /// Missing or rejected credentials
    #[error("Authentication error: {0}")]
    AuthenticationError(String),

    /// HTTP request failures
    #[error("HTTP error (status {status}): {body}")]
    HttpError { status: u16, body: String },

    /// The request did not complete in time
    #[error("Request timed out: {0}")]
    Timeout(String),

    /// JSON encoding/decoding issues
    #[error("Serialization error: {0}")]
    SerializationError(String),

    /// Invalid request parameters
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// Error reported by the provider in its response body
    #[error("Provider error ({code}): {message}")]
    ProviderError { code: String, message: String },
}

impl LlmError {
    /// The most specific human-readable description of the failure.
    ///
    /// Provider-reported messages win over transport descriptions.
    pub fn detail(&self) -> String {
        match self {
            LlmError::ProviderError { message, .. } if !message.trim().is_empty() => {
                message.trim().to_string()
            }
            LlmError::HttpError { body, .. } if !body.trim().is_empty() => truncate(body.trim()),
            LlmError::AuthenticationError(msg)
            | LlmError::Timeout(msg)
            | LlmError::SerializationError(msg)
            | LlmError::InvalidRequest(msg)
                if !msg.trim().is_empty() =>
            {
                msg.trim().to_string()
            }
            other => other.to_string(),
        }
    }
}

fn truncate(text: &str) -> String {
    match text.char_indices().nth(MAX_DETAIL_CHARS) {
        Some((cut, _)) => format!("{}...", &text[..cut]),
        None => text.to_string(),
    }
}

/// Display of `err` followed by its innermost source, when that adds anything
fn with_root_cause(err: &(dyn StdError + 'static)) -> String {
    let mut root = err;
    while let Some(source) = root.source() {
        root = source;
    }

    let message = err.to_string();
    let cause = root.to_string();
    if cause.is_empty() || message.contains(&cause) {
        message
    } else {
        format!("{}: {}", message, cause)
    }
}

impl From<serde_json::Error> for LlmError {
    fn from(err: serde_json::Error) -> Self {
        LlmError::SerializationError(err.to_string())
    }
}

impl From<reqwest::Error> for LlmError {
    fn from(err: reqwest::Error) -> Self {
        let message = with_root_cause(&err);
        if err.is_timeout() {
            return LlmError::Timeout(message);
        }
        if err.is_decode() {
            return LlmError::SerializationError(message);
        }
        LlmError::HttpError {
            status: err.status().map(|s| s.as_u16()).unwrap_or(0),
            body: message,
        }
    }
}
