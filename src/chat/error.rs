//! Error types for the chat pipeline

use thiserror::Error;
use warp::http::StatusCode;

use super::pipeline::{ChatBody, ChatResponse};

/// Methods accepted by the chat endpoint, as sent in the `Allow` header
pub const ALLOWED_METHODS: &str = "POST";

/// Terminal failures of a chat request. None of them is retried internally.
#[derive(Debug, Error)]
pub enum ChatError {
    /// Undecodable body or nothing left after normalization
    #[error("{message}")]
    BadInput {
        message: String,
        detail: Option<String>,
    },

    #[error("Method not allowed")]
    MethodNotAllowed,

    /// The provider credential is not configured
    #[error("{0}")]
    Misconfiguration(String),

    /// The provider call failed for any reason, including timeouts
    #[error("Unable to process the chat request at this time.")]
    ProviderFailure { detail: String },
}

impl ChatError {
    pub fn bad_input(message: impl Into<String>) -> Self {
        ChatError::BadInput {
            message: message.into(),
            detail: None,
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            ChatError::BadInput { .. } => StatusCode::BAD_REQUEST,
            ChatError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            ChatError::Misconfiguration(_) | ChatError::ProviderFailure { .. } => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// Map the error to its deterministic response
    pub fn into_response(self) -> ChatResponse {
        let status = self.status();
        let allow = match self {
            ChatError::MethodNotAllowed => Some(ALLOWED_METHODS),
            _ => None,
        };
        let message = self.to_string();
        let detail = match self {
            ChatError::BadInput { detail, .. } => detail,
            ChatError::ProviderFailure { detail } => Some(detail),
            ChatError::MethodNotAllowed | ChatError::Misconfiguration(_) => None,
        };

        ChatResponse {
            status,
            body: ChatBody::Error { message, detail },
            allow,
        }
    }
}
