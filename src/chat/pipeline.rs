//! The chat request pipeline
//!
//! One transport-agnostic entry point, [`ChatPipeline::handle`], takes a
//! request through method and credential checks, body decoding,
//! normalization, the provider call and reply extraction. Every path ends in
//! exactly one [`ChatResponse`]; nothing is retried.

use bytes::Bytes;
use serde::Serialize;
use serde_json::Value;
use std::sync::Arc;
use tokio::sync::OnceCell;
use tracing::{error, info, warn};
use warp::http::{Method, StatusCode};

use crate::llm::{CompletionRequest, GenerationConfig, LlmError, LlmProvider, DEFAULT_TEMPERATURE};

use super::error::ChatError;
use super::normalize::{fallback_field, normalize};
use super::persona::{system_persona, FALLBACK_REPLY};

/// Model used when none is configured
pub const DEFAULT_MODEL: &str = "gpt-4o-mini";

const EXPECTED_SHAPE: &str = "Invalid request body: expected messages array with content.";
const UNDECODABLE_BODY: &str = "Invalid request body: could not decode JSON.";
const MISSING_API_KEY: &str = "Server misconfiguration: missing OpenAI API key.";

/// Builds the provider from the configured credential on first use
pub type ProviderFactory =
    Box<dyn Fn(&str) -> Result<Arc<dyn LlmProvider>, LlmError> + Send + Sync>;

/// Request body as handed over by a transport
#[derive(Debug, Clone)]
pub enum RawBody {
    /// Already parsed by the transport
    Json(Value),
    /// JSON text
    Text(String),
    /// Unparsed bytes, expected to be UTF-8 JSON
    Bytes(Bytes),
    Empty,
}

impl RawBody {
    /// Decode into a JSON value. Empty bodies decode to `null`; a body that
    /// is itself a JSON string is decoded one more level.
    pub fn decode(self) -> Result<Value, ChatError> {
        let value = match self {
            RawBody::Json(value) => value,
            RawBody::Text(text) => parse_text(&text)?,
            RawBody::Bytes(bytes) => {
                let text = std::str::from_utf8(&bytes).map_err(|e| ChatError::BadInput {
                    message: UNDECODABLE_BODY.to_string(),
                    detail: Some(e.to_string()),
                })?;
                parse_text(text)?
            }
            RawBody::Empty => Value::Null,
        };

        match value {
            Value::String(inner) => parse_text(&inner),
            other => Ok(other),
        }
    }
}

fn parse_text(text: &str) -> Result<Value, ChatError> {
    if text.trim().is_empty() {
        return Ok(Value::Null);
    }
    serde_json::from_str(text).map_err(|e| ChatError::BadInput {
        message: UNDECODABLE_BODY.to_string(),
        detail: Some(e.to_string()),
    })
}

/// A chat request as seen by the pipeline
#[derive(Debug, Clone)]
pub struct ChatInput {
    pub method: Method,
    pub body: RawBody,
}

impl ChatInput {
    pub fn post(body: RawBody) -> Self {
        Self {
            method: Method::POST,
            body,
        }
    }
}

/// JSON body of a chat response
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ChatBody {
    Reply {
        reply: String,
    },
    Error {
        message: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        detail: Option<String>,
    },
}

/// The single response produced for every chat request
#[derive(Debug, Clone)]
pub struct ChatResponse {
    pub status: StatusCode,
    pub body: ChatBody,
    /// Value for the `Allow` header, set on 405
    pub allow: Option<&'static str>,
}

impl ChatResponse {
    pub fn reply(reply: impl Into<String>) -> Self {
        Self {
            status: StatusCode::OK,
            body: ChatBody::Reply {
                reply: reply.into(),
            },
            allow: None,
        }
    }
}

/// Settings the pipeline reads on every request
#[derive(Debug, Clone)]
pub struct ChatSettings {
    /// Provider credential; `None` or blank makes every request fail with 500
    pub api_key: Option<String>,
    pub model: String,
    pub temperature: f32,
}

impl ChatSettings {
    pub fn new(api_key: Option<String>) -> Self {
        Self {
            api_key,
            model: DEFAULT_MODEL.to_string(),
            temperature: DEFAULT_TEMPERATURE,
        }
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    fn api_key(&self) -> Option<&str> {
        self.api_key
            .as_deref()
            .map(str::trim)
            .filter(|key| !key.is_empty())
    }
}

/// Normalize, call the provider, respond
pub struct ChatPipeline {
    settings: ChatSettings,
    factory: ProviderFactory,
    provider: OnceCell<Arc<dyn LlmProvider>>,
}

impl ChatPipeline {
    /// Create a pipeline whose provider is built lazily by `factory`
    pub fn new(settings: ChatSettings, factory: ProviderFactory) -> Self {
        Self {
            settings,
            factory,
            provider: OnceCell::new(),
        }
    }

    /// Create a pipeline around an already constructed provider
    pub fn with_provider(settings: ChatSettings, provider: Arc<dyn LlmProvider>) -> Self {
        let factory: ProviderFactory = Box::new(move |_: &str| Ok(provider.clone()));
        Self::new(settings, factory)
    }

    pub fn settings(&self) -> &ChatSettings {
        &self.settings
    }

    /// Handle one request. Always yields exactly one response.
    pub async fn handle(&self, input: ChatInput) -> ChatResponse {
        match self.run(input).await {
            Ok(reply) => ChatResponse::reply(reply),
            Err(err) => {
                match &err {
                    ChatError::ProviderFailure { detail } => {
                        error!(detail = %detail, "Chat completion failed")
                    }
                    ChatError::Misconfiguration(msg) => error!("{}", msg),
                    other => warn!(status = %other.status(), "Rejected chat request: {}", other),
                }
                err.into_response()
            }
        }
    }

    async fn run(&self, input: ChatInput) -> Result<String, ChatError> {
        if input.method != Method::POST {
            return Err(ChatError::MethodNotAllowed);
        }

        let api_key = self
            .settings
            .api_key()
            .ok_or_else(|| ChatError::Misconfiguration(MISSING_API_KEY.to_string()))?;

        let body = input.body.decode()?;

        let messages = normalize(
            body.get("messages").unwrap_or(&Value::Null),
            fallback_field(&body),
        );
        if messages.is_empty() {
            return Err(ChatError::bad_input(EXPECTED_SHAPE));
        }

        let provider = self.provider(api_key).await.map_err(provider_failure)?;

        let mut conversation = Vec::with_capacity(messages.len() + 1);
        conversation.push(system_persona());
        conversation.extend(messages);

        info!(
            model = %self.settings.model,
            messages = conversation.len() - 1,
            "Requesting chat completion"
        );

        let request = CompletionRequest::new(self.settings.model.clone(), conversation)
            .with_config(GenerationConfig::new().with_temperature(self.settings.temperature));
        let completion = provider.complete(request).await.map_err(provider_failure)?;

        match completion.first_content() {
            Some(reply) => {
                info!("Chat reply generated");
                Ok(reply.to_string())
            }
            None => {
                warn!("Provider returned no usable content, sending fallback reply");
                Ok(FALLBACK_REPLY.to_string())
            }
        }
    }

    async fn provider(&self, api_key: &str) -> Result<Arc<dyn LlmProvider>, LlmError> {
        self.provider
            .get_or_try_init(|| async { (self.factory)(api_key) })
            .await
            .cloned()
    }
}

fn provider_failure(err: LlmError) -> ChatError {
    ChatError::ProviderFailure {
        detail: err.detail(),
    }
}
