//! LLM Abstraction Layer
//!
//! This module provides a provider-neutral interface for chat completions and
//! an implementation for OpenAI-compatible `/v1/chat/completions` endpoints.

pub mod core;
pub mod openai;

// Re-export commonly used types
pub use self::core::{
    config::{GenerationConfig, DEFAULT_TEMPERATURE},
    error::LlmError,
    provider::{create_provider, LlmProvider},
    types::{ChatMessage, Choice, Completion, CompletionRequest, FinishReason, UsageMetadata},
};

pub use openai::OpenAiClient;
