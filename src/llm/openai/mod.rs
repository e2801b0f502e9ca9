//! OpenAI provider implementation
//!
//! This module provides a client for `/v1/chat/completions` on the OpenAI API
//! or any server exposing the same schema.

pub mod client;
pub mod mapper;
pub mod types;

// Re-export commonly used types
pub use client::{OpenAiClient, DEFAULT_BASE_URL};
