//! Chat proxy: message normalization and the completion request pipeline

pub mod error;
pub mod normalize;
pub mod persona;
pub mod pipeline;

pub use error::ChatError;
pub use normalize::{flatten_content, normalize};
pub use persona::{system_persona, FALLBACK_REPLY, PERSONA_PROMPT};
pub use pipeline::{
    ChatBody, ChatInput, ChatPipeline, ChatResponse, ChatSettings, ProviderFactory, RawBody,
};
