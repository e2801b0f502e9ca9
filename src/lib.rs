// HTTP server modules
pub mod config;
pub mod handlers;
pub mod routes;

// Chat proxy: normalization and completion pipeline
pub mod chat;

// Informational content and its document store
pub mod content;

// LLM abstraction layer
pub mod llm;
