// Handlers module

pub mod chat;
pub mod content;

pub use chat::chat_handler;
pub use content::{blogs_handler, boosters_handler, diseases_handler, hero_handler};
