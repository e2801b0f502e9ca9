//! Conversion of loosely-typed request payloads into chat messages

use serde_json::Value;

use crate::llm::ChatMessage;

/// Role given to messages that carry no usable role of their own
pub const DEFAULT_ROLE: &str = "user";

const PART_SEPARATOR: &str = "\n\n";

/// Normalize a caller-supplied `messages` value into an ordered conversation.
///
/// Elements that are not objects, or whose content flattens to nothing, are
/// dropped. When nothing survives and `fallback` flattens to non-empty text, a
/// single user message is produced from it. Input order is preserved.
pub fn normalize(raw_messages: &Value, fallback: Option<&Value>) -> Vec<ChatMessage> {
    let messages: Vec<ChatMessage> = match raw_messages {
        Value::Array(items) => items.iter().filter_map(normalize_message).collect(),
        _ => Vec::new(),
    };

    if !messages.is_empty() {
        return messages;
    }

    fallback
        .map(flatten_content)
        .filter(|content| !content.is_empty())
        .map(|content| vec![ChatMessage::new(DEFAULT_ROLE, content)])
        .unwrap_or_default()
}

fn normalize_message(item: &Value) -> Option<ChatMessage> {
    let object = item.as_object()?;

    let role = object
        .get("role")
        .and_then(Value::as_str)
        .map(str::trim)
        .filter(|role| !role.is_empty())
        .unwrap_or(DEFAULT_ROLE);

    let content = object.get("content").map(flatten_content).unwrap_or_default();
    if content.is_empty() {
        return None;
    }

    Some(ChatMessage::new(role, content))
}

/// Flatten any JSON value into trimmed message text.
///
/// - strings are trimmed
/// - arrays flatten element-wise, non-empty parts joined by a blank line
/// - objects yield their `text` or `content` string field, else nothing
/// - null yields nothing; other scalars use their string form
pub fn flatten_content(value: &Value) -> String {
    match value {
        Value::String(text) => text.trim().to_string(),
        Value::Array(parts) => parts
            .iter()
            .map(flatten_content)
            .filter(|part| !part.is_empty())
            .collect::<Vec<_>>()
            .join(PART_SEPARATOR),
        Value::Object(fields) => ["text", "content"]
            .iter()
            .find_map(|key| fields.get(*key).and_then(Value::as_str))
            .map(|text| text.trim().to_string())
            .unwrap_or_default(),
        Value::Null => String::new(),
        other => other.to_string().trim().to_string(),
    }
}

/// Pick the first of `message`, `prompt`, `text` that holds usable content
pub fn fallback_field(body: &Value) -> Option<&Value> {
    ["message", "prompt", "text"]
        .iter()
        .filter_map(|key| body.get(*key))
        .find(|value| !flatten_content(value).is_empty())
}
