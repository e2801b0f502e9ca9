//! Mapping between abstraction types and OpenAI wire types

use crate::llm::core::{
    error::LlmError,
    types::{ChatMessage, Choice, Completion, CompletionRequest, FinishReason, UsageMetadata},
};

use super::types::{ChatCompletionRequest, ChatCompletionResponse, ErrorResponse, OpenAiMessage};

/// Convert our abstraction request to the chat completions request body
pub fn to_openai_request(request: CompletionRequest) -> ChatCompletionRequest {
    ChatCompletionRequest {
        model: request.model,
        messages: request.messages.into_iter().map(to_openai_message).collect(),
        temperature: request.config.temperature,
        max_tokens: request.config.max_tokens,
        top_p: request.config.top_p,
    }
}

fn to_openai_message(message: ChatMessage) -> OpenAiMessage {
    OpenAiMessage {
        role: message.role,
        content: message.content,
    }
}

/// Convert a chat completions response to our `Completion`
pub fn from_openai_response(response: ChatCompletionResponse) -> Completion {
    let choices = response
        .choices
        .into_iter()
        .map(|choice| Choice {
            index: choice.index,
            content: choice.message.and_then(|m| m.content),
            finish_reason: choice.finish_reason.as_deref().map(FinishReason::parse),
        })
        .collect();

    Completion {
        id: response.id,
        choices,
        usage: response
            .usage
            .map(|u| UsageMetadata::new(u.prompt_tokens, u.completion_tokens)),
    }
}

/// Turn a non-2xx response into the most specific `LlmError` available.
///
/// Bodies carrying the `{"error": {...}}` envelope become `ProviderError`;
/// anything else is reported as a plain `HttpError`.
pub fn error_from_response(status: u16, body: String) -> LlmError {
    match serde_json::from_str::<ErrorResponse>(&body) {
        Ok(envelope) => {
            let code = match envelope.error.code {
                Some(serde_json::Value::String(code)) => code,
                Some(serde_json::Value::Null) | None => envelope
                    .error
                    .kind
                    .unwrap_or_else(|| status.to_string()),
                Some(other) => other.to_string(),
            };
            if status == 401 {
                return LlmError::AuthenticationError(envelope.error.message);
            }
            LlmError::ProviderError {
                code,
                message: envelope.error.message,
            }
        }
        Err(_) => LlmError::HttpError { status, body },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::llm::core::config::GenerationConfig;
    use crate::llm::openai::types::{OpenAiChoice, OpenAiResponseMessage, OpenAiUsage};

    #[test]
    fn test_to_openai_request_preserves_order() {
        let request = CompletionRequest::new(
            "gpt-4o-mini",
            vec![
                ChatMessage::system("persona"),
                ChatMessage::user("first"),
                ChatMessage::assistant("second"),
            ],
        )
        .with_config(GenerationConfig::default().with_max_tokens(256));

        let body = to_openai_request(request);
        assert_eq!(body.model, "gpt-4o-mini");
        assert_eq!(body.temperature, Some(0.7));
        assert_eq!(body.max_tokens, Some(256));
        let roles: Vec<&str> = body.messages.iter().map(|m| m.role.as_str()).collect();
        assert_eq!(roles, vec!["system", "user", "assistant"]);
    }

    #[test]
    fn test_from_openai_response() {
        let response = ChatCompletionResponse {
            id: Some("chatcmpl-1".to_string()),
            choices: vec![OpenAiChoice {
                index: 0,
                message: Some(OpenAiResponseMessage {
                    role: Some("assistant".to_string()),
                    content: Some("Eat leafy greens.".to_string()),
                }),
                finish_reason: Some("stop".to_string()),
            }],
            usage: Some(OpenAiUsage {
                prompt_tokens: 10,
                completion_tokens: 5,
            }),
        };

        let completion = from_openai_response(response);
        assert_eq!(completion.first_content(), Some("Eat leafy greens."));
        assert_eq!(completion.choices[0].finish_reason, Some(FinishReason::Stop));
        assert_eq!(completion.usage.unwrap().total_tokens, 15);
    }

    #[test]
    fn test_error_from_response_envelope() {
        let body = r#"{"error":{"message":"Rate limit reached","type":"requests","code":"rate_limit_exceeded"}}"#;
        match error_from_response(429, body.to_string()) {
            LlmError::ProviderError { code, message } => {
                assert_eq!(code, "rate_limit_exceeded");
                assert_eq!(message, "Rate limit reached");
            }
            other => panic!("Expected provider error, got {:?}", other),
        }
    }

    #[test]
    fn test_error_from_response_null_code_uses_type() {
        let body = r#"{"error":{"message":"The server had an error","type":"server_error","code":null}}"#;
        match error_from_response(500, body.to_string()) {
            LlmError::ProviderError { code, .. } => assert_eq!(code, "server_error"),
            other => panic!("Expected provider error, got {:?}", other),
        }
    }

    #[test]
    fn test_error_from_response_unauthorized() {
        let body = r#"{"error":{"message":"Incorrect API key provided","type":"invalid_request_error","code":"invalid_api_key"}}"#;
        let err = error_from_response(401, body.to_string());
        assert!(matches!(err, LlmError::AuthenticationError(_)));
        assert_eq!(err.detail(), "Incorrect API key provided");
    }

    #[test]
    fn test_error_from_response_plain_body() {
        let err = error_from_response(502, "<html>Bad Gateway</html>".to_string());
        match err {
            LlmError::HttpError { status, body } => {
                assert_eq!(status, 502);
                assert!(body.contains("Bad Gateway"));
            }
            other => panic!("Expected HTTP error, got {:?}", other),
        }
    }
}
