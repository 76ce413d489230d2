//! LLM client abstraction and request/response types.

use faqbot_core::AppResult;
use serde::{Deserialize, Serialize};

/// LLM completion request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LlmRequest {
    /// The prompt text to send to the LLM
    pub prompt: String,

    /// Model identifier (e.g., "llama3")
    pub model: String,

    /// Streaming responses; the fallback path always sends a single
    /// non-streaming request
    #[serde(default)]
    pub stream: bool,
}

impl LlmRequest {
    /// Create a new non-streaming LLM request.
    pub fn new(prompt: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
            model: model.into(),
            stream: false,
        }
    }
}

/// LLM completion response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LlmResponse {
    /// The generated text
    pub content: String,

    /// Model that generated the response
    pub model: String,

    /// Whether the response was complete
    #[serde(default = "default_true")]
    pub done: bool,
}

fn default_true() -> bool {
    true
}

/// Trait for LLM providers.
///
/// Abstracts the generation service behind the fallback path. A failed call
/// surfaces as a typed `AppError::Llm` so callers can decide how to degrade;
/// the provider never masks failures itself.
#[async_trait::async_trait]
pub trait LlmClient: Send + Sync {
    /// Get the provider name (e.g., "ollama").
    fn provider_name(&self) -> &str;

    /// Perform a single completion attempt. No retries.
    async fn complete(&self, request: &LlmRequest) -> AppResult<LlmResponse>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_defaults_to_non_streaming() {
        let request = LlmRequest::new("Bonjour", "llama3");
        assert_eq!(request.prompt, "Bonjour");
        assert_eq!(request.model, "llama3");
        assert!(!request.stream);
    }

    #[test]
    fn test_response_done_defaults_to_true() {
        let response: LlmResponse =
            serde_json::from_str(r#"{"content": "hi", "model": "llama3"}"#).unwrap();
        assert!(response.done);
    }
}
