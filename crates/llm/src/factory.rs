//! LLM provider factory.
//!
//! Creates LLM clients from the application configuration's provider name.

use std::sync::Arc;
use std::time::Duration;

use faqbot_core::{AppError, AppResult};

use crate::client::LlmClient;
use crate::providers::OllamaClient;

/// Create an LLM client based on the provider name.
///
/// Only Ollama is implemented; an unknown provider is a configuration error
/// surfaced at startup, before the server accepts traffic.
///
/// # Arguments
/// * `provider` - Provider identifier (currently only "ollama")
/// * `endpoint` - Base URL of the generation service
/// * `timeout` - Bound on a single generation call
pub fn create_client(
    provider: &str,
    endpoint: &str,
    timeout: Duration,
) -> AppResult<Arc<dyn LlmClient>> {
    match provider.to_lowercase().as_str() {
        "ollama" => {
            let client = OllamaClient::new(endpoint, timeout)?;
            Ok(Arc::new(client))
        }
        other => Err(AppError::Config(format!("Unknown provider: {}", other))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_ollama_client() {
        let client = create_client("ollama", "http://localhost:11434", Duration::from_secs(60));
        assert!(client.is_ok());
        assert_eq!(client.unwrap().provider_name(), "ollama");
    }

    #[test]
    fn test_provider_name_is_case_insensitive() {
        let client = create_client("Ollama", "http://localhost:11434", Duration::from_secs(60));
        assert!(client.is_ok());
    }

    #[test]
    fn test_unknown_provider() {
        match create_client("openai", "http://localhost:11434", Duration::from_secs(60)) {
            Err(AppError::Config(msg)) => assert!(msg.contains("Unknown provider")),
            _ => panic!("Expected config error for unknown provider"),
        }
    }
}
