//! LLM integration crate for the faqbot server.
//!
//! Provides a provider-agnostic abstraction for the LLM fallback path. When
//! no dataset record matches a question, the server sends a localized prompt
//! through an `LlmClient` and returns the generated text.
//!
//! # Example
//! ```no_run
//! use faqbot_llm::{LlmClient, LlmRequest, providers::OllamaClient};
//! use std::time::Duration;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let client = OllamaClient::new("http://localhost:11434", Duration::from_secs(60))?;
//! let request = LlmRequest::new("Bonjour!", "llama3");
//! let response = client.complete(&request).await?;
//! println!("{}", response.content);
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod factory;
pub mod providers;

// Re-export main types
pub use client::{LlmClient, LlmRequest, LlmResponse};
pub use factory::create_client;
pub use providers::OllamaClient;
