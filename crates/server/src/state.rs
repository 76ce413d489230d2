//! Shared request-handler state.

use std::path::PathBuf;
use std::sync::Arc;

use faqbot_dataset::DatasetStore;
use faqbot_llm::LlmClient;

/// State shared across request handlers.
///
/// The dataset is read-only after startup, so concurrent handlers share it
/// through an `Arc` without synchronization.
#[derive(Clone)]
pub struct AppState {
    /// Immutable Q&A dataset loaded at startup
    pub dataset: Arc<DatasetStore>,

    /// LLM client used for fallback answers
    pub llm: Arc<dyn LlmClient>,

    /// Model identifier passed to the generation service
    pub model: String,

    /// Handlebars template for the fallback prompt
    pub prompt_template: String,

    /// Directory holding uploaded attachment files
    pub upload_dir: PathBuf,
}
