//! Dataset crate for the faqbot server.
//!
//! This crate owns the static Q&A dataset: loading it from JSON at startup,
//! keyword-overlap matching against user questions, and classifying the
//! question's language for the fallback prompt.
//!
//! # Example
//! ```no_run
//! use faqbot_dataset::DatasetStore;
//! use std::path::Path;
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let store = DatasetStore::load(Path::new("dataset.json"))?;
//! if let Some(matched) = store.find_answer("comment réinitialiser mon mot de passe") {
//!     println!("{}", matched.response);
//! }
//! # Ok(())
//! # }
//! ```

pub mod lang;
pub mod matcher;
pub mod store;
pub mod types;

// Re-export main types
pub use lang::Language;
pub use matcher::tokenize;
pub use store::DatasetStore;
pub use types::{DatasetRecord, MatchedAnswer};
