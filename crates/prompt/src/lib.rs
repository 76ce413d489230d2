//! Prompt system for the faqbot server.
//!
//! This crate renders the localized prompt sent to the LLM fallback when the
//! dataset has no answer for a question.

pub mod builder;

pub use builder::{build_fallback_prompt, DEFAULT_TEMPLATE};
