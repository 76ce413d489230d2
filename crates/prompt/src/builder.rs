//! Fallback prompt rendering.
//!
//! When no dataset record matches, the server builds a localized prompt
//! embedding the raw question and the detected language code, then hands it
//! to the LLM client. The template is Handlebars with HTML escaping disabled:
//! questions go to a plain-text generation API, not a browser.

use std::collections::HashMap;

use faqbot_core::{AppError, AppResult};
use handlebars::Handlebars;

/// Default fallback prompt template.
///
/// Exposes `{{question}}` and `{{lang}}` variables.
pub const DEFAULT_TEMPLATE: &str =
    "L'utilisateur a posé la question suivante : {{question}}. Réponds en {{lang}}.";

/// Render the fallback prompt for an unmatched question.
///
/// # Arguments
/// * `template` - Handlebars template (see [`DEFAULT_TEMPLATE`])
/// * `question` - The raw user question, embedded verbatim
/// * `lang` - Detected language code ("fr" or "en")
pub fn build_fallback_prompt(template: &str, question: &str, lang: &str) -> AppResult<String> {
    let mut variables = HashMap::new();
    variables.insert("question".to_string(), question.to_string());
    variables.insert("lang".to_string(), lang.to_string());

    let rendered = render_template(template, &variables)?;
    tracing::debug!(lang, "Built fallback prompt");

    Ok(rendered)
}

/// Render a Handlebars template with variables.
fn render_template(template: &str, variables: &HashMap<String, String>) -> AppResult<String> {
    let mut handlebars = Handlebars::new();

    // Disable HTML escaping for plain text
    handlebars.register_escape_fn(handlebars::no_escape);

    handlebars
        .register_template_string("prompt", template)
        .map_err(|e| AppError::Prompt(format!("Failed to register template: {}", e)))?;

    let rendered = handlebars
        .render("prompt", &variables)
        .map_err(|e| AppError::Prompt(format!("Failed to render template: {}", e)))?;

    Ok(rendered)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_template_embeds_question_and_lang() {
        let prompt = build_fallback_prompt(DEFAULT_TEMPLATE, "hello", "en").unwrap();
        assert!(prompt.contains("hello"));
        assert!(prompt.contains("en"));
        assert!(prompt.starts_with("L'utilisateur a posé la question suivante"));
    }

    #[test]
    fn test_question_is_not_html_escaped() {
        let prompt =
            build_fallback_prompt(DEFAULT_TEMPLATE, "qu'est-ce que <ça> veut dire?", "fr").unwrap();
        assert!(prompt.contains("qu'est-ce que <ça> veut dire?"));
        assert!(!prompt.contains("&#x27;"));
        assert!(!prompt.contains("&lt;"));
    }

    #[test]
    fn test_custom_template() {
        let prompt =
            build_fallback_prompt("Answer in {{lang}}: {{question}}", "why?", "en").unwrap();
        assert_eq!(prompt, "Answer in en: why?");
    }

    #[test]
    fn test_malformed_template_is_an_error() {
        let result = build_fallback_prompt("{{#if}}broken", "q", "fr");
        assert!(result.is_err());
    }
}
