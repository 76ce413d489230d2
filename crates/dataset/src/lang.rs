//! Language detection for incoming questions.
//!
//! The chatbot serves a French-first audience: anything that does not
//! confidently identify as English is treated as French, including third
//! languages and detection failures on short or ambiguous input.

use std::fmt;

use whatlang::Lang;

/// Detected question language.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Language {
    Fr,
    En,
}

impl Language {
    /// Classify text as French or English.
    ///
    /// Returns `En` iff the underlying detector identifies English; every
    /// other outcome, detection failure included, returns `Fr`. Never errors.
    pub fn detect(text: &str) -> Self {
        match whatlang::detect(text) {
            Some(info) if info.lang() == Lang::Eng => Language::En,
            _ => Language::Fr,
        }
    }

    /// ISO 639-1 code for this language.
    pub fn code(&self) -> &'static str {
        match self {
            Language::Fr => "fr",
            Language::En => "en",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}
