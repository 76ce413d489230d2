//! Keyword-overlap matcher over the dataset.
//!
//! Questions are lowercased and tokenized into word sets; a record's score is
//! the size of the intersection between its token set and the user's. The
//! earliest record with the strictly greatest score wins, and a score of zero
//! everywhere means no match (the caller falls back to the LLM).

use std::collections::HashSet;
use std::sync::LazyLock;

use regex::Regex;

use crate::store::DatasetStore;
use crate::types::MatchedAnswer;

static WORD_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\w+").expect("valid word regex"));

/// Tokenize text into a lowercase set of word-character runs.
///
/// Duplicates collapse and order is irrelevant; `\w+` is Unicode-aware, so
/// accented words tokenize as single tokens.
pub fn tokenize(text: &str) -> HashSet<String> {
    let lower = text.to_lowercase();
    WORD_RE
        .find_iter(&lower)
        .map(|m| m.as_str().to_string())
        .collect()
}

impl DatasetStore {
    /// Find the best-matching record for a user question.
    ///
    /// Returns `None` when every record scores zero, including for an empty
    /// question. On a match, a record carrying a `file` attribute gets a
    /// download anchor appended to its answer text.
    pub fn find_answer(&self, question: &str) -> Option<MatchedAnswer> {
        let user_tokens = tokenize(question);

        let mut best = None;
        let mut max_score = 0;

        for record in self.records() {
            let record_tokens = tokenize(&record.question);
            let score = record_tokens.intersection(&user_tokens).count();

            // Strict comparison: later records never displace an equal score,
            // so the earliest record wins ties.
            if score > max_score {
                max_score = score;
                best = Some(record);
            }
        }

        let record = best?;
        tracing::debug!(score = max_score, question = %record.question, "Dataset match");

        let response = match &record.file {
            Some(filename) => format!(
                "{}<br><a href='/uploads/{}' target='_blank'>Télécharger le fichier</a>",
                record.answer, filename
            ),
            None => record.answer.clone(),
        };

        Some(MatchedAnswer {
            response,
            link: record.link.clone(),
        })
    }
}
