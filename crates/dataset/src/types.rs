//! Domain types for the static Q&A dataset.

use serde::{Deserialize, Serialize};

/// A single question/answer entry from the dataset file.
///
/// Records are immutable after load and have positional identity only —
/// the dataset format carries no ID field.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatasetRecord {
    /// The canonical question text used for keyword matching
    pub question: String,

    /// The stored answer returned verbatim on a match
    pub answer: String,

    /// Optional external link returned alongside the answer
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,

    /// Optional attachment filename served from the upload directory
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file: Option<String>,
}

/// On-disk shape of the dataset file: `{"dataset": [...]}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatasetFile {
    pub dataset: Vec<DatasetRecord>,
}

/// A resolved answer produced by the matcher.
///
/// When the matched record carries an attachment, `response` already contains
/// the download anchor appended to the stored answer text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchedAnswer {
    /// Answer text, possibly with a download link fragment appended
    pub response: String,

    /// External link carried by the matched record, if any
    pub link: Option<String>,
}
