use serde::{Deserialize, Serialize};

/// One row of the Q&A catalog.
///
/// Field names match the catalog's CSV header, so rows deserialize
/// directly from the tabular reader.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QaRecord {
    /// Top-level category the question belongs to.
    pub subject: String,
    /// Question text, matched verbatim on lookup.
    pub question: String,
    /// Canned answer returned for the question.
    pub answer: String,
}

/// Response body for an answer lookup.
///
/// Always populated: unknown questions carry the fixed fallback text
/// instead of an error status.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnswerReply {
    pub question: String,
    pub answer: String,
}
