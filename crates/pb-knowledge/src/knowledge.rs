//! Grouped lookup tables over the Q&A catalog.
//!
//! Rows are bucketed by subject in first-appearance order; within a
//! subject, question order follows row order. Lookups are exact string
//! matches, linear over a table of a few dozen rows.

use std::collections::HashMap;

use pb_protocol::QaRecord;

/// Fixed reply for questions with no catalog entry.
pub const FALLBACK_ANSWER: &str =
    "I'm sorry, I could not find a specific answer for that question in my database.";

/// The Q&A catalog, grouped and indexed for menu rendering and lookup.
#[derive(Debug, Clone, Default)]
pub struct KnowledgeBase {
    subjects: Vec<SubjectEntry>,
    index: HashMap<String, usize>,
}

#[derive(Debug, Clone)]
struct SubjectEntry {
    name: String,
    /// (question, answer) pairs in row order.
    entries: Vec<(String, String)>,
}

impl KnowledgeBase {
    /// A base with no subjects at all. Front ends fall back to this when
    /// the data file is missing or malformed, so menus render empty
    /// instead of the process crashing.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Group catalog rows by subject. Every row lands in exactly one
    /// bucket; duplicate subject names merge into the existing bucket.
    pub fn from_records(rows: Vec<QaRecord>) -> Self {
        let mut base = Self::default();
        for row in rows {
            base.push(row);
        }
        tracing::debug!(
            subjects = base.subject_count(),
            rows = base.len(),
            "knowledge base built"
        );
        base
    }

    fn push(&mut self, row: QaRecord) {
        let idx = match self.index.get(&row.subject) {
            Some(&i) => i,
            None => {
                self.subjects.push(SubjectEntry {
                    name: row.subject.clone(),
                    entries: Vec::new(),
                });
                self.index.insert(row.subject, self.subjects.len() - 1);
                self.subjects.len() - 1
            }
        };
        self.subjects[idx].entries.push((row.question, row.answer));
    }

    /// Ordered subject names: the main menu.
    pub fn subjects(&self) -> Vec<&str> {
        self.subjects.iter().map(|s| s.name.as_str()).collect()
    }

    /// Ordered questions for one subject, or `None` for an unknown subject.
    pub fn questions(&self, subject: &str) -> Option<Vec<&str>> {
        let &i = self.index.get(subject)?;
        Some(
            self.subjects[i]
                .entries
                .iter()
                .map(|(q, _)| q.as_str())
                .collect(),
        )
    }

    /// Exact-match answer lookup across all subjects.
    pub fn answer(&self, question: &str) -> Option<&str> {
        self.subjects
            .iter()
            .flat_map(|s| s.entries.iter())
            .find(|(q, _)| q == question)
            .map(|(_, a)| a.as_str())
    }

    /// Number of distinct subjects.
    pub fn subject_count(&self) -> usize {
        self.subjects.len()
    }

    /// Total number of catalog rows across all subjects.
    pub fn len(&self) -> usize {
        self.subjects.iter().map(|s| s.entries.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.subjects.is_empty()
    }

    /// Built-in catalog matching the original sales dataset, used when no
    /// data path is configured and by tests.
    pub fn with_sample_catalog() -> Self {
        Self::from_records(sample_records())
    }
}

/// The sample Q&A rows behind [`KnowledgeBase::with_sample_catalog`].
pub fn sample_records() -> Vec<QaRecord> {
    let rows = [
        (
            "Legal & Financing Questions",
            "Is the project RERA registered? What is the ID?",
            "Yes, the project is fully RERA registered. RERA ID: RERA/P/1234/5678.",
        ),
        (
            "Legal & Financing Questions",
            "Are bank loans available for this project?",
            "Bank loans are available from HDFC, SBI, and ICICI as the project is pre-approved.",
        ),
        (
            "Legal & Financing Questions",
            "What is the policy for booking cancellation/refund?",
            "A full refund is provided if cancellation occurs within 7 days of booking, subject to administrative fees.",
        ),
        (
            "General Project & Amenities",
            "What are the key amenities provided in the project?",
            "Key amenities include a paved road network, 24/7 water supply, electricity, and a dedicated park area.",
        ),
        (
            "General Project & Amenities",
            "What is the distance to the nearest main road?",
            "The site is located just 500 meters from the main National Highway.",
        ),
        (
            "General Project & Amenities",
            "What is the expected possession date?",
            "The expected date of possession is Q4 2026.",
        ),
    ];
    rows.into_iter()
        .map(|(subject, question, answer)| QaRecord {
            subject: subject.into(),
            question: question.into(),
            answer: answer.into(),
        })
        .collect()
}
