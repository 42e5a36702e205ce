//! Where menu data and answers come from.
//!
//! The session engine never touches tables directly; it goes through
//! [`AnswerSource`] so the console can run against the in-process
//! knowledge base or a remote PlotBot API with the same loop.

use async_trait::async_trait;

use pb_knowledge::{KnowledgeBase, PlotRegistry};
use pb_protocol::PlotRecord;

/// Errors surfaced by an answer source (transport failures, bad payloads).
#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    #[error("source unavailable: {0}")]
    Unavailable(String),

    #[error("invalid response: {0}")]
    InvalidResponse(String),
}

/// Convenience alias for source results.
pub type SourceResult<T> = Result<T, SourceError>;

/// Backing store for menus, answers, and plot lookups.
#[async_trait]
pub trait AnswerSource: Send + Sync {
    /// Ordered subject names for the main menu.
    async fn subjects(&self) -> SourceResult<Vec<String>>;

    /// Ordered questions for one subject; `None` for an unknown subject.
    async fn questions(&self, subject: &str) -> SourceResult<Option<Vec<String>>>;

    /// Exact-match answer; `None` when the catalog has no entry.
    async fn answer(&self, question: &str) -> SourceResult<Option<String>>;

    /// Plot record for a plot number; `None` when unknown.
    async fn plot(&self, number: &str) -> SourceResult<Option<PlotRecord>>;
}

/// [`AnswerSource`] over in-process tables. Lookups cannot fail.
pub struct LocalSource {
    knowledge: KnowledgeBase,
    plots: PlotRegistry,
}

impl LocalSource {
    pub fn new(knowledge: KnowledgeBase, plots: PlotRegistry) -> Self {
        Self { knowledge, plots }
    }

    /// Source backed by the built-in sample catalog and plot table.
    pub fn with_sample_data() -> Self {
        Self::new(
            KnowledgeBase::with_sample_catalog(),
            PlotRegistry::with_sample_plots(),
        )
    }

    pub fn knowledge(&self) -> &KnowledgeBase {
        &self.knowledge
    }

    pub fn plots(&self) -> &PlotRegistry {
        &self.plots
    }
}

#[async_trait]
impl AnswerSource for LocalSource {
    async fn subjects(&self) -> SourceResult<Vec<String>> {
        Ok(self
            .knowledge
            .subjects()
            .into_iter()
            .map(String::from)
            .collect())
    }

    async fn questions(&self, subject: &str) -> SourceResult<Option<Vec<String>>> {
        Ok(self
            .knowledge
            .questions(subject)
            .map(|qs| qs.into_iter().map(String::from).collect()))
    }

    async fn answer(&self, question: &str) -> SourceResult<Option<String>> {
        Ok(self.knowledge.answer(question).map(String::from))
    }

    async fn plot(&self, number: &str) -> SourceResult<Option<PlotRecord>> {
        Ok(self.plots.lookup(number).cloned())
    }
}
