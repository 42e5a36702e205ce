//! Shared application state for the Axum server.
//!
//! The tables are loaded once at startup and never mutated, so handlers
//! share them behind plain `Arc`s.

use std::sync::Arc;

use pb_knowledge::{KnowledgeBase, PlotRegistry};

/// Shared application state, cloned into every Axum handler.
#[derive(Clone)]
pub struct AppState {
    /// Grouped Q&A catalog.
    pub knowledge: Arc<KnowledgeBase>,
    /// Plot table keyed by plot number.
    pub plots: Arc<PlotRegistry>,
}

impl AppState {
    pub fn new(knowledge: KnowledgeBase, plots: PlotRegistry) -> Self {
        Self {
            knowledge: Arc::new(knowledge),
            plots: Arc::new(plots),
        }
    }

    /// State with no data at all: empty menus, every lookup misses.
    pub fn empty() -> Self {
        Self::new(KnowledgeBase::empty(), PlotRegistry::empty())
    }

    /// State with the built-in sample catalog and plots, for development
    /// and tests.
    pub fn with_sample_data() -> Self {
        Self::new(
            KnowledgeBase::with_sample_catalog(),
            PlotRegistry::with_sample_plots(),
        )
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::empty()
    }
}
