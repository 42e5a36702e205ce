//! Data access layer for PlotBot.
//!
//! Loads the Q&A catalog and plot table from CSV, groups catalog rows by
//! subject in first-appearance order, and answers exact-match lookups by
//! question text or plot number.

pub mod catalog;
pub mod error;
pub mod knowledge;
pub mod plots;

pub use catalog::{read_plots, read_plots_file, read_qa, read_qa_file};
pub use error::{CatalogError, CatalogResult};
pub use knowledge::{FALLBACK_ANSWER, KnowledgeBase, sample_records};
pub use plots::{PlotRegistry, plot_details, plot_not_found};
