//! Session engine for PlotBot's button-driven front ends.
//!
//! A [`Session`] walks a three-state menu machine (main menu, subject
//! sub-menu, free-text plot-number input) and records a chat transcript.
//! Menu data and answers come from an [`AnswerSource`], so the same
//! engine drives both the in-process knowledge base and a remote API.

pub mod session;
pub mod source;
pub mod state;

pub use session::{BACK_KEY, MenuOption, PLOT_LOOKUP_LABEL, Session};
pub use source::{AnswerSource, LocalSource, SourceError, SourceResult};
pub use state::SessionState;
