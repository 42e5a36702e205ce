//! Console subcommands.

pub mod ask;
pub mod chat;
pub mod menu;
pub mod plot;
pub mod questions;

use pb_knowledge::{KnowledgeBase, PlotRegistry, read_qa_file};
use pb_session::{AnswerSource, LocalSource};

use crate::client::ApiClient;
use crate::config::ConsoleConfig;

/// Resolve the answer source for one invocation: a remote API client
/// when a URL is configured, local tables otherwise.
///
/// A data file that fails to load reports the error on stderr and
/// leaves its table empty, so menus render empty instead of the
/// command aborting.
pub fn build_source(config: &ConsoleConfig) -> anyhow::Result<Box<dyn AnswerSource>> {
    if let Some(url) = &config.remote_url {
        return Ok(Box::new(ApiClient::new(url, config.timeout_secs)?));
    }

    let knowledge = match &config.qa_data_path {
        Some(path) => match read_qa_file(path) {
            Ok(rows) => KnowledgeBase::from_records(rows),
            Err(e) => {
                eprintln!("error: failed to load qa catalog from {path}: {e}");
                KnowledgeBase::empty()
            }
        },
        None => KnowledgeBase::with_sample_catalog(),
    };

    let plots = match &config.plot_data_path {
        Some(path) => match PlotRegistry::from_path(path) {
            Ok(registry) => registry,
            Err(e) => {
                eprintln!("error: failed to load plot table from {path}: {e}");
                PlotRegistry::empty()
            }
        },
        None => PlotRegistry::with_sample_plots(),
    };

    Ok(Box::new(LocalSource::new(knowledge, plots)))
}
