//! PlotBot API — read-only Q&A and plot lookup server.
//!
//! Loads the Q&A catalog and plot table once at startup, then serves
//! menu listings and exact-match lookups over HTTP.

use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

use pb_api::config::ApiConfig;
use pb_api::routes;
use pb_api::state::AppState;
use pb_knowledge::{KnowledgeBase, PlotRegistry, read_qa_file};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .init();

    tracing::info!(version = env!("CARGO_PKG_VERSION"), "pb-api starting");

    let config = ApiConfig::from_env();

    let knowledge = load_knowledge(&config);
    let plots = load_plots(&config);
    tracing::info!(
        subjects = knowledge.subject_count(),
        qa_rows = knowledge.len(),
        plots = plots.len(),
        "data loaded"
    );

    let state = AppState::new(knowledge, plots);
    let app = routes::build_router(state);

    let addr = format!("{}:{}", config.host, config.port);
    let listener = TcpListener::bind(&addr).await?;
    tracing::info!(addr = %addr, "listening");

    axum::serve(listener, app).await?;

    Ok(())
}

/// Load the Q&A catalog. A missing or malformed file logs the error and
/// serves empty menus instead of aborting startup.
fn load_knowledge(config: &ApiConfig) -> KnowledgeBase {
    match &config.qa_data_path {
        Some(path) => match read_qa_file(path) {
            Ok(rows) => KnowledgeBase::from_records(rows),
            Err(e) => {
                tracing::error!(path = %path, error = %e, "failed to load qa catalog — serving empty menus");
                KnowledgeBase::empty()
            }
        },
        None => {
            tracing::warn!("PLOTBOT_QA_DATA not set — serving built-in sample catalog");
            KnowledgeBase::with_sample_catalog()
        }
    }
}

/// Load the plot table, with the same fallback policy as the catalog.
fn load_plots(config: &ApiConfig) -> PlotRegistry {
    match &config.plot_data_path {
        Some(path) => match PlotRegistry::from_path(path) {
            Ok(registry) => registry,
            Err(e) => {
                tracing::error!(path = %path, error = %e, "failed to load plot table — serving empty registry");
                PlotRegistry::empty()
            }
        },
        None => {
            tracing::warn!("PLOTBOT_PLOT_DATA not set — serving built-in sample plots");
            PlotRegistry::with_sample_plots()
        }
    }
}
