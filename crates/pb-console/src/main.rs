//! PlotBot console — menu-driven sales assistant in the terminal.

use clap::{Parser, Subcommand};

mod client;
mod commands;
mod config;

use config::ConsoleConfig;

#[derive(Parser)]
#[command(name = "plotbot", version, about = "PlotBot sales assistant console")]
struct Cli {
    /// TOML config file with data paths / remote URL.
    #[arg(long, global = true)]
    config: Option<String>,
    /// Q&A catalog CSV path (overrides the config file).
    #[arg(long, global = true)]
    qa: Option<String>,
    /// Plot table CSV path (overrides the config file).
    #[arg(long, global = true)]
    plots: Option<String>,
    /// Base URL of a running pb-api instance (overrides local data).
    #[arg(long, global = true)]
    remote: Option<String>,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive chat session
    Chat,
    /// Print the subject menu
    Menu,
    /// Print the questions for a subject
    Questions { subject: String },
    /// Look up the answer for a question (verbatim match)
    Ask { question: String },
    /// Look up a plot by number
    Plot { number: String },
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let result = run(cli).await;
    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let config = resolve_config(&cli)?;
    let source = commands::build_source(&config)?;

    match cli.command {
        Commands::Chat => commands::chat::run(source.as_ref()).await,
        Commands::Menu => commands::menu::run(source.as_ref()).await,
        Commands::Questions { subject } => {
            commands::questions::run(source.as_ref(), &subject).await
        }
        Commands::Ask { question } => commands::ask::run(source.as_ref(), &question).await,
        Commands::Plot { number } => commands::plot::run(source.as_ref(), &number).await,
    }
}

/// Merge the config file (if any) with command-line overrides.
fn resolve_config(cli: &Cli) -> anyhow::Result<ConsoleConfig> {
    let mut config = match &cli.config {
        Some(path) => ConsoleConfig::from_file(path)?,
        None => ConsoleConfig::default(),
    };
    if cli.qa.is_some() {
        config.qa_data_path = cli.qa.clone();
    }
    if cli.plots.is_some() {
        config.plot_data_path = cli.plots.clone();
    }
    if cli.remote.is_some() {
        config.remote_url = cli.remote.clone();
    }
    Ok(config)
}
