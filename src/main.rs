//! docchat - Terminal chat client for a document Q&A backend
//!
//! Main entry point: parses the CLI, loads configuration, and
//! dispatches to the command handlers.

use anyhow::Result;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use docchat::cli::{Cli, Commands, DocsCommand};
use docchat::commands;
use docchat::config::Config;

#[tokio::main]
async fn main() -> Result<()> {
    // Parse command line arguments
    let cli = Cli::parse_args();

    // Initialize tracing
    init_tracing(cli.verbose);

    // Load configuration
    let config_path = cli.config.as_deref().unwrap_or("config/config.yaml");
    let config = Config::load(config_path, &cli)?;

    // Validate configuration
    config.validate()?;

    // Execute command
    match cli.command {
        Commands::Chat { file } => {
            tracing::info!("Starting interactive chat mode");
            if let Some(f) = &file {
                tracing::debug!("Uploading on startup: {}", f.display());
            }
            commands::chat::run_chat(config, file).await?;
            Ok(())
        }
        Commands::Upload { file } => {
            tracing::info!("Starting one-shot upload");
            commands::upload::run_upload(config, &file).await?;
            Ok(())
        }
        Commands::Ask { question, top_k } => {
            tracing::info!("Starting one-shot question");
            commands::ask::run_ask(config, &question, top_k).await?;
            Ok(())
        }
        Commands::Docs { command } => match command {
            DocsCommand::List => {
                commands::docs::run_list(config).await?;
                Ok(())
            }
            DocsCommand::Delete { doc_id } => {
                commands::docs::run_delete(config, doc_id).await?;
                Ok(())
            }
        },
    }
}

/// Initialize tracing subscriber with environment filter
fn init_tracing(verbose: bool) {
    let default_filter = if verbose { "docchat=debug" } else { "docchat=info" };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}
