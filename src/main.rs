//! WOPR - unified CLI
//!
//! Terminal tic-tac-toe against WOPR, or WOPR against itself.

#![warn(missing_docs)]

mod cli;
mod tui;
mod watch;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Command};
use std::sync::Arc;
use tracing::{info, instrument, warn};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};
use wopr::{CannedCommentator, Commentator, LlmClient, LlmCommentator, WoprConfig};

const LOG_FILE: &str = "wopr.log";

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command.unwrap_or(Command::Play) {
        Command::Play => {
            initialize_file_tracing()?;
            let config = WoprConfig::load_or_default(&cli.config)?;
            tui::run(&config, build_commentator(&config)).await
        }
        Command::Watch { games } => {
            initialize_stderr_tracing();
            let config = WoprConfig::load_or_default(&cli.config)?;
            watch::run(&config, build_commentator(&config), games).await
        }
    }
}

/// Picks the LLM commentator when an API key is available, canned lines otherwise.
#[instrument(skip(config), fields(provider = %config.llm_provider()))]
fn build_commentator(config: &WoprConfig) -> Arc<dyn Commentator> {
    match config.create_llm_config() {
        Ok(llm_config) => {
            info!(model = %llm_config.model(), "Using generated commentary");
            Arc::new(LlmCommentator::new(LlmClient::new(llm_config)))
        }
        Err(e) => {
            warn!(error = %e, "No API key, using canned commentary");
            Arc::new(CannedCommentator)
        }
    }
}

fn default_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info,wopr=debug"))
}

/// Logs to a file so the terminal UI isn't disturbed.
fn initialize_file_tracing() -> Result<()> {
    let log_file = std::fs::File::create(LOG_FILE)?;
    tracing_subscriber::fmt()
        .with_env_filter(default_filter())
        .with_writer(Arc::new(log_file))
        .with_ansi(false)
        .try_init()
        .map_err(|e| anyhow::anyhow!(e))?;
    info!("Tracing initialized");
    Ok(())
}

fn initialize_stderr_tracing() {
    tracing_subscriber::registry()
        .with(default_filter())
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
    info!("Tracing initialized");
}
