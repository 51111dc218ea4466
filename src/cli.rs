//! Command-line interface for wopr.

use clap::{Parser, Subcommand};

/// WOPR - tic-tac-toe against a cold-war military computer
#[derive(Parser, Debug)]
#[command(name = "wopr")]
#[command(about = "Play tic-tac-toe against WOPR", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the configuration file (defaults apply if it doesn't exist)
    #[arg(short, long, default_value = "wopr.toml", global = true)]
    pub config: std::path::PathBuf,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play in the terminal UI (default)
    Play,

    /// Watch WOPR play against its own heuristic
    Watch {
        /// Number of games to play
        #[arg(short, long, default_value = "1")]
        games: u32,
    },
}
