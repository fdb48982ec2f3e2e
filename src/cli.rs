//! Command-line interface for timeline_games.

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Tic-tac-toe with full move-history time travel
#[derive(Parser, Debug)]
#[command(name = "timeline_games")]
#[command(about = "Tic-tac-toe with a jump-anywhere move history", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Settings file (TOML). Defaults to ./timeline_games.toml when present.
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play in the terminal UI
    Play,

    /// Apply a move script headlessly and print the resulting view
    Replay {
        /// Board indices 0-8, comma separated (e.g. 4,0,8)
        #[arg(long, value_delimiter = ',')]
        moves: Vec<usize>,

        /// History step to jump to after the moves
        #[arg(long)]
        jump: Option<usize>,

        /// List the newest move first
        #[arg(long)]
        descending: bool,

        /// Output format
        #[arg(long, value_enum, default_value = "text")]
        format: OutputFormat,
    },
}

/// How `replay` prints its report.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Board grid and move list
    Text,
    /// Pretty-printed JSON
    Json,
}
