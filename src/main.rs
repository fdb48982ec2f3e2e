//! timeline_games - terminal tic-tac-toe with time travel.

#![warn(missing_docs)]

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Command, OutputFormat};
use timeline_games::{ListOrder, ReplayScript, Settings, render_json, render_text, run_replay, run_tui};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file (RUST_LOG and friends)
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let settings = Settings::load(cli.config.as_deref()).context("Failed to load settings")?;

    match cli.command {
        Command::Play => play(&settings),
        Command::Replay {
            moves,
            jump,
            descending,
            format,
        } => {
            let list_order = if descending {
                ListOrder::Descending
            } else {
                settings.initial_list_order()
            };
            replay(&settings, ReplayScript::new(moves, jump, list_order), format)
        }
    }
}

fn env_filter(settings: &Settings) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(settings.log_filter()))
}

/// Play in the terminal UI, logging to a file so the screen stays clean.
fn play(settings: &Settings) -> Result<()> {
    let log_file = std::fs::File::create(settings.log_file()).with_context(|| {
        format!("Failed to create log file {}", settings.log_file().display())
    })?;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter(settings))
        .with_writer(std::sync::Arc::new(log_file))
        .with_ansi(false)
        .try_init();

    info!("Starting timeline_games");
    run_tui(settings)
}

/// Replay a move script and print the view to stdout; logs go to stderr.
fn replay(settings: &Settings, script: ReplayScript, format: OutputFormat) -> Result<()> {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter(settings))
        .with_writer(std::io::stderr)
        .try_init();

    let report = run_replay(&script)?;
    let output = match format {
        OutputFormat::Text => render_text(&report),
        OutputFormat::Json => render_json(&report)?,
    };
    println!("{}", output);
    Ok(())
}
