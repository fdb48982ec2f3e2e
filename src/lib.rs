//! timeline_games library - terminal front end for the time-travel tic-tac-toe engine
//!
//! # Architecture
//!
//! - **Engine**: `timeline_tictactoe`, re-exported here
//! - **Config**: TOML settings for logging, colours and input timing
//! - **Replay**: headless driver that prints a view as text or JSON
//! - **TUI**: ratatui presentation adapter over the game controller
//!
//! # Example
//!
//! ```
//! use timeline_games::{ListOrder, ReplayScript, render_text, run_replay};
//!
//! let script = ReplayScript::new(vec![0, 3, 1, 4, 2], None, ListOrder::Ascending);
//! let report = run_replay(&script).unwrap();
//! assert!(render_text(&report).contains("Winner: X"));
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod config;
mod replay;
mod tui;

// Crate-level exports - Configuration
pub use config::{ConfigError, DEFAULT_CONFIG_FILE, HighlightColor, Settings};

// Crate-level exports - Headless replay
pub use replay::{
    RejectedMove, ReplayError, ReplayReport, ReplayScript, render_json, render_text, run_replay,
};

// Crate-level exports - Terminal UI
pub use tui::{App, Focus, digit_target, highlight_color, move_cursor, move_selection, run_tui};

// Crate-level exports - Engine types
pub use timeline_tictactoe::{
    Action, Board, Cell, GameController, GameError, GameState, GameStatus, GameView, History,
    ListOrder, Mark, MoveDescriptor, MoveRejection, Outcome, Placement, Ply, Position, Snapshot,
};
