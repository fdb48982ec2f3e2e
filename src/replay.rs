//! Headless replay: drive the engine from a move script and print the view.

use derive_more::{Display, Error};
use derive_new::new;
use serde::Serialize;
use timeline_tictactoe::{GameController, GameError, GameView, ListOrder, Position};
use tracing::{info, instrument, warn};

/// What to play before printing.
#[derive(Debug, Clone, PartialEq, Eq, new)]
pub struct ReplayScript {
    /// Board indices (0-8), applied in order.
    pub moves: Vec<usize>,
    /// Step to jump to after the moves.
    pub jump: Option<usize>,
    /// Move-list order of the printed view.
    pub list_order: ListOrder,
}

/// A move from the script the engine refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RejectedMove {
    /// Position in the script (0-based).
    pub ordinal: usize,
    /// Requested board index.
    pub index: usize,
    /// Why it was refused.
    pub reason: GameError,
}

/// Final view plus the refused moves.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReplayReport {
    /// View after the script ran.
    pub view: GameView,
    /// Moves that were no-ops.
    pub rejected: Vec<RejectedMove>,
}

/// Replay failure.
#[derive(Debug, Clone, Display, Error)]
#[display("Replay error: {} at {}:{}", message, file, line)]
pub struct ReplayError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ReplayError {
    /// Creates a new replay error.
    #[track_caller]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}

/// Runs `script` against a fresh game.
///
/// Refused moves are collected and play continues, matching how the board
/// ignores clicks. A jump outside the recorded history is an error.
#[instrument(skip(script), fields(moves = script.moves.len(), jump = ?script.jump))]
pub fn run_replay(script: &ReplayScript) -> Result<ReplayReport, ReplayError> {
    let mut controller = GameController::with_list_order(script.list_order);
    let mut rejected = Vec::new();

    for (ordinal, index) in script.moves.iter().copied().enumerate() {
        if let Err(reason) = controller.apply_move(index) {
            warn!(ordinal, index, %reason, "Move ignored");
            rejected.push(RejectedMove {
                ordinal,
                index,
                reason,
            });
        }
    }

    if let Some(step) = script.jump {
        controller
            .jump_to(step)
            .map_err(|e| ReplayError::new(format!("Cannot jump: {}", e)))?;
    }

    let view = controller.current_view();
    info!(cursor = view.cursor, status = %view.status_text(), "Replay finished");
    Ok(ReplayReport { view, rejected })
}

/// Plain-text rendering: board, status, and the move list with `>` on the cursor.
pub fn render_text(report: &ReplayReport) -> String {
    let view = &report.view;
    let mut out = String::new();

    out.push_str(&view.board.display());
    out.push_str("\n\n");
    out.push_str(&view.status_text());
    if let Some(line) = view.outcome.winning_line() {
        let squares: Vec<&str> = line.iter().map(|p| p.label()).collect();
        out.push_str(&format!(" ({})", squares.join(", ")));
    }
    out.push_str("\n\n");

    for entry in &view.moves {
        let marker = if entry.current { '>' } else { ' ' };
        out.push_str(&format!("{} {}\n", marker, entry.label()));
    }

    if !report.rejected.is_empty() {
        out.push('\n');
        for miss in &report.rejected {
            let square = Position::from_index(miss.index)
                .map(|p| p.label().to_string())
                .unwrap_or_else(|| miss.index.to_string());
            out.push_str(&format!(
                "ignored move #{} ({}): {}\n",
                miss.ordinal + 1,
                square,
                miss.reason
            ));
        }
    }

    out
}

/// JSON rendering of the whole report.
pub fn render_json(report: &ReplayReport) -> Result<String, ReplayError> {
    serde_json::to_string_pretty(report)
        .map_err(|e| ReplayError::new(format!("Failed to serialize report: {}", e)))
}
