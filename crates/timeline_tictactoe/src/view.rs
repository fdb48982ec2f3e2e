//! Read-only views for presentation layers.
//!
//! Everything here is derived from a [`GameState`] on demand and owned by
//! the caller, so a renderer can keep it around without holding the engine.

use super::state::GameState;
use super::{Board, GameStatus, ListOrder, Mark, Outcome, Position};
use serde::{Deserialize, Serialize};

/// Mark and square of a recorded ply, as shown in the move list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Placement {
    /// Mark that moved.
    pub mark: Mark,
    /// Row (0-2).
    pub row: usize,
    /// Column (0-2).
    pub col: usize,
}

/// One entry of the jump menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MoveDescriptor {
    /// History step this entry jumps to.
    pub step: usize,
    /// What was played to reach the step; `None` for the game start.
    pub placement: Option<Placement>,
    /// True for the step under the cursor.
    pub current: bool,
}

impl MoveDescriptor {
    /// Label for the jump button.
    pub fn label(&self) -> String {
        match self.placement {
            None => "Go to game start".to_string(),
            Some(Placement { mark, row, col }) => {
                format!("Go to move #{}: {} in ({}-{})", self.step, mark, row, col)
            }
        }
    }
}

impl std::fmt::Display for MoveDescriptor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Builds the jump menu for `state` in its list order.
///
/// The mover for step m is the mark to move at step m-1, so even steps are
/// O and odd steps X. History itself is never reordered.
pub fn move_descriptors(state: &GameState) -> Vec<MoveDescriptor> {
    let cursor = state.cursor();
    let chronological = state
        .history()
        .iter()
        .enumerate()
        .map(|(step, snapshot)| MoveDescriptor {
            step,
            placement: snapshot.ply().map(|ply| {
                debug_assert_eq!(ply.mark, Mark::to_move_at(step - 1));
                Placement {
                    mark: Mark::to_move_at(step - 1),
                    row: ply.row(),
                    col: ply.col(),
                }
            }),
            current: step == cursor,
        });

    match state.list_order() {
        ListOrder::Ascending => chronological.collect(),
        ListOrder::Descending => chronological.rev().collect(),
    }
}

/// Everything a renderer may read.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameView {
    /// Board under the cursor.
    pub board: Board,
    /// Winner and winning line of that board.
    pub outcome: Outcome,
    /// In progress, won or drawn.
    pub status: GameStatus,
    /// Mark that moves from the cursor.
    pub next_mark: Mark,
    /// Selected history step.
    pub cursor: usize,
    /// Order of `moves`.
    pub list_order: ListOrder,
    /// Jump menu, one entry per snapshot.
    pub moves: Vec<MoveDescriptor>,
}

impl GameView {
    /// Derives the view of `state`.
    pub fn of(state: &GameState) -> Self {
        Self {
            board: *state.board(),
            outcome: state.outcome(),
            status: state.status(),
            next_mark: state.next_mark(),
            cursor: state.cursor(),
            list_order: state.list_order(),
            moves: move_descriptors(state),
        }
    }

    /// Status line: winner, draw, or who moves next.
    pub fn status_text(&self) -> String {
        match self.status {
            GameStatus::Won(mark) => format!("Winner: {}", mark),
            GameStatus::Drawn => "Draw".to_string(),
            GameStatus::InProgress => format!("Next player: {}", self.next_mark),
        }
    }

    /// Label for the list-order toggle.
    pub fn toggle_label(&self) -> &'static str {
        self.list_order.toggle_label()
    }

    /// True when `pos` is part of the winning line.
    pub fn is_highlighted(&self, pos: Position) -> bool {
        self.outcome.contains(pos)
    }

    /// Squares a move may target; empty once the game is decided.
    pub fn valid_targets(&self) -> Vec<Position> {
        if self.status.is_decided() {
            Vec::new()
        } else {
            Position::valid_moves(&self.board)
        }
    }

    /// Index into `moves` of the entry under the cursor.
    pub fn current_entry(&self) -> Option<usize> {
        self.moves.iter().position(|m| m.current)
    }

    /// Number of recorded plies, game start excluded.
    pub fn ply_count(&self) -> usize {
        self.moves.len().saturating_sub(1)
    }
}
