//! First-class action types.
//!
//! A [`Ply`] is a recorded half-move; an [`Action`] is an adapter's request
//! against the game state. Both are plain values that can be validated,
//! logged and replayed independently of execution.

use super::{Mark, Position};
use derive_new::new;
use serde::{Deserialize, Serialize};

/// One half-move: a mark placed at a position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, new)]
pub struct Ply {
    /// Where the mark was placed.
    pub position: Position,
    /// The mark placed.
    pub mark: Mark,
}

impl Ply {
    /// Row of the placed mark (0-2).
    pub fn row(&self) -> usize {
        self.position.row()
    }

    /// Column of the placed mark (0-2).
    pub fn col(&self) -> usize {
        self.position.col()
    }
}

impl std::fmt::Display for Ply {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} in ({}-{})", self.mark, self.row(), self.col())
    }
}

/// Everything an adapter may ask of the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    /// Place the next mark at a raw board index (validated on application).
    Place(usize),
    /// Move the cursor to a history step.
    JumpTo(usize),
    /// Flip the move list between chronological and reverse order.
    ToggleListOrder,
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Action::Place(index) => write!(f, "place at {}", index),
            Action::JumpTo(step) => write!(f, "jump to step {}", step),
            Action::ToggleListOrder => write!(f, "toggle list order"),
        }
    }
}
