//! Rejection reasons for engine operations.
//!
//! Every rejection leaves the game state exactly as it was; these values only
//! make the rejection observable to callers.

use super::{Mark, Position};
use serde::{Deserialize, Serialize};

/// Why a placement was refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
pub enum MoveRejection {
    /// Index is not a square of the 3x3 board.
    #[display("index {} is outside the board", _0)]
    OutOfBounds(usize),

    /// The square already holds a mark.
    #[display("square {} is already occupied", _0)]
    Occupied(Position),

    /// The snapshot under the cursor is already won.
    #[display("game already won by {}", _0)]
    GameDecided(Mark),
}

/// Error returned by a rejected operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
pub enum GameError {
    /// Occupied square, decided game, or index off the board.
    #[display("Invalid move target: {}", _0)]
    InvalidMoveTarget(MoveRejection),

    /// Jump outside `0..len`.
    #[display("History step {} out of range (history holds {} snapshots)", step, len)]
    InvalidHistoryIndex {
        /// Requested step.
        step: usize,
        /// Number of snapshots at the time of the request.
        len: usize,
    },
}

impl std::error::Error for GameError {}

impl From<MoveRejection> for GameError {
    fn from(rejection: MoveRejection) -> Self {
        GameError::InvalidMoveTarget(rejection)
    }
}
