//! Win detection logic for tic-tac-toe.

use super::super::{Board, Cell, Outcome, Position};
use tracing::instrument;

/// The eight lines, in detection priority: rows top to bottom, columns
/// left to right, main diagonal, anti diagonal.
pub const WIN_LINES: [[Position; 3]; 8] = [
    // Rows
    [Position::TopLeft, Position::TopCenter, Position::TopRight],
    [
        Position::MiddleLeft,
        Position::Center,
        Position::MiddleRight,
    ],
    [
        Position::BottomLeft,
        Position::BottomCenter,
        Position::BottomRight,
    ],
    // Columns
    [
        Position::TopLeft,
        Position::MiddleLeft,
        Position::BottomLeft,
    ],
    [
        Position::TopCenter,
        Position::Center,
        Position::BottomCenter,
    ],
    [
        Position::TopRight,
        Position::MiddleRight,
        Position::BottomRight,
    ],
    // Diagonals
    [Position::TopLeft, Position::Center, Position::BottomRight],
    [Position::TopRight, Position::Center, Position::BottomLeft],
];

/// Returns the first completed line in [`WIN_LINES`] order.
///
/// A full board without a line is still undecided here; draws are the
/// caller's call.
#[instrument(level = "trace")]
pub fn detect(board: &Board) -> Outcome {
    for line in WIN_LINES {
        let [a, b, c] = line;
        if let Cell::Marked(mark) = board.get(a) {
            if board.get(b) == Cell::Marked(mark) && board.get(c) == Cell::Marked(mark) {
                return Outcome::won(mark, line);
            }
        }
    }

    Outcome::undecided()
}
