//! Draw detection logic for tic-tac-toe.
//!
//! A draw is decided from the ply count: nine plies on a 3x3 board means
//! every cell is marked. [`is_full`] is the board-level equivalent, used to
//! cross-check the ply count in debug builds and invariants.

use super::super::{Board, Cell, Outcome};
use tracing::instrument;

/// Number of plies that fill the board.
pub const MAX_PLIES: usize = 9;

/// Checks if every cell is marked.
#[instrument(level = "trace")]
pub fn is_full(board: &Board) -> bool {
    board.cells().iter().all(|c| *c != Cell::Empty)
}

/// True when `plies` moves have filled the board and nobody has a line.
pub fn is_draw(outcome: &Outcome, plies: usize) -> bool {
    !outcome.is_won() && plies == MAX_PLIES
}

#[cfg(test)]
mod tests {
    use super::super::win::detect;
    use super::*;
    use crate::{Mark, Position};

    fn fill(marks: [Mark; 9]) -> Board {
        Position::ALL
            .iter()
            .zip(marks)
            .fold(Board::new(), |board, (pos, mark)| board.with_mark(*pos, mark))
    }

    #[test]
    fn test_empty_board_not_full() {
        assert!(!is_full(&Board::new()));
    }

    #[test]
    fn test_partial_board_not_full() {
        let board = Board::new().with_mark(Position::Center, Mark::X);
        assert!(!is_full(&board));
    }

    #[test]
    fn test_full_board() {
        assert!(is_full(&fill([Mark::X; 9])));
    }

    #[test]
    fn test_draw_detection() {
        use Mark::{O, X};
        // X O X / O X X / O X O
        let board = fill([X, O, X, O, X, X, O, X, O]);
        let outcome = detect(&board);
        assert!(is_full(&board));
        assert!(is_draw(&outcome, board.marked_count()));
    }

    #[test]
    fn test_not_draw_if_winner() {
        use Mark::{O, X};
        // X X X / O O X / O X O
        let board = fill([X, X, X, O, O, X, O, X, O]);
        assert!(!is_draw(&detect(&board), MAX_PLIES));
    }

    #[test]
    fn test_not_draw_before_ninth_ply() {
        assert!(!is_draw(&Outcome::undecided(), 8));
    }
}
