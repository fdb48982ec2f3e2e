//! Monotonic board invariant: each ply fills exactly one empty cell.

use super::super::{Board, GameState};
use super::Invariant;

/// Invariant: snapshot k is snapshot k-1 plus exactly its ply.
///
/// The opening snapshot is the empty board with no ply. Every later snapshot
/// carries a ply whose square was empty one step earlier, and its board is
/// the previous board with that mark added and nothing else changed.
pub struct MonotonicBoardInvariant;

impl Invariant<GameState> for MonotonicBoardInvariant {
    fn holds(state: &GameState) -> bool {
        let mut snapshots = state.history().iter();

        let Some(opening) = snapshots.next() else {
            return false;
        };
        if opening.ply().is_some() || *opening.board() != Board::new() {
            return false;
        }

        let mut previous = *opening.board();
        for snapshot in snapshots {
            let Some(ply) = snapshot.ply() else {
                return false;
            };
            if !previous.is_empty(ply.position) {
                return false;
            }
            let expected = previous.with_mark(ply.position, ply.mark);
            if expected != *snapshot.board() {
                return false;
            }
            previous = expected;
        }

        true
    }

    fn description() -> &'static str {
        "Each snapshot adds exactly its ply's mark to an empty cell"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{History, Mark, Ply, Position, Snapshot};

    #[test]
    fn test_new_game_holds() {
        assert!(MonotonicBoardInvariant::holds(&GameState::new()));
    }

    #[test]
    fn test_played_game_holds() {
        let state = [4, 0, 8]
            .iter()
            .fold(GameState::new(), |s, i| s.place(*i).expect("legal move"));
        assert!(MonotonicBoardInvariant::holds(&state));
    }

    #[test]
    fn test_overwrite_violates() {
        let first = Board::new().with_mark(Position::Center, Mark::X);
        let overwritten = first.with_mark(Position::Center, Mark::O);
        let history = History::new()
            .append(Snapshot::after(first, Ply::new(Position::Center, Mark::X)))
            .append(Snapshot::after(overwritten, Ply::new(Position::Center, Mark::O)));
        let state = GameState {
            history,
            cursor: 2,
            list_order: Default::default(),
        };
        assert!(!MonotonicBoardInvariant::holds(&state));
    }

    #[test]
    fn test_board_not_matching_ply_violates() {
        let board = Board::new().with_mark(Position::TopLeft, Mark::X);
        let history =
            History::new().append(Snapshot::after(board, Ply::new(Position::Center, Mark::X)));
        let state = GameState {
            history,
            cursor: 1,
            list_order: Default::default(),
        };
        assert!(!MonotonicBoardInvariant::holds(&state));
    }
}
