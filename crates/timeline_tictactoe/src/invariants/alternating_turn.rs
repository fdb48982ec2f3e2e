//! Alternating turn invariant: plies go X, O, X, O, ...

use super::super::{GameState, Mark};
use super::Invariant;

/// Invariant: the ply producing snapshot k was made by the mark to move at k-1.
///
/// X opens, and marks alternate from there on every branch.
pub struct AlternatingTurnInvariant;

impl Invariant<GameState> for AlternatingTurnInvariant {
    fn holds(state: &GameState) -> bool {
        state
            .history()
            .iter()
            .enumerate()
            .skip(1)
            .all(|(step, snapshot)| {
                snapshot
                    .ply()
                    .is_some_and(|ply| ply.mark == Mark::to_move_at(step - 1))
            })
    }

    fn description() -> &'static str {
        "Marks alternate starting with X"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Board, History, Ply, Position, Snapshot};

    #[test]
    fn test_empty_game_holds() {
        assert!(AlternatingTurnInvariant::holds(&GameState::new()));
    }

    #[test]
    fn test_branch_keeps_alternation() {
        let state = [0, 1, 2]
            .iter()
            .fold(GameState::new(), |s, i| s.place(*i).expect("legal move"))
            .jump_to(1)
            .and_then(|s| s.place(4))
            .expect("legal branch");
        assert!(AlternatingTurnInvariant::holds(&state));
        assert_eq!(state.history().latest().ply().map(|p| p.mark), Some(Mark::O));
    }

    #[test]
    fn test_o_opening_violates() {
        let board = Board::new().with_mark(Position::Center, Mark::O);
        let state = GameState {
            history: History::new().append(Snapshot::after(board, Ply::new(Position::Center, Mark::O))),
            cursor: 1,
            list_order: Default::default(),
        };
        assert!(!AlternatingTurnInvariant::holds(&state));
    }
}
