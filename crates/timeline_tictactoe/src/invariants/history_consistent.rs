//! History consistency invariant: ply counts, cursor bounds, no play after a win.

use super::super::rules::detect;
use super::super::GameState;
use super::Invariant;

/// Invariant: history and cursor agree with each other.
///
/// - Snapshot k has exactly k marked cells.
/// - The cursor points at a recorded snapshot.
/// - Only the last snapshot may be won.
pub struct HistoryConsistentInvariant;

impl Invariant<GameState> for HistoryConsistentInvariant {
    fn holds(state: &GameState) -> bool {
        let history = state.history();

        if state.cursor() >= history.len() {
            return false;
        }

        let counts_match = history
            .iter()
            .enumerate()
            .all(|(step, snapshot)| snapshot.board().marked_count() == step);

        let last = history.len() - 1;
        let no_play_after_win = history
            .iter()
            .take(last)
            .all(|snapshot| !detect(snapshot.board()).is_won());

        counts_match && no_play_after_win
    }

    fn description() -> &'static str {
        "Snapshot k holds k marks, the cursor is in range, and nothing follows a win"
    }
}
