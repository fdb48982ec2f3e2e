//! Immutable game state and its pure transitions.
//!
//! `GameState::apply` maps a state and an [`Action`] to a new state or a
//! rejection. The receiver is never modified, so a caller can publish the
//! returned value atomically or drop it.

use super::contracts::{Contract, JumpContract, PlaceContract};
#[cfg(debug_assertions)]
use super::contracts::assert_post;
use super::history::{History, Snapshot};
use super::invariants::{InvariantSet, TimelineInvariants};
use super::rules::{detect, is_draw, is_full};
use super::{
    Action, Board, GameError, GameStatus, ListOrder, Mark, MoveRejection, Outcome, Ply, Position,
};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// History, cursor and list order.
///
/// Invariant: `cursor < history.len()`.
///
/// Deserialized states are checked against [`TimelineInvariants`] and
/// refused when any of them fails.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "GameStateRecord")]
pub struct GameState {
    pub(crate) history: History,
    pub(crate) cursor: usize,
    pub(crate) list_order: ListOrder,
}

#[derive(Deserialize)]
struct GameStateRecord {
    history: History,
    cursor: usize,
    list_order: ListOrder,
}

impl TryFrom<GameStateRecord> for GameState {
    type Error = String;

    fn try_from(record: GameStateRecord) -> Result<Self, Self::Error> {
        let state = Self {
            history: record.history,
            cursor: record.cursor,
            list_order: record.list_order,
        };
        TimelineInvariants::check_all(&state).map_err(|violations| {
            violations
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join("; ")
        })?;
        Ok(state)
    }
}

impl GameState {
    /// Fresh game: opening snapshot only, X to move, chronological list.
    pub fn new() -> Self {
        Self::with_list_order(ListOrder::default())
    }

    /// Fresh game with the given move-list order.
    pub fn with_list_order(list_order: ListOrder) -> Self {
        Self {
            history: History::new(),
            cursor: 0,
            list_order,
        }
    }

    /// All recorded snapshots, including any beyond the cursor.
    pub fn history(&self) -> &History {
        &self.history
    }

    /// Selected step.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Move-list display order.
    pub fn list_order(&self) -> ListOrder {
        self.list_order
    }

    /// Snapshot under the cursor.
    pub fn current(&self) -> &Snapshot {
        self.history.at(self.cursor)
    }

    /// Board under the cursor.
    pub fn board(&self) -> &Board {
        self.current().board()
    }

    /// Mark that moves from the cursor.
    pub fn next_mark(&self) -> Mark {
        Mark::to_move_at(self.cursor)
    }

    /// Win detection for the board under the cursor.
    pub fn outcome(&self) -> Outcome {
        detect(self.board())
    }

    /// Status of the snapshot under the cursor.
    ///
    /// The cursor equals the ply count of its snapshot, so nine plies without
    /// a line is a draw.
    pub fn status(&self) -> GameStatus {
        let outcome = self.outcome();
        if let Some(mark) = outcome.winner() {
            GameStatus::Won(mark)
        } else if is_draw(&outcome, self.cursor) {
            debug_assert!(is_full(self.board()), "nine plies must fill the board");
            GameStatus::Drawn
        } else {
            GameStatus::InProgress
        }
    }

    /// Applies an action, returning the next state.
    ///
    /// # Errors
    ///
    /// Returns the rejection when the action is not legal from this state;
    /// `self` is unchanged either way.
    #[instrument(skip(self), fields(cursor = self.cursor, len = self.history.len()))]
    pub fn apply(&self, action: Action) -> Result<GameState, GameError> {
        match action {
            Action::Place(index) => self.place(index),
            Action::JumpTo(step) => self.jump_to(step),
            Action::ToggleListOrder => Ok(self.toggle_list_order()),
        }
    }

    /// Places the next mark at `index`, discarding any snapshots past the cursor.
    ///
    /// # Errors
    ///
    /// `GameError::InvalidMoveTarget` when the index is off the board, the
    /// square is occupied, or the current snapshot is already won.
    #[instrument(skip(self), fields(cursor = self.cursor))]
    pub fn place(&self, index: usize) -> Result<GameState, GameError> {
        PlaceContract::pre(self, &index)?;

        let position = Position::from_index(index).ok_or(MoveRejection::OutOfBounds(index))?;
        let mark = self.next_mark();
        let board = self.board().with_mark(position, mark);
        let history = self
            .history
            .truncate_at(self.cursor)
            .append(Snapshot::after(board, Ply::new(position, mark)));

        let next = GameState {
            cursor: history.len() - 1,
            history,
            list_order: self.list_order,
        };

        #[cfg(debug_assertions)]
        assert_post::<PlaceContract, usize>(self, &next);

        debug!(%position, %mark, cursor = next.cursor, "Mark placed");
        Ok(next)
    }

    /// Moves the cursor to `step`. History is untouched.
    ///
    /// # Errors
    ///
    /// `GameError::InvalidHistoryIndex` when `step` is not a recorded step.
    #[instrument(skip(self), fields(len = self.history.len()))]
    pub fn jump_to(&self, step: usize) -> Result<GameState, GameError> {
        JumpContract::pre(self, &step)?;

        let next = GameState {
            history: self.history.clone(),
            cursor: step,
            list_order: self.list_order,
        };

        #[cfg(debug_assertions)]
        assert_post::<JumpContract, usize>(self, &next);

        debug!(step, "Cursor moved");
        Ok(next)
    }

    /// Flips the move-list order.
    pub fn toggle_list_order(&self) -> GameState {
        GameState {
            history: self.history.clone(),
            cursor: self.cursor,
            list_order: self.list_order.toggle(),
        }
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn play(indices: &[usize]) -> GameState {
        indices.iter().fold(GameState::new(), |state, index| {
            state.place(*index).expect("legal move")
        })
    }

    #[test]
    fn test_new_state_is_opening() {
        let state = GameState::new();
        assert_eq!(state.cursor(), 0);
        assert_eq!(state.history().len(), 1);
        assert_eq!(state.next_mark(), Mark::X);
        assert_eq!(state.status(), GameStatus::InProgress);
    }

    #[test]
    fn test_place_advances_cursor_and_turn() {
        let state = play(&[4]);
        assert_eq!(state.cursor(), 1);
        assert_eq!(state.history().len(), 2);
        assert_eq!(state.next_mark(), Mark::O);
        assert_eq!(state.board().get(Position::Center).mark(), Some(Mark::X));
    }

    #[test]
    fn test_place_rejections() {
        let state = play(&[4]);
        assert_eq!(
            state.place(4),
            Err(GameError::InvalidMoveTarget(MoveRejection::Occupied(Position::Center)))
        );
        assert_eq!(
            state.place(9),
            Err(GameError::InvalidMoveTarget(MoveRejection::OutOfBounds(9)))
        );

        let won = play(&[0, 3, 1, 4, 2]);
        assert_eq!(won.status(), GameStatus::Won(Mark::X));
        assert_eq!(
            won.place(8),
            Err(GameError::InvalidMoveTarget(MoveRejection::GameDecided(Mark::X)))
        );
    }

    #[test]
    fn test_jump_keeps_history_and_derives_turn() {
        let state = play(&[0, 4, 8]);
        let jumped = state.jump_to(1).expect("step in range");
        assert_eq!(jumped.history(), state.history());
        assert_eq!(jumped.cursor(), 1);
        assert_eq!(jumped.next_mark(), Mark::O);
        assert_eq!(
            state.jump_to(4),
            Err(GameError::InvalidHistoryIndex { step: 4, len: 4 })
        );
    }

    #[test]
    fn test_place_after_jump_truncates() {
        let state = play(&[0, 4, 8]).jump_to(1).expect("step in range");
        let branched = state.place(2).expect("legal move");
        assert_eq!(branched.history().len(), 3);
        assert_eq!(branched.cursor(), 2);
        assert_eq!(branched.board().get(Position::TopRight).mark(), Some(Mark::O));
        assert!(branched.board().is_empty(Position::Center));
    }

    #[test]
    fn test_draw_after_nine_plies() {
        // X O X / X O O / O X X
        let state = play(&[0, 1, 2, 4, 3, 5, 7, 6, 8]);
        assert_eq!(state.status(), GameStatus::Drawn);
        assert!(state.status().is_decided());
    }

    #[test]
    fn test_apply_dispatches_actions() {
        let state = GameState::new();
        let placed = state.apply(Action::Place(0)).expect("legal move");
        let toggled = placed.apply(Action::ToggleListOrder).expect("always legal");
        assert_eq!(toggled.list_order(), ListOrder::Descending);
        let jumped = toggled.apply(Action::JumpTo(0)).expect("step in range");
        assert_eq!(jumped.cursor(), 0);
        assert_eq!(jumped.list_order(), ListOrder::Descending);
    }

    #[test]
    fn test_deserialize_keeps_valid_state() {
        let state = play(&[0, 4, 8]).jump_to(1).expect("step in range");
        let json = serde_json::to_string(&state).expect("serializable");
        let restored: GameState = serde_json::from_str(&json).expect("valid state");
        assert_eq!(restored, state);
    }

    #[test]
    fn test_deserialize_rejects_cursor_past_history() {
        let mut value = serde_json::to_value(GameState::new()).expect("serializable");
        value["cursor"] = serde_json::json!(5);
        assert!(serde_json::from_value::<GameState>(value).is_err());
    }

    #[test]
    fn test_deserialize_rejects_empty_history() {
        let mut value = serde_json::to_value(GameState::new()).expect("serializable");
        value["history"]["snapshots"] = serde_json::json!([]);
        assert!(serde_json::from_value::<GameState>(value).is_err());
    }

    #[test]
    fn test_deserialize_rejects_out_of_turn_history() {
        // Two X plies in a row.
        let mut value = serde_json::to_value(play(&[0, 4])).expect("serializable");
        value["history"]["snapshots"][2]["ply"]["mark"] = serde_json::json!("X");
        value["history"]["snapshots"][2]["board"]["cells"][4] = serde_json::json!({ "Marked": "X" });
        assert!(serde_json::from_value::<GameState>(value).is_err());
    }
}
