//! The game controller: sole owner of the game state.
//!
//! Adapters write through [`GameController::apply_move`],
//! [`GameController::jump_to`] and [`GameController::toggle_list_order`] and
//! read through [`GameController::current_view`]. Each write computes the
//! next state with a pure transition and publishes it only on success, so a
//! rejected request leaves the controller exactly as it was.

use super::state::GameState;
use super::view::GameView;
use super::{Action, GameError, ListOrder};
use tracing::{debug, instrument};

/// Owns one [`GameState`] and serializes access to it through `&mut self`.
#[derive(Debug, Clone, Default)]
pub struct GameController {
    state: GameState,
}

impl GameController {
    /// Creates a controller for a fresh game.
    #[instrument]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a controller whose move list starts in `list_order`.
    #[instrument]
    pub fn with_list_order(list_order: ListOrder) -> Self {
        Self {
            state: GameState::with_list_order(list_order),
        }
    }

    /// The published state.
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Applies any action.
    ///
    /// # Errors
    ///
    /// Returns the rejection; the state is untouched in that case.
    #[instrument(skip(self), fields(cursor = self.state.cursor()))]
    pub fn dispatch(&mut self, action: Action) -> Result<GameView, GameError> {
        match self.state.apply(action) {
            Ok(next) => {
                self.state = next;
                debug!(%action, cursor = self.state.cursor(), "Action applied");
                Ok(self.current_view())
            }
            Err(error) => {
                debug!(%action, %error, "Action rejected");
                Err(error)
            }
        }
    }

    /// Places the next mark at board index `index` (0-8).
    ///
    /// Any snapshots past the cursor are discarded first.
    ///
    /// # Errors
    ///
    /// `GameError::InvalidMoveTarget` for an occupied square, a decided game
    /// or an index off the board.
    pub fn apply_move(&mut self, index: usize) -> Result<GameView, GameError> {
        self.dispatch(Action::Place(index))
    }

    /// Moves the cursor to history step `step` without touching history.
    ///
    /// # Errors
    ///
    /// `GameError::InvalidHistoryIndex` when `step` is not recorded. No clamping.
    pub fn jump_to(&mut self, step: usize) -> Result<GameView, GameError> {
        self.dispatch(Action::JumpTo(step))
    }

    /// Flips the move-list order.
    #[instrument(skip(self))]
    pub fn toggle_list_order(&mut self) -> GameView {
        self.state = self.state.toggle_list_order();
        debug!(order = ?self.state.list_order(), "List order toggled");
        self.current_view()
    }

    /// Everything a renderer may read, derived from the published state.
    pub fn current_view(&self) -> GameView {
        GameView::of(&self.state)
    }
}
