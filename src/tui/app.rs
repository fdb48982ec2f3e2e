//! Application state and key handling.
//!
//! `App` is the presentation adapter's own state (board cursor, list
//! selection, focus, status line) wrapped around the engine's controller.
//! It never touches game state except through the controller.

use super::input::{digit_target, move_cursor, move_selection};
use crossterm::event::KeyCode;
use timeline_tictactoe::{GameController, GameError, GameView, ListOrder, Position};
use tracing::{debug, instrument};

/// Which pane the arrow keys drive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    /// Arrows move the board cursor, Enter places.
    #[default]
    Board,
    /// Arrows move the list selection, Enter jumps.
    Moves,
}

impl Focus {
    /// The other pane.
    pub fn toggle(self) -> Self {
        match self {
            Self::Board => Self::Moves,
            Self::Moves => Self::Board,
        }
    }
}

/// Main application state.
#[derive(Debug)]
pub struct App {
    controller: GameController,
    view: GameView,
    board_cursor: Position,
    selected: usize,
    focus: Focus,
    status_message: String,
    should_quit: bool,
}

impl App {
    /// Creates an app for a fresh game.
    pub fn new(list_order: ListOrder) -> Self {
        let controller = GameController::with_list_order(list_order);
        let view = controller.current_view();
        let selected = view.current_entry().unwrap_or(0);
        Self {
            controller,
            view,
            board_cursor: Position::Center,
            selected,
            focus: Focus::default(),
            status_message: "X moves first.".to_string(),
            should_quit: false,
        }
    }

    /// Latest engine view.
    pub fn view(&self) -> &GameView {
        &self.view
    }

    /// Highlighted board square.
    pub fn board_cursor(&self) -> Position {
        self.board_cursor
    }

    /// Highlighted entry in the move list (display order).
    pub fn selected(&self) -> usize {
        self.selected
    }

    /// Pane the arrow keys drive.
    pub fn focus(&self) -> Focus {
        self.focus
    }

    /// Last feedback message.
    pub fn status_message(&self) -> &str {
        &self.status_message
    }

    /// True once the user asked to leave.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Handles one key press.
    #[instrument(skip(self), fields(focus = ?self.focus))]
    pub fn handle_key(&mut self, key: KeyCode) {
        if let Some(index) = digit_target(key) {
            self.place(index);
            return;
        }

        match key {
            KeyCode::Char('q') | KeyCode::Esc => {
                debug!("Quit requested");
                self.should_quit = true;
            }
            KeyCode::Tab => self.focus = self.focus.toggle(),
            KeyCode::Char('s') => self.toggle_order(),
            KeyCode::Home => self.jump(0),
            KeyCode::Enter => match self.focus {
                Focus::Board => self.place(self.board_cursor.to_index()),
                Focus::Moves => {
                    if let Some(step) = self.view.moves.get(self.selected).map(|m| m.step) {
                        self.jump(step);
                    }
                }
            },
            KeyCode::Up | KeyCode::Down | KeyCode::Left | KeyCode::Right
                if self.focus == Focus::Board =>
            {
                self.board_cursor = move_cursor(self.board_cursor, key);
            }
            KeyCode::Up | KeyCode::Down | KeyCode::PageUp | KeyCode::PageDown => {
                self.selected = move_selection(self.selected, self.view.moves.len(), key);
            }
            _ => {}
        }
    }

    fn place(&mut self, index: usize) {
        let mark = self.view.next_mark;
        match self.controller.apply_move(index) {
            Ok(view) => {
                if let Some(pos) = Position::from_index(index) {
                    self.board_cursor = pos;
                    self.status_message = format!("{} played {}.", mark, pos);
                }
                self.publish(view);
            }
            Err(error) => self.reject(error),
        }
    }

    fn jump(&mut self, step: usize) {
        match self.controller.jump_to(step) {
            Ok(view) => {
                self.status_message = if step == 0 {
                    "Back at game start.".to_string()
                } else {
                    format!("Viewing move #{}.", step)
                };
                self.publish(view);
            }
            Err(error) => self.reject(error),
        }
    }

    fn toggle_order(&mut self) {
        let view = self.controller.toggle_list_order();
        let order = match view.list_order {
            ListOrder::Ascending => "oldest first",
            ListOrder::Descending => "newest first",
        };
        self.status_message = format!("Move list: {}.", order);
        self.publish(view);
    }

    fn publish(&mut self, view: GameView) {
        self.selected = view.current_entry().unwrap_or(0);
        self.view = view;
    }

    fn reject(&mut self, error: GameError) {
        self.status_message = error.to_string();
    }
}
