//! Tic-tac-toe with full move-history time travel.
//!
//! The engine keeps every board of the game as an immutable snapshot and a
//! cursor into that history. Jumping moves the cursor only; playing from an
//! earlier step discards the snapshots after it and records the new move.
//!
//! # Architecture
//!
//! - **Rules**: pure win and draw detection over a [`Board`]
//! - **History**: append/truncate log of [`Snapshot`]s with structural sharing
//! - **State**: [`GameState`] and its pure transitions, guarded by contracts
//! - **Controller**: [`GameController`], the single owner adapters talk to
//! - **View**: [`GameView`], the read-only data a renderer may use
//!
//! # Example
//!
//! ```
//! use timeline_tictactoe::{GameController, GameStatus, Mark};
//!
//! let mut game = GameController::new();
//! for index in [0, 3, 1, 4, 2] {
//!     game.apply_move(index).unwrap();
//! }
//! assert_eq!(game.current_view().status, GameStatus::Won(Mark::X));
//!
//! // Travel back and branch: the old continuation is dropped.
//! game.jump_to(2).unwrap();
//! let view = game.apply_move(8).unwrap();
//! assert_eq!(view.moves.len(), 4);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod controller;
mod error;
mod history;
mod outcome;
mod position;
mod state;
mod types;
mod view;

pub mod contracts;
pub mod invariants;
pub mod rules;

pub use action::{Action, Ply};
pub use controller::GameController;
pub use error::{GameError, MoveRejection};
pub use history::{History, Snapshot};
pub use outcome::Outcome;
pub use position::Position;
pub use state::GameState;
pub use types::{Board, Cell, GameStatus, ListOrder, Mark};
pub use view::{GameView, MoveDescriptor, Placement, move_descriptors};
