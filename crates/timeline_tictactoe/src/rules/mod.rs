//! Game rules for tic-tac-toe.
//!
//! Pure functions for evaluating a board. Rules are kept apart from the
//! history so they can be composed into contracts and views.

pub mod draw;
pub mod win;

pub use draw::{MAX_PLIES, is_draw, is_full};
pub use win::{WIN_LINES, detect};
