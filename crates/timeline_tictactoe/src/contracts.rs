//! Contract-based validation for state transitions.
//!
//! Contracts define correctness through preconditions and postconditions,
//! Hoare-style: {P} action {Q}. Preconditions decide whether an action is
//! rejected. Postconditions re-check the invariant set and only run in debug
//! builds.

use super::invariants::{InvariantSet, InvariantViolation, TimelineInvariants};
use super::state::GameState;
use super::{GameError, MoveRejection, Position};
use tracing::{instrument, warn};

// ─────────────────────────────────────────────────────────────
//  Contract Trait
// ─────────────────────────────────────────────────────────────

/// Preconditions and postconditions for a transition on `S` driven by `A`.
pub trait Contract<S, A> {
    /// Checks preconditions before applying the action.
    fn pre(state: &S, action: &A) -> Result<(), GameError>;

    /// Checks postconditions after applying the action.
    fn post(before: &S, after: &S) -> Result<(), Vec<InvariantViolation>>;
}

// ─────────────────────────────────────────────────────────────
//  Placement Preconditions
// ─────────────────────────────────────────────────────────────

/// Precondition: the index names a square.
pub struct OnBoard;

impl OnBoard {
    /// Resolves the index or rejects it.
    pub fn check(index: usize) -> Result<Position, MoveRejection> {
        Position::from_index(index).ok_or(MoveRejection::OutOfBounds(index))
    }
}

/// Precondition: nobody has won the snapshot under the cursor.
pub struct Undecided;

impl Undecided {
    /// Rejects when the current board already has a line.
    pub fn check(state: &GameState) -> Result<(), MoveRejection> {
        match state.outcome().winner() {
            Some(mark) => Err(MoveRejection::GameDecided(mark)),
            None => Ok(()),
        }
    }
}

/// Precondition: the square is empty on the current board.
pub struct SquareIsEmpty;

impl SquareIsEmpty {
    /// Rejects an occupied square.
    pub fn check(state: &GameState, pos: Position) -> Result<(), MoveRejection> {
        if state.board().is_empty(pos) {
            Ok(())
        } else {
            Err(MoveRejection::Occupied(pos))
        }
    }
}

// ─────────────────────────────────────────────────────────────
//  Placement Contract
// ─────────────────────────────────────────────────────────────

/// Contract for placing a mark.
///
/// Preconditions:
/// - Index is on the board
/// - Current snapshot is not won
/// - Square is empty
///
/// Postconditions:
/// - History was cut at the old cursor and grew by one
/// - Cursor is at the new last snapshot
/// - All history invariants hold
pub struct PlaceContract;

impl Contract<GameState, usize> for PlaceContract {
    #[instrument(skip(state), fields(cursor = state.cursor()))]
    fn pre(state: &GameState, index: &usize) -> Result<(), GameError> {
        let pos = OnBoard::check(*index)?;
        Undecided::check(state)?;
        SquareIsEmpty::check(state, pos)?;
        Ok(())
    }

    fn post(before: &GameState, after: &GameState) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = match TimelineInvariants::check_all(after) {
            Ok(()) => Vec::new(),
            Err(violations) => violations,
        };

        if after.history().len() != before.cursor() + 2 {
            violations.push(InvariantViolation::new(
                "History holds the prefix through the old cursor plus one snapshot",
            ));
        }
        if after.cursor() + 1 != after.history().len() {
            violations.push(InvariantViolation::new("Cursor sits on the new snapshot"));
        }
        let prefix_kept = before
            .history()
            .iter()
            .take(before.cursor() + 1)
            .eq(after.history().iter().take(before.cursor() + 1));
        if !prefix_kept {
            violations.push(InvariantViolation::new("Snapshots up to the old cursor are unchanged"));
        }

        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }
}

// ─────────────────────────────────────────────────────────────
//  Jump Contract
// ─────────────────────────────────────────────────────────────

/// Contract for moving the cursor.
///
/// Precondition: the step is recorded. Postcondition: history is identical.
pub struct JumpContract;

impl Contract<GameState, usize> for JumpContract {
    fn pre(state: &GameState, step: &usize) -> Result<(), GameError> {
        let len = state.history().len();
        if *step < len {
            Ok(())
        } else {
            Err(GameError::InvalidHistoryIndex { step: *step, len })
        }
    }

    fn post(before: &GameState, after: &GameState) -> Result<(), Vec<InvariantViolation>> {
        if before.history() == after.history() {
            TimelineInvariants::check_all(after)
        } else {
            Err(vec![InvariantViolation::new("Jumping never changes history")])
        }
    }
}

/// Asserts a contract's postcondition (panics on violation in debug builds).
#[track_caller]
pub fn assert_post<C, A>(before: &GameState, after: &GameState)
where
    C: Contract<GameState, A>,
{
    let result = C::post(before, after);
    if let Err(violations) = &result {
        warn!(?violations, "Postcondition violated");
    }
    debug_assert!(result.is_ok(), "Postcondition violated: {:?}", result);
}
