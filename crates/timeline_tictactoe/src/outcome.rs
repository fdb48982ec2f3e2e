//! Result of inspecting a board for three in a row.

use super::{Mark, Position};
use serde::{Deserialize, Serialize};

/// Winner and winning line of a board, or neither.
///
/// `winner` and `line` are either both present or both absent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Outcome {
    winner: Option<Mark>,
    line: Option<[Position; 3]>,
}

impl Outcome {
    /// No line completed.
    pub fn undecided() -> Self {
        Self::default()
    }

    /// `mark` completed `line`.
    pub fn won(mark: Mark, line: [Position; 3]) -> Self {
        Self {
            winner: Some(mark),
            line: Some(line),
        }
    }

    /// The winning mark, if any.
    pub fn winner(&self) -> Option<Mark> {
        self.winner
    }

    /// The three winning squares, if any.
    pub fn winning_line(&self) -> Option<[Position; 3]> {
        self.line
    }

    /// True when a line is complete.
    pub fn is_won(&self) -> bool {
        self.winner.is_some()
    }

    /// True when `pos` is part of the winning line.
    pub fn contains(&self, pos: Position) -> bool {
        self.line.is_some_and(|line| line.contains(&pos))
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.winner {
            Some(mark) => write!(f, "Winner: {}", mark),
            None => write!(f, "No winner"),
        }
    }
}
