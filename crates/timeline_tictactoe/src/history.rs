//! Append/truncate log of board snapshots.
//!
//! A [`History`] is a value. Every operation returns a new history and leaves
//! the receiver valid, so a cursor into an older history always points at
//! the snapshot it was taken for. The backing [`im::Vector`] shares the
//! unchanged prefix between versions, which keeps clones cheap.

use super::{Board, Ply};
use im::Vector;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// A recorded board plus the ply that produced it.
///
/// The opening snapshot has no ply.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Snapshot {
    board: Board,
    ply: Option<Ply>,
}

impl Snapshot {
    /// The empty board before any move.
    pub fn opening() -> Self {
        Self {
            board: Board::new(),
            ply: None,
        }
    }

    /// A board reached by `ply`.
    pub fn after(board: Board, ply: Ply) -> Self {
        Self {
            board,
            ply: Some(ply),
        }
    }

    /// The recorded board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The ply that produced this board, `None` for the opening snapshot.
    pub fn ply(&self) -> Option<Ply> {
        self.ply
    }
}

/// Ordered snapshots; index k is the state after k plies.
///
/// Deserializing rejects an empty list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "HistoryRecord")]
pub struct History {
    snapshots: Vector<Snapshot>,
}

#[derive(Deserialize)]
struct HistoryRecord {
    snapshots: Vector<Snapshot>,
}

impl TryFrom<HistoryRecord> for History {
    type Error = String;

    fn try_from(record: HistoryRecord) -> Result<Self, Self::Error> {
        if record.snapshots.is_empty() {
            return Err("history must hold the opening snapshot".to_string());
        }
        Ok(Self {
            snapshots: record.snapshots,
        })
    }
}

impl History {
    /// A history holding only the opening snapshot.
    pub fn new() -> Self {
        Self {
            snapshots: Vector::unit(Snapshot::opening()),
        }
    }

    /// Number of snapshots (always at least one).
    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    /// Always false; the opening snapshot is never removed.
    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    /// Snapshot at `step`.
    pub fn get(&self, step: usize) -> Option<&Snapshot> {
        self.snapshots.get(step)
    }

    /// Snapshot at `step`, which must be recorded.
    pub(crate) fn at(&self, step: usize) -> &Snapshot {
        &self.snapshots[step]
    }

    /// Most recent snapshot.
    pub fn latest(&self) -> &Snapshot {
        // The opening snapshot is always present.
        &self.snapshots[self.snapshots.len() - 1]
    }

    /// Snapshots in chronological order.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &Snapshot> + ExactSizeIterator {
        self.snapshots.iter()
    }

    /// Prefix `0..=cursor`; anything after the cursor is dropped.
    ///
    /// A cursor at or past the end keeps the whole history.
    #[instrument(skip(self), fields(len = self.len()))]
    pub fn truncate_at(&self, cursor: usize) -> History {
        Self {
            snapshots: self.snapshots.take(cursor.saturating_add(1).min(self.len())),
        }
    }

    /// New history with `snapshot` as its last element.
    #[instrument(skip(self, snapshot), fields(len = self.len()))]
    pub fn append(&self, snapshot: Snapshot) -> History {
        let mut snapshots = self.snapshots.clone();
        snapshots.push_back(snapshot);
        Self { snapshots }
    }
}

impl Default for History {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Mark, Position};

    fn played(history: &History, pos: Position) -> History {
        let mark = Mark::to_move_at(history.len() - 1);
        let board = history.latest().board().with_mark(pos, mark);
        history.append(Snapshot::after(board, Ply::new(pos, mark)))
    }

    #[test]
    fn test_new_history_has_opening_snapshot() {
        let history = History::new();
        assert_eq!(history.len(), 1);
        assert_eq!(*history.latest(), Snapshot::opening());
        assert!(history.latest().ply().is_none());
    }

    #[test]
    fn test_append_leaves_receiver_untouched() {
        let history = History::new();
        let next = played(&history, Position::Center);
        assert_eq!(history.len(), 1);
        assert_eq!(next.len(), 2);
        assert_eq!(
            next.latest().ply(),
            Some(Ply::new(Position::Center, Mark::X))
        );
    }

    #[test]
    fn test_truncate_keeps_prefix_through_cursor() {
        let mut history = History::new();
        for pos in [Position::TopLeft, Position::Center, Position::BottomRight] {
            history = played(&history, pos);
        }
        let cut = history.truncate_at(1);
        assert_eq!(cut.len(), 2);
        assert_eq!(cut.get(1), history.get(1));
        assert_eq!(history.len(), 4);
    }

    #[test]
    fn test_truncate_past_end_keeps_everything() {
        let history = played(&History::new(), Position::Center);
        assert_eq!(history.truncate_at(5), history);
        assert_eq!(history.truncate_at(usize::MAX), history);
    }

    #[test]
    fn test_truncate_at_zero_keeps_opening() {
        let history = played(&History::new(), Position::Center);
        assert_eq!(history.truncate_at(0), History::new());
    }

    #[test]
    fn test_deserialize_rejects_empty_history() {
        let err = serde_json::from_str::<History>(r#"{"snapshots":[]}"#)
            .expect_err("empty history");
        assert!(err.to_string().contains("opening snapshot"));
    }

    #[test]
    fn test_deserialize_accepts_recorded_history() {
        let history = played(&History::new(), Position::Center);
        let json = serde_json::to_string(&history).expect("serializable");
        let restored: History = serde_json::from_str(&json).expect("non-empty history");
        assert_eq!(restored, history);
    }
}

