//! Tests for the headless replay driver.

use timeline_games::{
    GameError, GameStatus, ListOrder, Mark, MoveRejection, ReplayScript, render_json, render_text,
    run_replay,
};

#[test]
fn test_replay_reports_win() {
    let script = ReplayScript::new(vec![0, 3, 1, 4, 2], None, ListOrder::Ascending);
    let report = run_replay(&script).expect("replay runs");
    assert_eq!(report.view.status, GameStatus::Won(Mark::X));
    assert!(report.rejected.is_empty());

    let text = render_text(&report);
    assert!(text.starts_with("X|X|X\n-+-+-\nO|O|6\n-+-+-\n7|8|9"));
    assert!(text.contains("Winner: X (Top-left, Top-center, Top-right)"));
    assert!(text.contains("> Go to move #5: X in (0-2)"));
    assert!(text.contains("  Go to game start"));
}

#[test]
fn test_replay_collects_rejected_moves() {
    let script = ReplayScript::new(vec![4, 4, 12, 0], None, ListOrder::Ascending);
    let report = run_replay(&script).expect("replay runs");

    assert_eq!(report.view.cursor, 2);
    assert_eq!(report.rejected.len(), 2);
    assert_eq!(report.rejected[0].ordinal, 1);
    assert_eq!(
        report.rejected[0].reason,
        GameError::InvalidMoveTarget(MoveRejection::Occupied(timeline_games::Position::Center))
    );
    assert_eq!(
        report.rejected[1].reason,
        GameError::InvalidMoveTarget(MoveRejection::OutOfBounds(12))
    );

    let text = render_text(&report);
    assert!(text.contains("ignored move #2 (Center)"));
    assert!(text.contains("ignored move #3 (12)"));
}

#[test]
fn test_replay_jump_and_descending_order() {
    let script = ReplayScript::new(vec![4, 0, 8], Some(1), ListOrder::Descending);
    let report = run_replay(&script).expect("replay runs");
    assert_eq!(report.view.cursor, 1);
    assert_eq!(report.view.moves[0].step, 3);

    let text = render_text(&report);
    assert!(text.contains("Next player: O"));
    assert!(text.contains("> Go to move #1: X in (1-1)"));
}

#[test]
fn test_replay_invalid_jump_is_an_error() {
    let script = ReplayScript::new(vec![4], Some(5), ListOrder::Ascending);
    let err = run_replay(&script).expect_err("jump out of range");
    assert!(err.message.contains("History step 5 out of range"));
}

#[test]
fn test_replay_json_shape() {
    let script = ReplayScript::new(vec![4, 4], None, ListOrder::Ascending);
    let report = run_replay(&script).expect("replay runs");
    let json: serde_json::Value =
        serde_json::from_str(&render_json(&report).expect("serializable")).expect("valid json");
    assert_eq!(json["view"]["cursor"], 1);
    assert_eq!(json["view"]["status"], "InProgress");
    assert_eq!(json["rejected"][0]["index"], 4);
}

#[derive(Clone, Default)]
struct CapturedLog(std::sync::Arc<std::sync::Mutex<Vec<u8>>>);

impl std::io::Write for CapturedLog {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.0
            .lock()
            .expect("log buffer lock")
            .extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

#[test]
fn test_rejected_move_warns_once() {
    let log = CapturedLog::default();
    let writer = log.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::WARN)
        .with_ansi(false)
        .with_writer(move || writer.clone())
        .finish();

    let script = ReplayScript::new(vec![4, 4], None, ListOrder::Ascending);
    tracing::subscriber::with_default(subscriber, || {
        run_replay(&script).expect("replay runs");
    });

    let bytes = log.0.lock().expect("log buffer lock").clone();
    let output = String::from_utf8(bytes).expect("utf-8 log");
    assert_eq!(output.matches("WARN").count(), 1);
    assert!(output.contains("Move ignored"));
}
