//! Integration tests for scripted replays.

use noughts::replay::{ReplayReport, parse_moves};
use noughts::{Mark, Position, ReplayError, Session};

fn tokens(raw: &[&str]) -> Vec<String> {
    raw.iter().map(|s| s.to_string()).collect()
}

#[test]
fn test_tokens_to_report_end_to_end() {
    let moves = parse_moves(&tokens(&["5", "1", "top-right"])).unwrap();
    let session = Session::replay(&moves).unwrap();
    let report = ReplayReport::from_session(&session);

    assert_eq!(session.entries().len(), 4);
    assert_eq!(session.viewed_index(), 3);
    assert_eq!(report.moves.len(), 3);
    assert_eq!(report.moves[2].mark, Mark::X);
    assert_eq!(report.moves[2].position, Position::TopRight);
    assert!(report.winner.is_none());
    assert!(!report.draw);
}

#[test]
fn test_replay_rejects_an_occupied_cell() {
    let err = Session::replay(&[Position::Center, Position::Center]).unwrap_err();
    assert_eq!(
        err,
        ReplayError::Occupied {
            position: Position::Center
        }
    );
}

#[test]
fn test_replay_rejects_moves_after_the_game_is_decided() {
    // X wins on the fifth move; the sixth is one too many.
    let err = Session::replay(&[
        Position::TopLeft,
        Position::MiddleLeft,
        Position::TopCenter,
        Position::Center,
        Position::TopRight,
        Position::BottomRight,
    ])
    .unwrap_err();

    assert_eq!(
        err,
        ReplayError::AfterGameOver {
            winner: Mark::X,
            position: Position::BottomRight,
        }
    );
}

#[test]
fn test_report_marks_a_drawn_game() {
    // Ends at X O X / O X X / O X O with no three in a row.
    let session = Session::replay(&[
        Position::TopLeft,
        Position::TopCenter,
        Position::TopRight,
        Position::MiddleLeft,
        Position::Center,
        Position::BottomLeft,
        Position::MiddleRight,
        Position::BottomRight,
        Position::BottomCenter,
    ])
    .unwrap();
    let report = ReplayReport::from_session(&session);

    assert_eq!(report.moves.len(), 9);
    assert!(report.winner.is_none());
    assert!(report.draw);
}

#[test]
fn test_report_names_the_winner() {
    let session = Session::replay(&[
        Position::Center,
        Position::TopLeft,
        Position::TopRight,
        Position::TopCenter,
        Position::BottomLeft,
    ])
    .unwrap();
    let report = ReplayReport::from_session(&session);

    assert_eq!(report.winner, Some(Mark::X));
    assert!(!report.draw);
}

#[test]
fn test_json_report_round_trip_fields() {
    let session = Session::replay(&[Position::Center, Position::TopLeft]).unwrap();
    let report = ReplayReport::from_session(&session);
    let value = serde_json::to_value(&report).unwrap();

    assert_eq!(value["moves"][0]["mark"], serde_json::json!("X"));
    assert_eq!(value["moves"][0]["position"], serde_json::json!("Center"));
    assert_eq!(value["moves"][1]["mark"], serde_json::json!("O"));
    assert_eq!(value["moves"][1]["column"], serde_json::json!(1));
    assert_eq!(value["moves"][1]["row"], serde_json::json!(1));
    assert_eq!(value["winner"], serde_json::Value::Null);
    assert_eq!(value["draw"], serde_json::json!(false));
}

#[test]
fn test_bad_token_is_reported_by_name() {
    let err = parse_moves(&tokens(&["5", "sideways"])).unwrap_err();
    assert_eq!(err.token, "sideways");
}
