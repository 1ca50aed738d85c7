//! Snapshot and event serialization tests

use web_tetris::core::{GameEvent, GameObserver, GameSnapshot, GameState};
use web_tetris::types::PieceKind;

#[derive(Default)]
struct Counter {
    locks: u32,
    moves: u32,
}

impl GameObserver for Counter {
    fn on_event(&mut self, event: &GameEvent) {
        match event {
            GameEvent::PieceLocked { .. } => self.locks += 1,
            GameEvent::PieceMoved { .. } => self.moves += 1,
            _ => {}
        }
    }
}

#[test]
fn test_snapshot_tracks_board_codes() {
    let mut game = GameState::new(10);
    game.start();
    let kind = game.current_piece().unwrap().kind;
    game.hard_drop();

    let snapshot = game.snapshot();
    assert_eq!(snapshot.filled_cells(), 4);
    let codes: Vec<u8> = snapshot.board.iter().flatten().copied().filter(|&c| c != 0).collect();
    assert!(codes.iter().all(|&c| c == kind.code()));
    assert_eq!(snapshot.stats.pieces_placed, 1);
}

#[test]
fn test_snapshot_json_round_trip() {
    let mut game = GameState::new(10);
    game.start();
    game.move_piece(1);

    let json = serde_json::to_string(&game.snapshot()).unwrap();
    let back: GameSnapshot = serde_json::from_str(&json).unwrap();
    assert_eq!(back, game.snapshot());

    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value["started"], true);
    assert_eq!(value["next"].as_array().map(|a| a.len()), Some(3));
    assert!(value["active"]["kind"].is_string());
}

#[test]
fn test_custom_observer_receives_events() {
    let mut game = GameState::new(10);
    game.start();
    game.move_piece(1);
    game.move_piece(-1);
    game.hard_drop();

    let mut counter = Counter::default();
    game.dispatch_events(&mut counter);
    assert_eq!(counter.locks, 1);
    assert_eq!(counter.moves, 2);
}

#[test]
fn test_event_json_shape() {
    let event = GameEvent::PieceHeld { kind: PieceKind::T };
    assert_eq!(
        serde_json::to_string(&event).unwrap(),
        r#"{"type":"pieceHeld","kind":"t"}"#
    );
}
