//! Integration tests for the game state machine through its public API

use web_tetris::core::{collides, GameConfig, GameEvent, GameState};
use web_tetris::types::{GameAction, PieceKind, Rotation};

fn started(seed: u32) -> GameState {
    let mut state = GameState::new(seed);
    assert!(state.start());
    state.drain_events();
    state
}

#[test]
fn test_game_lifecycle() {
    let mut state = GameState::new(12345);
    assert!(!state.is_started());
    assert!(state.current_piece().is_none());

    state.start();
    assert!(state.is_started());
    assert!(state.current_piece().is_some());
    assert!(!state.is_game_over());
    assert!(!state.is_paused());
}

#[test]
fn test_pause_is_gated_on_start() {
    let mut state = GameState::new(1);
    assert!(!state.apply_action(GameAction::Pause));
    assert!(!state.is_paused());

    state.start();
    assert!(state.apply_action(GameAction::Pause));
    assert!(state.is_paused());
    assert!(!state.apply_action(GameAction::MoveLeft));
    assert!(!state.apply_action(GameAction::HardDrop));
    assert!(state.apply_action(GameAction::Pause));
    assert!(state.apply_action(GameAction::MoveLeft));
}

#[test]
fn test_failed_moves_leave_piece_untouched() {
    let mut state = started(77);
    for dx in [-1, 1] {
        while state.move_piece(dx) {}
        let before = state.current_piece();
        assert!(!state.move_piece(dx));
        assert_eq!(state.current_piece(), before);
    }
}

#[test]
fn test_rotation_cycles_without_kicks() {
    let mut state = started(12);
    let spawn = state.current_piece().unwrap();

    // Drop a few rows so every orientation fits in open space
    for _ in 0..4 {
        state.soft_drop();
    }
    for _ in 0..4 {
        assert!(state.rotate(true));
    }
    let piece = state.current_piece().unwrap();
    assert_eq!(piece.rotation, Rotation::North);
    assert_eq!(piece.x, spawn.x);

    assert!(state.rotate(false));
    assert_eq!(state.current_piece().unwrap().rotation, Rotation::West);
}

#[test]
fn test_ghost_matches_hard_drop() {
    let mut state = started(3);
    state.move_piece(-1);
    let ghost = state.ghost_piece().unwrap();
    let before = state.current_piece().unwrap();
    assert!(ghost.y >= before.y);
    assert_eq!(
        (ghost.x, ghost.rotation, ghost.kind),
        (before.x, before.rotation, before.kind)
    );

    state.hard_drop();
    for (x, y) in ghost.cells() {
        assert!(state.board().is_occupied(x, y));
    }
    assert_eq!(state.stats().score, 2 * (ghost.y - before.y) as u32);
}

#[test]
fn test_next_queue_advances() {
    let mut state = GameState::new(500);
    let queued: Vec<PieceKind> = state.next_pieces().iter().map(|p| p.kind).collect();
    assert_eq!(queued.len(), 3);

    state.start();
    assert_eq!(state.current_piece().unwrap().kind, queued[0]);
    assert_eq!(state.next_pieces()[0].kind, queued[1]);

    state.hard_drop();
    assert_eq!(state.current_piece().unwrap().kind, queued[1]);
    assert_eq!(state.next_pieces()[0].kind, queued[2]);
}

#[test]
fn test_first_seven_spawns_are_one_bag() {
    let mut state = started(8080);
    let mut kinds = vec![state.current_piece().unwrap().kind];
    for _ in 0..6 {
        state.hard_drop();
        kinds.push(state.current_piece().unwrap().kind);
    }
    kinds.sort_by_key(|kind| kind.index());
    assert_eq!(kinds, PieceKind::ALL.to_vec());
}

#[test]
fn test_hold_only_once_per_piece() {
    let mut state = started(21);
    let first = state.current_piece().unwrap().kind;

    assert!(state.hold_current_piece());
    assert_eq!(state.hold_piece(), Some(first));
    let active = state.current_piece();
    let queue: Vec<_> = state.next_pieces().to_vec();

    assert!(!state.hold_current_piece());
    assert_eq!(state.hold_piece(), Some(first));
    assert_eq!(state.current_piece(), active);
    assert_eq!(state.next_pieces(), queue.as_slice());

    state.hard_drop();
    assert!(state.can_hold());
}

#[test]
fn test_game_over_freezes_state() {
    let mut state = started(31);
    let mut drops = 0;
    while !state.is_game_over() {
        let active = state.current_piece().unwrap();
        assert!(!collides(&active, state.board()));
        assert!(state.hard_drop());
        drops += 1;
        assert!(drops < 200);
    }

    let active = state.current_piece().unwrap();
    assert!(collides(&active, state.board()));

    let events = state.drain_events();
    let game_overs: Vec<_> = events
        .iter()
        .filter(|event| matches!(event, GameEvent::GameOver { .. }))
        .collect();
    assert_eq!(game_overs.len(), 1);
    if let GameEvent::GameOver { stats } = game_overs[0] {
        assert_eq!(stats.pieces_placed, drops);
    }

    let board = state.board().clone();
    for action in [
        GameAction::MoveLeft,
        GameAction::MoveRight,
        GameAction::SoftDrop,
        GameAction::HardDrop,
        GameAction::RotateCw,
        GameAction::RotateCcw,
        GameAction::Hold,
        GameAction::Pause,
        GameAction::Start,
    ] {
        assert!(!state.apply_action(action), "{:?} acted after game over", action);
    }
    assert!(!state.tick(60_000));
    assert_eq!(state.board(), &board);
    assert_eq!(state.current_piece(), Some(active));
    assert!(state.drain_events().is_empty());
}

#[test]
fn test_reset_after_game_over() {
    let mut state = started(31);
    while !state.is_game_over() {
        state.hard_drop();
    }

    assert!(state.apply_action(GameAction::Reset));
    assert!(!state.is_game_over());
    assert!(!state.is_started());
    assert_eq!(state.board().filled_count(), 0);
    assert_eq!(state.stats().pieces_placed, 0);
    assert!(state.start());
    assert!(state.current_piece().is_some());
}

#[test]
fn test_same_seed_same_game() {
    let script = [
        GameAction::Start,
        GameAction::MoveLeft,
        GameAction::RotateCw,
        GameAction::HardDrop,
        GameAction::Hold,
        GameAction::MoveRight,
        GameAction::MoveRight,
        GameAction::HardDrop,
        GameAction::SoftDrop,
        GameAction::HardDrop,
    ];
    let run = |seed: u32| {
        let mut state = GameState::new(seed);
        for action in script {
            state.apply_action(action);
            state.tick(16);
        }
        (state.snapshot(), state.drain_events())
    };
    assert_eq!(run(404), run(404));
}

#[test]
fn test_games_do_not_share_bag_state() {
    let mut a = GameState::new(9);
    let b = GameState::new(9);
    a.start();
    for _ in 0..5 {
        a.hard_drop();
    }
    let fresh = GameState::new(9);
    assert_eq!(b.next_pieces(), fresh.next_pieces());
}

#[test]
fn test_custom_board_config() {
    let config = GameConfig {
        width: 6,
        height: 12,
        preview_len: 1,
        spawn_x: 1,
        ..GameConfig::default()
    };
    let mut state = GameState::with_config(config, 2).unwrap();
    state.start();
    assert_eq!(state.board().width(), 6);
    assert_eq!(state.next_pieces().len(), 1);
    assert_eq!(state.current_piece().unwrap().x, 1);

    while state.move_piece(1) {}
    let piece = state.current_piece().unwrap();
    assert!(piece.cells().all(|(x, _)| x < 6));
}

#[test]
fn test_gravity_uses_level_interval() {
    let mut state = started(15);
    assert_eq!(state.drop_interval_ms(), 1000);
    let y = state.current_piece().unwrap().y;

    for _ in 0..62 {
        state.tick(16);
    }
    assert_eq!(state.current_piece().unwrap().y, y);
    state.tick(16);
    assert_eq!(state.current_piece().unwrap().y, y + 1);
    assert_eq!(state.stats().elapsed_ms, 63 * 16);
}
