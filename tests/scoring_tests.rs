//! Scoring tests - point table, back-to-back, combos, level and gravity

use web_tetris::core::scoring::{
    calculate_level, calculate_line_score, get_drop_interval_ms, ScoreKeeper,
};
use web_tetris::core::{calculate_drop_score, calculate_score, GameConfig};

#[test]
fn test_tetris_then_back_to_back_tetris() {
    let mut keeper = ScoreKeeper::new(10);
    assert!(!keeper.back_to_back());

    let first = keeper.record_lock(4);
    assert_eq!(first.result.total, 800);
    assert!(!first.result.b2b_applied);
    assert_eq!(keeper.stats().tetris_count, 1);
    assert!(keeper.back_to_back());

    let second = keeper.record_lock(4);
    assert_eq!(second.result.line_clear_score, 1200);
    assert!(second.result.b2b_applied);
    assert_eq!(keeper.stats().tetris_count, 2);
}

#[test]
fn test_smaller_clear_breaks_back_to_back() {
    let mut keeper = ScoreKeeper::new(10);
    keeper.record_lock(4);
    keeper.record_lock(1);
    assert!(!keeper.back_to_back());

    let outcome = keeper.record_lock(4);
    assert!(!outcome.result.b2b_applied);
    assert_eq!(outcome.result.line_clear_score, 800);
}

#[test]
fn test_combo_chain() {
    let mut keeper = ScoreKeeper::new(10);

    let gains: Vec<u32> = (0..3).map(|_| keeper.record_lock(1).result.total).collect();
    assert_eq!(gains, vec![100, 150, 200]);
    assert_eq!(keeper.stats().combo, 3);
    assert_eq!(keeper.stats().score, 450);

    let miss = keeper.record_lock(0);
    assert_eq!(miss.result.total, 0);
    assert_eq!(miss.combo_changed, Some(0));
    assert_eq!(keeper.stats().combo, 0);
    assert_eq!(keeper.stats().max_combo, 3);

    assert_eq!(keeper.record_lock(1).result.total, 100);
}

#[test]
fn test_level_and_interval_after_25_lines() {
    assert_eq!(calculate_level(25, 10), 3);
    assert_eq!(get_drop_interval_ms(3, &GameConfig::default()), 800);

    let mut keeper = ScoreKeeper::new(10);
    for lines in [4, 4, 4, 4, 4, 3, 2] {
        keeper.record_lock(lines);
    }
    assert_eq!(keeper.stats().lines, 25);
    assert_eq!(keeper.stats().level, 3);
}

#[test]
fn test_points_use_level_before_the_clear() {
    let mut keeper = ScoreKeeper::new(10);
    for _ in 0..9 {
        keeper.record_lock(1);
    }
    keeper.record_lock(0);
    assert_eq!(keeper.stats().level, 1);

    // The clear that reaches 10 lines still scores at level 1
    let outcome = keeper.record_lock(1);
    assert_eq!(outcome.result.line_clear_score, 100);
    assert_eq!(outcome.level_up, Some(2));

    // The next clear scores at level 2
    let outcome = keeper.record_lock(1);
    assert_eq!(outcome.result.line_clear_score, 200);
}

#[test]
fn test_interval_floor_and_custom_tuning() {
    let config = GameConfig::default();
    assert_eq!(get_drop_interval_ms(1, &config), 1000);
    assert_eq!(get_drop_interval_ms(10, &config), 100);
    assert_eq!(get_drop_interval_ms(u32::MAX, &config), 100);

    let fast = GameConfig {
        initial_interval_ms: 500,
        level_speed_increase_ms: 50,
        min_interval_ms: 200,
        ..GameConfig::default()
    };
    assert_eq!(get_drop_interval_ms(2, &fast), 450);
    assert_eq!(get_drop_interval_ms(8, &fast), 200);
}

#[test]
fn test_pure_score_functions() {
    assert_eq!(calculate_line_score(2, 3), 900);
    assert_eq!(calculate_score(0, 5, 0, true).total, 0);
    assert_eq!(calculate_score(1, 2, 3, false).total, 200 + 200);
    assert_eq!(calculate_drop_score(18, true), 36);
    assert_eq!(calculate_drop_score(3, false), 3);
}
