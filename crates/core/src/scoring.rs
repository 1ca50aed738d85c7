//! Scoring module - points, combos, back-to-back, level and gravity
//!
//! Rules:
//! - A clear of N lines is worth `LINE_SCORES[N] * level` (100/300/500/800).
//! - A Tetris (4 lines) following another Tetris is worth 1.5x. Any 1-3 line clear
//!   breaks the back-to-back chain; a lock that clears nothing leaves it alone.
//! - Every clearing lock extends the combo; combo step `c` adds
//!   `(c - 1) * COMBO_BASE * level`. A lock without a clear resets the combo.
//! - Points use the level in effect when the piece locked; the level is then
//!   recomputed as `lines / lines_per_level + 1`.
//! - Hard drops earn 2 points per row, manual soft drops 1 point per row.

use serde::{Deserialize, Serialize};

use crate::config::GameConfig;
use crate::types::{
    B2B_DENOMINATOR, B2B_NUMERATOR, COMBO_BASE, HARD_DROP_POINTS_PER_ROW, LINE_SCORES,
    SOFT_DROP_POINTS_PER_ROW,
};

/// Score calculation result
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ScoreResult {
    /// Base points for the clear (includes B2B multiplier, excludes combo bonus).
    pub line_clear_score: u32,
    /// Combo bonus added on top of `line_clear_score`.
    pub combo_bonus: u32,
    pub total: u32,
    /// Whether a B2B multiplier was applied to this clear.
    pub b2b_applied: bool,
}

/// Calculate line clear score
/// lines: number of lines cleared (1-4)
/// level: current level (1-based)
pub fn calculate_line_score(lines: usize, level: u32) -> u32 {
    if lines == 0 || lines >= LINE_SCORES.len() {
        return 0;
    }
    LINE_SCORES[lines].saturating_mul(level)
}

/// Combo bonus for the `combo`-th consecutive clearing lock (1-based).
/// The first clear of a chain earns nothing extra.
pub fn calculate_combo_bonus(combo: u32, level: u32) -> u32 {
    combo
        .saturating_sub(1)
        .saturating_mul(COMBO_BASE)
        .saturating_mul(level)
}

/// Apply the B2B multiplier (3/2) to a point value.
pub fn apply_b2b_multiplier(points: u32) -> u32 {
    points.saturating_mul(B2B_NUMERATOR) / B2B_DENOMINATOR
}

/// Calculate complete score for one clearing lock.
///
/// `combo` is the combo count including this clear; `previous_b2b` is whether the
/// last scoring clear was a Tetris.
pub fn calculate_score(lines: usize, level: u32, combo: u32, previous_b2b: bool) -> ScoreResult {
    if lines == 0 {
        return ScoreResult::default();
    }

    let base_points = calculate_line_score(lines, level);
    let b2b_applied = lines == 4 && previous_b2b;
    let line_clear_score = if b2b_applied {
        apply_b2b_multiplier(base_points)
    } else {
        base_points
    };

    let combo_bonus = calculate_combo_bonus(combo, level);

    ScoreResult {
        line_clear_score,
        combo_bonus,
        total: line_clear_score.saturating_add(combo_bonus),
        b2b_applied,
    }
}

/// Calculate drop score
/// soft_drop: +1 per cell
/// hard_drop: +2 per cell
pub fn calculate_drop_score(cells: u32, is_hard_drop: bool) -> u32 {
    let per_row = if is_hard_drop {
        HARD_DROP_POINTS_PER_ROW
    } else {
        SOFT_DROP_POINTS_PER_ROW
    };
    cells.saturating_mul(per_row)
}

/// Level for a running line total (starts at 1)
pub fn calculate_level(total_lines: u32, lines_per_level: u32) -> u32 {
    total_lines / lines_per_level.max(1) + 1
}

/// Gravity interval for a level:
/// `max(min_interval, initial_interval - (level - 1) * level_speed_increase)`
pub fn get_drop_interval_ms(level: u32, config: &GameConfig) -> u32 {
    let speed_up = level
        .saturating_sub(1)
        .saturating_mul(config.level_speed_increase_ms);
    config
        .initial_interval_ms
        .saturating_sub(speed_up)
        .max(config.min_interval_ms)
}

/// Running game statistics
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Stats {
    pub score: u32,
    pub level: u32,
    pub lines: u32,
    pub combo: u32,
    pub max_combo: u32,
    pub tetris_count: u32,
    pub pieces_placed: u32,
    pub elapsed_ms: u64,
}

impl Default for Stats {
    fn default() -> Self {
        Self {
            score: 0,
            level: 1,
            lines: 0,
            combo: 0,
            max_combo: 0,
            tetris_count: 0,
            pieces_placed: 0,
            elapsed_ms: 0,
        }
    }
}

/// What a single lock did to the score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LockScore {
    pub lines: usize,
    pub result: ScoreResult,
    /// New level, if this lock raised it
    pub level_up: Option<u32>,
    /// New combo count, if it changed
    pub combo_changed: Option<u32>,
}

/// Owns [`Stats`] plus the back-to-back flag and applies the rules above
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoreKeeper {
    stats: Stats,
    back_to_back: bool,
    lines_per_level: u32,
}

impl ScoreKeeper {
    pub fn new(lines_per_level: u32) -> Self {
        Self {
            stats: Stats::default(),
            back_to_back: false,
            lines_per_level,
        }
    }

    pub fn stats(&self) -> &Stats {
        &self.stats
    }

    pub fn back_to_back(&self) -> bool {
        self.back_to_back
    }

    /// Score a lock that cleared `lines` rows (0 allowed)
    pub fn record_lock(&mut self, lines: usize) -> LockScore {
        let previous_combo = self.stats.combo;
        self.stats.pieces_placed = self.stats.pieces_placed.saturating_add(1);

        if lines == 0 {
            self.stats.combo = 0;
            return LockScore {
                lines,
                combo_changed: (previous_combo != 0).then_some(0),
                ..LockScore::default()
            };
        }

        self.stats.combo += 1;
        self.stats.max_combo = self.stats.max_combo.max(self.stats.combo);

        let result = calculate_score(lines, self.stats.level, self.stats.combo, self.back_to_back);
        self.stats.score = self.stats.score.saturating_add(result.total);

        if lines == 4 {
            self.stats.tetris_count += 1;
            self.back_to_back = true;
        } else {
            self.back_to_back = false;
        }

        let previous_level = self.stats.level;
        self.stats.lines = self.stats.lines.saturating_add(lines as u32);
        self.stats.level = calculate_level(self.stats.lines, self.lines_per_level);

        LockScore {
            lines,
            result,
            level_up: (self.stats.level > previous_level).then_some(self.stats.level),
            combo_changed: Some(self.stats.combo),
        }
    }

    /// Award drop points for `rows` travelled; returns the points added
    pub fn add_drop_points(&mut self, rows: u32, is_hard_drop: bool) -> u32 {
        let points = calculate_drop_score(rows, is_hard_drop);
        self.stats.score = self.stats.score.saturating_add(points);
        points
    }

    pub fn add_elapsed(&mut self, elapsed_ms: u32) {
        self.stats.elapsed_ms = self.stats.elapsed_ms.saturating_add(elapsed_ms as u64);
    }
}
