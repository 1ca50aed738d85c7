//! Game configuration
//!
//! [`GameConfig::default`] is the canonical ruleset: a 10x20 board, three preview
//! pieces, spawn anchor (3, 0), and gravity starting at 1000ms per row, 100ms
//! faster per level, never below 100ms.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::types::{
    BOARD_HEIGHT, BOARD_WIDTH, INITIAL_DROP_INTERVAL_MS, LEVEL_SPEED_INCREASE_MS,
    LINES_PER_LEVEL, MAX_NEXT_QUEUE_LEN, MIN_DROP_INTERVAL_MS, NEXT_QUEUE_LEN, SPAWN_X, SPAWN_Y,
};

/// Largest supported board side; keeps every coordinate (and a one-row
/// projection overshoot) inside `i8`.
pub const MAX_BOARD_SIDE: u8 = 64;

/// Smallest board side that fits every piece in every rotation
pub const MIN_BOARD_SIDE: u8 = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    BoardWidth(u8),
    BoardHeight(u8),
    PreviewLen(usize),
    SpawnOutsideBoard { x: i8, y: i8 },
    ZeroMinInterval,
    MinIntervalAboveInitial { min_ms: u32, initial_ms: u32 },
    ZeroLinesPerLevel,
}

impl ConfigError {
    pub fn code(self) -> &'static str {
        match self {
            ConfigError::BoardWidth(_) | ConfigError::BoardHeight(_) => "invalid_board_size",
            ConfigError::PreviewLen(_) => "invalid_preview_len",
            ConfigError::SpawnOutsideBoard { .. } => "invalid_spawn",
            ConfigError::ZeroMinInterval | ConfigError::MinIntervalAboveInitial { .. } => {
                "invalid_interval"
            }
            ConfigError::ZeroLinesPerLevel => "invalid_lines_per_level",
        }
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            ConfigError::BoardWidth(w) => write!(
                f,
                "board width {} outside {}..={}",
                w, MIN_BOARD_SIDE, MAX_BOARD_SIDE
            ),
            ConfigError::BoardHeight(h) => write!(
                f,
                "board height {} outside {}..={}",
                h, MIN_BOARD_SIDE, MAX_BOARD_SIDE
            ),
            ConfigError::PreviewLen(n) => {
                write!(f, "preview length {} outside 1..={}", n, MAX_NEXT_QUEUE_LEN)
            }
            ConfigError::SpawnOutsideBoard { x, y } => {
                write!(f, "spawn anchor ({}, {}) cannot fit a 4x4 piece", x, y)
            }
            ConfigError::ZeroMinInterval => write!(f, "minimum drop interval must be positive"),
            ConfigError::MinIntervalAboveInitial { min_ms, initial_ms } => write!(
                f,
                "minimum drop interval {}ms exceeds initial interval {}ms",
                min_ms, initial_ms
            ),
            ConfigError::ZeroLinesPerLevel => write!(f, "lines per level must be positive"),
        }
    }
}

impl std::error::Error for ConfigError {}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    pub width: u8,
    pub height: u8,
    /// Number of upcoming pieces kept in the preview queue
    pub preview_len: usize,
    pub spawn_x: i8,
    pub spawn_y: i8,
    pub initial_interval_ms: u32,
    pub level_speed_increase_ms: u32,
    pub min_interval_ms: u32,
    pub lines_per_level: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            width: BOARD_WIDTH,
            height: BOARD_HEIGHT,
            preview_len: NEXT_QUEUE_LEN,
            spawn_x: SPAWN_X,
            spawn_y: SPAWN_Y,
            initial_interval_ms: INITIAL_DROP_INTERVAL_MS,
            level_speed_increase_ms: LEVEL_SPEED_INCREASE_MS,
            min_interval_ms: MIN_DROP_INTERVAL_MS,
            lines_per_level: LINES_PER_LEVEL,
        }
    }
}

impl GameConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        let sides = MIN_BOARD_SIDE..=MAX_BOARD_SIDE;
        if !sides.contains(&self.width) {
            return Err(ConfigError::BoardWidth(self.width));
        }
        if !sides.contains(&self.height) {
            return Err(ConfigError::BoardHeight(self.height));
        }
        if !(1..=MAX_NEXT_QUEUE_LEN).contains(&self.preview_len) {
            return Err(ConfigError::PreviewLen(self.preview_len));
        }
        // Every bitmap must fit horizontally at the anchor, and the anchor row
        // has to be on or above the board.
        let fits_x = self.spawn_x >= 0 && self.spawn_x as i16 + 4 <= self.width as i16;
        let fits_y = self.spawn_y > -(MAX_BOARD_SIDE as i8) && self.spawn_y < self.height as i8;
        if !fits_x || !fits_y {
            return Err(ConfigError::SpawnOutsideBoard {
                x: self.spawn_x,
                y: self.spawn_y,
            });
        }
        if self.min_interval_ms == 0 {
            return Err(ConfigError::ZeroMinInterval);
        }
        if self.min_interval_ms > self.initial_interval_ms {
            return Err(ConfigError::MinIntervalAboveInitial {
                min_ms: self.min_interval_ms,
                initial_ms: self.initial_interval_ms,
            });
        }
        if self.lines_per_level == 0 {
            return Err(ConfigError::ZeroLinesPerLevel);
        }
        Ok(())
    }
}
