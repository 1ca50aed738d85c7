//! Serializable view of a game, for renderers and the headless driver

use serde::{Deserialize, Serialize};

use crate::pieces::Tetromino;
use crate::scoring::Stats;
use crate::types::PieceKind;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameSnapshot {
    pub width: u8,
    pub height: u8,
    /// Rows top to bottom, each cell a kind code (0 = empty, 1..=7 = I O T S Z J L)
    pub board: Vec<Vec<u8>>,
    pub active: Option<Tetromino>,
    pub ghost_y: Option<i8>,
    pub hold: Option<PieceKind>,
    pub next: Vec<PieceKind>,
    pub can_hold: bool,
    pub started: bool,
    pub paused: bool,
    pub game_over: bool,
    pub back_to_back: bool,
    pub stats: Stats,
    pub drop_interval_ms: u32,
}

impl GameSnapshot {
    /// Whether player commands would currently be accepted
    pub fn playable(&self) -> bool {
        self.started && !self.game_over && !self.paused && self.active.is_some()
    }

    pub fn filled_cells(&self) -> usize {
        self.board
            .iter()
            .flatten()
            .filter(|&&code| code != 0)
            .count()
    }
}

impl Default for GameSnapshot {
    fn default() -> Self {
        Self {
            width: 0,
            height: 0,
            board: Vec::new(),
            active: None,
            ghost_y: None,
            hold: None,
            next: Vec::new(),
            can_hold: true,
            started: false,
            paused: false,
            game_over: false,
            back_to_back: false,
            stats: Stats::default(),
            drop_interval_ms: 0,
        }
    }
}
