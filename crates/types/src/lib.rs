//! Shared types - plain data structures and constants
//!
//! Everything in here is pure data: piece kinds, rotation states, board cells,
//! named player actions and the canonical tuning constants. The engine, the
//! leaderboard crate and any host (renderer, audio, input wiring) all speak
//! these types.
//!
//! # Board Dimensions
//!
//! - **Width**: 10 columns (indexed 0-9)
//! - **Height**: 20 rows (indexed 0-19, row 0 at the top)
//! - **Spawn anchor**: (3, 0), the top-left corner of the piece bitmap
//!
//! # Gravity
//!
//! The drop interval is a pure function of the level:
//!
//! ```text
//! interval = max(MIN_DROP_INTERVAL_MS, INITIAL_DROP_INTERVAL_MS - (level - 1) * LEVEL_SPEED_INCREASE_MS)
//! ```
//!
//! | Level | Interval |
//! |-------|----------|
//! | 1 | 1000ms |
//! | 2 | 900ms |
//! | 3 | 800ms |
//! | 10+ | 100ms |
//!
//! # Examples
//!
//! ```
//! use web_tetris_types::{Cell, GameAction, PieceKind, Rotation, BOARD_HEIGHT, BOARD_WIDTH};
//!
//! let piece = PieceKind::from_str("t").unwrap();
//! assert_eq!(piece, PieceKind::T);
//!
//! assert_eq!(Rotation::West.rotate_cw(), Rotation::North);
//! assert_eq!(Rotation::North.index(), 0);
//!
//! assert_eq!(GameAction::from_str("hardDrop"), Some(GameAction::HardDrop));
//!
//! assert!(Cell::Empty.is_empty());
//! assert_eq!(Cell::Filled(PieceKind::I).kind(), Some(PieceKind::I));
//!
//! assert_eq!(BOARD_WIDTH, 10);
//! assert_eq!(BOARD_HEIGHT, 20);
//! ```

use serde::{Deserialize, Serialize};

/// Board width in cells (10 columns)
pub const BOARD_WIDTH: u8 = 10;

/// Board height in cells (20 rows)
pub const BOARD_HEIGHT: u8 = 20;

/// Horizontal spawn anchor for every new piece
pub const SPAWN_X: i8 = 3;

/// Vertical spawn anchor; the bitmap's top row aligns with board row 0
pub const SPAWN_Y: i8 = 0;

/// Number of upcoming pieces shown in the preview queue
pub const NEXT_QUEUE_LEN: usize = 3;

/// Upper bound for a configured preview queue (one full bag)
pub const MAX_NEXT_QUEUE_LEN: usize = 7;

/// Typical host frame length in milliseconds (~60 FPS)
pub const TICK_MS: u32 = 16;

/// Gravity interval at level 1
pub const INITIAL_DROP_INTERVAL_MS: u32 = 1000;

/// Gravity speed-up per level
pub const LEVEL_SPEED_INCREASE_MS: u32 = 100;

/// Gravity never gets faster than this
pub const MIN_DROP_INTERVAL_MS: u32 = 100;

/// Lines needed to advance one level
pub const LINES_PER_LEVEL: u32 = 10;

/// Base points for clearing N lines at once, multiplied by the level.
///
/// - 1 line: 100
/// - 2 lines: 300
/// - 3 lines: 500
/// - 4 lines: 800 (Tetris)
pub const LINE_SCORES: [u32; 5] = [0, 100, 300, 500, 800];

/// Combo bonus per chained clear beyond the first, multiplied by the level
pub const COMBO_BASE: u32 = 50;

/// Back-to-back Tetris multiplier numerator (3/2 = 1.5x)
pub const B2B_NUMERATOR: u32 = 3;

/// Back-to-back Tetris multiplier denominator
pub const B2B_DENOMINATOR: u32 = 2;

/// Points per row travelled by a hard drop
pub const HARD_DROP_POINTS_PER_ROW: u32 = 2;

/// Points per row of manual soft drop
pub const SOFT_DROP_POINTS_PER_ROW: u32 = 1;

/// Leaderboard length kept by the persistence collaborator
pub const MAX_HIGH_SCORES: usize = 10;

/// The seven tetromino piece kinds
///
/// Each kind carries a fixed colour token:
/// - **I**: cyan
/// - **O**: yellow
/// - **T**: purple
/// - **S**: green
/// - **Z**: red
/// - **J**: blue
/// - **L**: orange
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PieceKind {
    I,
    O,
    T,
    S,
    Z,
    J,
    L,
}

impl PieceKind {
    /// All kinds in catalog order
    pub const ALL: [PieceKind; 7] = [
        PieceKind::I,
        PieceKind::O,
        PieceKind::T,
        PieceKind::S,
        PieceKind::Z,
        PieceKind::J,
        PieceKind::L,
    ];

    /// Parse piece kind from string (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use web_tetris_types::PieceKind;
    ///
    /// assert_eq!(PieceKind::from_str("i"), Some(PieceKind::I));
    /// assert_eq!(PieceKind::from_str("O"), Some(PieceKind::O));
    /// assert_eq!(PieceKind::from_str("unknown"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "i" => Some(PieceKind::I),
            "o" => Some(PieceKind::O),
            "t" => Some(PieceKind::T),
            "s" => Some(PieceKind::S),
            "z" => Some(PieceKind::Z),
            "j" => Some(PieceKind::J),
            "l" => Some(PieceKind::L),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            PieceKind::I => "i",
            PieceKind::O => "o",
            PieceKind::T => "t",
            PieceKind::S => "s",
            PieceKind::Z => "z",
            PieceKind::J => "j",
            PieceKind::L => "l",
        }
    }

    /// Position of this kind in [`PieceKind::ALL`]
    pub fn index(&self) -> usize {
        match self {
            PieceKind::I => 0,
            PieceKind::O => 1,
            PieceKind::T => 2,
            PieceKind::S => 3,
            PieceKind::Z => 4,
            PieceKind::J => 5,
            PieceKind::L => 6,
        }
    }

    /// Non-zero numeric code used in compact board grids (0 means empty)
    ///
    /// ```
    /// use web_tetris_types::PieceKind;
    ///
    /// assert_eq!(PieceKind::I.code(), 1);
    /// assert_eq!(PieceKind::L.code(), 7);
    /// ```
    pub fn code(&self) -> u8 {
        self.index() as u8 + 1
    }

    /// Colour token as 0xRRGGBB
    pub fn color(&self) -> u32 {
        match self {
            PieceKind::I => 0x00F0F0,
            PieceKind::O => 0xF0F000,
            PieceKind::T => 0xA000F0,
            PieceKind::S => 0x00F000,
            PieceKind::Z => 0xF00000,
            PieceKind::J => 0x0000F0,
            PieceKind::L => 0xF0A000,
        }
    }
}

/// Rotation states, cycling North → East → South → West → North
///
/// North is the spawn orientation; each step is a 90° clockwise turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Rotation {
    #[default]
    North,
    East,
    South,
    West,
}

impl Rotation {
    /// Rotation index 0-3
    pub fn index(&self) -> usize {
        match self {
            Rotation::North => 0,
            Rotation::East => 1,
            Rotation::South => 2,
            Rotation::West => 3,
        }
    }

    /// Build from an index, wrapping modulo 4
    ///
    /// ```
    /// use web_tetris_types::Rotation;
    ///
    /// assert_eq!(Rotation::from_index(1), Rotation::East);
    /// assert_eq!(Rotation::from_index(5), Rotation::East);
    /// ```
    pub fn from_index(index: usize) -> Self {
        match index % 4 {
            0 => Rotation::North,
            1 => Rotation::East,
            2 => Rotation::South,
            _ => Rotation::West,
        }
    }

    /// Rotate clockwise (90°)
    ///
    /// # Examples
    ///
    /// ```
    /// use web_tetris_types::Rotation;
    ///
    /// assert_eq!(Rotation::North.rotate_cw(), Rotation::East);
    /// assert_eq!(Rotation::West.rotate_cw(), Rotation::North);
    /// ```
    pub fn rotate_cw(&self) -> Self {
        Self::from_index(self.index() + 1)
    }

    /// Rotate counter-clockwise (-90°)
    ///
    /// ```
    /// use web_tetris_types::Rotation;
    ///
    /// assert_eq!(Rotation::North.rotate_ccw(), Rotation::West);
    /// assert_eq!(Rotation::East.rotate_ccw(), Rotation::North);
    /// ```
    pub fn rotate_ccw(&self) -> Self {
        Self::from_index(self.index() + 3)
    }

    pub fn rotated(&self, clockwise: bool) -> Self {
        if clockwise {
            self.rotate_cw()
        } else {
            self.rotate_ccw()
        }
    }
}

/// A cell on the game board
///
/// Emptiness is its own variant so no colour encoding can ever be mistaken
/// for an empty cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Cell {
    #[default]
    Empty,
    Filled(PieceKind),
}

impl Cell {
    pub fn is_empty(&self) -> bool {
        matches!(self, Cell::Empty)
    }

    pub fn is_filled(&self) -> bool {
        matches!(self, Cell::Filled(_))
    }

    /// Piece kind occupying the cell, if any
    pub fn kind(&self) -> Option<PieceKind> {
        match self {
            Cell::Empty => None,
            Cell::Filled(kind) => Some(*kind),
        }
    }

    /// Compact grid code: 0 for empty, [`PieceKind::code`] otherwise
    pub fn code(&self) -> u8 {
        match self {
            Cell::Empty => 0,
            Cell::Filled(kind) => kind.code(),
        }
    }
}

/// Named player commands
///
/// These are the discrete actions an input collaborator (keyboard, touch,
/// scripted driver) hands to the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum GameAction {
    /// Move piece one cell left
    MoveLeft,
    /// Move piece one cell right
    MoveRight,
    /// Drop piece one cell down (locks if it cannot move)
    SoftDrop,
    /// Instantly drop piece to its projected resting row and lock it
    HardDrop,
    /// Rotate piece 90° clockwise
    RotateCw,
    /// Rotate piece 90° counter-clockwise
    RotateCcw,
    /// Hold current piece (once per lock)
    Hold,
    /// Toggle pause state
    Pause,
    /// Start a fresh game
    Start,
    /// Reset to a not-yet-started game
    Reset,
}

impl GameAction {
    /// Parse action from string (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use web_tetris_types::GameAction;
    ///
    /// assert_eq!(GameAction::from_str("moveLeft"), Some(GameAction::MoveLeft));
    /// assert_eq!(GameAction::from_str("ROTATECW"), Some(GameAction::RotateCw));
    /// assert_eq!(GameAction::from_str("unknown"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "moveleft" => Some(GameAction::MoveLeft),
            "moveright" => Some(GameAction::MoveRight),
            "softdrop" => Some(GameAction::SoftDrop),
            "harddrop" => Some(GameAction::HardDrop),
            "rotatecw" => Some(GameAction::RotateCw),
            "rotateccw" => Some(GameAction::RotateCcw),
            "hold" => Some(GameAction::Hold),
            "pause" => Some(GameAction::Pause),
            "start" => Some(GameAction::Start),
            "reset" => Some(GameAction::Reset),
            _ => None,
        }
    }

    /// camelCase name, the inverse of [`GameAction::from_str`]
    pub fn as_str(&self) -> &'static str {
        match self {
            GameAction::MoveLeft => "moveLeft",
            GameAction::MoveRight => "moveRight",
            GameAction::SoftDrop => "softDrop",
            GameAction::HardDrop => "hardDrop",
            GameAction::RotateCw => "rotateCw",
            GameAction::RotateCcw => "rotateCcw",
            GameAction::Hold => "hold",
            GameAction::Pause => "pause",
            GameAction::Start => "start",
            GameAction::Reset => "reset",
        }
    }
}
