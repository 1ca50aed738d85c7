//! Core game logic - pure, deterministic, and testable
//!
//! This crate contains all the game rules, state management, and simulation logic.
//! It has no dependencies on UI, networking, timers or I/O:
//!
//! - **Deterministic**: the same seed and command sequence produce the same game
//! - **Instance-owned**: every game owns its bag, RNG and buffers, so any number of
//!   games can run side by side
//! - **Host-driven**: the host calls [`GameState::tick`] once per frame; the engine
//!   never schedules anything itself
//!
//! # Module Structure
//!
//! - [`pieces`]: tetromino bitmaps for all four rotations
//! - [`rng`]: 7-bag random piece generation
//! - [`board`]: the grid of empty/filled cells
//! - [`placement`]: collision, drop projection (ghost / hard drop) and locking
//! - [`line_clear`]: full-row removal with gravity collapse
//! - [`scoring`]: points, combos, back-to-back, level and gravity interval
//! - [`events`]: typed lifecycle events and the observer trait
//! - [`config`]: board size, preview depth, spawn anchor and timing
//! - [`game_state`]: the state machine and the command/query API
//! - [`snapshot`]: a serializable view for renderers
//!
//! # Game Rules
//!
//! - **7-Bag Randomizer**: each run of seven pieces is a shuffled set of all seven
//! - **Rotation without kicks**: a rotation that would collide is rejected
//! - **Ghost Piece**: shows where the current piece will land
//! - **Hold**: store one piece for later use (once per piece)
//! - **Scoring**: 100/300/500/800 x level, 1.5x back-to-back Tetris, combo bonus,
//!   1 point per soft-drop row, 2 points per hard-drop row
//! - **Game over**: a freshly spawned piece that collides ends the game
//!
//! # Example
//!
//! ```
//! use web_tetris_core::GameState;
//! use web_tetris_core::types::GameAction;
//!
//! // Create and start a game
//! let mut game = GameState::new(12345);
//! game.start();
//!
//! // Apply game actions
//! game.apply_action(GameAction::MoveRight);
//! game.apply_action(GameAction::RotateCw);
//! game.apply_action(GameAction::HardDrop);
//!
//! // Hard drop awards points and locks the piece
//! assert!(game.stats().score > 0);
//! assert_eq!(game.stats().pieces_placed, 1);
//! ```
//!
//! # Timing
//!
//! - **Tick Rate**: hosts typically tick every 16ms
//! - **Gravity**: 1000ms per row at level 1, 100ms faster per level, never below 100ms

pub mod board;
pub mod config;
pub mod events;
pub mod game_state;
pub mod line_clear;
pub mod pieces;
pub mod placement;
pub mod rng;
pub mod scoring;
pub mod snapshot;

pub use web_tetris_scores as scores;
pub use web_tetris_types as types;

// Re-export commonly used types for convenience
pub use board::Board;
pub use config::{ConfigError, GameConfig};
pub use events::{GameEvent, GameObserver};
pub use game_state::GameState;
pub use line_clear::{clear_lines, ClearedRows};
pub use pieces::{get_shape, piece_def, Tetromino};
pub use placement::{collides, drop_target, lock_piece, project_drop};
pub use rng::{PieceGenerator, SimpleRng};
pub use scoring::{calculate_drop_score, calculate_score, ScoreKeeper, ScoreResult, Stats};
pub use snapshot::GameSnapshot;
