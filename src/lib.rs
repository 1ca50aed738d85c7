//! Web Tetris (workspace facade crate).
//!
//! Re-exports the engine crates as `web_tetris::{core, scores, types}` and hosts the
//! headless line-protocol driver used by the `web-tetris` binary.

pub use web_tetris_core as core;
pub use web_tetris_scores as scores;
pub use web_tetris_types as types;

pub mod headless;
