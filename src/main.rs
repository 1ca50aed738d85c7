//! Headless Tetris runner (default binary).
//!
//! Reads commands from stdin, one per line, and writes events and snapshots to
//! stdout as JSON lines. See [`web_tetris::headless`] for the protocol.
//!
//! Environment:
//! - `TETRIS_SEED`: RNG seed (default 1)
//! - `TETRIS_SCORES_PATH`: leaderboard JSON file used by `save`
//! - `TETRIS_PREVIEW`: number of preview pieces (1-7)

use std::io;

use anyhow::Result;

use web_tetris::headless::{run, HeadlessConfig};

fn main() -> Result<()> {
    let config = HeadlessConfig::from_env();
    eprintln!("[Headless] Seed {}", config.seed);

    let stdin = io::stdin();
    let stdout = io::stdout();
    let stats = run(config, stdin.lock(), stdout.lock())?;

    eprintln!(
        "[Headless] Session ended: score {} level {} lines {} pieces {}",
        stats.score, stats.level, stats.lines, stats.pieces_placed
    );
    Ok(())
}
