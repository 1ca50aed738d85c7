//! Headless driver: one command per input line, JSON lines out.
//!
//! Commands:
//!
//! - any action name (`moveLeft`, `hardDrop`, `start`, ...)
//! - `tick <ms>`: advance the gravity timer
//! - `save <name>`: submit the current stats to the leaderboard
//! - `snapshot`: print the current snapshot only
//!
//! After every command the buffered events are printed as `{"event": ...}` lines,
//! followed by a `{"snapshot": ...}` line. End of input prints `{"final": stats}`.
//! Diagnostics go to stderr with a `[Headless]` prefix.

use std::env;
use std::fs;
use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context, Result};
use serde::Serialize;

use crate::core::{GameConfig, GameEvent, GameSnapshot, GameState, Stats};
use crate::scores::{Leaderboard, ScoreEntry};
use crate::types::GameAction;

/// Driver configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeadlessConfig {
    pub seed: u32,
    /// Leaderboard JSON file; without it scores only live in memory
    pub scores_path: Option<PathBuf>,
    /// Preview depth override
    pub preview_len: Option<usize>,
}

impl Default for HeadlessConfig {
    fn default() -> Self {
        Self {
            seed: 1,
            scores_path: None,
            preview_len: None,
        }
    }
}

impl HeadlessConfig {
    /// Create from environment variables
    pub fn from_env() -> Self {
        let seed = env::var("TETRIS_SEED")
            .ok()
            .and_then(|s| s.trim().parse().ok())
            .unwrap_or(1);

        let scores_path = env::var("TETRIS_SCORES_PATH")
            .ok()
            .map(|s| s.trim().to_string())
            .and_then(|s| if s.is_empty() { None } else { Some(PathBuf::from(s)) });

        let preview_len = env::var("TETRIS_PREVIEW")
            .ok()
            .and_then(|s| s.trim().parse().ok());

        Self {
            seed,
            scores_path,
            preview_len,
        }
    }

    pub fn game_config(&self) -> GameConfig {
        let mut config = GameConfig::default();
        if let Some(preview_len) = self.preview_len {
            config.preview_len = preview_len;
        }
        config
    }
}

/// One parsed input line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Action(GameAction),
    Tick(u32),
    Save(String),
    Snapshot,
}

impl Command {
    /// Parse a line. Blank lines and `#` comments yield `Ok(None)`.
    pub fn parse(line: &str) -> Result<Option<Self>> {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            return Ok(None);
        }

        let (head, rest) = match line.split_once(char::is_whitespace) {
            Some((head, rest)) => (head, rest.trim()),
            None => (line, ""),
        };

        let command = match head.to_ascii_lowercase().as_str() {
            "tick" => {
                let ms = rest
                    .parse()
                    .with_context(|| format!("invalid tick duration {:?}", rest))?;
                Command::Tick(ms)
            }
            "save" => Command::Save(rest.to_string()),
            "snapshot" => Command::Snapshot,
            _ => {
                let action =
                    GameAction::from_str(head).ok_or_else(|| anyhow!("unknown command {:?}", head))?;
                Command::Action(action)
            }
        };
        Ok(Some(command))
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
enum Output<'a> {
    Event(&'a GameEvent),
    Snapshot(&'a GameSnapshot),
    Leaderboard(&'a [ScoreEntry]),
    Final(&'a Stats),
}

fn emit<W: Write>(out: &mut W, line: &Output<'_>) -> Result<()> {
    serde_json::to_writer(&mut *out, line)?;
    out.write_all(b"\n")?;
    Ok(())
}

/// A running headless game
pub struct Session {
    config: HeadlessConfig,
    game: GameState,
    snapshot: GameSnapshot,
}

impl Session {
    pub fn new(config: HeadlessConfig) -> Result<Self> {
        let mut game = GameState::with_config(config.game_config(), config.seed)
            .context("invalid game configuration")?;

        if let Some(path) = &config.scores_path {
            let leaderboard = load_leaderboard(path)?;
            eprintln!(
                "[Headless] Loaded {} scores from {}",
                leaderboard.len(),
                path.display()
            );
            game.set_leaderboard(leaderboard);
        }

        Ok(Self {
            config,
            game,
            snapshot: GameSnapshot::default(),
        })
    }

    pub fn game(&self) -> &GameState {
        &self.game
    }

    /// Run one input line. Bad commands are reported on stderr and skipped.
    pub fn handle_line<W: Write>(&mut self, line: &str, out: &mut W) -> Result<()> {
        let command = match Command::parse(line) {
            Ok(Some(command)) => command,
            Ok(None) => return Ok(()),
            Err(e) => {
                eprintln!("[Headless] {:#}", e);
                return Ok(());
            }
        };

        match command {
            Command::Action(action) => {
                self.game.apply_action(action);
            }
            Command::Tick(ms) => {
                self.game.tick(ms);
            }
            Command::Save(name) => self.save_score(&name, out)?,
            Command::Snapshot => {}
        }

        self.flush_events(out)?;
        self.game.snapshot_into(&mut self.snapshot);
        emit(out, &Output::Snapshot(&self.snapshot))
    }

    /// Print final stats and hand them back
    pub fn finish<W: Write>(mut self, out: &mut W) -> Result<Stats> {
        self.flush_events(out)?;
        let stats = *self.game.stats();
        emit(out, &Output::Final(&stats))?;
        out.flush()?;
        Ok(stats)
    }

    fn flush_events<W: Write>(&mut self, out: &mut W) -> Result<()> {
        for event in self.game.drain_events() {
            match &event {
                GameEvent::Started => eprintln!("[Headless] Game started"),
                GameEvent::GameOver { stats } => eprintln!(
                    "[Headless] Game over: score {} level {} lines {}",
                    stats.score, stats.level, stats.lines
                ),
                _ => {}
            }
            emit(out, &Output::Event(&event))?;
        }
        Ok(())
    }

    fn save_score<W: Write>(&mut self, name: &str, out: &mut W) -> Result<()> {
        let entry = match self.game.score_submission(name) {
            Ok(entry) => entry,
            Err(e) => {
                eprintln!("[Headless] Score rejected ({}): {}", e.code(), e);
                return Ok(());
            }
        };

        let mut leaderboard = match &self.config.scores_path {
            Some(path) => load_leaderboard(path)?,
            None => self.game.leaderboard().clone(),
        };
        leaderboard.submit(entry);

        if let Some(path) = &self.config.scores_path {
            let json = leaderboard.to_json()?;
            fs::write(path, json)
                .with_context(|| format!("failed to write {}", path.display()))?;
            eprintln!("[Headless] Saved score to {}", path.display());
        }

        emit(out, &Output::Leaderboard(leaderboard.entries()))?;
        self.game.set_leaderboard(leaderboard);
        Ok(())
    }
}

/// Read a leaderboard file; a missing file is an empty board
fn load_leaderboard(path: &Path) -> Result<Leaderboard> {
    if !path.exists() {
        return Ok(Leaderboard::new());
    }
    let text =
        fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))?;
    Leaderboard::from_json(&text).with_context(|| format!("invalid leaderboard {}", path.display()))
}

/// Drive a whole session from `input` until end of input
pub fn run<R: BufRead, W: Write>(config: HeadlessConfig, input: R, mut output: W) -> Result<Stats> {
    let mut session = Session::new(config)?;
    for line in input.lines() {
        let line = line.context("failed to read input")?;
        session.handle_line(&line, &mut output)?;
    }
    session.finish(&mut output)
}
