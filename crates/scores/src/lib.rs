//! Leaderboard data shape
//!
//! The high-score store itself (HTTP endpoint, database, local storage) belongs
//! to the host. This crate only owns the shape both sides agree on:
//!
//! - a submission is `{name, score, level, lines}`
//! - a leaderboard is at most [`MAX_HIGH_SCORES`] entries sorted by descending score
//!
//! plus the "is this a high score" predicate the game evaluates against a
//! cached, possibly empty or stale, copy of the list.
//!
//! # Example
//!
//! ```
//! use web_tetris_scores::{Leaderboard, ScoreEntry};
//!
//! let mut board = Leaderboard::new();
//! assert!(board.is_high_score(10));
//!
//! let entry = ScoreEntry::new("ada", 1200, 2, 14).unwrap();
//! board.submit(entry);
//! assert_eq!(board.entries()[0].name, "ada");
//!
//! let json = board.to_json().unwrap();
//! assert_eq!(Leaderboard::from_json(&json).unwrap(), board);
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

pub use web_tetris_types::MAX_HIGH_SCORES;

/// Longest accepted player name, in characters (after trimming)
pub const MAX_NAME_LEN: usize = 20;

#[derive(Debug)]
pub enum ScoreError {
    EmptyName,
    NameTooLong { len: usize },
    Json(serde_json::Error),
}

impl ScoreError {
    pub fn code(&self) -> &'static str {
        match self {
            ScoreError::EmptyName | ScoreError::NameTooLong { .. } => "invalid_name",
            ScoreError::Json(_) => "invalid_json",
        }
    }
}

impl fmt::Display for ScoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScoreError::EmptyName => write!(f, "player name is empty"),
            ScoreError::NameTooLong { len } => write!(
                f,
                "player name is {} characters, at most {} allowed",
                len, MAX_NAME_LEN
            ),
            ScoreError::Json(e) => write!(f, "leaderboard json: {}", e),
        }
    }
}

impl std::error::Error for ScoreError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ScoreError::Json(e) => Some(e),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for ScoreError {
    fn from(e: serde_json::Error) -> Self {
        ScoreError::Json(e)
    }
}

/// One leaderboard row, also the payload of a save-score request
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ScoreEntry {
    pub name: String,
    pub score: u32,
    pub level: u32,
    pub lines: u32,
}

impl ScoreEntry {
    /// Build a validated entry. The name is trimmed first.
    pub fn new(name: &str, score: u32, level: u32, lines: u32) -> Result<Self, ScoreError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(ScoreError::EmptyName);
        }
        let len = name.chars().count();
        if len > MAX_NAME_LEN {
            return Err(ScoreError::NameTooLong { len });
        }

        Ok(Self {
            name: name.to_string(),
            score,
            level,
            lines,
        })
    }
}

/// Top scores, highest first, never longer than [`MAX_HIGH_SCORES`]
///
/// Serialized as a bare JSON array. Deserializing goes through
/// [`Leaderboard::from_entries`], so a stale or oversized list is normalised.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<ScoreEntry>", into = "Vec<ScoreEntry>")]
pub struct Leaderboard {
    entries: Vec<ScoreEntry>,
}

impl From<Vec<ScoreEntry>> for Leaderboard {
    fn from(entries: Vec<ScoreEntry>) -> Self {
        Self::from_entries(entries)
    }
}

impl From<Leaderboard> for Vec<ScoreEntry> {
    fn from(board: Leaderboard) -> Self {
        board.entries
    }
}

impl Leaderboard {
    pub fn new() -> Self {
        Self {
            entries: Vec::with_capacity(MAX_HIGH_SCORES + 1),
        }
    }

    /// Normalise an arbitrary list: sort by descending score, keep the top ten.
    ///
    /// Ties keep their incoming order.
    pub fn from_entries(mut entries: Vec<ScoreEntry>) -> Self {
        entries.sort_by(|a, b| b.score.cmp(&a.score));
        entries.truncate(MAX_HIGH_SCORES);
        Self { entries }
    }

    /// Parse a JSON array of entries as returned by the read endpoint
    pub fn from_json(s: &str) -> Result<Self, ScoreError> {
        Ok(serde_json::from_str(s)?)
    }

    pub fn to_json(&self) -> Result<String, ScoreError> {
        Ok(serde_json::to_string_pretty(&self.entries)?)
    }

    pub fn entries(&self) -> &[ScoreEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.entries.len() >= MAX_HIGH_SCORES
    }

    pub fn lowest_score(&self) -> Option<u32> {
        self.entries.last().map(|e| e.score)
    }

    /// Whether `score` would earn a place on the board.
    ///
    /// A zero score never qualifies. While the board has free slots any positive
    /// score does; once full, the score must beat the lowest entry.
    pub fn is_high_score(&self, score: u32) -> bool {
        if score == 0 {
            return false;
        }
        if !self.is_full() {
            return true;
        }
        match self.lowest_score() {
            Some(lowest) => score > lowest,
            None => true,
        }
    }

    /// Insert an entry and return the updated top ten
    pub fn submit(&mut self, entry: ScoreEntry) -> &[ScoreEntry] {
        self.entries.push(entry);
        self.entries.sort_by(|a, b| b.score.cmp(&a.score));
        self.entries.truncate(MAX_HIGH_SCORES);
        &self.entries
    }
}
