//! Lifecycle events emitted by the game
//!
//! The game buffers events as they happen; hosts pull them out once per frame with
//! [`GameState::drain_events`](crate::GameState::drain_events) or push them into a
//! [`GameObserver`] with [`GameState::dispatch_events`](crate::GameState::dispatch_events).
//! Events serialize as internally tagged JSON (`{"type": "linesCleared", ...}`).

use serde::{Deserialize, Serialize};

use crate::line_clear::ClearedRows;
use crate::pieces::Tetromino;
use crate::scoring::Stats;
use crate::types::{PieceKind, Rotation};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum GameEvent {
    Started,
    PauseToggled {
        paused: bool,
    },
    /// Player move or manual soft drop step (gravity steps are silent)
    PieceMoved {
        dx: i8,
        dy: i8,
    },
    PieceRotated {
        rotation: Rotation,
    },
    /// `kind` went into the hold slot
    PieceHeld {
        kind: PieceKind,
    },
    HardDropped {
        distance: u32,
    },
    PieceLocked {
        piece: Tetromino,
    },
    /// Row indices are pre-clear positions, bottom to top
    LinesCleared {
        count: usize,
        rows: ClearedRows,
    },
    LevelUp {
        level: u32,
    },
    ComboChanged {
        combo: u32,
    },
    GameOver {
        stats: Stats,
    },
}

impl GameEvent {
    /// Stable event name, matching the JSON tag
    pub fn name(&self) -> &'static str {
        match self {
            GameEvent::Started => "started",
            GameEvent::PauseToggled { .. } => "pauseToggled",
            GameEvent::PieceMoved { .. } => "pieceMoved",
            GameEvent::PieceRotated { .. } => "pieceRotated",
            GameEvent::PieceHeld { .. } => "pieceHeld",
            GameEvent::HardDropped { .. } => "hardDropped",
            GameEvent::PieceLocked { .. } => "pieceLocked",
            GameEvent::LinesCleared { .. } => "linesCleared",
            GameEvent::LevelUp { .. } => "levelUp",
            GameEvent::ComboChanged { .. } => "comboChanged",
            GameEvent::GameOver { .. } => "gameOver",
        }
    }
}

/// Receiver for game events (audio, particles, UI)
pub trait GameObserver {
    fn on_event(&mut self, event: &GameEvent);
}

impl<F> GameObserver for F
where
    F: FnMut(&GameEvent),
{
    fn on_event(&mut self, event: &GameEvent) {
        self(event)
    }
}

impl GameObserver for Vec<GameEvent> {
    fn on_event(&mut self, event: &GameEvent) {
        self.push(event.clone());
    }
}
