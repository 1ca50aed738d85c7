//! Game state module - manages the complete game state
//!
//! This module ties together all core components: board, generator, placement,
//! line clearing and scoring. It owns the lifecycle:
//!
//! ```text
//! NotStarted --start--> Running <--toggle_pause--> Paused
//!                          |
//!                          +--spawn collides--> GameOver
//! ```
//!
//! Player commands only act while running. The only automatic transition is the
//! gravity step driven by [`GameState::tick`]; the host calls it once per frame.

use std::mem;

use arrayvec::ArrayVec;

use crate::board::Board;
use crate::config::{ConfigError, GameConfig};
use crate::events::{GameEvent, GameObserver};
use crate::line_clear::clear_lines;
use crate::pieces::Tetromino;
use crate::placement::{collides, drop_target, lock_piece};
use crate::rng::PieceGenerator;
use crate::scores::{Leaderboard, ScoreEntry, ScoreError};
use crate::scoring::{get_drop_interval_ms, ScoreKeeper, Stats};
use crate::snapshot::GameSnapshot;
use crate::types::{GameAction, PieceKind, MAX_NEXT_QUEUE_LEN};

/// Upcoming pieces, front is spawned next
pub type NextQueue = ArrayVec<Tetromino, MAX_NEXT_QUEUE_LEN>;

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState {
    config: GameConfig,
    board: Board,
    active: Option<Tetromino>,
    hold: Option<PieceKind>,
    next_queue: NextQueue,
    generator: PieceGenerator,
    scorer: ScoreKeeper,
    drop_timer_ms: u32,
    can_hold: bool,
    started: bool,
    paused: bool,
    game_over: bool,
    /// Locally cached top scores, fed by the persistence layer
    leaderboard: Leaderboard,
    /// Buffered events, drained by the host
    events: Vec<GameEvent>,
}

impl GameState {
    /// Create a new game with the canonical rules and the given RNG seed
    pub fn new(seed: u32) -> Self {
        Self::build(GameConfig::default(), seed)
    }

    /// Create a new game with custom rules
    pub fn with_config(config: GameConfig, seed: u32) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::build(config, seed))
    }

    fn build(config: GameConfig, seed: u32) -> Self {
        let mut state = Self {
            config,
            board: Board::with_size(config.width, config.height),
            active: None,
            hold: None,
            next_queue: NextQueue::new(),
            generator: PieceGenerator::with_spawn(seed, config.spawn_x, config.spawn_y),
            scorer: ScoreKeeper::new(config.lines_per_level),
            drop_timer_ms: 0,
            can_hold: true,
            started: false,
            paused: false,
            game_over: false,
            leaderboard: Leaderboard::new(),
            events: Vec::new(),
        };
        state.refill_queue();
        state
    }

    // ------------------------------------------------------------------
    // Lifecycle
    // ------------------------------------------------------------------

    /// Start the game and spawn the first piece.
    ///
    /// Returns false if the game was already started or is over.
    pub fn start(&mut self) -> bool {
        if self.started || self.game_over {
            return false;
        }
        self.started = true;
        self.events.push(GameEvent::Started);
        self.spawn_next();
        true
    }

    /// Flip between running and paused. Ignored before start and after game over.
    pub fn toggle_pause(&mut self) -> bool {
        if !self.started || self.game_over {
            return false;
        }
        self.paused = !self.paused;
        self.events.push(GameEvent::PauseToggled {
            paused: self.paused,
        });
        true
    }

    /// Back to a fresh, not yet started game.
    ///
    /// Keeps the config and the cached leaderboard; the new bag sequence continues
    /// from the current RNG state. Undrained events survive the reset.
    pub fn reset_game(&mut self) {
        let seed = self.generator.seed();
        let leaderboard = mem::take(&mut self.leaderboard);
        let events = mem::take(&mut self.events);

        *self = Self::build(self.config, seed);
        self.leaderboard = leaderboard;
        self.events = events;
    }

    // ------------------------------------------------------------------
    // Commands
    // ------------------------------------------------------------------

    /// Shift the active piece horizontally; rolled back on collision
    pub fn move_piece(&mut self, dx: i8) -> bool {
        let Some(active) = self.controllable() else {
            return false;
        };

        let moved = active.shifted(dx, 0);
        if collides(&moved, &self.board) {
            return false;
        }

        self.active = Some(moved);
        self.events.push(GameEvent::PieceMoved { dx, dy: 0 });
        true
    }

    /// One manual row down (+1 point). Returns true if the piece locked instead.
    pub fn soft_drop(&mut self) -> bool {
        self.step_down().unwrap_or(false)
    }

    /// Drop the active piece to its projected row and lock it (+2 points per row)
    pub fn hard_drop(&mut self) -> bool {
        let Some(active) = self.controllable() else {
            return false;
        };

        let target = drop_target(&active, &self.board);
        let distance = (target.y - active.y) as u32;

        self.active = Some(target);
        self.scorer.add_drop_points(distance, true);
        self.events.push(GameEvent::HardDropped { distance });
        self.lock_active();
        true
    }

    /// Turn the active piece one step. No wall kicks: a colliding rotation is
    /// rejected and the piece keeps its previous orientation.
    pub fn rotate(&mut self, clockwise: bool) -> bool {
        let Some(active) = self.controllable() else {
            return false;
        };

        let rotated = active.rotated(clockwise);
        if collides(&rotated, &self.board) {
            return false;
        }

        self.active = Some(rotated);
        self.events.push(GameEvent::PieceRotated {
            rotation: rotated.rotation,
        });
        true
    }

    /// Store the active piece, swapping with the held one if any.
    ///
    /// Allowed once per spawned piece; the next lock re-arms it.
    pub fn hold_current_piece(&mut self) -> bool {
        if !self.can_hold {
            return false;
        }
        let Some(active) = self.controllable() else {
            return false;
        };

        self.can_hold = false;
        self.events.push(GameEvent::PieceHeld { kind: active.kind });

        match self.hold.replace(active.kind) {
            Some(held) => {
                let piece = Tetromino::spawn_at(held, self.config.spawn_x, self.config.spawn_y);
                self.place_spawned(piece);
            }
            None => {
                self.spawn_next();
            }
        }
        true
    }

    /// Advance the gravity timer by `elapsed_ms`.
    ///
    /// Once the accumulated time exceeds the drop interval the timer resets and the
    /// piece steps down one row, locking if it cannot. Returns whether a gravity
    /// step happened.
    pub fn tick(&mut self, elapsed_ms: u32) -> bool {
        if !self.started || self.paused || self.game_over {
            return false;
        }

        self.scorer.add_elapsed(elapsed_ms);
        self.drop_timer_ms = self.drop_timer_ms.saturating_add(elapsed_ms);

        if self.drop_timer_ms <= self.drop_interval_ms() {
            return false;
        }
        self.drop_timer_ms = 0;

        let Some(active) = self.active else {
            return false;
        };

        let moved = active.shifted(0, 1);
        if collides(&moved, &self.board) {
            self.lock_active();
        } else {
            self.active = Some(moved);
        }
        true
    }

    /// Apply a named game action
    pub fn apply_action(&mut self, action: GameAction) -> bool {
        match action {
            GameAction::MoveLeft => self.move_piece(-1),
            GameAction::MoveRight => self.move_piece(1),
            GameAction::SoftDrop => self.step_down().is_some(),
            GameAction::HardDrop => self.hard_drop(),
            GameAction::RotateCw => self.rotate(true),
            GameAction::RotateCcw => self.rotate(false),
            GameAction::Hold => self.hold_current_piece(),
            GameAction::Pause => self.toggle_pause(),
            GameAction::Start => self.start(),
            GameAction::Reset => {
                self.reset_game();
                true
            }
        }
    }

    // ------------------------------------------------------------------
    // Internals
    // ------------------------------------------------------------------

    /// Soft drop step: `None` if commands are not accepted, otherwise
    /// whether the piece locked.
    fn step_down(&mut self) -> Option<bool> {
        let active = self.controllable()?;

        let moved = active.shifted(0, 1);
        if collides(&moved, &self.board) {
            self.lock_active();
            return Some(true);
        }

        self.active = Some(moved);
        self.scorer.add_drop_points(1, false);
        self.events.push(GameEvent::PieceMoved { dx: 0, dy: 1 });
        Some(false)
    }

    /// Active piece, if player commands are currently accepted
    fn controllable(&self) -> Option<Tetromino> {
        if !self.started || self.paused || self.game_over {
            return None;
        }
        self.active
    }

    fn refill_queue(&mut self) {
        while self.next_queue.len() < self.config.preview_len {
            self.next_queue.push(self.generator.next_piece());
        }
    }

    /// Pop the front of the preview queue and make it the active piece
    fn spawn_next(&mut self) -> bool {
        let piece = match self.next_queue.pop_at(0) {
            Some(piece) => piece,
            None => self.generator.next_piece(),
        };
        self.refill_queue();
        self.place_spawned(piece)
    }

    /// Install a freshly spawned piece. A spawn that collides ends the game; the
    /// colliding piece stays active so it can still be drawn.
    fn place_spawned(&mut self, piece: Tetromino) -> bool {
        self.active = Some(piece);
        self.drop_timer_ms = 0;

        if collides(&piece, &self.board) {
            self.game_over = true;
            self.paused = false;
            self.events.push(GameEvent::GameOver {
                stats: *self.scorer.stats(),
            });
            return false;
        }
        true
    }

    /// Lock sequence: stamp, clear, score, re-arm hold, spawn
    fn lock_active(&mut self) {
        let Some(piece) = self.active.take() else {
            return;
        };

        lock_piece(&piece, &mut self.board);
        self.events.push(GameEvent::PieceLocked { piece });

        let rows = clear_lines(&mut self.board);
        let outcome = self.scorer.record_lock(rows.len());

        if !rows.is_empty() {
            self.events.push(GameEvent::LinesCleared {
                count: rows.len(),
                rows,
            });
        }
        if let Some(level) = outcome.level_up {
            self.events.push(GameEvent::LevelUp { level });
        }
        if let Some(combo) = outcome.combo_changed {
            self.events.push(GameEvent::ComboChanged { combo });
        }

        self.can_hold = true;
        self.spawn_next();
    }

    // ------------------------------------------------------------------
    // Queries
    // ------------------------------------------------------------------

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn current_piece(&self) -> Option<Tetromino> {
        self.active
    }

    /// Where the active piece would land if hard-dropped now
    pub fn ghost_piece(&self) -> Option<Tetromino> {
        self.active.map(|piece| drop_target(&piece, &self.board))
    }

    pub fn hold_piece(&self) -> Option<PieceKind> {
        self.hold
    }

    pub fn next_pieces(&self) -> &[Tetromino] {
        &self.next_queue
    }

    pub fn stats(&self) -> &Stats {
        self.scorer.stats()
    }

    pub fn is_started(&self) -> bool {
        self.started
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn is_game_over(&self) -> bool {
        self.game_over
    }

    pub fn can_hold(&self) -> bool {
        self.can_hold
    }

    /// Whether the last scoring clear was a Tetris
    pub fn back_to_back(&self) -> bool {
        self.scorer.back_to_back()
    }

    /// Current gravity interval, derived from the level
    pub fn drop_interval_ms(&self) -> u32 {
        get_drop_interval_ms(self.scorer.stats().level, &self.config)
    }

    /// RNG state a follow-up game would be seeded with
    pub fn seed(&self) -> u32 {
        self.generator.seed()
    }

    // ------------------------------------------------------------------
    // Leaderboard cache
    // ------------------------------------------------------------------

    /// Replace the cached leaderboard (e.g. after a fetch or a save)
    pub fn set_leaderboard(&mut self, leaderboard: Leaderboard) {
        self.leaderboard = leaderboard;
    }

    pub fn leaderboard(&self) -> &Leaderboard {
        &self.leaderboard
    }

    /// Whether `score` would make the cached top ten
    pub fn is_high_score(&self, score: u32) -> bool {
        self.leaderboard.is_high_score(score)
    }

    /// Save-score request for the current stats
    pub fn score_submission(&self, name: &str) -> Result<ScoreEntry, ScoreError> {
        let stats = self.scorer.stats();
        ScoreEntry::new(name, stats.score, stats.level, stats.lines)
    }

    // ------------------------------------------------------------------
    // Events and snapshots
    // ------------------------------------------------------------------

    pub fn pending_events(&self) -> &[GameEvent] {
        &self.events
    }

    /// Take every buffered event, oldest first
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        mem::take(&mut self.events)
    }

    /// Hand every buffered event to `observer`, oldest first
    pub fn dispatch_events<O: GameObserver + ?Sized>(&mut self, observer: &mut O) {
        for event in self.events.drain(..) {
            observer.on_event(&event);
        }
    }

    /// Fill `out` in place, reusing its allocations
    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        out.width = self.board.width();
        out.height = self.board.height();
        out.board.resize(self.board.height() as usize, Vec::new());
        for (dst, row) in out.board.iter_mut().zip(self.board.rows()) {
            dst.clear();
            dst.extend(row.iter().map(|cell| cell.code()));
        }

        out.active = self.active;
        out.ghost_y = self.ghost_piece().map(|ghost| ghost.y);
        out.hold = self.hold;
        out.next.clear();
        out.next.extend(self.next_queue.iter().map(|piece| piece.kind));
        out.can_hold = self.can_hold;
        out.started = self.started;
        out.paused = self.paused;
        out.game_over = self.game_over;
        out.back_to_back = self.scorer.back_to_back();
        out.stats = *self.scorer.stats();
        out.drop_interval_ms = self.drop_interval_ms();
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut snapshot = GameSnapshot::default();
        self.snapshot_into(&mut snapshot);
        snapshot
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(1)
    }
}
