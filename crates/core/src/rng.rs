//! RNG module - 7-bag random piece generation
//!
//! Implements the "7-bag" randomizer: each bag holds one of each piece
//! (I, O, T, S, Z, J, L) in Fisher-Yates shuffled order. Pieces are dealt from
//! the front of the bag until it is empty, then a fresh bag is shuffled.
//!
//! Every game owns its generator, so concurrent games (or tests running in
//! parallel) never share bag state.

use crate::pieces::Tetromino;
use crate::types::{PieceKind, SPAWN_X, SPAWN_Y};

/// Simple LCG (Linear Congruential Generator) RNG
/// Uses constants from Numerical Recipes
#[derive(Debug, Clone)]
pub struct SimpleRng {
    state: u32,
}

impl SimpleRng {
    /// Create a new RNG with the given seed
    pub fn new(seed: u32) -> Self {
        // Avoid 0 seed which would produce all zeros
        let state = if seed == 0 { 1 } else { seed };
        Self { state }
    }

    /// Generate next random u32
    pub fn next_u32(&mut self) -> u32 {
        // LCG formula: (a * state + c) mod m
        // Using Numerical Recipes constants: a=1664525, c=1013904223, m=2^32
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// Generate random value in range [0, max)
    pub fn next_range(&mut self, max: u32) -> u32 {
        // Multiply-shift: uses the high bits of the LCG output.
        ((self.next_u32() as u64 * max as u64) >> 32) as u32
    }

    /// Shuffle a slice using Fisher-Yates
    pub fn shuffle<T>(&mut self, slice: &mut [T]) {
        for i in (1..slice.len()).rev() {
            let j = self.next_range((i + 1) as u32) as usize;
            slice.swap(i, j);
        }
    }

    pub fn state(&self) -> u32 {
        self.state
    }
}

/// 7-bag piece generator
#[derive(Debug, Clone)]
pub struct PieceGenerator {
    /// Current bag of pieces
    bag: [PieceKind; 7],
    /// Index into current bag
    bag_index: usize,
    /// RNG for shuffling
    rng: SimpleRng,
    spawn_x: i8,
    spawn_y: i8,
}

impl PieceGenerator {
    /// Create a generator spawning at the canonical anchor
    pub fn new(seed: u32) -> Self {
        Self::with_spawn(seed, SPAWN_X, SPAWN_Y)
    }

    pub fn with_spawn(seed: u32, spawn_x: i8, spawn_y: i8) -> Self {
        let mut generator = Self {
            bag: PieceKind::ALL,
            bag_index: 0,
            rng: SimpleRng::new(seed),
            spawn_x,
            spawn_y,
        };
        generator.refill_bag();
        generator
    }

    /// Generate a new shuffled bag
    fn refill_bag(&mut self) {
        self.bag = PieceKind::ALL;
        self.rng.shuffle(&mut self.bag);
        self.bag_index = 0;
    }

    /// Draw the next piece kind
    pub fn draw(&mut self) -> PieceKind {
        if self.bag_index >= self.bag.len() {
            self.refill_bag();
        }

        let piece = self.bag[self.bag_index];
        self.bag_index += 1;
        piece
    }

    /// Draw the next piece as a fresh instance at the spawn anchor
    pub fn next_piece(&mut self) -> Tetromino {
        let kind = self.draw();
        Tetromino::spawn_at(kind, self.spawn_x, self.spawn_y)
    }

    /// Kinds still waiting in the current bag
    pub fn remaining_in_bag(&self) -> &[PieceKind] {
        &self.bag[self.bag_index..]
    }

    /// Current RNG state (seeds a follow-up game with a fresh but reproducible sequence)
    pub fn seed(&self) -> u32 {
        self.rng.state()
    }
}

impl Default for PieceGenerator {
    fn default() -> Self {
        Self::new(1)
    }
}
