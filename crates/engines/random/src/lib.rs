//! Random Move Chess Engine
//!
//! Selects moves uniformly at random from all legal moves. This is the EASY
//! opponent, and also the fallback every stronger move source degrades to
//! when it fails.

use game_core::{Engine, Position, SearchResult};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

#[cfg(test)]
mod lib_tests;

/// A chess engine that plays random legal moves.
///
/// No evaluation, no search: every legal move is equally likely. Seed it
/// explicitly when a test needs a reproducible choice.
#[derive(Debug, Clone)]
pub struct RandomEngine {
    rng: StdRng,
    nodes: u64,
}

impl RandomEngine {
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
            nodes: 0,
        }
    }

    /// Creates an engine whose choices are fully determined by `seed`.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            nodes: 0,
        }
    }
}

impl Default for RandomEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl Engine for RandomEngine {
    fn search(&mut self, pos: &Position, _depth: u8) -> SearchResult {
        let mut moves = Vec::with_capacity(64);
        pos.legal_moves_into(&mut moves);

        self.nodes = 1;

        SearchResult {
            best_move: moves.choose(&mut self.rng).copied(),
            score: 0,
            depth: 0,
            nodes: self.nodes,
        }
    }

    fn name(&self) -> &str {
        "Random v1.0"
    }

    fn new_game(&mut self) {
        self.nodes = 0;
    }
}
