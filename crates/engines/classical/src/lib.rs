//! Classical Chess Engine
//!
//! Fixed-depth minimax with alpha-beta pruning over a material plus
//! piece-square evaluation. Powers the MEDIUM (depth 2) and HACKER (depth 3)
//! difficulties; depth is the sole cost control, there is no time cutoff.

mod eval;
mod search;

use game_core::{Engine, Position, SearchResult};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use tracing::warn;

/// Minimax engine with alpha-beta pruning.
///
/// Root move order is randomized, so moves tied for best are chosen
/// uniformly; seed the engine to make a game reproducible.
#[derive(Debug, Clone)]
pub struct ClassicalEngine {
    rng: StdRng,
    nodes: u64,
}

impl ClassicalEngine {
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
            nodes: 0,
        }
    }

    /// Creates an engine whose tie-breaking is fully determined by `seed`.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            nodes: 0,
        }
    }
}

impl Default for ClassicalEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl Engine for ClassicalEngine {
    fn search(&mut self, pos: &Position, depth: u8) -> SearchResult {
        self.nodes = 0;

        let outcome = search::pick_best_move(pos, depth, &mut self.nodes, &mut self.rng);

        let (best_move, score) = match outcome.best_move {
            Some((mv, score)) => (Some(mv), score),
            None => {
                // The search yields no move only for positions without legal
                // moves; if that assumption is ever violated, degrade to a
                // random legal move rather than stalling the game.
                let moves = pos.legal_moves();
                if moves.is_empty() {
                    (None, 0)
                } else {
                    warn!(fen = %pos.fen(), "search produced no move, selecting at random");
                    (moves.choose(&mut self.rng).copied(), 0)
                }
            }
        };

        SearchResult {
            best_move,
            score,
            depth,
            nodes: self.nodes,
        }
    }

    fn name(&self) -> &str {
        "Classical v1.0"
    }

    fn new_game(&mut self) {
        self.nodes = 0;
    }
}

// Re-export for direct use if needed
pub use eval::evaluate;
