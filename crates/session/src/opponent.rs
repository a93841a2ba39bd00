//! Difficulty dispatch for the opponent's move.

use classical_engine::ClassicalEngine;
use game_core::{Difficulty, Engine, Move, Position};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::Rng;
use random_engine::RandomEngine;
use tracing::warn;

/// Picks the opponent's move for `pos` at the given difficulty.
///
/// Returns `None` iff the position has no legal moves. The engine is seeded
/// from the session RNG, so a seeded session replays identically.
pub fn select_move(pos: &Position, difficulty: Difficulty, rng: &mut StdRng) -> Option<Move> {
    let moves = pos.legal_moves();
    if moves.is_empty() {
        return None;
    }

    let depth = difficulty.search_depth();
    let mut engine: Box<dyn Engine> = if depth == 0 {
        Box::new(RandomEngine::with_seed(rng.gen()))
    } else {
        Box::new(ClassicalEngine::with_seed(rng.gen()))
    };

    let result = engine.search(pos, depth);
    result.best_move.or_else(|| {
        // The engines already degrade internally; this is the last line of
        // the no-stall guarantee.
        warn!(engine = engine.name(), "engine returned no move, selecting at random");
        moves.choose(rng).copied()
    })
}

#[cfg(test)]
#[path = "opponent_tests.rs"]
mod opponent_tests;
