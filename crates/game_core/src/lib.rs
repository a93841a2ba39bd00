pub mod position;
pub mod san;
pub mod types;

// Re-export core game logic (not engine-specific)
pub use position::{Position, PositionUndo};
pub use san::{move_from_san, san_for_move};
pub use types::{Difficulty, GameError, GameResult};

// The rules engine's primitive types are part of the public surface; every
// consumer speaks in terms of them.
pub use cozy_chess::{Color, File, Move, Piece, Rank, Square};

// =============================================================================
// Engine trait, implemented by all move-selection engines (random, classical)
// =============================================================================

/// Result of a search operation
#[derive(Debug, Clone)]
pub struct SearchResult {
    /// The best move found (None if no legal moves)
    pub best_move: Option<Move>,
    /// Evaluation score in centipawns, positive favoring White
    pub score: i32,
    /// Search depth used
    pub depth: u8,
    /// Number of nodes searched (for stats)
    pub nodes: u64,
}

/// Trait that all move-selection engines implement.
///
/// This allows the session controller to swap between the uniform-random
/// engine and the fixed-depth classical engine based on difficulty.
pub trait Engine: Send {
    /// Search the position to the given depth in plies.
    ///
    /// A depth of zero means "no search": the engine picks without looking
    /// ahead. `best_move` is `None` only when the position has no legal
    /// moves.
    fn search(&mut self, pos: &Position, depth: u8) -> SearchResult;

    /// Returns the engine's name for identification
    fn name(&self) -> &str;

    /// Reset internal state for a new game
    fn new_game(&mut self) {}
}
