//! Standard minimax search with alpha-beta pruning.
//!
//! White maximizes and Black minimizes at alternating plies. The search runs
//! on a single reusable position: each frame makes a move, recurses, and
//! unmakes it with the undo token, so no node allocates.

use game_core::{Color, Move, Position};
use rand::seq::SliceRandom;
use rand::Rng;

use crate::eval::{evaluate, DRAW_SCORE, MATE_SCORE};

/// Result from [`pick_best_move`].
pub struct SearchOutcome {
    /// Best move with its score. `None` iff the position has no legal moves.
    pub best_move: Option<(Move, i32)>,
}

/// Searches the position and returns the best move with its score.
///
/// The root ply is unfolded explicitly so the move itself, not just its
/// score, is reported. Root moves are shuffled first and the running best is
/// replaced only on a strict improvement, which makes the choice uniform
/// among moves tied for best.
pub fn pick_best_move(
    pos: &Position,
    depth: u8,
    nodes: &mut u64,
    rng: &mut impl Rng,
) -> SearchOutcome {
    let mut scratch = pos.clone();
    let mut moves = Vec::with_capacity(64);
    scratch.legal_moves_into(&mut moves);

    if moves.is_empty() {
        return SearchOutcome { best_move: None };
    }

    moves.shuffle(rng);

    let maximizing = scratch.side_to_move() == Color::White;
    let mut best = moves[0];
    let mut best_score = if maximizing { i32::MIN + 1 } else { i32::MAX - 1 };

    for mv in moves {
        let undo = scratch.make_move(mv);
        *nodes += 1;
        let score = minimax(
            &mut scratch,
            depth.saturating_sub(1),
            i32::MIN / 2,
            i32::MAX / 2,
            !maximizing,
            nodes,
        );
        scratch.unmake_move(undo);

        let improved = if maximizing {
            score > best_score
        } else {
            score < best_score
        };
        if improved {
            best_score = score;
            best = mv;
        }
    }

    SearchOutcome {
        best_move: Some((best, best_score)),
    }
}

/// Recursive minimax with alpha-beta pruning.
fn minimax(
    pos: &mut Position,
    depth: u8,
    mut alpha: i32,
    mut beta: i32,
    maximizing: bool,
    nodes: &mut u64,
) -> i32 {
    let mut moves = Vec::with_capacity(64);
    pos.legal_moves_into(&mut moves);

    if moves.is_empty() {
        if pos.in_check() {
            // Checkmate, scored toward the side that delivered it so mate
            // dominates any material swing within the horizon.
            return match pos.side_to_move() {
                Color::White => -MATE_SCORE,
                Color::Black => MATE_SCORE,
            };
        }
        return DRAW_SCORE; // stalemate
    }

    if pos.is_rule_draw() {
        return DRAW_SCORE;
    }

    if depth == 0 {
        return evaluate(pos);
    }

    // Captures first tightens the pruning window; no other ordering.
    moves.sort_by_key(|&mv| !pos.is_capture(mv));

    if maximizing {
        let mut best = i32::MIN + 1;
        for mv in moves {
            let undo = pos.make_move(mv);
            *nodes += 1;
            let score = minimax(pos, depth - 1, alpha, beta, false, nodes);
            pos.unmake_move(undo);

            best = best.max(score);
            alpha = alpha.max(score);
            if beta <= alpha {
                break; // Beta cutoff
            }
        }
        best
    } else {
        let mut best = i32::MAX - 1;
        for mv in moves {
            let undo = pos.make_move(mv);
            *nodes += 1;
            let score = minimax(pos, depth - 1, alpha, beta, true, nodes);
            pos.unmake_move(undo);

            best = best.min(score);
            beta = beta.min(score);
            if beta <= alpha {
                break; // Alpha cutoff
            }
        }
        best
    }
}

#[cfg(test)]
#[path = "search_tests.rs"]
mod search_tests;
