//! Shared session types: difficulty levels, game results, error taxonomy.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Opponent strength selectable for a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    #[default]
    Easy,
    Medium,
    Hacker,
}

impl Difficulty {
    /// Search depth in plies. Zero means uniform-random selection without
    /// any search. Capped at 3 to bound worst-case move latency.
    pub fn search_depth(self) -> u8 {
        match self {
            Difficulty::Easy => 0,
            Difficulty::Medium => 2,
            Difficulty::Hacker => 3,
        }
    }
}

impl std::fmt::Display for Difficulty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Difficulty::Easy => write!(f, "Easy"),
            Difficulty::Medium => write!(f, "Medium"),
            Difficulty::Hacker => write!(f, "Hacker"),
        }
    }
}

/// Outcome of a game, recomputed after every position mutation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum GameResult {
    #[default]
    InProgress,
    WhiteWins,
    BlackWins,
    Draw,
    /// Terminal for a reason the session does not classify further.
    GameOver,
}

impl GameResult {
    pub fn is_terminal(self) -> bool {
        self != GameResult::InProgress
    }
}

impl std::fmt::Display for GameResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameResult::InProgress => write!(f, "In progress"),
            GameResult::WhiteWins => write!(f, "White wins"),
            GameResult::BlackWins => write!(f, "Black wins"),
            GameResult::Draw => write!(f, "Draw"),
            GameResult::GameOver => write!(f, "Game over"),
        }
    }
}

/// Errors surfaced by the board adapter.
#[derive(Debug, Error)]
pub enum GameError {
    #[error("illegal move {0}")]
    IllegalMove(String),
    #[error("invalid FEN {0:?}")]
    InvalidFen(String),
    #[error("unknown notation {0:?}")]
    UnknownNotation(String),
}
