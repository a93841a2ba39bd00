//! Game session library for human-versus-computer chess.
//!
//! This crate owns the single authoritative game state:
//! - [`GameSession`]: the synchronous state machine holding position, move
//!   ledger with undo/redo, turn phase, and termination detection
//! - [`SessionController`]: the async wrapper a presentation layer talks
//!   to; it drives the opponent's deferred move computation
//! - [`SessionConfig`]: difficulty, human color, thinking delay, RNG seed
//!
//! Board rendering, input handling and menus are deliberately not here; a
//! frontend holds a [`SessionController`] and subscribes to its snapshots.

pub mod config;
pub mod controller;
pub mod opponent;
pub mod session;

pub use config::SessionConfig;
pub use controller::SessionController;
pub use session::{GameSession, Phase, PlayedMove};

// Shared vocabulary, re-exported so frontends depend on one crate.
pub use game_core::{Color, Difficulty, GameResult, Move, Piece, Position, Square};
pub use oracle_engine::{OracleApi, OracleConfig, RemoteOracle};
