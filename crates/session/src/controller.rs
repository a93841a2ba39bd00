//! Asynchronous session controller.
//!
//! Wraps [`GameSession`] behind a shared handle and drives the opponent's
//! deferred move computation: a fixed "thinking" delay, then the engine (or
//! the attached oracle), then application of the result, guarded by a
//! generation counter so a result arriving after [`SessionController::reset`]
//! is dropped instead of being applied to the replaced session.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use game_core::{GameResult, Move, Position, Square};
use oracle_engine::OracleApi;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tokio::task::JoinHandle;
use tracing::{debug, warn};

use crate::config::SessionConfig;
use crate::opponent;
use crate::session::{GameSession, Phase};

struct Inner {
    session: GameSession,
    rng: StdRng,
    /// Bumped on reset; stale opponent results carry the old value.
    generation: u64,
    /// True while an opponent computation is outstanding.
    computing: bool,
}

/// Handle to the single authoritative session.
///
/// Clones share the same session; a presentation layer keeps one clone and
/// reads snapshots, it never holds an alias into mutable state.
#[derive(Clone)]
pub struct SessionController {
    inner: Arc<Mutex<Inner>>,
    config: SessionConfig,
    oracle: Option<Arc<dyn OracleApi>>,
}

impl SessionController {
    pub fn new(config: SessionConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self {
            inner: Arc::new(Mutex::new(Inner {
                session: GameSession::new(config.human_color),
                rng,
                generation: 0,
                computing: false,
            })),
            config,
            oracle: None,
        }
    }

    /// Attaches a best-effort oracle consulted for opponent moves instead of
    /// the local engines. Oracle failures fall back to a random legal move.
    pub fn with_oracle(mut self, oracle: Arc<dyn OracleApi>) -> Self {
        self.oracle = Some(oracle);
        self
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    /// Forwards a human (from, to) intent; see
    /// [`GameSession::apply_human_move`].
    pub fn apply_human_move(&self, from: Square, to: Square) -> bool {
        self.inner.lock().unwrap().session.apply_human_move(from, to)
    }

    /// Schedules the opponent's move: a one-shot deferred task that sleeps
    /// the configured thinking delay, computes a move, and applies it.
    ///
    /// Returns `None` (no-op) when the session is not waiting on the
    /// opponent, when a computation is already outstanding, or when no legal
    /// move exists. The returned handle is for observation only: the task
    /// is not cancellable once spawned and runs to completion; the
    /// generation guard keeps a stale result from touching a replaced
    /// session.
    pub fn request_opponent_move(&self) -> Option<JoinHandle<()>> {
        let (generation, position, engine_seed) = {
            let mut inner = self.inner.lock().unwrap();
            if inner.computing || inner.session.phase() != Phase::ComputingOpponentMove {
                return None;
            }
            let position = inner.session.position();
            if !position.has_legal_moves() {
                return None;
            }
            inner.computing = true;
            (inner.generation, position, inner.rng.gen::<u64>())
        };

        let controller = self.clone();
        let delay = Duration::from_millis(self.config.thinking_delay_ms);
        let difficulty = self.config.difficulty;

        Some(tokio::spawn(async move {
            tokio::time::sleep(delay).await;

            let chosen = match &controller.oracle {
                Some(oracle) => {
                    let mut rng = StdRng::seed_from_u64(engine_seed);
                    oracle_engine::choose_move(oracle.as_ref(), &position, &mut rng).await
                }
                None => {
                    let pos = position.clone();
                    tokio::task::spawn_blocking(move || {
                        let mut rng = StdRng::seed_from_u64(engine_seed);
                        opponent::select_move(&pos, difficulty, &mut rng)
                    })
                    .await
                    .ok()
                    .flatten()
                }
            };

            controller.finish_opponent_move(generation, chosen);
        }))
    }

    fn finish_opponent_move(&self, generation: u64, chosen: Option<Move>) {
        let mut inner = self.inner.lock().unwrap();
        if inner.generation != generation {
            debug!("dropping opponent move computed for a replaced session");
            return;
        }
        inner.computing = false;
        match chosen {
            Some(mv) => {
                inner.session.apply_opponent_move(mv);
            }
            None => warn!("opponent computation yielded no move"),
        }
    }

    pub fn undo(&self) -> bool {
        self.inner.lock().unwrap().session.undo()
    }

    pub fn redo(&self) -> bool {
        self.inner.lock().unwrap().session.redo()
    }

    pub fn can_undo(&self) -> bool {
        self.inner.lock().unwrap().session.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.inner.lock().unwrap().session.can_redo()
    }

    pub fn is_terminal(&self) -> bool {
        self.inner.lock().unwrap().session.is_terminal()
    }

    pub fn result(&self) -> GameResult {
        self.inner.lock().unwrap().session.result()
    }

    pub fn phase(&self) -> Phase {
        self.inner.lock().unwrap().session.phase()
    }

    /// Snapshot of the current position.
    pub fn position(&self) -> Position {
        self.inner.lock().unwrap().session.position()
    }

    /// The played history as notations, oldest first.
    pub fn notations(&self) -> Vec<String> {
        self.inner.lock().unwrap().session.notations()
    }

    /// Replaces the session with a fresh one. In-flight opponent results are
    /// dropped on arrival via the generation counter.
    pub fn reset(&self) {
        let mut inner = self.inner.lock().unwrap();
        inner.generation += 1;
        inner.computing = false;
        inner.session = GameSession::new(self.config.human_color);
        debug!(generation = inner.generation, "session reset");
    }
}
