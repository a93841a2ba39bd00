//! Game session state machine.
//!
//! [`GameSession`] owns the authoritative position, the move ledger with its
//! redo stack, the turn phase, and termination detection. Everything here is
//! synchronous and single-threaded; the asynchronous opponent driver lives
//! in [`crate::controller`].

use game_core::{
    move_from_san, san_for_move, Color, File, GameResult, Move, Piece, Position, PositionUndo,
    Square,
};
use tracing::debug;

/// Turn-ownership phase of a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// The human may move, undo, or redo.
    AwaitingHumanMove,
    /// The opponent owns the turn; ledger mutations are rejected.
    ComputingOpponentMove,
    /// The game is over. Absorbing until the session is replaced, or until
    /// an undo makes the position non-terminal again.
    Terminal,
}

/// One applied move: the move itself, its notation for the ledger, and the
/// token that exactly reverses it.
#[derive(Debug, Clone)]
pub struct PlayedMove {
    pub mv: Move,
    pub san: String,
    undo: PositionUndo,
}

/// The authoritative state of one human-versus-computer game.
pub struct GameSession {
    position: Position,
    /// Authoritative played history, append-only outside undo
    record: Vec<PlayedMove>,
    /// Notations removed by undo, replayed by redo
    redo_stack: Vec<String>,
    /// Position hashes since the initial setup, for repetition detection
    position_history: Vec<u64>,
    phase: Phase,
    result: GameResult,
    human_color: Color,
}

impl GameSession {
    /// Fresh session from the standard initial setup.
    pub fn new(human_color: Color) -> Self {
        Self::with_position(human_color, Position::startpos())
    }

    /// Session starting from an arbitrary position.
    pub fn with_position(human_color: Color, position: Position) -> Self {
        let mut session = Self {
            position_history: vec![position.hash()],
            position,
            record: Vec::new(),
            redo_stack: Vec::new(),
            phase: Phase::AwaitingHumanMove,
            result: GameResult::InProgress,
            human_color,
        };
        session.refresh_result();
        session.phase = session.derived_phase();
        session
    }

    /// Applies a human (from, to) intent.
    ///
    /// Valid only while awaiting the human move. The intent is resolved
    /// against the legal-move list: unspecified promotions default to queen,
    /// and the conventional castling destination (king two files over) is
    /// translated to the rules engine's king-onto-rook encoding. Illegal
    /// combinations are a silent no-op.
    pub fn apply_human_move(&mut self, from: Square, to: Square) -> bool {
        if self.phase != Phase::AwaitingHumanMove {
            return false;
        }
        let Some(mv) = self.resolve_intent(from, to) else {
            return false;
        };
        self.redo_stack.clear();
        self.push_move(mv);
        true
    }

    /// Applies the opponent move delivered by the controller.
    pub(crate) fn apply_opponent_move(&mut self, mv: Move) -> bool {
        if self.phase != Phase::ComputingOpponentMove {
            return false;
        }
        if !self.position.legal_moves().contains(&mv) {
            return false;
        }
        self.redo_stack.clear();
        self.push_move(mv);
        true
    }

    /// Takes back the most recent (human, opponent) pair.
    ///
    /// No-op while the opponent is computing, with fewer than two ledger
    /// entries, or when the ledger does not end on an opponent move (the
    /// odd-ledger case after a terminal human move).
    pub fn undo(&mut self) -> bool {
        if self.phase == Phase::ComputingOpponentMove {
            return false;
        }
        if self.record.len() < 2 || self.position.side_to_move() != self.human_color {
            return false;
        }

        let opponent = match self.record.pop() {
            Some(played) => played,
            None => return false,
        };
        let human = match self.record.pop() {
            Some(played) => played,
            None => {
                self.record.push(opponent);
                return false;
            }
        };

        self.position.unmake_move(opponent.undo);
        self.position.unmake_move(human.undo);
        self.position_history.pop();
        self.position_history.pop();

        // Redo replays (human, opponent), so push in (opponent, human) order.
        self.redo_stack.push(opponent.san);
        self.redo_stack.push(human.san);

        self.refresh_result();
        self.phase = self.derived_phase();
        debug!(fen = %self.position.fen(), "undid move pair");
        true
    }

    /// Replays the most recently undone (human, opponent) pair.
    ///
    /// If either notation fails to reapply, the pair is unwound and the
    /// whole redo stack is discarded; a redo never half-applies.
    pub fn redo(&mut self) -> bool {
        if self.phase == Phase::ComputingOpponentMove || self.redo_stack.len() < 2 {
            return false;
        }

        let human_san = match self.redo_stack.pop() {
            Some(san) => san,
            None => return false,
        };
        let opponent_san = match self.redo_stack.pop() {
            Some(san) => san,
            None => {
                self.redo_stack.clear();
                return false;
            }
        };

        let Some(human_mv) = move_from_san(&self.position, &human_san) else {
            self.redo_stack.clear();
            return false;
        };
        self.push_move(human_mv);

        let Some(opponent_mv) = move_from_san(&self.position, &opponent_san) else {
            // Unwind the half-applied human move before dropping the stack.
            if let Some(played) = self.record.pop() {
                self.position.unmake_move(played.undo);
                self.position_history.pop();
            }
            self.refresh_result();
            self.phase = self.derived_phase();
            self.redo_stack.clear();
            return false;
        };
        self.push_move(opponent_mv);
        debug!(fen = %self.position.fen(), "redid move pair");
        true
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn result(&self) -> GameResult {
        self.result
    }

    pub fn is_terminal(&self) -> bool {
        self.result.is_terminal()
    }

    pub fn can_undo(&self) -> bool {
        self.record.len() >= 2
    }

    pub fn can_redo(&self) -> bool {
        self.redo_stack.len() >= 2
    }

    pub fn human_color(&self) -> Color {
        self.human_color
    }

    /// Snapshot of the current position. A clone, never an alias: callers
    /// keep it for rendering or animation while the session moves on.
    pub fn position(&self) -> Position {
        self.position.clone()
    }

    pub fn record(&self) -> &[PlayedMove] {
        &self.record
    }

    /// The played history as notations, oldest first.
    pub fn notations(&self) -> Vec<String> {
        self.record.iter().map(|played| played.san.clone()).collect()
    }

    fn resolve_intent(&self, from: Square, to: Square) -> Option<Move> {
        let moves = self.position.legal_moves();
        moves
            .iter()
            .copied()
            .find(|mv| {
                mv.from == from
                    && mv.to == to
                    && (mv.promotion.is_none() || mv.promotion == Some(Piece::Queen))
            })
            .or_else(|| {
                moves.iter().copied().find(|&mv| {
                    self.position.is_castling(mv)
                        && mv.from == from
                        && castle_destination(mv) == to
                })
            })
    }

    fn push_move(&mut self, mv: Move) {
        let san = san_for_move(&self.position, mv);
        let undo = self.position.make_move(mv);
        self.position_history.push(self.position.hash());
        debug!(%mv, %san, "applied move");
        self.record.push(PlayedMove { mv, san, undo });
        self.refresh_result();
        self.phase = self.derived_phase();
    }

    /// Recomputes the result from the Move Authority's view of the current
    /// position, after every mutation, never cached stale.
    fn refresh_result(&mut self) {
        self.result = if self.position.is_checkmate() {
            match self.position.side_to_move() {
                Color::White => GameResult::BlackWins,
                Color::Black => GameResult::WhiteWins,
            }
        } else if self.position.is_stalemate()
            || self.position.is_rule_draw()
            || self.is_threefold_repetition()
        {
            GameResult::Draw
        } else {
            GameResult::InProgress
        };
    }

    fn derived_phase(&self) -> Phase {
        if self.result.is_terminal() {
            Phase::Terminal
        } else if self.position.side_to_move() == self.human_color {
            Phase::AwaitingHumanMove
        } else {
            Phase::ComputingOpponentMove
        }
    }

    fn is_threefold_repetition(&self) -> bool {
        let current = self.position.hash();
        self.position_history
            .iter()
            .filter(|&&hash| hash == current)
            .count()
            >= 3
    }
}

/// Where a frontend expects the king to land for a castling move.
fn castle_destination(mv: Move) -> Square {
    let file = if (mv.to.file() as u8) > (mv.from.file() as u8) {
        File::G
    } else {
        File::C
    };
    Square::new(file, mv.from.rank())
}

#[cfg(test)]
#[path = "session_tests.rs"]
mod session_tests;
