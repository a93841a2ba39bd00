//! Position adapter over the `cozy_chess` rules engine.
//!
//! The rules themselves (move generation, check detection, FEN parsing) live
//! in `cozy_chess`; this module narrows its API to what the engines and the
//! session controller need, and adds the derived queries they share:
//! terminal-state classification, capture detection, and make/unmake with an
//! undo token for allocation-free search.

use cozy_chess::{Board, Color, Move, Piece, Square};

use crate::types::GameError;

/// A chess position: board, side to move, castling rights, en-passant state
/// and move counters. Serializable to FEN; two positions are equal when
/// their FEN serializations are equal.
#[derive(Debug, Clone)]
pub struct Position {
    pub(crate) board: Board,
}

/// Token returned by [`Position::make_move`]. Passing it back to
/// [`Position::unmake_move`] restores the exact pre-move state.
///
/// The token holds the prior board by value, so a search keeps one token per
/// recursion frame on the stack and never allocates per node.
#[derive(Debug, Clone)]
pub struct PositionUndo {
    board: Board,
}

impl Position {
    /// The standard initial setup.
    pub fn startpos() -> Self {
        Self {
            board: Board::default(),
        }
    }

    /// Parses a FEN string.
    pub fn from_fen(fen: &str) -> Result<Self, GameError> {
        let board =
            Board::from_fen(fen, false).map_err(|_| GameError::InvalidFen(fen.to_string()))?;
        Ok(Self { board })
    }

    /// Serializes the position to FEN.
    pub fn fen(&self) -> String {
        self.board.to_string()
    }

    pub fn side_to_move(&self) -> Color {
        self.board.side_to_move()
    }

    /// Collects all legal moves into `moves`, clearing it first. Callers
    /// reuse the buffer across nodes during search.
    pub fn legal_moves_into(&self, moves: &mut Vec<Move>) {
        moves.clear();
        self.board.generate_moves(|batch| {
            moves.extend(batch);
            false
        });
    }

    /// Convenience allocation of the legal-move list.
    pub fn legal_moves(&self) -> Vec<Move> {
        let mut moves = Vec::with_capacity(64);
        self.legal_moves_into(&mut moves);
        moves
    }

    pub fn has_legal_moves(&self) -> bool {
        self.board.generate_moves(|_| true)
    }

    /// Applies a move known to be legal (taken from [`legal_moves`]) and
    /// returns the token that undoes it.
    ///
    /// [`legal_moves`]: Position::legal_moves
    pub fn make_move(&mut self, mv: Move) -> PositionUndo {
        let undo = PositionUndo {
            board: self.board.clone(),
        };
        self.board.play_unchecked(mv);
        undo
    }

    /// Reverses the most recent [`Position::make_move`] for this token.
    pub fn unmake_move(&mut self, undo: PositionUndo) {
        self.board = undo.board;
    }

    /// Applies a move from an untrusted source, rejecting illegal ones.
    pub fn apply(&mut self, mv: Move) -> Result<PositionUndo, GameError> {
        if !self.board.is_legal(mv) {
            return Err(GameError::IllegalMove(mv.to_string()));
        }
        Ok(self.make_move(mv))
    }

    pub fn piece_at(&self, sq: Square) -> Option<(Piece, Color)> {
        Some((self.board.piece_on(sq)?, self.board.color_on(sq)?))
    }

    pub fn in_check(&self) -> bool {
        !self.board.checkers().is_empty()
    }

    pub fn is_checkmate(&self) -> bool {
        self.in_check() && !self.has_legal_moves()
    }

    pub fn is_stalemate(&self) -> bool {
        !self.in_check() && !self.has_legal_moves()
    }

    /// Fifty-move rule: one hundred halfmoves without a capture or pawn move.
    pub fn is_fifty_move_draw(&self) -> bool {
        self.board.halfmove_clock() >= 100
    }

    /// Neither side retains mating material: bare kings, a lone minor piece,
    /// or bishops all standing on squares of one color.
    pub fn is_insufficient_material(&self) -> bool {
        let majors = self.board.pieces(Piece::Pawn)
            | self.board.pieces(Piece::Rook)
            | self.board.pieces(Piece::Queen);
        if !majors.is_empty() {
            return false;
        }
        let knights = self.board.pieces(Piece::Knight);
        let bishops = self.board.pieces(Piece::Bishop);
        if knights.len() + bishops.len() <= 1 {
            return true;
        }
        if knights.is_empty() {
            let mut parities = bishops
                .into_iter()
                .map(|sq| (sq.rank() as usize + sq.file() as usize) & 1);
            if let Some(first) = parities.next() {
                return parities.all(|p| p == first);
            }
        }
        false
    }

    /// Draw by rule independent of the move list: fifty-move counter or
    /// insufficient material. Stalemate and repetition are detected
    /// elsewhere (movegen and session history respectively).
    pub fn is_rule_draw(&self) -> bool {
        self.is_fifty_move_draw() || self.is_insufficient_material()
    }

    /// True when `mv` captures an enemy piece, including en passant.
    pub fn is_capture(&self, mv: Move) -> bool {
        let them = self.board.colors(!self.board.side_to_move());
        if them.has(mv.to) {
            return true;
        }
        self.board.piece_on(mv.from) == Some(Piece::Pawn)
            && mv.from.file() != mv.to.file()
            && self.board.piece_on(mv.to).is_none()
    }

    /// True when `mv` is a castling move. `cozy_chess` encodes castling as
    /// the king moving onto its own rook, which is the only way a king move
    /// can target a friendly piece.
    pub fn is_castling(&self, mv: Move) -> bool {
        self.board.piece_on(mv.from) == Some(Piece::King)
            && self.board.color_on(mv.to) == Some(self.board.side_to_move())
    }

    /// Incremental hash of the position, suitable for repetition counting.
    pub fn hash(&self) -> u64 {
        self.board.hash()
    }

    /// Repetition-equality: same placement, side to move, castling rights
    /// and en-passant state, ignoring the move counters.
    pub fn same_position(&self, other: &Position) -> bool {
        self.board.same_position(&other.board)
    }
}

impl Default for Position {
    fn default() -> Self {
        Self::startpos()
    }
}

impl PartialEq for Position {
    fn eq(&self, other: &Self) -> bool {
        self.fen() == other.fen()
    }
}

impl Eq for Position {}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.board)
    }
}

#[cfg(test)]
#[path = "position_tests.rs"]
mod position_tests;
