//! Immutable description of a single ply.
//!
//! A `Move` is built from a board snapshot: the moved and captured pieces and
//! the three special-move flags are all read off the board at construction
//! time. Equality only looks at the origin and destination squares so that a
//! move assembled from two clicked squares matches the generator's instance.

use std::fmt;
use std::hash::{Hash, Hasher};

use crate::errors::{ChessRulesError, ChessRulesResult};
use crate::game_state::chess_types::*;
use crate::utils::algebraic::algebraic_to_square;

#[derive(Debug, Clone, Copy)]
pub struct Move {
    pub start: Square,
    pub end: Square,
    pub piece_moved: Piece,
    /// Piece removed by this move. For en passant this is the enemy pawn
    /// behind the destination, not the (empty) destination itself.
    pub piece_captured: Option<Piece>,
    pub is_pawn_promotion: bool,
    pub is_enpassant_move: bool,
    pub is_castle_move: bool,
}

impl Move {
    /// Builds the move of whatever piece stands on `start`. Returns `None`
    /// when the origin square is empty.
    pub fn new(start: Square, end: Square, board: &Board) -> Option<Self> {
        piece_at(board, start).map(|piece| Self::with_piece(start, end, piece, board))
    }

    /// Builds a move of `piece` from `start`, reading the capture and flags
    /// from `board`.
    pub fn with_piece(start: Square, end: Square, piece: Piece, board: &Board) -> Self {
        let on_end = piece_at(board, end);
        let is_pawn = piece.kind == PieceKind::Pawn;

        // A pawn only ever lands diagonally on an empty square by en passant.
        let is_enpassant_move = is_pawn && start.col != end.col && on_end.is_none();
        let piece_captured = if is_enpassant_move {
            Some(Piece::new(piece.color.opposite(), PieceKind::Pawn))
        } else {
            on_end
        };

        Self {
            start,
            end,
            piece_moved: piece,
            piece_captured,
            is_pawn_promotion: is_pawn && end.row == piece.color.promotion_row(),
            is_enpassant_move,
            is_castle_move: piece.kind == PieceKind::King && start.col.abs_diff(end.col) == 2,
        }
    }

    /// Parses `e2e4` style notation against the current board.
    pub fn from_notation(notation: &str, board: &Board) -> ChessRulesResult<Self> {
        if notation.len() != 4 || !notation.is_ascii() {
            return Err(ChessRulesError::InvalidMoveNotation(notation.to_owned()));
        }
        let start = algebraic_to_square(&notation[0..2])?;
        let end = algebraic_to_square(&notation[2..4])?;
        Self::new(start, end, board)
            .ok_or_else(|| ChessRulesError::InvalidMoveNotation(notation.to_owned()))
    }

    /// Square of the piece this move removes, if any.
    #[inline]
    pub fn capture_square(&self) -> Option<Square> {
        if self.is_enpassant_move {
            Some(Square::new(self.start.row, self.end.col))
        } else {
            self.piece_captured.map(|_| self.end)
        }
    }

    /// Long-algebraic notation, e.g. `e2e4`.
    pub fn notation(&self) -> String {
        self.to_string()
    }
}

impl PartialEq for Move {
    fn eq(&self, other: &Self) -> bool {
        self.start == other.start && self.end == other.end
    }
}

impl Eq for Move {}

impl Hash for Move {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.start.hash(state);
        self.end.hash(state);
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.start, self.end)
    }
}
