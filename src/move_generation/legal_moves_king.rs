//! King move generation, including castling.
//!
//! Every king destination is proven safe before it is emitted: the king is
//! placed on a scratch copy of the board and the pin/check scanner is run from
//! its new square.

use crate::game_state::chess_rules::{KINGSIDE_CASTLE_COL, QUEENSIDE_CASTLE_COL};
use crate::game_state::{chess_types::*, game_state::GameState};
use crate::move_generation::legal_move_checks::{check_for_pins_and_checks, is_square_attacked};
use crate::moves::chess_move::Move;
use crate::moves::directions::{jumps, KING_OFFSETS};

pub fn generate_king_moves(game_state: &GameState, from: Square, piece: Piece, out: &mut Vec<Move>) {
    for to in jumps(from, &KING_OFFSETS) {
        if piece_at(&game_state.board, to).is_some_and(|target| target.color == piece.color) {
            continue;
        }
        if king_is_safe_on(&game_state.board, from, to, piece) {
            out.push(Move::with_piece(from, to, piece, &game_state.board));
        }
    }
}

/// Appends the castling moves available to the side to move.
pub fn generate_castle_moves(game_state: &GameState, king_square: Square, out: &mut Vec<Move>) {
    let side = game_state.side_to_move;
    let board = &game_state.board;
    let king = Piece::new(side, PieceKind::King);
    let row = side.home_row();

    if king_square != Square::new(row, 4)
        || piece_at(board, king_square) != Some(king)
        || is_square_attacked(board, king_square, side.opposite())
    {
        return;
    }

    let rook = Some(Piece::new(side, PieceKind::Rook));
    let empty = |col: u8| piece_at(board, Square::new(row, col)).is_none();
    let safe = |col: u8| !is_square_attacked(board, Square::new(row, col), side.opposite());

    if game_state.castle_rights.kingside(side)
        && piece_at(board, Square::new(row, 7)) == rook
        && empty(5)
        && empty(6)
        && safe(5)
        && safe(6)
    {
        out.push(Move::with_piece(
            king_square,
            Square::new(row, KINGSIDE_CASTLE_COL),
            king,
            board,
        ));
    }

    // The b-file square only has to be empty; the king never crosses it.
    if game_state.castle_rights.queenside(side)
        && piece_at(board, Square::new(row, 0)) == rook
        && empty(3)
        && empty(2)
        && empty(1)
        && safe(3)
        && safe(2)
    {
        out.push(Move::with_piece(
            king_square,
            Square::new(row, QUEENSIDE_CASTLE_COL),
            king,
            board,
        ));
    }
}

fn king_is_safe_on(board: &Board, from: Square, to: Square, king: Piece) -> bool {
    let mut scratch = *board;
    set_piece(&mut scratch, from, None);
    set_piece(&mut scratch, to, Some(king));
    !check_for_pins_and_checks(&scratch, to, king.color).in_check
}
