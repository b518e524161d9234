//! Pawn move generation.
//!
//! Covers single and double advances, diagonal captures, en passant and
//! promotion flagging. A pinned pawn keeps only the moves parallel to its pin.

use crate::game_state::{chess_types::*, game_state::GameState};
use crate::move_generation::legal_move_checks::{is_square_attacked, PinsAndChecks};
use crate::moves::chess_move::Move;

pub fn generate_pawn_moves(
    game_state: &GameState,
    from: Square,
    piece: Piece,
    scan: &PinsAndChecks,
    out: &mut Vec<Move>,
) {
    let board = &game_state.board;
    let side = piece.color;
    let forward = side.forward_row_step();
    let pin = scan.pin_on(from);
    let allowed = |direction: Direction| pin.map_or(true, |pin| pin.allows(direction));

    if let Some(one_step) = from.offset(forward, 0) {
        if piece_at(board, one_step).is_none() && allowed((forward, 0)) {
            out.push(Move::with_piece(from, one_step, piece, board));

            if from.row == side.pawn_start_row() {
                if let Some(two_step) = one_step.offset(forward, 0) {
                    if piece_at(board, two_step).is_none() {
                        out.push(Move::with_piece(from, two_step, piece, board));
                    }
                }
            }
        }
    }

    for d_col in [-1, 1] {
        let Some(to) = from.offset(forward, d_col) else {
            continue;
        };
        if !allowed((forward, d_col)) {
            continue;
        }

        match piece_at(board, to) {
            Some(target) if target.color != side => {
                out.push(Move::with_piece(from, to, piece, board));
            }
            None if game_state.en_passant_target == Some(to)
                && en_passant_keeps_king_safe(game_state, from, to, piece) =>
            {
                out.push(Move::with_piece(from, to, piece, board));
            }
            _ => {}
        }
    }
}

/// En passant empties two squares of the capturing pawn's rank at once, which
/// the pin scan cannot see. Replays the capture on a scratch board and asks
/// whether the mover's king would be attacked.
fn en_passant_keeps_king_safe(game_state: &GameState, from: Square, to: Square, piece: Piece) -> bool {
    let mut board = game_state.board;
    set_piece(&mut board, from, None);
    set_piece(&mut board, Square::new(from.row, to.col), None);
    set_piece(&mut board, to, Some(piece));

    let king = game_state.king_locations[piece.color.index()];
    !is_square_attacked(&board, king, piece.color.opposite())
}
