//! Pseudo-legal generation shared by every piece generator.
//!
//! "Pseudo-legal" here means geometry, occupancy and recorded pins are
//! respected and king destinations are already proven safe; whether the move
//! answers a check is decided by the caller in `legal_move_generator`.

use crate::game_state::{chess_types::*, game_state::GameState};
use crate::move_generation::legal_move_checks::PinsAndChecks;
use crate::move_generation::legal_moves_bishop::generate_bishop_moves;
use crate::move_generation::legal_moves_king::generate_king_moves;
use crate::move_generation::legal_moves_knight::generate_knight_moves;
use crate::move_generation::legal_moves_pawn::generate_pawn_moves;
use crate::move_generation::legal_moves_queen::generate_queen_moves;
use crate::move_generation::legal_moves_rook::generate_rook_moves;
use crate::moves::chess_move::Move;
use crate::moves::directions::ray;

/// Pseudo-legal moves of every piece belonging to the side to move.
pub fn generate_all_moves(game_state: &GameState, scan: &PinsAndChecks) -> Vec<Move> {
    let side = game_state.side_to_move;
    let mut moves = Vec::with_capacity(64);

    for square in Square::all() {
        match piece_at(&game_state.board, square) {
            Some(piece) if piece.color == side => {
                generate_piece_moves(game_state, square, piece, scan, &mut moves)
            }
            _ => {}
        }
    }

    moves
}

/// Dispatches to the generator for `piece.kind`.
pub fn generate_piece_moves(
    game_state: &GameState,
    from: Square,
    piece: Piece,
    scan: &PinsAndChecks,
    out: &mut Vec<Move>,
) {
    match piece.kind {
        PieceKind::Pawn => generate_pawn_moves(game_state, from, piece, scan, out),
        PieceKind::Knight => generate_knight_moves(game_state, from, piece, scan, out),
        PieceKind::Bishop => generate_bishop_moves(game_state, from, piece, scan, out),
        PieceKind::Rook => generate_rook_moves(game_state, from, piece, scan, out),
        PieceKind::Queen => generate_queen_moves(game_state, from, piece, scan, out),
        PieceKind::King => generate_king_moves(game_state, from, piece, out),
    }
}

/// Walks each of `directions` from `from`, stopping at the first occupied
/// square and keeping it only when it holds an enemy. A pinned slider only
/// walks the rays parallel to its pin.
pub fn generate_sliding_moves(
    game_state: &GameState,
    from: Square,
    piece: Piece,
    directions: &[Direction],
    scan: &PinsAndChecks,
    out: &mut Vec<Move>,
) {
    let pin = scan.pin_on(from);

    for &direction in directions {
        if pin.is_some_and(|pin| !pin.allows(direction)) {
            continue;
        }

        for to in ray(from, direction) {
            match piece_at(&game_state.board, to) {
                None => out.push(Move::with_piece(from, to, piece, &game_state.board)),
                Some(target) => {
                    if target.color != piece.color {
                        out.push(Move::with_piece(from, to, piece, &game_state.board));
                    }
                    break;
                }
            }
        }
    }
}
