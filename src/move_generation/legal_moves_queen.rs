//! Queen move generation: the union of the rook and bishop rays.

use crate::game_state::{chess_types::*, game_state::GameState};
use crate::move_generation::legal_move_checks::PinsAndChecks;
use crate::move_generation::legal_moves_bishop::generate_bishop_moves;
use crate::move_generation::legal_moves_rook::generate_rook_moves;
use crate::moves::chess_move::Move;

pub fn generate_queen_moves(
    game_state: &GameState,
    from: Square,
    piece: Piece,
    scan: &PinsAndChecks,
    out: &mut Vec<Move>,
) {
    generate_rook_moves(game_state, from, piece, scan, out);
    generate_bishop_moves(game_state, from, piece, scan, out);
}
