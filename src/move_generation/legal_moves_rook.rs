//! Rook move generation.

use crate::game_state::{chess_types::*, game_state::GameState};
use crate::move_generation::legal_move_checks::PinsAndChecks;
use crate::move_generation::legal_move_shared::generate_sliding_moves;
use crate::moves::chess_move::Move;
use crate::moves::directions::ORTHOGONAL_DIRECTIONS;

pub fn generate_rook_moves(
    game_state: &GameState,
    from: Square,
    piece: Piece,
    scan: &PinsAndChecks,
    out: &mut Vec<Move>,
) {
    generate_sliding_moves(game_state, from, piece, &ORTHOGONAL_DIRECTIONS, scan, out);
}
