use crate::game_state::{chess_types::*, game_state::GameState};
use crate::move_generation::legal_move_checks::PinsAndChecks;
use crate::moves::chess_move::Move;
use crate::moves::directions::{jumps, KNIGHT_OFFSETS};

pub fn generate_knight_moves(
    game_state: &GameState,
    from: Square,
    piece: Piece,
    scan: &PinsAndChecks,
    out: &mut Vec<Move>,
) {
    // No knight jump stays on a pin line.
    if scan.pin_on(from).is_some() {
        return;
    }

    for to in jumps(from, &KNIGHT_OFFSETS) {
        match piece_at(&game_state.board, to) {
            Some(target) if target.color == piece.color => {}
            _ => out.push(Move::with_piece(from, to, piece, &game_state.board)),
        }
    }
}
