//! Bishop move generation.

use crate::game_state::{chess_types::*, game_state::GameState};
use crate::move_generation::legal_move_checks::PinsAndChecks;
use crate::move_generation::legal_move_shared::generate_sliding_moves;
use crate::moves::chess_move::Move;
use crate::moves::directions::DIAGONAL_DIRECTIONS;

pub fn generate_bishop_moves(
    game_state: &GameState,
    from: Square,
    piece: Piece,
    scan: &PinsAndChecks,
    out: &mut Vec<Move>,
) {
    generate_sliding_moves(game_state, from, piece, &DIAGONAL_DIRECTIONS, scan, out);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_state::castle_rights::CastleRights;
    use crate::move_generation::legal_move_checks::check_for_pins_and_checks;

    #[test]
    fn bishop_pinned_on_a_file_cannot_move() {
        let game = GameState::from_layout(
            &[
                "-- -- -- -- bQ -- -- bK",
                "-- -- -- -- -- -- -- --",
                "-- -- -- -- -- -- -- --",
                "-- -- -- -- -- -- -- --",
                "-- -- -- -- -- -- -- --",
                "-- -- -- -- -- -- -- --",
                "-- -- -- -- wB -- -- --",
                "-- -- -- -- wK -- -- --",
            ],
            Color::White,
            CastleRights::none(),
        )
        .expect("layout should build");
        let from: Square = "e2".parse().expect("e2 should parse");
        let scan = check_for_pins_and_checks(game.board(), game.king_location(Color::White), Color::White);
        let piece = game.piece_at(from).expect("bishop on e2");

        let mut moves = Vec::new();
        generate_bishop_moves(&game, from, piece, &scan, &mut moves);
        assert!(moves.is_empty());
    }

    #[test]
    fn free_bishop_covers_open_diagonals() {
        let game = GameState::from_layout(
            &[
                "-- -- -- -- bK -- -- --",
                "-- -- -- -- -- -- -- --",
                "-- -- -- -- -- -- -- --",
                "-- -- -- -- -- -- -- --",
                "-- -- -- wB -- -- -- --",
                "-- -- -- -- -- -- -- --",
                "-- -- -- -- -- -- -- --",
                "-- -- -- -- -- -- -- wK",
            ],
            Color::White,
            CastleRights::none(),
        )
        .expect("layout should build");
        let from: Square = "d4".parse().expect("d4 should parse");
        let scan = check_for_pins_and_checks(game.board(), game.king_location(Color::White), Color::White);
        let piece = game.piece_at(from).expect("bishop on d4");

        let mut moves = Vec::new();
        generate_bishop_moves(&game, from, piece, &scan, &mut moves);
        assert_eq!(moves.len(), 13);
    }
}
