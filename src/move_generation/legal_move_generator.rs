//! Full legal move generation pipeline.
//!
//! Scans the mover's king once for pins and checks, generates pin-aware
//! pseudo-legal moves for every piece, then keeps only the moves that answer
//! the current check (if any) and adds castling when the king is not attacked.

use tracing::debug;

use crate::game_state::{chess_types::*, game_state::GameState};
use crate::move_generation::legal_move_checks::{check_for_pins_and_checks, CheckRecord, PinsAndChecks};
use crate::move_generation::legal_move_shared::generate_all_moves;
use crate::move_generation::legal_moves_king::{generate_castle_moves, generate_king_moves};
use crate::moves::chess_move::Move;
use crate::moves::directions::ray;

/// Legal moves for the side to move together with the scan they were filtered
/// against. Does not touch `game_state`.
pub fn generate_valid_moves(game_state: &GameState) -> (Vec<Move>, PinsAndChecks) {
    let side = game_state.side_to_move;
    let king_square = game_state.king_locations[side.index()];
    let scan = check_for_pins_and_checks(&game_state.board, king_square, side);

    let moves = match scan.checks.as_slice() {
        [] => {
            let mut moves = generate_all_moves(game_state, &scan);
            generate_castle_moves(game_state, king_square, &mut moves);
            moves
        }
        [check] => {
            let blocks = interposition_squares(&game_state.board, king_square, check);
            generate_all_moves(game_state, &scan)
                .into_iter()
                .filter(|mv| answers_single_check(mv, check, &blocks))
                .collect()
        }
        _ => {
            let mut moves = Vec::with_capacity(8);
            generate_king_moves(
                game_state,
                king_square,
                Piece::new(side, PieceKind::King),
                &mut moves,
            );
            moves
        }
    };

    (moves, scan)
}

impl GameState {
    /// Legal moves for the side to move.
    ///
    /// Refreshes the cached pin/check results and sets `checkmate` or
    /// `stalemate` when the list comes back empty. Board, side to move,
    /// castle rights and history are left untouched.
    pub fn get_valid_moves(&mut self) -> Vec<Move> {
        let (moves, scan) = generate_valid_moves(self);

        self.in_check = scan.in_check;
        self.pins = scan.pins;
        self.checks = scan.checks;
        self.checkmate = moves.is_empty() && self.in_check;
        self.stalemate = moves.is_empty() && !self.in_check;

        if self.checkmate {
            debug!(loser = %self.side_to_move, ply = self.ply_count(), "checkmate");
        } else if self.stalemate {
            debug!(side = %self.side_to_move, ply = self.ply_count(), "stalemate");
        }

        moves
    }
}

/// Squares a non-king move may land on to resolve `check`: the checker itself
/// and, for sliders, every empty square between it and the king.
fn interposition_squares(board: &Board, king_square: Square, check: &CheckRecord) -> Vec<Square> {
    let is_knight = piece_at(board, check.square).is_some_and(|piece| piece.kind == PieceKind::Knight);
    if is_knight {
        return vec![check.square];
    }

    let mut squares = Vec::with_capacity(7);
    for square in ray(king_square, check.direction) {
        squares.push(square);
        if square == check.square {
            break;
        }
    }
    squares
}

fn answers_single_check(mv: &Move, check: &CheckRecord, blocks: &[Square]) -> bool {
    mv.piece_moved.kind == PieceKind::King
        || blocks.contains(&mv.end)
        || (mv.is_enpassant_move && mv.capture_square() == Some(check.square))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_state::castle_rights::CastleRights;

    fn sq(name: &str) -> Square {
        name.parse().expect("test square should parse")
    }

    fn notations(moves: &[Move]) -> Vec<String> {
        let mut out: Vec<String> = moves.iter().map(Move::notation).collect();
        out.sort();
        out
    }

    fn play(game: &mut GameState, notation: &str) {
        let wanted = Move::from_notation(notation, game.board()).expect("notation should parse");
        let mv = game
            .get_valid_moves()
            .into_iter()
            .find(|candidate| *candidate == wanted)
            .unwrap_or_else(|| panic!("{notation} should be legal"));
        game.make_move(mv);
    }

    #[test]
    fn opening_position_has_twenty_moves() {
        let mut game = GameState::new_game();
        let moves = game.get_valid_moves();
        assert_eq!(moves.len(), 20);
        assert!(!game.in_check());
        assert_eq!(game.status(), GameStatus::InProgress);
    }

    #[test]
    fn generation_leaves_the_position_untouched() {
        let mut game = GameState::new_game();
        play(&mut game, "e2e4");
        let board = *game.board();
        let rights = game.castle_rights();
        let plies = game.ply_count();

        game.get_valid_moves();
        assert_eq!(game.board(), &board);
        assert_eq!(game.castle_rights(), rights);
        assert_eq!(game.ply_count(), plies);
        assert_eq!(game.side_to_move(), Color::Black);
    }

    #[test]
    fn single_check_allows_capture_block_or_king_step() {
        let mut game = GameState::from_layout(
            &[
                "-- -- -- -- bR -- bK --",
                "-- -- -- -- -- -- -- --",
                "-- -- -- -- -- -- -- --",
                "-- -- -- -- -- -- -- --",
                "wR -- -- -- -- -- -- --",
                "-- -- -- -- -- -- -- --",
                "-- wB -- -- -- -- -- --",
                "-- -- -- -- wK -- -- --",
            ],
            Color::White,
            CastleRights::none(),
        )
        .expect("layout should build");

        let moves = game.get_valid_moves();
        assert!(game.in_check());
        assert_eq!(game.status(), GameStatus::Check);
        assert_eq!(game.checks().len(), 1);
        assert_eq!(
            notations(&moves),
            ["a4e4", "b2e5", "e1d1", "e1d2", "e1f1", "e1f2"]
        );
    }

    #[test]
    fn double_check_only_moves_the_king() {
        let mut game = GameState::from_layout(
            &[
                "-- -- -- -- bK -- -- --",
                "-- -- -- -- -- -- -- --",
                "-- -- -- -- -- -- -- --",
                "-- -- -- -- -- -- -- --",
                "-- bB -- -- bR -- -- --",
                "-- -- -- -- -- -- -- --",
                "-- -- -- -- -- -- -- wQ",
                "-- -- -- -- wK -- -- --",
            ],
            Color::White,
            CastleRights::none(),
        )
        .expect("layout should build");

        let moves = game.get_valid_moves();
        assert_eq!(game.checks().len(), 2);
        assert!(moves.iter().all(|mv| mv.piece_moved.kind == PieceKind::King));
        assert_eq!(notations(&moves), ["e1d1", "e1f1", "e1f2"]);
    }

    #[test]
    fn en_passant_is_offered_right_after_the_double_push() {
        let mut game = GameState::new_game();
        for notation in ["e2e4", "a7a6", "e4e5", "f7f5"] {
            play(&mut game, notation);
        }
        let moves = game.get_valid_moves();
        let capture = moves
            .iter()
            .find(|mv| mv.start == sq("e5") && mv.end == sq("f6"))
            .expect("en passant should be offered");
        assert!(capture.is_enpassant_move);

        play(&mut game, "h2h3");
        play(&mut game, "h7h6");
        let moves = game.get_valid_moves();
        assert!(!moves.iter().any(|mv| mv.start == sq("e5") && mv.end == sq("f6")));
    }

    #[test]
    fn en_passant_may_capture_the_checking_pawn() {
        let mut game = GameState::from_layout(
            &[
                "-- -- -- -- bK -- -- --",
                "-- -- -- bp -- -- -- --",
                "-- -- -- -- -- -- -- --",
                "-- -- -- -- wp -- -- --",
                "-- -- wK -- -- -- -- --",
                "-- -- -- -- -- -- -- --",
                "-- -- -- -- -- -- -- --",
                "-- -- -- -- -- -- -- --",
            ],
            Color::Black,
            CastleRights::none(),
        )
        .expect("layout should build");

        play(&mut game, "d7d5");
        let moves = game.get_valid_moves();
        assert!(game.in_check());
        assert!(moves
            .iter()
            .any(|mv| mv.is_enpassant_move && mv.start == sq("e5") && mv.end == sq("d6")));
    }

    #[test]
    fn fools_mate_is_checkmate() {
        let mut game = GameState::new_game();
        for notation in ["f2f3", "e7e5", "g2g4", "d8h4"] {
            play(&mut game, notation);
        }
        let moves = game.get_valid_moves();
        assert!(moves.is_empty());
        assert!(game.checkmate());
        assert!(!game.stalemate());
        assert_eq!(game.status(), GameStatus::Checkmate { winner: Color::Black });

        game.undo_move();
        assert!(!game.checkmate());
        assert!(!game.get_valid_moves().is_empty());
    }

    #[test]
    fn cornered_king_without_moves_is_stalemate() {
        let mut game = GameState::from_layout(
            &[
                "bK -- -- -- -- -- -- --",
                "-- -- -- -- -- -- -- --",
                "-- wQ -- -- -- -- -- --",
                "-- -- -- -- -- -- -- --",
                "-- -- -- -- -- -- -- --",
                "-- -- -- -- -- -- -- --",
                "-- -- -- -- -- -- -- --",
                "-- -- -- -- -- -- -- wK",
            ],
            Color::Black,
            CastleRights::none(),
        )
        .expect("layout should build");

        assert!(game.get_valid_moves().is_empty());
        assert!(game.stalemate());
        assert!(!game.checkmate());
        assert_eq!(game.status(), GameStatus::Stalemate);
    }

    #[test]
    fn castling_is_generated_and_withheld_under_attack() {
        let mut game = GameState::from_layout(
            &[
                "-- -- -- -- bK -- -- --",
                "-- -- -- -- -- -- -- --",
                "-- -- -- -- -- -- -- --",
                "-- -- -- -- -- -- -- --",
                "-- -- -- -- -- -- -- --",
                "-- -- -- -- -- -- -- --",
                "-- -- -- -- -- -- -- --",
                "wR -- -- -- wK -- -- wR",
            ],
            Color::White,
            CastleRights::all(),
        )
        .expect("layout should build");
        let moves = game.get_valid_moves();
        assert!(moves.iter().any(|mv| mv.is_castle_move && mv.end == sq("g1")));
        assert!(moves.iter().any(|mv| mv.is_castle_move && mv.end == sq("c1")));

        let mut checked = GameState::from_layout(
            &[
                "-- -- -- -- bK -- -- --",
                "-- -- -- -- bR -- -- --",
                "-- -- -- -- -- -- -- --",
                "-- -- -- -- -- -- -- --",
                "-- -- -- -- -- -- -- --",
                "-- -- -- -- -- -- -- --",
                "-- -- -- -- -- -- -- --",
                "wR -- -- -- wK -- -- wR",
            ],
            Color::White,
            CastleRights::all(),
        )
        .expect("layout should build");
        let moves = checked.get_valid_moves();
        assert!(checked.in_check());
        assert!(!moves.iter().any(|mv| mv.is_castle_move));
    }
}
