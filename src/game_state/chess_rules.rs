//! Canonical chess-rule constants.
//!
//! Stores the standard starting layout and the fixed squares the castling
//! rules refer to.

use crate::game_state::chess_types::Square;

/// Standard starting position, one string per board row from rank 8 down.
pub const STARTING_LAYOUT: [&str; 8] = [
    "bR bN bB bQ bK bB bN bR",
    "bp bp bp bp bp bp bp bp",
    "-- -- -- -- -- -- -- --",
    "-- -- -- -- -- -- -- --",
    "-- -- -- -- -- -- -- --",
    "-- -- -- -- -- -- -- --",
    "wp wp wp wp wp wp wp wp",
    "wR wN wB wQ wK wB wN wR",
];

pub const WHITE_KING_START: Square = Square::new(7, 4);
pub const BLACK_KING_START: Square = Square::new(0, 4);

/// Column the king lands on when castling kingside / queenside.
pub const KINGSIDE_CASTLE_COL: u8 = 6;
pub const QUEENSIDE_CASTLE_COL: u8 = 2;
