//! Attack, pin and check scanning.
//!
//! Everything here is a pure function of an explicit board, king square and
//! colour. Hypothetical positions (a king tried on a new square, an en-passant
//! capture) are probed by scanning a modified copy of the board, never by
//! mutating the live game state.

use crate::game_state::chess_types::*;
use crate::moves::directions::{
    is_diagonal, ray, reversed, DIAGONAL_DIRECTIONS, KNIGHT_OFFSETS, ORTHOGONAL_DIRECTIONS,
};

/// A friendly piece that may only move along `direction` (king outward) or
/// its reverse.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PinRecord {
    pub square: Square,
    pub direction: Direction,
}

impl PinRecord {
    #[inline]
    pub fn allows(&self, direction: Direction) -> bool {
        direction == self.direction || direction == reversed(self.direction)
    }
}

/// An enemy piece giving check, with the direction from the king toward it.
/// For knights the direction is the knight offset itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CheckRecord {
    pub square: Square,
    pub direction: Direction,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PinsAndChecks {
    pub in_check: bool,
    pub pins: Vec<PinRecord>,
    pub checks: Vec<CheckRecord>,
}

impl PinsAndChecks {
    #[inline]
    pub fn pin_on(&self, square: Square) -> Option<&PinRecord> {
        self.pins.iter().find(|pin| pin.square == square)
    }
}

/// Scans outward from `king_square` for checks against `side` and for
/// `side` pieces pinned to it.
///
/// `side`'s own king is transparent to the scan so the same routine can
/// probe squares the king is about to move through.
pub fn check_for_pins_and_checks(board: &Board, king_square: Square, side: Color) -> PinsAndChecks {
    let enemy = side.opposite();
    let mut result = PinsAndChecks::default();

    for direction in ORTHOGONAL_DIRECTIONS.into_iter().chain(DIAGONAL_DIRECTIONS) {
        let mut possible_pin: Option<Square> = None;

        for (step, square) in ray(king_square, direction).enumerate() {
            let Some(piece) = piece_at(board, square) else {
                continue;
            };

            if piece.color == side {
                if piece.kind == PieceKind::King {
                    continue;
                }
                if possible_pin.is_none() {
                    possible_pin = Some(square);
                    continue;
                }
                break;
            }

            if attacks_along_ray(piece, direction, step + 1) {
                match possible_pin {
                    None => {
                        result.in_check = true;
                        result.checks.push(CheckRecord { square, direction });
                    }
                    Some(pinned) => result.pins.push(PinRecord {
                        square: pinned,
                        direction,
                    }),
                }
            }
            break;
        }
    }

    for direction in KNIGHT_OFFSETS {
        let Some(square) = king_square.offset(direction.0, direction.1) else {
            continue;
        };
        if piece_at(board, square) == Some(Piece::new(enemy, PieceKind::Knight)) {
            result.in_check = true;
            result.checks.push(CheckRecord { square, direction });
        }
    }

    result
}

/// Whether `square` is attacked by any `attacker` piece on `board`.
#[inline]
pub fn is_square_attacked(board: &Board, square: Square, attacker: Color) -> bool {
    check_for_pins_and_checks(board, square, attacker.opposite()).in_check
}

/// Whether `piece`, found `distance` squares from the scan origin along
/// `direction`, attacks back along that ray.
fn attacks_along_ray(piece: Piece, direction: Direction, distance: usize) -> bool {
    match piece.kind {
        PieceKind::Rook => !is_diagonal(direction),
        PieceKind::Bishop => is_diagonal(direction),
        PieceKind::Queen => true,
        PieceKind::King => distance == 1,
        // Pawns capture toward their forward direction, so they sit on the
        // opposite side of the scan origin.
        PieceKind::Pawn => {
            distance == 1
                && is_diagonal(direction)
                && direction.0 == -piece.color.forward_row_step()
        }
        PieceKind::Knight => false,
    }
}
