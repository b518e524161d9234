//! Ray and jump geometry shared by the scanner and the piece generators.

use std::iter::successors;

use crate::game_state::chess_types::{Direction, Square};

/// Rank and file rays: up, left, down, right.
pub const ORTHOGONAL_DIRECTIONS: [Direction; 4] = [(-1, 0), (0, -1), (1, 0), (0, 1)];

/// Diagonal rays: up-left, up-right, down-left, down-right.
pub const DIAGONAL_DIRECTIONS: [Direction; 4] = [(-1, -1), (-1, 1), (1, -1), (1, 1)];

pub const KNIGHT_OFFSETS: [Direction; 8] = [
    (-2, -1),
    (-2, 1),
    (-1, -2),
    (-1, 2),
    (1, -2),
    (1, 2),
    (2, -1),
    (2, 1),
];

pub const KING_OFFSETS: [Direction; 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

#[inline]
pub const fn is_diagonal(direction: Direction) -> bool {
    direction.0 != 0 && direction.1 != 0
}

#[inline]
pub const fn reversed(direction: Direction) -> Direction {
    (-direction.0, -direction.1)
}

/// Squares walked outward from `from` (exclusive) until the board edge.
#[inline]
pub fn ray(from: Square, direction: Direction) -> impl Iterator<Item = Square> {
    successors(from.offset(direction.0, direction.1), move |square| {
        square.offset(direction.0, direction.1)
    })
}

/// Squares one jump away from `from` that are on the board.
#[inline]
pub fn jumps(from: Square, offsets: &'static [Direction]) -> impl Iterator<Item = Square> {
    offsets
        .iter()
        .filter_map(move |&(d_row, d_col)| from.offset(d_row, d_col))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ray_runs_to_the_edge() {
        let d4 = Square::new(4, 3);
        assert_eq!(ray(d4, (-1, 0)).count(), 4);
        assert_eq!(ray(d4, (1, 1)).count(), 3);
        assert_eq!(ray(d4, (0, 1)).last(), Some(Square::new(4, 7)));
    }

    #[test]
    fn corner_jumps_are_clipped() {
        let a1 = Square::new(7, 0);
        assert_eq!(jumps(a1, &KNIGHT_OFFSETS).count(), 2);
        assert_eq!(jumps(a1, &KING_OFFSETS).count(), 3);
        assert_eq!(jumps(Square::new(3, 3), &KNIGHT_OFFSETS).count(), 8);
    }
}
