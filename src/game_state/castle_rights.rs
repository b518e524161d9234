//! The four independent castling permissions.

use crate::game_state::chess_types::{Color, Square};

/// Castling permissions for both colours and both wings.
///
/// Rights only ever turn off while moves are applied. They come back solely by
/// restoring a snapshot from the undo stack.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CastleRights {
    pub white_kingside: bool,
    pub black_kingside: bool,
    pub white_queenside: bool,
    pub black_queenside: bool,
}

impl Default for CastleRights {
    fn default() -> Self {
        Self::all()
    }
}

impl CastleRights {
    #[inline]
    pub const fn all() -> Self {
        Self {
            white_kingside: true,
            black_kingside: true,
            white_queenside: true,
            black_queenside: true,
        }
    }

    #[inline]
    pub const fn none() -> Self {
        Self {
            white_kingside: false,
            black_kingside: false,
            white_queenside: false,
            black_queenside: false,
        }
    }

    #[inline]
    pub const fn kingside(&self, color: Color) -> bool {
        match color {
            Color::White => self.white_kingside,
            Color::Black => self.black_kingside,
        }
    }

    #[inline]
    pub const fn queenside(&self, color: Color) -> bool {
        match color {
            Color::White => self.white_queenside,
            Color::Black => self.black_queenside,
        }
    }

    pub fn revoke_kingside(&mut self, color: Color) {
        match color {
            Color::White => self.white_kingside = false,
            Color::Black => self.black_kingside = false,
        }
    }

    pub fn revoke_queenside(&mut self, color: Color) {
        match color {
            Color::White => self.white_queenside = false,
            Color::Black => self.black_queenside = false,
        }
    }

    pub fn revoke_both(&mut self, color: Color) {
        self.revoke_kingside(color);
        self.revoke_queenside(color);
    }

    /// Revokes the right tied to a rook home square, if `square` is one.
    pub fn revoke_for_rook_home(&mut self, square: Square) {
        for color in [Color::White, Color::Black] {
            if square.row != color.home_row() {
                continue;
            }
            match square.col {
                0 => self.revoke_queenside(color),
                7 => self.revoke_kingside(color),
                _ => {}
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rook_home_squares_map_to_their_wing() {
        let mut rights = CastleRights::all();
        rights.revoke_for_rook_home(Square::new(7, 7));
        assert!(!rights.white_kingside);
        assert!(rights.white_queenside && rights.black_kingside && rights.black_queenside);

        rights.revoke_for_rook_home(Square::new(0, 0));
        assert!(!rights.black_queenside);
        assert!(rights.black_kingside);
    }

    #[test]
    fn other_squares_leave_rights_alone() {
        let mut rights = CastleRights::all();
        rights.revoke_for_rook_home(Square::new(7, 4));
        rights.revoke_for_rook_home(Square::new(3, 0));
        assert_eq!(rights, CastleRights::all());
    }
}
