//! Authoritative state of a single game.
//!
//! `GameState` owns the board, the side to move, the undo stack, the cached
//! king squares, castle rights and the en-passant target, plus the pin/check
//! scratch results and terminal flags refreshed by every `get_valid_moves`
//! call. Applying and reverting moves lives in
//! `move_generation::legal_move_apply`; legal move generation lives in
//! `move_generation::legal_move_generator`.

use std::fmt;
use std::iter::once;

use crate::errors::{ChessRulesError, ChessRulesResult};
use crate::game_state::chess_rules::{BLACK_KING_START, STARTING_LAYOUT, WHITE_KING_START};
use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_checks::{CheckRecord, PinRecord};
use crate::moves::chess_move::Move;
use crate::utils::render_game_state::render_game_state;

#[derive(Debug, Clone)]
pub struct GameState {
    pub(crate) board: Board,
    pub(crate) side_to_move: Color,

    // Indexed by `Color::index`.
    pub(crate) king_locations: [Square; 2],

    pub(crate) castle_rights: CastleRights,
    pub(crate) en_passant_target: Option<Square>,

    // Scratch results of the last `get_valid_moves` call.
    pub(crate) in_check: bool,
    pub(crate) pins: Vec<PinRecord>,
    pub(crate) checks: Vec<CheckRecord>,

    pub(crate) checkmate: bool,
    pub(crate) stalemate: bool,

    pub(crate) undo_stack: Vec<UndoState>,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new_game()
    }
}

impl GameState {
    /// Standard starting position, white to move.
    pub fn new_game() -> Self {
        let mut board: Board = [[None; 8]; 8];
        for (row, line) in STARTING_LAYOUT.iter().enumerate() {
            for (col, code) in line.split_whitespace().enumerate() {
                board[row][col] = code.parse::<Piece>().ok();
            }
        }

        Self::with_board(
            board,
            Color::White,
            [WHITE_KING_START, BLACK_KING_START],
            CastleRights::all(),
        )
    }

    /// Builds a position from eight rows of space-separated piece codes,
    /// rank 8 first, using `--` for empty squares.
    ///
    /// `castle_rights` is taken as given; callers must only grant rights whose
    /// king and rook stand on their home squares.
    pub fn from_layout(
        rows: &[&str],
        side_to_move: Color,
        castle_rights: CastleRights,
    ) -> ChessRulesResult<Self> {
        if rows.len() != 8 {
            return Err(ChessRulesError::InvalidLayout(format!(
                "expected 8 rows, got {}",
                rows.len()
            )));
        }

        let mut board: Board = [[None; 8]; 8];
        let mut kings: [Vec<Square>; 2] = [Vec::new(), Vec::new()];

        for (row, line) in rows.iter().enumerate() {
            let codes: Vec<&str> = line.split_whitespace().collect();
            if codes.len() != 8 {
                return Err(ChessRulesError::InvalidLayout(format!(
                    "row {row} has {} cells, expected 8",
                    codes.len()
                )));
            }

            for (col, code) in codes.into_iter().enumerate() {
                if code == EMPTY_CODE {
                    continue;
                }
                let piece: Piece = code.parse()?;
                let square = Square::new(row as u8, col as u8);
                if piece.kind == PieceKind::King {
                    kings[piece.color.index()].push(square);
                }
                set_piece(&mut board, square, Some(piece));
            }
        }

        let mut king_locations = [WHITE_KING_START, BLACK_KING_START];
        for color in [Color::White, Color::Black] {
            match kings[color.index()].as_slice() {
                [square] => king_locations[color.index()] = *square,
                other => {
                    return Err(ChessRulesError::KingCount {
                        color,
                        count: other.len(),
                    })
                }
            }
        }

        Ok(Self::with_board(board, side_to_move, king_locations, castle_rights))
    }

    fn with_board(
        board: Board,
        side_to_move: Color,
        king_locations: [Square; 2],
        castle_rights: CastleRights,
    ) -> Self {
        Self {
            board,
            side_to_move,
            king_locations,
            castle_rights,
            en_passant_target: None,
            in_check: false,
            pins: Vec::new(),
            checks: Vec::new(),
            checkmate: false,
            stalemate: false,
            undo_stack: Vec::new(),
        }
    }

    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[inline]
    pub fn piece_at(&self, square: Square) -> Option<Piece> {
        piece_at(&self.board, square)
    }

    #[inline]
    pub fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    #[inline]
    pub fn white_to_move(&self) -> bool {
        self.side_to_move == Color::White
    }

    #[inline]
    pub fn king_location(&self, color: Color) -> Square {
        self.king_locations[color.index()]
    }

    #[inline]
    pub fn castle_rights(&self) -> CastleRights {
        self.castle_rights
    }

    #[inline]
    pub fn en_passant_target(&self) -> Option<Square> {
        self.en_passant_target
    }

    /// Whether the side to move was in check at the last `get_valid_moves`.
    #[inline]
    pub fn in_check(&self) -> bool {
        self.in_check
    }

    #[inline]
    pub fn pins(&self) -> &[PinRecord] {
        &self.pins
    }

    #[inline]
    pub fn checks(&self) -> &[CheckRecord] {
        &self.checks
    }

    #[inline]
    pub fn checkmate(&self) -> bool {
        self.checkmate
    }

    #[inline]
    pub fn stalemate(&self) -> bool {
        self.stalemate
    }

    /// Applied moves, oldest first.
    pub fn move_log(&self) -> impl ExactSizeIterator<Item = &Move> + DoubleEndedIterator + '_ {
        self.undo_stack.iter().map(|undo| &undo.mv)
    }

    #[inline]
    pub fn last_move(&self) -> Option<&Move> {
        self.undo_stack.last().map(|undo| &undo.mv)
    }

    #[inline]
    pub fn ply_count(&self) -> usize {
        self.undo_stack.len()
    }

    /// Rights in force before each applied ply, followed by the current rights.
    pub fn castle_rights_log(&self) -> impl Iterator<Item = CastleRights> + '_ {
        self.undo_stack
            .iter()
            .map(|undo| undo.prev_castle_rights)
            .chain(once(self.castle_rights))
    }

    /// Outcome implied by the flags of the last `get_valid_moves` call.
    pub fn status(&self) -> GameStatus {
        if self.checkmate {
            GameStatus::Checkmate {
                winner: self.side_to_move.opposite(),
            }
        } else if self.stalemate {
            GameStatus::Stalemate
        } else if self.in_check {
            GameStatus::Check
        } else {
            GameStatus::InProgress
        }
    }
}

impl fmt::Display for GameState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&render_game_state(self))
    }
}
