//! Applying and reverting moves on the authoritative `GameState`.
//!
//! `make_move` trusts its input: the move must come from the current
//! `get_valid_moves` list (or be equal to one by coordinates). Every applied
//! ply pushes an `UndoState` so `undo_move` can restore the previous position
//! exactly, including castle rights and the en-passant target.

use tracing::trace;

use crate::game_state::{chess_types::*, game_state::GameState};
use crate::moves::chess_move::Move;

impl GameState {
    /// Applies `mv` for the side to move and hands the turn over.
    pub fn make_move(&mut self, mv: Move) {
        let mover = mv.piece_moved.color;
        let prev_castle_rights = self.castle_rights;
        let prev_en_passant = self.en_passant_target;

        set_piece(&mut self.board, mv.start, None);
        if mv.is_enpassant_move {
            if let Some(captured) = mv.capture_square() {
                set_piece(&mut self.board, captured, None);
            }
        }

        let landed = if mv.is_pawn_promotion {
            Piece::new(mover, PieceKind::Queen)
        } else {
            mv.piece_moved
        };
        set_piece(&mut self.board, mv.end, Some(landed));

        if mv.piece_moved.kind == PieceKind::King {
            self.king_locations[mover.index()] = mv.end;
            if mv.is_castle_move {
                let (rook_from, rook_to) = castle_rook_squares(&mv);
                let rook = piece_at(&self.board, rook_from);
                set_piece(&mut self.board, rook_from, None);
                set_piece(&mut self.board, rook_to, rook);
            }
        }

        self.en_passant_target = if mv.piece_moved.kind == PieceKind::Pawn
            && mv.start.row.abs_diff(mv.end.row) == 2
        {
            Some(Square::new((mv.start.row + mv.end.row) / 2, mv.start.col))
        } else {
            None
        };

        self.update_castle_rights(&mv);

        self.undo_stack.push(UndoState {
            mv,
            prev_castle_rights,
            prev_en_passant,
        });
        self.side_to_move = mover.opposite();

        trace!(
            ply = self.undo_stack.len(),
            mv = %mv,
            capture = mv.piece_captured.is_some(),
            "applied move"
        );
    }

    /// Reverts the most recent move. Does nothing when no move has been made.
    pub fn undo_move(&mut self) {
        let Some(undo) = self.undo_stack.pop() else {
            return;
        };
        let mv = undo.mv;
        let mover = mv.piece_moved.color;

        set_piece(&mut self.board, mv.start, Some(mv.piece_moved));
        if mv.is_enpassant_move {
            set_piece(&mut self.board, mv.end, None);
            if let Some(captured) = mv.capture_square() {
                set_piece(&mut self.board, captured, mv.piece_captured);
            }
        } else {
            set_piece(&mut self.board, mv.end, mv.piece_captured);
        }

        if mv.piece_moved.kind == PieceKind::King {
            self.king_locations[mover.index()] = mv.start;
            if mv.is_castle_move {
                let (rook_from, rook_to) = castle_rook_squares(&mv);
                let rook = piece_at(&self.board, rook_to);
                set_piece(&mut self.board, rook_to, None);
                set_piece(&mut self.board, rook_from, rook);
            }
        }

        self.castle_rights = undo.prev_castle_rights;
        self.en_passant_target = undo.prev_en_passant;
        self.side_to_move = mover;
        self.checkmate = false;
        self.stalemate = false;

        trace!(ply = self.undo_stack.len(), mv = %mv, "reverted move");
    }

    fn update_castle_rights(&mut self, mv: &Move) {
        let mover = mv.piece_moved.color;
        match mv.piece_moved.kind {
            PieceKind::King => self.castle_rights.revoke_both(mover),
            PieceKind::Rook if mv.start.row == mover.home_row() => {
                self.castle_rights.revoke_for_rook_home(mv.start);
            }
            _ => {}
        }

        if mv
            .piece_captured
            .is_some_and(|captured| captured.kind == PieceKind::Rook)
        {
            self.castle_rights.revoke_for_rook_home(mv.end);
        }
    }
}

/// Rook origin and destination for a castling king move.
fn castle_rook_squares(mv: &Move) -> (Square, Square) {
    let row = mv.start.row;
    if mv.end.col > mv.start.col {
        (Square::new(row, 7), Square::new(row, mv.end.col - 1))
    } else {
        (Square::new(row, 0), Square::new(row, mv.end.col + 1))
    }
}
