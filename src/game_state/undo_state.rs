use crate::game_state::chess_types::*;
use crate::moves::chess_move::Move;

/// Single undo record pushed by `make_move` and popped by `undo_move`.
///
/// Holding the move and the state it overwrote in one record keeps the move
/// log and the castle-rights log in lockstep.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UndoState {
    pub mv: Move,
    pub prev_castle_rights: CastleRights,
    pub prev_en_passant: Option<Square>,
}
