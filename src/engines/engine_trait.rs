//! Search collaborator abstraction.
//!
//! An engine is handed a snapshot of the position together with the legal
//! moves already generated for it, and answers with one of those moves.

use crate::errors::ChessRulesResult;
use crate::game_state::game_state::GameState;
use crate::moves::chess_move::Move;

pub trait Engine: Send {
    fn name(&self) -> &str;

    /// Picks a move for the side to move in `snapshot`. `Ok(None)` means the
    /// engine declines to move.
    ///
    /// `snapshot` is a clone of the live game, never the live instance.
    fn choose_move(
        &mut self,
        snapshot: &GameState,
        legal_moves: &[Move],
    ) -> ChessRulesResult<Option<Move>>;
}
