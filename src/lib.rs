//! Crate root module declarations for the chess rules engine.
//!
//! This file exposes the rules core (game state, move values, legal move
//! generation), the search-collaborator interface, the host session driver,
//! and text utilities so binaries, benches and hosts can import stable paths.

pub mod errors;

pub mod game_state {
    pub mod castle_rights;
    pub mod chess_rules;
    pub mod chess_types;
    pub mod game_state;
    pub mod undo_state;
}

pub mod moves {
    pub mod chess_move;
    pub mod directions;
}

pub mod move_generation {
    pub mod legal_move_apply;
    pub mod legal_move_checks;
    pub mod legal_move_generator;
    pub mod legal_move_shared;
    pub mod legal_moves_bishop;
    pub mod legal_moves_king;
    pub mod legal_moves_knight;
    pub mod legal_moves_pawn;
    pub mod legal_moves_queen;
    pub mod legal_moves_rook;
    pub mod perft;
}

pub mod engines {
    pub mod engine_random;
    pub mod engine_trait;
}

pub mod session {
    pub mod game_session;
    pub mod session_config;
}

pub mod utils {
    pub mod algebraic;
    pub mod render_game_state;
}

pub use errors::{ChessRulesError, ChessRulesResult};
pub use game_state::castle_rights::CastleRights;
pub use game_state::chess_types::{Board, Color, GameStatus, Piece, PieceKind, Square};
pub use game_state::game_state::GameState;
pub use moves::chess_move::Move;
