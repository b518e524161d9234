//! Errors used throughout the rules engine.
//!
//! The rules core itself (`make_move`, `undo_move`, `get_valid_moves`) never
//! fails: driver misuse is either a silent no-op or a precondition violation.
//! `ChessRulesError` covers the fallible edges around it: parsing notation and
//! piece codes, building positions from layouts, submitting moves through a
//! session, engine collaborators, and configuration.

use thiserror::Error;

use crate::game_state::chess_types::Color;

/// Unified error type for the crate.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ChessRulesError {
    /// A square string was not a file `a`-`h` followed by a rank `1`-`8`.
    #[error("invalid algebraic square: {0}")]
    InvalidAlgebraicSquare(String),

    /// A move string was not two algebraic squares, or named an empty origin.
    #[error("invalid move notation: {0}")]
    InvalidMoveNotation(String),

    /// A two-character piece code (for example `wK`) failed to parse.
    #[error("invalid piece code: {0}")]
    InvalidPieceCode(String),

    /// A board layout had the wrong shape.
    #[error("invalid board layout: {0}")]
    InvalidLayout(String),

    /// A board layout did not contain exactly one king for a colour.
    #[error("expected exactly one {color} king, found {count}")]
    KingCount { color: Color, count: usize },

    /// A move submitted to a session is not in the current legal-move list.
    #[error("illegal move: {0}")]
    IllegalMove(String),

    /// A search collaborator failed to produce an answer.
    #[error("engine failure: {0}")]
    EngineFailure(String),

    /// A configuration value could not be interpreted.
    #[error("invalid configuration value for {key}: {value}")]
    InvalidConfig { key: String, value: String },
}

/// Result alias used by the fallible parts of the crate.
pub type ChessRulesResult<T> = Result<T, ChessRulesError>;
