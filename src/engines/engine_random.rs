//! Random-move engine.
//!
//! Selects uniformly from the legal moves it is given and is used for
//! diagnostics, self-play and the session's fallback.

use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use rand::SeedableRng;

use crate::engines::engine_trait::Engine;
use crate::errors::ChessRulesResult;
use crate::game_state::game_state::GameState;
use crate::moves::chess_move::Move;

pub struct RandomEngine {
    rng: StdRng,
}

impl RandomEngine {
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
        }
    }

    /// Deterministic engine for reproducible games.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl Engine for RandomEngine {
    fn name(&self) -> &str {
        "Random"
    }

    fn choose_move(
        &mut self,
        _snapshot: &GameState,
        legal_moves: &[Move],
    ) -> ChessRulesResult<Option<Move>> {
        Ok(legal_moves.choose(&mut self.rng).copied())
    }
}
