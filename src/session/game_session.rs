//! Host-side driver around a live `GameState`.
//!
//! The session keeps the legal-move list for the current position, accepts
//! moves given as two squares, lets engines take turns on a snapshot of the
//! position and falls back to a random legal move when an engine returns
//! nothing usable.

use chrono::{DateTime, Local};
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use rand::SeedableRng;
use tracing::{debug, info, warn};

use crate::engines::engine_trait::Engine;
use crate::errors::{ChessRulesError, ChessRulesResult};
use crate::game_state::{chess_types::*, game_state::GameState};
use crate::moves::chess_move::Move;
use crate::session::session_config::SessionConfig;

pub struct GameSession {
    state: GameState,
    legal_moves: Vec<Move>,
    fallback_rng: StdRng,
    config: SessionConfig,
    started_at: DateTime<Local>,
}

impl GameSession {
    pub fn new(config: SessionConfig) -> Self {
        Self::with_state(GameState::new_game(), config)
    }

    /// Starts a session from an arbitrary position.
    pub fn with_state(mut state: GameState, config: SessionConfig) -> Self {
        let legal_moves = state.get_valid_moves();
        let fallback_rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        let started_at = Local::now();

        info!(
            seed = ?config.seed,
            max_plies = config.max_plies,
            started_at = %started_at.format("%Y-%m-%d %H:%M:%S"),
            "session started"
        );

        Self {
            state,
            legal_moves,
            fallback_rng,
            config,
            started_at,
        }
    }

    #[inline]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    #[inline]
    pub fn legal_moves(&self) -> &[Move] {
        &self.legal_moves
    }

    #[inline]
    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    #[inline]
    pub fn started_at(&self) -> DateTime<Local> {
        self.started_at
    }

    #[inline]
    pub fn status(&self) -> GameStatus {
        self.state.status()
    }

    pub fn is_over(&self) -> bool {
        self.state.checkmate() || self.state.stalemate()
    }

    pub fn reached_ply_limit(&self) -> bool {
        self.state.ply_count() >= self.config.max_plies as usize
    }

    /// Plays the legal move from `start` to `end`. On rejection the position
    /// is unchanged.
    pub fn try_move(&mut self, start: Square, end: Square) -> ChessRulesResult<Move> {
        let requested = Move::new(start, end, self.state.board())
            .ok_or_else(|| ChessRulesError::IllegalMove(format!("{start}{end}")))?;
        self.play_legal(requested)
    }

    /// Same as [`GameSession::try_move`] for `e2e4` style input.
    pub fn try_notation(&mut self, notation: &str) -> ChessRulesResult<Move> {
        let requested = Move::from_notation(notation, self.state.board())?;
        self.play_legal(requested)
    }

    /// Takes back one ply. Does nothing at the start of the game.
    pub fn undo(&mut self) {
        if self.state.ply_count() == 0 {
            return;
        }
        self.state.undo_move();
        self.refresh();
    }

    /// Lets `engine` move for the side to move. Returns `Ok(None)` once the
    /// game is over.
    pub fn play_engine_turn(&mut self, engine: &mut dyn Engine) -> ChessRulesResult<Option<Move>> {
        if self.legal_moves.is_empty() {
            return Ok(None);
        }

        let snapshot = self.state.clone();
        let proposal = engine.choose_move(&snapshot, &self.legal_moves)?;

        let chosen = match proposal.and_then(|mv| self.find_legal(mv)) {
            Some(mv) => mv,
            None => {
                match proposal {
                    Some(rejected) => warn!(engine = engine.name(), mv = %rejected, "engine proposed an illegal move"),
                    None => debug!(engine = engine.name(), "engine returned no move"),
                }
                self.random_legal_move()?
            }
        };

        self.apply(chosen);
        Ok(Some(chosen))
    }

    /// One-line description of the session so far.
    pub fn summary(&self) -> String {
        let elapsed = Local::now().signed_duration_since(self.started_at);
        let outcome = match self.status() {
            GameStatus::Checkmate { winner } => format!("checkmate, {winner} wins"),
            GameStatus::Stalemate => "stalemate".to_owned(),
            GameStatus::Check => format!("in progress, {} in check", self.state.side_to_move()),
            GameStatus::InProgress => "in progress".to_owned(),
        };
        format!(
            "started {} | {} plies | {} | {} ms",
            self.started_at.format("%Y-%m-%d %H:%M:%S"),
            self.state.ply_count(),
            outcome,
            elapsed.num_milliseconds()
        )
    }

    fn play_legal(&mut self, requested: Move) -> ChessRulesResult<Move> {
        let mv = self
            .find_legal(requested)
            .ok_or_else(|| ChessRulesError::IllegalMove(requested.notation()))?;
        self.apply(mv);
        Ok(mv)
    }

    /// The generator's instance of `mv`, matched on coordinates.
    fn find_legal(&self, mv: Move) -> Option<Move> {
        self.legal_moves.iter().find(|legal| **legal == mv).copied()
    }

    fn random_legal_move(&mut self) -> ChessRulesResult<Move> {
        self.legal_moves
            .choose(&mut self.fallback_rng)
            .copied()
            .ok_or_else(|| ChessRulesError::EngineFailure("no legal move to fall back on".to_owned()))
    }

    fn apply(&mut self, mv: Move) {
        self.state.make_move(mv);
        self.refresh();
        if self.is_over() {
            info!(status = ?self.status(), plies = self.state.ply_count(), "game over");
        }
    }

    fn refresh(&mut self) {
        self.legal_moves = self.state.get_valid_moves();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engines::engine_random::RandomEngine;

    fn sq(name: &str) -> Square {
        name.parse().expect("test square should parse")
    }

    fn seeded() -> GameSession {
        GameSession::new(SessionConfig {
            seed: Some(3),
            ..SessionConfig::default()
        })
    }

    struct FixedEngine(Option<Move>);

    impl Engine for FixedEngine {
        fn name(&self) -> &str {
            "Fixed"
        }

        fn choose_move(
            &mut self,
            _snapshot: &GameState,
            _legal_moves: &[Move],
        ) -> ChessRulesResult<Option<Move>> {
            Ok(self.0)
        }
    }

    #[test]
    fn clicked_squares_resolve_to_the_generated_move() {
        let mut session = seeded();
        let played = session.try_move(sq("e2"), sq("e4")).expect("e2e4 is legal");
        assert_eq!(played.notation(), "e2e4");
        assert_eq!(session.state().side_to_move(), Color::Black);
        assert_eq!(session.legal_moves().len(), 20);
    }

    #[test]
    fn illegal_requests_leave_the_state_alone() {
        let mut session = seeded();
        assert_eq!(
            session.try_move(sq("e2"), sq("e5")),
            Err(ChessRulesError::IllegalMove("e2e5".to_owned()))
        );
        assert!(matches!(
            session.try_move(sq("e4"), sq("e5")),
            Err(ChessRulesError::IllegalMove(_))
        ));
        assert!(matches!(
            session.try_notation("e2"),
            Err(ChessRulesError::InvalidMoveNotation(_))
        ));
        assert_eq!(session.state().ply_count(), 0);
        assert_eq!(session.state().side_to_move(), Color::White);
    }

    #[test]
    fn undo_refreshes_the_legal_list() {
        let mut session = seeded();
        session.undo();
        assert_eq!(session.state().ply_count(), 0);

        session.try_notation("g1f3").expect("g1f3 is legal");
        session.undo();
        assert_eq!(session.state().ply_count(), 0);
        assert_eq!(session.legal_moves().len(), 20);
        assert_eq!(session.state().side_to_move(), Color::White);
    }

    #[test]
    fn engine_without_a_usable_move_gets_a_random_fallback() {
        let mut session = seeded();
        let played = session
            .play_engine_turn(&mut FixedEngine(None))
            .expect("fallback succeeds")
            .expect("a move was played");
        assert_eq!(session.state().ply_count(), 1);
        assert_eq!(session.state().last_move(), Some(&played));

        let board = *session.state().board();
        let bogus = Move::new(sq("a7"), sq("a3"), &board).expect("a7 holds a pawn");
        session
            .play_engine_turn(&mut FixedEngine(Some(bogus)))
            .expect("fallback succeeds");
        assert_eq!(session.state().ply_count(), 2);
        assert_ne!(session.state().last_move(), Some(&bogus));
    }

    #[test]
    fn finished_games_stop_taking_turns() {
        let mut session = seeded();
        for notation in ["f2f3", "e7e5", "g2g4", "d8h4"] {
            session.try_notation(notation).expect("fool's mate move is legal");
        }
        assert!(session.is_over());
        assert_eq!(session.status(), GameStatus::Checkmate { winner: Color::Black });
        assert_eq!(
            session
                .play_engine_turn(&mut RandomEngine::with_seed(1))
                .expect("no failure"),
            None
        );
        assert!(session.summary().contains("checkmate, black wins"));
    }

    #[test]
    fn random_self_play_respects_the_ply_limit() {
        let mut session = GameSession::new(SessionConfig {
            seed: Some(11),
            max_plies: 60,
        });
        let mut white = RandomEngine::with_seed(1);
        let mut black = RandomEngine::with_seed(2);

        while !session.is_over() && !session.reached_ply_limit() {
            let engine: &mut dyn Engine = match session.state().side_to_move() {
                Color::White => &mut white,
                Color::Black => &mut black,
            };
            session.play_engine_turn(engine).expect("random engines never fail");
        }
        assert!(session.state().ply_count() <= 60);
    }
}
