//! Plays two random engines against each other through a `GameSession`.
//!
//! Run with:
//! `cargo run --release --bin random_selfplay`
//! `cargo run --release --bin random_selfplay -- --seed 7 --max-plies 120`
//!
//! `CHESS_RULES_SEED` / `CHESS_RULES_MAX_PLIES` set the defaults; the flags
//! override them. `RUST_LOG=debug` shows engine fallbacks and terminal states.

use chess_rules::engines::engine_random::RandomEngine;
use chess_rules::engines::engine_trait::Engine;
use chess_rules::session::game_session::GameSession;
use chess_rules::session::session_config::SessionConfig;
use chess_rules::{ChessRulesResult, Color};
use tracing_subscriber::EnvFilter;

fn parse_arg_u64(flag: &str) -> Option<u64> {
    let args: Vec<String> = std::env::args().collect();
    for i in 0..args.len() {
        if args[i] == flag && i + 1 < args.len() {
            if let Ok(v) = args[i + 1].parse::<u64>() {
                return Some(v);
            }
        }
    }
    None
}

fn main() -> ChessRulesResult<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let mut config = SessionConfig::from_env()?;
    if let Some(seed) = parse_arg_u64("--seed") {
        config.seed = Some(seed);
    }
    if let Some(max_plies) = parse_arg_u64("--max-plies") {
        config.max_plies = u32::try_from(max_plies).unwrap_or(u32::MAX);
    }

    let (mut white, mut black) = match config.seed {
        Some(seed) => (
            RandomEngine::with_seed(seed.wrapping_add(1)),
            RandomEngine::with_seed(seed.wrapping_add(2)),
        ),
        None => (RandomEngine::new(), RandomEngine::new()),
    };

    let mut session = GameSession::new(config);
    let mut line = Vec::new();

    while !session.is_over() && !session.reached_ply_limit() {
        let engine: &mut dyn Engine = match session.state().side_to_move() {
            Color::White => &mut white,
            Color::Black => &mut black,
        };
        match session.play_engine_turn(engine)? {
            Some(mv) => line.push(mv.notation()),
            None => break,
        }
    }

    println!("{}", line.join(" "));
    println!();
    println!("{}", session.state());
    println!();
    println!("{}", session.summary());
    Ok(())
}
