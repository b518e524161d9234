//! Prints perft counts for the reference positions.
//!
//! Run with:
//! `cargo run --release --bin perft_report -- --depth 3`

use std::time::Instant;

use chess_rules::move_generation::perft::{perft, REFERENCE_POSITIONS};
use chess_rules::ChessRulesResult;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

fn parse_arg_u8(flag: &str, default: u8) -> u8 {
    let args: Vec<String> = std::env::args().collect();
    for i in 0..args.len() {
        if args[i] == flag && i + 1 < args.len() {
            if let Ok(v) = args[i + 1].parse::<u8>() {
                return v.max(1);
            }
        }
    }
    default
}

fn main() -> ChessRulesResult<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let max_depth = parse_arg_u8("--depth", 3);
    info!(max_depth, "perft report");

    println!(
        "{:<12} {:>5} {:>10} {:>9} {:>6} {:>7} {:>6} {:>7} {:>7} {:>6} {:>10}",
        "position", "depth", "nodes", "captures", "ep", "castles", "promo", "checks", "double", "mates", "ms"
    );

    for position in &REFERENCE_POSITIONS {
        let mut game = position.game_state()?;

        for depth in 1..=max_depth {
            let started = Instant::now();
            let counts = perft(&mut game, depth);
            let elapsed_ms = started.elapsed().as_secs_f64() * 1000.0;

            println!(
                "{:<12} {:>5} {:>10} {:>9} {:>6} {:>7} {:>6} {:>7} {:>7} {:>6} {:>10.1}",
                position.name,
                depth,
                counts.nodes,
                counts.captures,
                counts.en_passant,
                counts.castles,
                counts.promotions,
                counts.checks,
                counts.double_checks,
                counts.checkmates,
                elapsed_ms
            );

            if let Some(&expected) = position.expected_nodes.get(usize::from(depth) - 1) {
                if expected != counts.nodes {
                    warn!(position = position.name, depth, expected, actual = counts.nodes, "node count mismatch");
                }
            }
        }
    }

    Ok(())
}
