//! Move-path enumeration for validating the legal move generator.
//!
//! Walks the legal move tree with `make_move`/`undo_move` on a single
//! `GameState` and tallies what kind of move reached each leaf.

use crate::errors::ChessRulesResult;
use crate::game_state::castle_rights::CastleRights;
use crate::game_state::chess_rules::STARTING_LAYOUT;
use crate::game_state::{chess_types::*, game_state::GameState};
use crate::move_generation::legal_move_checks::check_for_pins_and_checks;
use crate::moves::chess_move::Move;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PerftCounts {
    pub nodes: usize,
    pub captures: usize,
    pub en_passant: usize,
    pub castles: usize,
    pub promotions: usize,
    pub checks: usize,
    pub double_checks: usize,
    pub checkmates: usize,
}

impl PerftCounts {
    fn merge(&mut self, rhs: PerftCounts) {
        self.nodes += rhs.nodes;
        self.captures += rhs.captures;
        self.en_passant += rhs.en_passant;
        self.castles += rhs.castles;
        self.promotions += rhs.promotions;
        self.checks += rhs.checks;
        self.double_checks += rhs.double_checks;
        self.checkmates += rhs.checkmates;
    }
}

/// A named position with published node counts, indexed by depth - 1.
#[derive(Debug, Clone, Copy)]
pub struct PerftPosition {
    pub name: &'static str,
    pub layout: [&'static str; 8],
    pub side_to_move: Color,
    pub castle_rights: CastleRights,
    pub expected_nodes: &'static [usize],
}

impl PerftPosition {
    pub fn game_state(&self) -> ChessRulesResult<GameState> {
        GameState::from_layout(&self.layout, self.side_to_move, self.castle_rights)
    }
}

/// Positions whose published counts need no under-promotion at the listed
/// depths.
pub static REFERENCE_POSITIONS: [PerftPosition; 3] = [
    PerftPosition {
        name: "start",
        layout: STARTING_LAYOUT,
        side_to_move: Color::White,
        castle_rights: CastleRights::all(),
        expected_nodes: &[20, 400, 8_902, 197_281],
    },
    PerftPosition {
        name: "kiwipete",
        layout: [
            "bR -- -- -- bK -- -- bR",
            "bp -- bp bp bQ bp bB --",
            "bB bN -- -- bp bN bp --",
            "-- -- -- wp wN -- -- --",
            "-- bp -- -- wp -- -- --",
            "-- -- wN -- -- wQ -- bp",
            "wp wp wp wB wB wp wp wp",
            "wR -- -- -- wK -- -- wR",
        ],
        side_to_move: Color::White,
        castle_rights: CastleRights::all(),
        expected_nodes: &[48, 2_039, 97_862],
    },
    PerftPosition {
        name: "position_3",
        layout: [
            "-- -- -- -- -- -- -- --",
            "-- -- bp -- -- -- -- --",
            "-- -- -- bp -- -- -- --",
            "wK wp -- -- -- -- -- bR",
            "-- wR -- -- -- bp -- bK",
            "-- -- -- -- -- -- -- --",
            "-- -- -- -- wp -- wp --",
            "-- -- -- -- -- -- -- --",
        ],
        side_to_move: Color::White,
        castle_rights: CastleRights::none(),
        expected_nodes: &[14, 191, 2_812, 43_238, 674_624],
    },
];

pub fn perft(game_state: &mut GameState, depth: u8) -> PerftCounts {
    if depth == 0 {
        return PerftCounts {
            nodes: 1,
            ..PerftCounts::default()
        };
    }

    let mut total = PerftCounts::default();
    for mv in game_state.get_valid_moves() {
        perft_recurse(game_state, mv, depth, &mut total);
    }
    total
}

/// Per-root-move node counts, in generation order.
pub fn perft_divide(game_state: &mut GameState, depth: u8) -> Vec<(Move, usize)> {
    if depth == 0 {
        return Vec::new();
    }

    game_state
        .get_valid_moves()
        .into_iter()
        .map(|mv| {
            let mut counts = PerftCounts::default();
            perft_recurse(game_state, mv, depth, &mut counts);
            (mv, counts.nodes)
        })
        .collect()
}

fn perft_recurse(game_state: &mut GameState, mv: Move, remaining: u8, counts: &mut PerftCounts) {
    game_state.make_move(mv);

    if remaining == 1 {
        counts.merge(classify_leaf(game_state, &mv));
    } else {
        for child in game_state.get_valid_moves() {
            perft_recurse(game_state, child, remaining - 1, counts);
        }
    }

    game_state.undo_move();
}

/// Tallies a leaf reached by `mv`; `game_state` is the position after it.
fn classify_leaf(game_state: &mut GameState, mv: &Move) -> PerftCounts {
    let defender = game_state.side_to_move();
    let scan = check_for_pins_and_checks(
        game_state.board(),
        game_state.king_location(defender),
        defender,
    );

    let mut leaf = PerftCounts {
        nodes: 1,
        captures: usize::from(mv.piece_captured.is_some()),
        en_passant: usize::from(mv.is_enpassant_move),
        castles: usize::from(mv.is_castle_move),
        promotions: usize::from(mv.is_pawn_promotion),
        checks: usize::from(scan.in_check),
        double_checks: usize::from(scan.checks.len() >= 2),
        checkmates: 0,
    };

    if scan.in_check && game_state.get_valid_moves().is_empty() {
        leaf.checkmates = 1;
    }
    leaf
}
