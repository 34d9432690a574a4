//! Classical Chess Engine
//!
//! Minimax with alpha-beta pruning over a hand-written evaluation.
//! The piece values are configuration: the caller hands a
//! [`PieceValueTable`] to every evaluation.

mod eval;
mod ordering;
mod phase;
mod search;
mod values;

use chess_core::{Engine, Game, SearchResult};
use tracing::warn;

pub use eval::{
    MATE_SCORE, Score, center_proximity, evaluate, king_activity, king_safety, material,
    mobility, pawn_structure, queen_placement, repetition, rook_placement, terminal_score,
};
pub use ordering::order_moves;
pub use phase::{GamePhase, OPENING_PIECE_THRESHOLD, classify};
pub use search::{SearchOutcome, find_best_move, search};
pub use values::{ConfigError, PieceValueTable};

/// Depth used when nobody asks for another one.
pub const DEFAULT_DEPTH: u8 = 3;
/// Deepest search the UCI `Depth` option accepts.
pub const MAX_DEPTH: u8 = 6;

/// Classical chess engine: alpha-beta search over [`evaluate`].
#[derive(Debug, Clone, Default)]
pub struct ClassicalEngine {
    values: PieceValueTable,
    /// Depth applied by front ends that do not pass one per move
    default_depth: Option<u8>,
    /// Node counter for statistics
    nodes: u64,
}

impl ClassicalEngine {
    pub fn new() -> Self {
        Self::with_values(PieceValueTable::standard())
    }

    pub fn with_values(values: PieceValueTable) -> Self {
        Self {
            values,
            default_depth: None,
            nodes: 0,
        }
    }

    pub fn values(&self) -> &PieceValueTable {
        &self.values
    }

    /// Depth set through the `Depth` option, or [`DEFAULT_DEPTH`].
    pub fn depth(&self) -> u8 {
        self.default_depth.unwrap_or(DEFAULT_DEPTH)
    }

    /// Nodes visited by the last search.
    pub fn nodes(&self) -> u64 {
        self.nodes
    }
}

impl Engine for ClassicalEngine {
    fn search(&mut self, game: &mut Game, depth: u8) -> SearchResult {
        let outcome = search::search(game, depth, &self.values);
        self.nodes = outcome.nodes;

        SearchResult {
            best_move: outcome.best_move,
            score: outcome.score,
            depth,
            nodes: outcome.nodes,
        }
    }

    fn name(&self) -> &str {
        "Classical v2.0"
    }

    fn new_game(&mut self) {
        self.nodes = 0;
    }

    fn set_option(&mut self, name: &str, value: &str) -> bool {
        if !name.eq_ignore_ascii_case("depth") {
            return false;
        }
        match value.trim().parse::<u8>() {
            Ok(d) if (1..=MAX_DEPTH).contains(&d) => {
                self.default_depth = Some(d);
            }
            _ => warn!(value, max = MAX_DEPTH, "ignoring out-of-range Depth"),
        }
        true
    }
}

#[cfg(test)]
#[path = "lib_tests.rs"]
mod lib_tests;
