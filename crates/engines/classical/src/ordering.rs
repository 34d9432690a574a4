//! Move ordering for the alpha-beta search.

use std::cmp::Reverse;

use chess_core::{Game, Move};

/// Captures first, then checking moves; generation order is kept within each
/// class so a search over the ordered list stays deterministic.
pub fn order_moves(game: &Game, moves: &mut [Move]) {
    moves.sort_by_cached_key(|&mv| Reverse((game.is_capture(mv), game.gives_check(mv))));
}

#[cfg(test)]
#[path = "ordering_tests.rs"]
mod ordering_tests;
