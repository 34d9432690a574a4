//! Depth-limited minimax with alpha-beta pruning.
//!
//! White maximizes and Black minimizes a single White-perspective score, so
//! there is no negation between plies. Moves are applied through
//! [`Game::play`] and taken back when the guard drops, so the game is handed
//! back exactly as it came in.

use chess_core::{Color, Game, Move, Outcome};
use tracing::{debug, debug_span, trace};

use crate::eval::{MATE_SCORE, Score, ongoing_score, terminal_score};
use crate::ordering::order_moves;
use crate::values::PieceValueTable;

/// What a search found.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchOutcome {
    /// `None` at depth 0 or when the game is already over.
    pub best_move: Option<Move>,
    /// Minimax value of the root, White's perspective.
    pub score: Score,
    /// Positions visited, root included.
    pub nodes: u64,
}

/// Searches `depth` plies and returns only the chosen move.
pub fn find_best_move(game: &mut Game, depth: u8, values: &PieceValueTable) -> Option<Move> {
    search(game, depth, values).best_move
}

/// Searches `depth` plies from the game's current position.
///
/// Among equally scored moves the first one in ordered-move order wins.
pub fn search(game: &mut Game, depth: u8, values: &PieceValueTable) -> SearchOutcome {
    let side = game.side_to_move();
    let _span = debug_span!("search", depth, side = %side).entered();

    let mut searcher = Searcher {
        values,
        nodes: 0,
        root_ply: game.ply(),
    };
    let (score, best_move) = searcher.minimax(
        game,
        depth,
        f64::NEG_INFINITY,
        f64::INFINITY,
        side == Color::White,
    );

    debug!(
        nodes = searcher.nodes,
        score,
        best = ?best_move.map(|m| m.to_string()),
        "search finished"
    );
    SearchOutcome {
        best_move,
        score,
        nodes: searcher.nodes,
    }
}

/// Static score of a node where the search stops, given the node's
/// already computed outcome.
///
/// Mate scores shrink by the distance from the root so a quicker mate (or
/// a slower defeat) is preferred.
pub(crate) fn leaf_score(
    game: &Game,
    values: &PieceValueTable,
    outcome: Option<Outcome>,
    distance: usize,
) -> Score {
    let score = match outcome {
        Some(outcome) => terminal_score(outcome),
        None => ongoing_score(game, values),
    };
    if score.abs() >= MATE_SCORE {
        score - score.signum() * distance as f64
    } else {
        score
    }
}

struct Searcher<'a> {
    values: &'a PieceValueTable,
    nodes: u64,
    root_ply: usize,
}

impl Searcher<'_> {
    fn minimax(
        &mut self,
        game: &mut Game,
        depth: u8,
        mut alpha: Score,
        mut beta: Score,
        maximizing: bool,
    ) -> (Score, Option<Move>) {
        self.nodes += 1;
        let distance = game.ply() - self.root_ply;

        let outcome = game.outcome();
        if depth == 0 || outcome.is_some() {
            return (leaf_score(game, self.values, outcome, distance), None);
        }

        let mut moves = game.legal_moves();
        order_moves(game, &mut moves);

        let mut best = if maximizing {
            f64::NEG_INFINITY
        } else {
            f64::INFINITY
        };
        let mut best_move = None;

        for mv in moves {
            let (score, _) = self.minimax(&mut game.play(mv), depth - 1, alpha, beta, !maximizing);
            if distance == 0 {
                trace!(mv = %mv, score, "root move");
            }

            if maximizing {
                if score > best {
                    best = score;
                    best_move = Some(mv);
                }
                alpha = alpha.max(best);
            } else {
                if score < best {
                    best = score;
                    best_move = Some(mv);
                }
                beta = beta.min(best);
            }
            if beta <= alpha {
                break;
            }
        }

        (best, best_move)
    }
}

#[cfg(test)]
#[path = "search_tests.rs"]
mod search_tests;
