use crate::{game::Game, uci::move_to_uci};

/// Counts the leaf nodes of the legal move tree `depth` plies deep.
pub fn perft(game: &mut Game, depth: u8) -> u64 {
    if depth == 0 {
        return 1;
    }
    let moves = game.legal_moves();
    if depth == 1 {
        return moves.len() as u64;
    }
    moves
        .into_iter()
        .map(|mv| perft(&mut game.play(mv), depth - 1))
        .sum()
}

/// Per-root-move breakdown of [`perft`], sorted by move text.
pub fn perft_divide(game: &mut Game, depth: u8) -> Vec<(String, u64)> {
    let mut out: Vec<(String, u64)> = game
        .legal_moves()
        .into_iter()
        .map(|mv| {
            let nodes = perft(&mut game.play(mv), depth.saturating_sub(1));
            (move_to_uci(mv), nodes)
        })
        .collect();
    out.sort();
    out
}
