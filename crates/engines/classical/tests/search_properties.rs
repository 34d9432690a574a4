//! Properties every search must hold, checked on positions reached by random
//! legal playouts from the start position.

use chess_core::{Game, Move};
use classical_engine::{PieceValueTable, evaluate, find_best_move, search};
use proptest::prelude::*;
use rand::{SeedableRng, rngs::StdRng, seq::SliceRandom};

fn random_game(seed: u64, plies: usize) -> Game {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut game = Game::startpos();
    for _ in 0..plies {
        let moves = game.legal_moves();
        if game.is_game_over() {
            break;
        }
        let Some(&mv) = moves.choose(&mut rng) else {
            break;
        };
        game.push(mv);
    }
    game
}

fn snapshot(game: &Game) -> (String, Vec<Move>, usize) {
    (
        game.position().to_fen(),
        game.moves().collect(),
        game.repetition_count(),
    )
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(16))]

    #[test]
    fn search_restores_the_game(seed in any::<u64>(), plies in 0usize..40, depth in 1u8..=2) {
        let values = PieceValueTable::standard();
        let mut game = random_game(seed, plies);
        let before = snapshot(&game);

        search(&mut game, depth, &values);

        prop_assert_eq!(snapshot(&game), before);
    }

    #[test]
    fn search_is_deterministic(seed in any::<u64>(), plies in 0usize..40) {
        let values = PieceValueTable::standard();
        let mut game = random_game(seed, plies);
        let first = search(&mut game, 2, &values);
        let second = search(&mut game, 2, &values);
        prop_assert_eq!(first, second);
    }

    #[test]
    fn depth_zero_is_static_eval(seed in any::<u64>(), plies in 0usize..60) {
        let values = PieceValueTable::standard();
        let mut game = random_game(seed, plies);
        let expected = evaluate(&game, &values);
        let out = search(&mut game, 0, &values);
        prop_assert_eq!(out.best_move, None);
        prop_assert_eq!(out.score, expected);
    }

    #[test]
    fn chosen_move_is_legal(seed in any::<u64>(), plies in 0usize..40) {
        let values = PieceValueTable::standard();
        let mut game = random_game(seed, plies);
        let legal = game.legal_moves();
        match find_best_move(&mut game, 1, &values) {
            Some(mv) => prop_assert!(legal.contains(&mv)),
            None => prop_assert!(game.is_game_over()),
        }
    }
}

#[test]
fn repeated_position_is_avoided_by_the_repeating_side() {
    // White can shuffle the knight back to g1, recreating the start position
    // a second time, or play a different developing move.
    let values = PieceValueTable::standard();
    let mut game = Game::startpos();
    for uci in ["g1f3", "g8f6", "f3g1", "f6g8", "g1f3", "g8f6"] {
        let mv = chess_core::parse_uci_move(game.position(), uci).unwrap();
        game.push(mv);
    }
    let best = find_best_move(&mut game, 1, &values).unwrap();
    assert_ne!(best.to_string(), "f3g1");
}
