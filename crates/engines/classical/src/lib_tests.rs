use super::*;

#[test]
fn test_engine_returns_legal_move() {
    let mut engine = ClassicalEngine::new();
    let mut game = Game::startpos();

    let result = engine.search(&mut game, 2);

    let mv = result.best_move.expect("start position has moves");
    assert!(game.legal_moves().contains(&mv));
    assert_eq!(result.depth, 2);
    assert!(result.nodes > 1);
    assert_eq!(engine.nodes(), result.nodes);
    assert_eq!(game.ply(), 0);
}

#[test]
fn test_engine_handles_checkmate() {
    let mut engine = ClassicalEngine::new();
    let mut game =
        Game::from_fen("r1bqkbnr/pppp1Qpp/2n5/4p3/2B1P3/8/PPPP1PPP/RNB1K1NR b KQkq - 0 1")
            .unwrap();

    let result = engine.search(&mut game, 1);

    assert!(result.best_move.is_none());
    assert_eq!(result.score, MATE_SCORE);
}

#[test]
fn test_engine_handles_stalemate() {
    let mut engine = ClassicalEngine::new();
    let mut game = Game::from_fen("k7/8/1Q6/8/8/8/8/1K6 b - - 0 1").unwrap();

    let result = engine.search(&mut game, 1);

    assert!(result.best_move.is_none());
    assert_eq!(result.score, 0.0);
}

#[test]
fn test_depth_option() {
    let mut engine = ClassicalEngine::new();
    assert_eq!(engine.depth(), DEFAULT_DEPTH);

    assert!(engine.set_option("Depth", "5"));
    assert_eq!(engine.depth(), 5);

    // recognised but out of range: keeps the previous value
    assert!(engine.set_option("depth", "9"));
    assert!(engine.set_option("Depth", "zero"));
    assert_eq!(engine.depth(), 5);

    assert!(!engine.set_option("Hash", "16"));
}

#[test]
fn test_custom_values_reach_the_search() {
    // a table where Black's queen is worth nothing to either side
    let mut pairs: Vec<(char, f64)> = "PNBRQKpnbrqk"
        .chars()
        .map(|c| {
            let p = chess_core::Piece::from_symbol(c).unwrap();
            (c, PieceValueTable::standard().value(p))
        })
        .collect();
    pairs[10].1 = 0.0;
    let values = PieceValueTable::from_symbols(pairs).unwrap();

    let game = Game::from_fen("4k3/8/8/3q4/8/8/8/4K3 w - - 0 1").unwrap();
    let engine = ClassicalEngine::with_values(values.clone());
    assert_eq!(engine.values(), &values);
    assert!(evaluate(&game, &values) > evaluate(&game, &PieceValueTable::standard()));
}
