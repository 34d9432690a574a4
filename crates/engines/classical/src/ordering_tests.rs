use super::*;

fn uci(moves: &[Move]) -> Vec<String> {
    moves.iter().map(|m| m.to_string()).collect()
}

#[test]
fn test_captures_then_checks_first() {
    let game = Game::from_fen("4k3/8/8/3p4/4P3/8/8/R3K3 w - - 0 1").unwrap();
    let original = game.legal_moves();
    let mut ordered = original.clone();
    order_moves(&game, &mut ordered);

    assert_eq!(ordered.len(), original.len());
    assert_eq!(ordered[0].to_string(), "e4d5");
    assert_eq!(ordered[1].to_string(), "a1a8");

    // everything else keeps generation order
    let quiet: Vec<Move> = original
        .iter()
        .copied()
        .filter(|&m| !game.is_capture(m) && !game.gives_check(m))
        .collect();
    assert_eq!(uci(&ordered[2..]), uci(&quiet));
}

#[test]
fn test_checking_capture_beats_plain_capture() {
    // Rxa8+ both captures and checks; exd5 only captures
    let game = Game::from_fen("r3k3/8/8/3p4/4P3/8/8/R3K3 w - - 0 1").unwrap();
    let mut moves = game.legal_moves();
    order_moves(&game, &mut moves);
    assert_eq!(uci(&moves[..2]), ["a1a8", "e4d5"]);
}

#[test]
fn test_quiet_position_is_unchanged() {
    let game = Game::startpos();
    let original = game.legal_moves();
    let mut ordered = original.clone();
    order_moves(&game, &mut ordered);
    assert_eq!(ordered, original);
}

#[test]
fn test_ordering_is_deterministic() {
    let game = Game::from_fen("r1bqkb1r/pppp1ppp/2n2n2/4p2Q/2B1P3/8/PPPP1PPP/RNB1K1NR w KQkq - 4 4")
        .unwrap();
    let mut a = game.legal_moves();
    let mut b = game.legal_moves();
    order_moves(&game, &mut a);
    order_moves(&game, &mut b);
    assert_eq!(a, b);
    assert!(game.is_capture(a[0]));
}
