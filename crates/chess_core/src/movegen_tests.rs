use super::*;

#[test]
fn test_startpos_moves() {
    let pos = Position::startpos();
    let moves = legal_moves(&pos);
    // Starting position has 20 legal moves
    assert_eq!(moves.len(), 20);
}

#[test]
fn test_kiwipete_moves() {
    // Kiwipete position - complex with many move types
    let pos = Position::from_fen("r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq -")
        .unwrap();
    let moves = legal_moves(&pos);
    assert_eq!(moves.len(), 48);
}

#[test]
fn test_legal_move_count_for_side_not_to_move() {
    let pos = Position::startpos();
    assert_eq!(legal_move_count(&pos, Color::White), 20);
    assert_eq!(legal_move_count(&pos, Color::Black), 20);
    // The query works on a copy.
    assert_eq!(pos, Position::startpos());
}

#[test]
fn test_promotions_expand_to_four_moves() {
    let pos = Position::from_fen("8/P6k/8/8/8/8/8/K7 w - - 0 1").unwrap();
    let promos: Vec<_> = legal_moves(&pos)
        .into_iter()
        .filter_map(|m| m.promo)
        .collect();
    assert_eq!(
        promos,
        vec![
            PieceKind::Queen,
            PieceKind::Rook,
            PieceKind::Bishop,
            PieceKind::Knight
        ]
    );
}

#[test]
fn test_en_passant_requires_enemy_pawn() {
    // Target square set by hand with the own e2 pawn where the victim would be.
    let mut pos = Position::from_fen("4k3/8/8/8/8/8/3PP3/4K3 w - - 0 1").unwrap();
    pos.en_passant = sq(4, 2);
    assert!(legal_moves(&pos).iter().all(|m| !m.is_en_passant));

    let pos = Position::from_fen("4k3/8/8/3pP3/8/8/8/4K3 w - d6 0 1").unwrap();
    let ep: Vec<Move> = legal_moves(&pos)
        .into_iter()
        .filter(|m| m.is_en_passant)
        .collect();
    assert_eq!(ep.len(), 1);
    assert_eq!((ep[0].from, Some(ep[0].to)), (36, sq(3, 5)));
}

#[test]
fn test_no_castling_through_attacked_square() {
    // Black rook on f8 covers f1, so short castling is illegal.
    let pos = Position::from_fen("4kr2/8/8/8/8/8/8/R3K2R w KQ - 0 1").unwrap();
    let castles: Vec<u8> = legal_moves(&pos)
        .into_iter()
        .filter(|m| m.is_castle)
        .map(|m| m.to)
        .collect();
    assert_eq!(castles, vec![2]);
}
