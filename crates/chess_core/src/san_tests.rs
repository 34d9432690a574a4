use super::*;

fn san_of(fen: &str, uci: &str) -> String {
    let pos = Position::from_fen(fen).unwrap();
    let mv = crate::parse_uci_move(&pos, uci).unwrap();
    move_to_san(&pos, mv)
}

#[test]
fn test_parse_simple_moves() {
    let pos = Position::startpos();
    assert_eq!(parse_san(&pos, "e4").unwrap().to_string(), "e2e4");
    assert_eq!(parse_san(&pos, "Nf3").unwrap().to_string(), "g1f3");
    assert_eq!(parse_san(&pos, " Nc3+ ").unwrap().to_string(), "b1c3");
}

#[test]
fn test_parse_capture_and_disambiguation() {
    let pos = Position::from_fen("4k3/8/8/3p4/4P3/8/4K3/R6R w - - 0 1").unwrap();
    assert_eq!(parse_san(&pos, "exd5").unwrap().to_string(), "e4d5");
    assert_eq!(parse_san(&pos, "Rad1").unwrap().to_string(), "a1d1");
    assert_eq!(parse_san(&pos, "Rhf1").unwrap().to_string(), "h1f1");
    assert!(matches!(
        parse_san(&pos, "Rd1"),
        Err(MoveParseError::Ambiguous(_))
    ));
}

#[test]
fn test_parse_castling_and_promotion() {
    let pos = Position::from_fen("r3k2r/8/8/8/8/8/8/R3K2R b KQkq - 0 1").unwrap();
    assert_eq!(parse_san(&pos, "O-O").unwrap().to_string(), "e8g8");
    assert_eq!(parse_san(&pos, "0-0-0").unwrap().to_string(), "e8c8");

    let pos = Position::from_fen("8/P6k/8/8/8/8/8/K7 w - - 0 1").unwrap();
    assert_eq!(parse_san(&pos, "a8=Q").unwrap().to_string(), "a7a8q");
    assert_eq!(parse_san(&pos, "a8N").unwrap().to_string(), "a7a8n");
}

#[test]
fn test_parse_rejects_garbage_and_illegal() {
    let pos = Position::startpos();
    assert!(matches!(
        parse_san(&pos, "hello"),
        Err(MoveParseError::Syntax(_))
    ));
    assert!(matches!(
        parse_san(&pos, "e5"),
        Err(MoveParseError::Illegal(_))
    ));
    assert!(matches!(
        parse_san(&pos, "Ke2"),
        Err(MoveParseError::Illegal(_))
    ));
}

#[test]
fn test_format_moves() {
    let start = crate::START_FEN;
    assert_eq!(san_of(start, "e2e4"), "e4");
    assert_eq!(san_of(start, "g1f3"), "Nf3");
    assert_eq!(
        san_of("4k3/8/8/3p4/4P3/8/4K3/R6R w - - 0 1", "a1d1"),
        "Rad1"
    );
    assert_eq!(san_of("4k3/8/8/3p4/4P3/8/4K3/R6R w - - 0 1", "e4d5"), "exd5");
    assert_eq!(san_of("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1", "e1g1"), "O-O");
    assert_eq!(san_of("6k1/5ppp/8/8/8/8/5PPP/4Q1K1 w - - 0 1", "e1e8"), "Qe8#");
}
