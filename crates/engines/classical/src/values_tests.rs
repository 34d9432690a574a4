use super::*;

const STANDARD_TOML: &str = r#"
P = 1.0
N = 3.0
B = 3.0
R = 5.0
Q = 9.0
K = 10.0
p = -1.0
n = -3.0
b = -3.0
r = -5.0
q = -9.0
k = -10.0
"#;

#[test]
fn test_standard_table_is_signed() {
    let table = PieceValueTable::standard();
    assert_eq!(table.get(Color::White, PieceKind::Pawn), 1.0);
    assert_eq!(table.get(Color::Black, PieceKind::Pawn), -1.0);
    assert_eq!(table.get(Color::White, PieceKind::Rook), 5.0);
    assert_eq!(table.get(Color::Black, PieceKind::Queen), -9.0);
    assert_eq!(table.get(Color::White, PieceKind::King), 10.0);
    assert_eq!(table, PieceValueTable::default());
}

#[test]
fn test_from_toml_matches_standard() {
    let parsed = PieceValueTable::from_toml_str(STANDARD_TOML).unwrap();
    assert_eq!(parsed, PieceValueTable::standard());
}

#[test]
fn test_round_trips_through_toml() {
    let mut pairs: Vec<(char, f64)> = SYMBOLS.iter().map(|&s| (s, 0.0)).collect();
    pairs[1].1 = 3.25;
    pairs[7].1 = -3.25;
    let table = PieceValueTable::from_symbols(pairs).unwrap();

    let text = toml::to_string(&table).unwrap();
    assert!(text.contains("N = 3.25"));
    assert_eq!(PieceValueTable::from_toml_str(&text).unwrap(), table);
}

#[test]
fn test_missing_symbol_is_rejected() {
    let text = STANDARD_TOML.replace("k = -10.0", "");
    let err = PieceValueTable::from_toml_str(&text).unwrap_err();
    assert!(err.to_string().contains("'k'"), "{err}");
}

#[test]
fn test_unknown_symbol_is_rejected() {
    let err = PieceValueTable::from_symbols([('X', 1.0)]).unwrap_err();
    assert!(matches!(err, ConfigError::UnknownSymbol(s) if s == "X"));

    let text = format!("{STANDARD_TOML}Pawn = 1.0\n");
    assert!(PieceValueTable::from_toml_str(&text).is_err());
}

#[test]
fn test_non_finite_value_is_rejected() {
    let err = PieceValueTable::from_symbols([('Q', f64::NAN)]).unwrap_err();
    assert!(matches!(err, ConfigError::NonFinite { symbol: 'Q' }));
}
