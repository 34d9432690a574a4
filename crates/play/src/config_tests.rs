use super::*;

fn write_temp(name: &str, contents: &str) -> PathBuf {
    let path = std::env::temp_dir().join(format!("play-{}-{name}.toml", std::process::id()));
    fs::write(&path, contents).unwrap();
    path
}

#[test]
fn test_defaults() {
    let config = EngineConfig::default();
    assert_eq!(config.depth, 3);
    assert_eq!(config.ai_color, Side::White);
    assert_eq!(config.piece_values, PieceValueTable::standard());
}

#[test]
fn test_partial_file_keeps_defaults() {
    let config: EngineConfig = toml::from_str("ai_color = \"black\"").unwrap();
    assert_eq!(config.ai_color, Side::Black);
    assert_eq!(config.depth, DEFAULT_DEPTH);
    assert_eq!(Color::from(config.ai_color), Color::Black);
}

#[test]
fn test_load_full_file() {
    let path = write_temp(
        "full",
        r#"
depth = 2
ai_color = "black"

[piece_values]
P = 1.0
N = 3.2
B = 3.3
R = 5.0
Q = 9.0
K = 10.0
p = -1.0
n = -3.2
b = -3.3
r = -5.0
q = -9.0
k = -10.0
"#,
    );
    let config = EngineConfig::load(&path).unwrap();
    fs::remove_file(&path).ok();

    assert_eq!(config.depth, 2);
    let knight = chess_core::Piece::new(Color::White, chess_core::PieceKind::Knight);
    assert_eq!(config.piece_values.value(knight), 3.2);
}

#[test]
fn test_incomplete_piece_values_are_rejected() {
    let path = write_temp("partial", "[piece_values]\nP = 1.0\n");
    let err = EngineConfig::load(&path).unwrap_err();
    fs::remove_file(&path).ok();
    assert!(matches!(err, ConfigError::Parse { .. }), "{err}");
}

#[test]
fn test_unknown_key_and_bad_depth_are_rejected() {
    assert!(toml::from_str::<EngineConfig>("deepth = 3").is_err());

    let config = EngineConfig {
        depth: 0,
        ..Default::default()
    };
    assert!(matches!(config.validate(), Err(ConfigError::Depth(0))));

    let path = write_temp("deep", "depth = 9");
    let err = EngineConfig::load(&path).unwrap_err();
    fs::remove_file(&path).ok();
    assert!(matches!(err, ConfigError::Depth(9)));
}

#[test]
fn test_missing_file() {
    let err = EngineConfig::load(Path::new("/nonexistent/play.toml")).unwrap_err();
    assert!(matches!(err, ConfigError::Io { .. }));
}
