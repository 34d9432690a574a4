use super::*;

fn run(lines: &[&str]) -> (String, Flow) {
    let mut session = UciSession::new(ClassicalEngine::new(), Vec::new());
    let mut flow = Flow::Continue;
    for line in lines {
        flow = session.handle_line(line).unwrap();
        if flow == Flow::Quit {
            break;
        }
    }
    (String::from_utf8(session.out).unwrap(), flow)
}

#[test]
fn test_handshake() {
    let (out, flow) = run(&["uci", "isready"]);
    assert!(out.starts_with("id name Classical"));
    assert!(out.contains("option name Depth type spin default 3 min 1 max 6\n"));
    assert!(out.contains("uciok\nreadyok\n"));
    assert_eq!(flow, Flow::Continue);
}

#[test]
fn test_quit_stops_the_loop() {
    let (out, flow) = run(&["quit", "isready"]);
    assert_eq!(flow, Flow::Quit);
    assert!(out.is_empty());
}

#[test]
fn test_go_finds_mate() {
    let (out, _) = run(&[
        "position fen 6k1/5ppp/8/8/8/8/5PPP/4Q1K1 w - - 0 1",
        "go depth 2",
    ]);
    assert!(out.contains("score mate 1"), "{out}");
    assert!(out.ends_with("bestmove e1e8\n"), "{out}");
}

#[test]
fn test_position_with_moves() {
    let mut session = UciSession::new(ClassicalEngine::new(), Vec::new());
    session
        .handle_line("position startpos moves e2e4 e7e5 g1f3")
        .unwrap();
    assert_eq!(session.game.ply(), 3);
    assert_eq!(session.game.side_to_move(), Color::Black);

    // a bad command keeps the previous game
    session.handle_line("position startpos moves e2e5").unwrap();
    assert_eq!(session.game.ply(), 3);
}

#[test]
fn test_go_without_moves_reports_null_move() {
    let (out, _) = run(&["position fen k7/8/1Q6/8/8/8/8/1K6 b - - 0 1", "go depth 1"]);
    assert!(out.contains("score cp 0"), "{out}");
    assert!(out.ends_with("bestmove 0000\n"));
}

#[test]
fn test_setoption_depth_is_used_by_go() {
    let (out, _) = run(&["setoption name Depth value 1", "go"]);
    assert!(out.starts_with("info depth 1 "), "{out}");
    let (out, _) = run(&["go depth 0"]);
    assert!(out.starts_with("info depth 1 "), "{out}");
}

#[test]
fn test_uci_score_is_side_relative() {
    assert_eq!(uci_score(1.234, Color::White), "cp 123");
    assert_eq!(uci_score(1.234, Color::Black), "cp -123");
    assert_eq!(uci_score(MATE_SCORE - 1.0, Color::White), "mate 1");
    assert_eq!(uci_score(MATE_SCORE - 3.0, Color::White), "mate 2");
    assert_eq!(uci_score(MATE_SCORE - 2.0, Color::Black), "mate -1");
    assert_eq!(uci_score(-MATE_SCORE, Color::White), "mate 0");
}
