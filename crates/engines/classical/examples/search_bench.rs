//! Search benchmark for profiling with cargo-flamegraph.
//!
//! Usage:
//!   cargo flamegraph --example search_bench -p classical_engine -- [depth] [fen]
//!
//! Examples:
//!   # Default: depth 3 over the whole suite
//!   cargo flamegraph --example search_bench -p classical_engine
//!
//!   # Kiwipete only, depth 4
//!   cargo flamegraph --example search_bench -p classical_engine -- 4 "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1"

use std::env;
use std::time::{Duration, Instant};

use chess_core::Game;
use classical_engine::{PieceValueTable, search};

const TEST_POSITIONS: &[(&str, &str)] = &[
    (
        "Starting position",
        "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1",
    ),
    (
        "Kiwipete",
        "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1",
    ),
    ("Rook endgame", "8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8 w - - 0 1"),
    (
        "Italian middlegame",
        "r4rk1/1pp1qppp/p1np1n2/2b1p1B1/2B1P1b1/P1NP1N2/1PP1QPPP/R4RK1 w - - 0 10",
    ),
];

fn main() {
    let args: Vec<String> = env::args().collect();
    let depth: u8 = args.get(1).and_then(|s| s.parse().ok()).unwrap_or(3);
    let values = PieceValueTable::standard();

    let positions: Vec<(&str, &str)> = match args.get(2) {
        Some(fen) => vec![("Custom", fen.as_str())],
        None => TEST_POSITIONS.to_vec(),
    };

    println!("=== Search Benchmark ===");
    println!("Depth: {depth}");
    println!();

    let mut total_nodes = 0u64;
    let mut total_time = Duration::ZERO;

    for (name, fen) in positions {
        let mut game = match Game::from_fen(fen) {
            Ok(game) => game,
            Err(err) => {
                eprintln!("{name}: {err}");
                continue;
            }
        };

        print!("{name:.<30}");
        let start = Instant::now();
        let out = search(&mut game, depth, &values);
        let elapsed = start.elapsed();

        total_nodes += out.nodes;
        total_time += elapsed;

        let best = out.best_move.map_or("-".to_string(), |m| m.to_string());
        println!(
            " {best:<6} {:>+9.2} {:>10} nodes in {elapsed:>8.3?} ({:>8.0} nps)",
            out.score,
            out.nodes,
            nps(out.nodes, elapsed)
        );
    }

    println!();
    println!("{:=<70}", "");
    println!(
        "TOTAL: {total_nodes} nodes in {total_time:.3?} ({:.0} nps)",
        nps(total_nodes, total_time)
    );
}

fn nps(nodes: u64, elapsed: Duration) -> f64 {
    if elapsed.as_secs_f64() > 0.0 {
        nodes as f64 / elapsed.as_secs_f64()
    } else {
        0.0
    }
}
