//! Play CLI
//!
//! Human against the classical engine in the terminal.

use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use chess_core::Game;
use clap::Parser;
use classical_engine::ClassicalEngine;
use play::{EngineConfig, GameLoop, Side};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "play")]
#[command(about = "Play chess against the alpha-beta engine", long_about = None)]
struct Args {
    /// TOML file with depth, ai_color and piece_values
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Search depth in plies (overrides the config file)
    #[arg(short, long)]
    depth: Option<u8>,

    /// Side the engine plays (overrides the config file)
    #[arg(short, long, value_enum)]
    ai_color: Option<Side>,

    /// Start from this FEN instead of the initial position
    #[arg(short, long)]
    fen: Option<String>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => EngineConfig::load(path)?,
        None => EngineConfig::default(),
    };
    if let Some(depth) = args.depth {
        config.depth = depth;
    }
    if let Some(side) = args.ai_color {
        config.ai_color = side;
    }
    let config = config.validate()?;
    info!(depth = config.depth, ai_color = ?config.ai_color, "starting game");

    let game = match &args.fen {
        Some(fen) => Game::from_fen(fen).with_context(|| format!("invalid FEN '{fen}'"))?,
        None => Game::startpos(),
    };

    let engine = ClassicalEngine::with_values(config.piece_values);
    let mut game_loop = GameLoop::new(
        game,
        Box::new(engine),
        config.depth,
        config.ai_color.into(),
        io::stdin().lock(),
        io::stdout(),
    );
    game_loop.run().context("terminal I/O failed")?;
    Ok(())
}
