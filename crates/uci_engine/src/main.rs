mod session;

use std::io::{self, BufRead};

use anyhow::{Context, Result};
use classical_engine::ClassicalEngine;
use tracing_subscriber::EnvFilter;

use session::{Flow, UciSession};

fn main() -> Result<()> {
    // stdout carries the protocol; logs go to stderr.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let stdin = io::stdin();
    let mut session = UciSession::new(ClassicalEngine::new(), io::stdout());

    for line in stdin.lock().lines() {
        let line = line.context("failed to read from stdin")?;
        if session.handle_line(line.trim())? == Flow::Quit {
            break;
        }
    }
    Ok(())
}
