//! One UCI conversation: parses commands, keeps the current game and
//! writes replies.

use std::io::{self, Write};

use chess_core::{Color, Engine, Game, game_from_uci_position, move_to_uci};
use classical_engine::{ClassicalEngine, DEFAULT_DEPTH, MATE_SCORE, MAX_DEPTH, Score};
use tracing::{debug, warn};

/// Whether the read loop should keep going.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

pub struct UciSession<W: Write> {
    engine: ClassicalEngine,
    game: Game,
    out: W,
}

impl<W: Write> UciSession<W> {
    pub fn new(engine: ClassicalEngine, out: W) -> Self {
        Self {
            engine,
            game: Game::startpos(),
            out,
        }
    }

    pub fn handle_line(&mut self, line: &str) -> io::Result<Flow> {
        let parts: Vec<&str> = line.split_whitespace().collect();
        let Some((&command, args)) = parts.split_first() else {
            return Ok(Flow::Continue);
        };
        debug!(command, "uci command");

        match command {
            "uci" => {
                writeln!(self.out, "id name {}", self.engine.name())?;
                writeln!(self.out, "id author {}", self.engine.author())?;
                writeln!(
                    self.out,
                    "option name Depth type spin default {DEFAULT_DEPTH} min 1 max {MAX_DEPTH}"
                )?;
                writeln!(self.out, "uciok")?;
            }
            "isready" => writeln!(self.out, "readyok")?,
            "setoption" => self.set_option(args),
            "ucinewgame" => {
                self.game = Game::startpos();
                self.engine.new_game();
            }
            "position" => match game_from_uci_position(args) {
                Ok(game) => self.game = game,
                Err(err) => warn!(%err, "ignoring position command"),
            },
            "go" => self.go(args)?,
            "quit" => return Ok(Flow::Quit),
            _ => debug!(command, "unknown command ignored"),
        }
        self.out.flush()?;
        Ok(Flow::Continue)
    }

    /// `setoption name <id> [value <x>]`
    fn set_option(&mut self, args: &[&str]) {
        let Some(name_at) = args.iter().position(|&t| t == "name") else {
            return;
        };
        let value_at = args.iter().position(|&t| t == "value");
        let name_end = value_at.unwrap_or(args.len());
        let name = args.get(name_at + 1..name_end).unwrap_or_default().join(" ");
        let value = value_at
            .and_then(|i| args.get(i + 1..))
            .unwrap_or_default()
            .join(" ");

        if !self.engine.set_option(&name, &value) {
            warn!(%name, "unknown option");
        }
    }

    fn go(&mut self, args: &[&str]) -> io::Result<()> {
        let depth = args
            .iter()
            .position(|&t| t == "depth")
            .and_then(|i| args.get(i + 1))
            .and_then(|d| d.parse::<u8>().ok())
            .map_or(self.engine.depth(), |d| d.clamp(1, MAX_DEPTH));

        let result = self.engine.search(&mut self.game, depth);
        writeln!(
            self.out,
            "info depth {} score {} nodes {}",
            result.depth,
            uci_score(result.score, self.game.side_to_move()),
            result.nodes
        )?;
        match result.best_move {
            Some(mv) => writeln!(self.out, "bestmove {}", move_to_uci(mv)),
            None => writeln!(self.out, "bestmove 0000"),
        }
    }
}

/// Formats a White-perspective score the way UCI wants it: relative to the
/// side to move, in centipawns or in moves to mate.
pub fn uci_score(score: Score, side: Color) -> String {
    let relative = match side {
        Color::White => score,
        Color::Black => -score,
    };
    let plies = MATE_SCORE - relative.abs();
    if plies < 1000.0 {
        let moves = (plies as i64 + 1) / 2;
        format!("mate {}", if relative > 0.0 { moves } else { -moves })
    } else {
        format!("cp {}", (relative * 100.0).round() as i64)
    }
}

#[cfg(test)]
#[path = "session_tests.rs"]
mod session_tests;
