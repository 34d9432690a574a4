//! Human against engine at the terminal.
//!
//! Turn order is an explicit state machine: `HumanTurn` and `AiTurn`
//! alternate by side to move until the game ends or the human leaves, which
//! both land in `GameOver`. The engine is an opaque [`Engine`]; the loop owns
//! the [`Game`] and lends it out for each search.

use std::io::{self, BufRead, Write};

use chess_core::{
    Color, Engine, Game, Move, MoveParseError, Outcome, Position, move_to_san, parse_san,
    parse_uci_move,
};
use tracing::{debug, info};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum State {
    HumanTurn,
    AiTurn,
    GameOver,
}

/// Accepts coordinate notation (`e2e4`, `e7e8q`) or SAN (`e4`, `Nf3`, `O-O`).
pub fn parse_human_move(pos: &Position, text: &str) -> Result<Move, MoveParseError> {
    parse_uci_move(pos, text).or_else(|_| parse_san(pos, text))
}

/// The board as text, White at the bottom.
pub fn render_board(pos: &Position) -> String {
    let mut out = String::with_capacity(200);
    for rank in (0..8u8).rev() {
        out.push((b'1' + rank) as char);
        for file in 0..8u8 {
            out.push(' ');
            out.push(pos.piece_at(rank * 8 + file).map_or('.', |p| p.symbol()));
        }
        out.push('\n');
    }
    out.push_str("  a b c d e f g h");
    out
}

pub struct GameLoop<R, W> {
    game: Game,
    engine: Box<dyn Engine>,
    depth: u8,
    ai_color: Color,
    state: State,
    input: R,
    out: W,
}

impl<R: BufRead, W: Write> GameLoop<R, W> {
    pub fn new(
        game: Game,
        engine: Box<dyn Engine>,
        depth: u8,
        ai_color: Color,
        input: R,
        out: W,
    ) -> Self {
        let mut this = Self {
            game,
            engine,
            depth: depth.max(1),
            ai_color,
            state: State::GameOver,
            input,
            out,
        };
        this.state = this.next_state();
        this
    }

    pub fn state(&self) -> State {
        self.state
    }

    pub fn game(&self) -> &Game {
        &self.game
    }

    /// Plays until the game is over. Returns `None` if the human left first.
    pub fn run(&mut self) -> io::Result<Option<Outcome>> {
        writeln!(self.out, "{}", render_board(self.game.position()))?;
        while self.state != State::GameOver {
            self.step()?;
        }

        let outcome = self.game.outcome();
        match outcome {
            Some(o) => writeln!(self.out, "Game over: {} ({:?})", o.result(), o.termination)?,
            None => writeln!(self.out, "Game abandoned")?,
        }
        Ok(outcome)
    }

    /// Runs the current state once and moves to the next.
    pub fn step(&mut self) -> io::Result<State> {
        self.state = match self.state {
            State::HumanTurn => self.human_turn()?,
            State::AiTurn => self.ai_turn()?,
            State::GameOver => State::GameOver,
        };
        debug!(state = ?self.state, ply = self.game.ply(), "state transition");
        Ok(self.state)
    }

    fn next_state(&self) -> State {
        if self.game.is_game_over() {
            State::GameOver
        } else if self.game.side_to_move() == self.ai_color {
            State::AiTurn
        } else {
            State::HumanTurn
        }
    }

    fn human_turn(&mut self) -> io::Result<State> {
        loop {
            write!(self.out, "{} to move> ", self.game.side_to_move())?;
            self.out.flush()?;

            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                return Ok(State::GameOver);
            }
            match line.trim() {
                "" => continue,
                "quit" | "resign" => return Ok(State::GameOver),
                "board" => {
                    writeln!(self.out, "{}", render_board(self.game.position()))?;
                }
                "moves" => {
                    let pos = self.game.position();
                    let moves: Vec<String> = self
                        .game
                        .legal_moves()
                        .into_iter()
                        .map(|mv| move_to_san(pos, mv))
                        .collect();
                    writeln!(self.out, "{}", moves.join(" "))?;
                }
                text => match parse_human_move(self.game.position(), text) {
                    Ok(mv) => {
                        let san = move_to_san(self.game.position(), mv);
                        self.game.push(mv);
                        writeln!(self.out, "You played {san}")?;
                        return Ok(self.next_state());
                    }
                    Err(err) => writeln!(self.out, "{err}")?,
                },
            }
        }
    }

    fn ai_turn(&mut self) -> io::Result<State> {
        let result = self.engine.search(&mut self.game, self.depth);
        let Some(mv) = result.best_move else {
            return Ok(State::GameOver);
        };

        let san = move_to_san(self.game.position(), mv);
        info!(mv = %mv, score = result.score, nodes = result.nodes, "engine move");
        self.game.push(mv);

        writeln!(
            self.out,
            "{} plays {san} (eval {:+.2})",
            self.engine.name(),
            result.score
        )?;
        writeln!(self.out, "{}", render_board(self.game.position()))?;
        Ok(self.next_state())
    }
}

#[cfg(test)]
#[path = "game_loop_tests.rs"]
mod game_loop_tests;
