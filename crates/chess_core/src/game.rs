//! A position together with the moves that led to it.
//!
//! `Game` owns the undo stack and the key history, so it can answer
//! repetition questions and take moves back in strict LIFO order. Searches
//! borrow it mutably and apply moves through [`Game::play`], whose guard
//! undoes the move when it goes out of scope.

use std::ops::{Deref, DerefMut};

use crate::board::{Position, Undo};
use crate::error::FenError;
use crate::movegen::{legal_move_count, legal_moves, legal_moves_into};
use crate::types::{Color, Move};
use crate::zobrist::position_key;

/// Why a game ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Termination {
    Checkmate,
    Stalemate,
    InsufficientMaterial,
    SeventyFiveMoves,
    FivefoldRepetition,
}

/// How a game ended. `winner` is `None` for draws.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Outcome {
    pub termination: Termination,
    pub winner: Option<Color>,
}

impl Outcome {
    /// PGN-style result string.
    pub fn result(&self) -> &'static str {
        match self.winner {
            Some(Color::White) => "1-0",
            Some(Color::Black) => "0-1",
            None => "1/2-1/2",
        }
    }
}

#[derive(Clone, Debug)]
pub struct Game {
    pos: Position,
    stack: Vec<(Move, Undo)>,
    /// Key of every position reached, the current one last.
    keys: Vec<u64>,
}

impl Default for Game {
    fn default() -> Self {
        Self::new(Position::startpos())
    }
}

impl Game {
    pub fn new(pos: Position) -> Self {
        let key = position_key(&pos);
        Self {
            pos,
            stack: Vec::with_capacity(128),
            keys: vec![key],
        }
    }

    pub fn startpos() -> Self {
        Self::default()
    }

    pub fn from_fen(fen: &str) -> Result<Self, FenError> {
        Position::from_fen(fen).map(Self::new)
    }

    pub fn position(&self) -> &Position {
        &self.pos
    }

    pub fn side_to_move(&self) -> Color {
        self.pos.side_to_move
    }

    /// Moves applied since the game was created, oldest first.
    pub fn moves(&self) -> impl Iterator<Item = Move> + '_ {
        self.stack.iter().map(|(mv, _)| *mv)
    }

    /// Number of moves currently on the undo stack.
    pub fn ply(&self) -> usize {
        self.stack.len()
    }

    pub fn legal_moves(&self) -> Vec<Move> {
        legal_moves(&self.pos)
    }

    /// Legal move count for `color`, whoever is actually to move.
    pub fn legal_move_count(&self, color: Color) -> usize {
        legal_move_count(&self.pos, color)
    }

    pub fn is_capture(&self, mv: Move) -> bool {
        self.pos.is_capture(mv)
    }

    pub fn gives_check(&self, mv: Move) -> bool {
        self.pos.gives_check(mv)
    }

    pub fn is_check(&self) -> bool {
        self.pos.in_check(self.pos.side_to_move)
    }

    /// Applies `mv`, which must be legal, and keeps it on the undo stack.
    pub fn push(&mut self, mv: Move) {
        let undo = self.pos.make_move(mv);
        self.stack.push((mv, undo));
        self.keys.push(position_key(&self.pos));
    }

    /// Takes back the most recent move.
    pub fn pop(&mut self) -> Option<Move> {
        let (mv, undo) = self.stack.pop()?;
        self.keys.pop();
        self.pos.unmake_move(mv, undo);
        Some(mv)
    }

    /// Applies `mv` for as long as the returned guard lives.
    pub fn play(&mut self, mv: Move) -> MoveGuard<'_> {
        self.push(mv);
        let ply = self.stack.len();
        MoveGuard { game: self, ply }
    }

    /// How many times the current position occurred before, counting only
    /// positions with the same side to move, castling rights and usable
    /// en-passant square.
    pub fn repetition_count(&self) -> usize {
        let Some((current, earlier)) = self.keys.split_last() else {
            return 0;
        };
        // An irreversible move cuts the history: nothing older can recur.
        let window = (self.pos.halfmove_clock as usize).min(earlier.len());
        earlier[earlier.len() - window..]
            .iter()
            .filter(|&&k| k == *current)
            .count()
    }

    /// True if the current position has occurred at least `count` times,
    /// this occurrence included.
    pub fn is_repetition(&self, count: usize) -> bool {
        self.repetition_count() + 1 >= count
    }

    fn has_legal_moves(&self) -> bool {
        let mut scratch = self.pos.clone();
        let mut buf = Vec::with_capacity(64);
        legal_moves_into(&mut scratch, &mut buf);
        !buf.is_empty()
    }

    pub fn is_checkmate(&self) -> bool {
        self.is_check() && !self.has_legal_moves()
    }

    pub fn is_stalemate(&self) -> bool {
        !self.is_check() && !self.has_legal_moves()
    }

    pub fn is_insufficient_material(&self) -> bool {
        self.pos.is_insufficient_material()
    }

    pub fn is_seventyfive_moves(&self) -> bool {
        self.pos.halfmove_clock >= 150 && self.has_legal_moves()
    }

    pub fn is_fivefold_repetition(&self) -> bool {
        self.is_repetition(5)
    }

    /// The automatic end of the game, if it is over. Draws that a player
    /// must claim (fifty moves, threefold repetition) do not end it.
    pub fn outcome(&self) -> Option<Outcome> {
        let draw = |termination| Outcome {
            termination,
            winner: None,
        };
        if !self.has_legal_moves() {
            return Some(if self.is_check() {
                Outcome {
                    termination: Termination::Checkmate,
                    winner: Some(self.side_to_move().other()),
                }
            } else {
                draw(Termination::Stalemate)
            });
        }
        if self.is_insufficient_material() {
            return Some(draw(Termination::InsufficientMaterial));
        }
        if self.pos.halfmove_clock >= 150 {
            return Some(draw(Termination::SeventyFiveMoves));
        }
        if self.is_fivefold_repetition() {
            return Some(draw(Termination::FivefoldRepetition));
        }
        None
    }

    pub fn is_game_over(&self) -> bool {
        self.outcome().is_some()
    }
}

/// A move applied to a [`Game`], undone when the guard is dropped.
///
/// The guard dereferences to the game so a search can recurse into the
/// child position. Anything the child pushes must be popped again before
/// the guard goes away; a guard that finds foreign moves above its own
/// treats that as a broken invariant and panics.
pub struct MoveGuard<'a> {
    game: &'a mut Game,
    ply: usize,
}

impl Deref for MoveGuard<'_> {
    type Target = Game;

    fn deref(&self) -> &Game {
        self.game
    }
}

impl DerefMut for MoveGuard<'_> {
    fn deref_mut(&mut self) -> &mut Game {
        self.game
    }
}

impl Drop for MoveGuard<'_> {
    fn drop(&mut self) {
        let depth = self.game.stack.len();
        if depth != self.ply && !std::thread::panicking() {
            panic!(
                "unbalanced move stack: guard for ply {} found {} moves",
                self.ply, depth
            );
        }
        // While unwinding, take back whatever the failed child left as well.
        while self.game.stack.len() >= self.ply {
            self.game.pop();
        }
    }
}

#[cfg(test)]
#[path = "game_tests.rs"]
mod game_tests;
