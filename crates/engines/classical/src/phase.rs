//! Coarse game-phase classification.
//!
//! The phase only selects which weights the evaluation applies; it never
//! changes what a legal move is.

use chess_core::{PieceKind, Position};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GamePhase {
    Opening,
    Middlegame,
    Endgame,
}

/// More pieces than this on the board (kings and pawns included) is an opening.
pub const OPENING_PIECE_THRESHOLD: usize = 28;

pub fn classify(pos: &Position) -> GamePhase {
    let mut queens = 0;
    let mut pieces = 0;
    let mut total = 0;
    for (_, piece) in pos.pieces() {
        total += 1;
        match piece.kind {
            PieceKind::Queen => queens += 1,
            PieceKind::Knight | PieceKind::Bishop | PieceKind::Rook => pieces += 1,
            PieceKind::Pawn | PieceKind::King => {}
        }
    }

    if (queens == 0 && pieces <= 4) || (queens == 1 && pieces <= 2) {
        GamePhase::Endgame
    } else if total > OPENING_PIECE_THRESHOLD {
        GamePhase::Opening
    } else {
        GamePhase::Middlegame
    }
}

#[cfg(test)]
#[path = "phase_tests.rs"]
mod phase_tests;
