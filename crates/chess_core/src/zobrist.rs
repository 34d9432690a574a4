//! Zobrist hashing for repetition detection.
//!
//! The key XORs together random values for every piece on its square, the
//! side to move, the castling rights and, when an en-passant capture is
//! actually available, the en-passant file. Two positions share a key exactly
//! when they count as the same position for the repetition rules.

use crate::board::Position;
use crate::types::{Color, Piece, PieceKind, file_of, rank_of, sq};

/// Pre-computed random values for Zobrist hashing.
/// Generated using a fixed seed for reproducibility.
pub struct ZobristKeys {
    /// Indexed by [color][piece_kind][square]
    pub pieces: [[[u64; 64]; 6]; 2],
    /// XOR-ed in when Black is to move
    pub side_to_move: u64,
    /// [wk, wq, bk, bq]
    pub castling: [u64; 4],
    /// One per en-passant file
    pub en_passant: [u64; 8],
}

impl Default for ZobristKeys {
    fn default() -> Self {
        Self::new()
    }
}

impl ZobristKeys {
    /// Fills every table from an xorshift64 stream with a fixed seed.
    pub const fn new() -> Self {
        const fn xorshift64(mut state: u64) -> u64 {
            state ^= state << 13;
            state ^= state >> 7;
            state ^= state << 17;
            state
        }

        let mut state = 0x9E37_79B9_7F4A_7C15u64;

        let mut pieces = [[[0u64; 64]; 6]; 2];
        let mut color = 0;
        while color < 2 {
            let mut kind = 0;
            while kind < 6 {
                let mut s = 0;
                while s < 64 {
                    state = xorshift64(state);
                    pieces[color][kind][s] = state;
                    s += 1;
                }
                kind += 1;
            }
            color += 1;
        }

        state = xorshift64(state);
        let side_to_move = state;

        let mut castling = [0u64; 4];
        let mut i = 0;
        while i < 4 {
            state = xorshift64(state);
            castling[i] = state;
            i += 1;
        }

        let mut en_passant = [0u64; 8];
        let mut i = 0;
        while i < 8 {
            state = xorshift64(state);
            en_passant[i] = state;
            i += 1;
        }

        ZobristKeys {
            pieces,
            side_to_move,
            castling,
            en_passant,
        }
    }

    #[inline(always)]
    pub fn piece_key(&self, piece: Piece, sq: u8) -> u64 {
        self.pieces[piece.color.idx()][piece.kind.idx()][sq as usize]
    }
}

/// Global static Zobrist keys, computed at compile time.
pub static ZOBRIST: ZobristKeys = ZobristKeys::new();

/// True if a pawn of the side to move stands next to the pawn that just
/// double-pushed, so the en-passant square matters for repetition.
fn en_passant_capturable(pos: &Position) -> Option<u8> {
    let ep = pos.en_passant?;
    let mover = pos.side_to_move;
    let from_rank = rank_of(ep) - mover.forward();
    let capturer = Piece::new(mover, PieceKind::Pawn);
    [-1, 1]
        .into_iter()
        .filter_map(|df| sq(file_of(ep) + df, from_rank))
        .any(|s| pos.piece_at(s) == Some(capturer))
        .then_some(ep)
}

/// Full-board key of `pos`.
pub fn position_key(pos: &Position) -> u64 {
    let mut h = 0u64;
    for (s, pc) in pos.pieces() {
        h ^= ZOBRIST.piece_key(pc, s);
    }
    if pos.side_to_move == Color::Black {
        h ^= ZOBRIST.side_to_move;
    }
    let c = &pos.castling;
    for (i, right) in [c.wk, c.wq, c.bk, c.bq].into_iter().enumerate() {
        if right {
            h ^= ZOBRIST.castling[i];
        }
    }
    if let Some(ep) = en_passant_capturable(pos) {
        h ^= ZOBRIST.en_passant[file_of(ep) as usize];
    }
    h
}

#[cfg(test)]
#[path = "zobrist_tests.rs"]
mod zobrist_tests;
