//! Error types for position setup and move input.

use thiserror::Error;

/// Errors raised while parsing Forsyth-Edwards Notation.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FenError {
    #[error("expected at least 4 FEN fields, found {found}")]
    MissingFields { found: usize },

    #[error("expected 8 ranks in board section, found {found}")]
    RankCount { found: usize },

    #[error("rank {rank} does not describe exactly 8 files")]
    RankWidth { rank: u8 },

    #[error("invalid piece character '{0}'")]
    InvalidPiece(char),

    #[error("invalid side to move '{0}'")]
    InvalidSideToMove(String),

    #[error("invalid castling character '{0}'")]
    InvalidCastling(char),

    #[error("invalid en passant square '{0}'")]
    InvalidEnPassant(String),

    #[error("invalid move counter '{0}'")]
    InvalidCounter(String),

    #[error("{color} must have exactly one king")]
    KingCount { color: crate::Color },
}

/// Errors raised while reading a move typed by a user or sent over UCI.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MoveParseError {
    #[error("'{0}' is not a move in coordinate or algebraic notation")]
    Syntax(String),

    #[error("'{0}' is not legal in this position")]
    Illegal(String),

    #[error("'{0}' matches more than one legal move")]
    Ambiguous(String),
}

/// Errors raised by a UCI `position` command.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SetupError {
    #[error(transparent)]
    Fen(#[from] FenError),

    #[error(transparent)]
    Move(#[from] MoveParseError),
}
