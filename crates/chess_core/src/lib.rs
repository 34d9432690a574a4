//! Chess rules: board state, legal moves, make/unmake, game termination and
//! move notation. Engines consume this crate through [`Game`] and implement
//! [`Engine`].

pub mod board;
pub mod error;
pub mod game;
pub mod movegen;
pub mod perft;
pub mod san;
pub mod types;
pub mod uci;
pub mod zobrist;

pub use board::*;
pub use error::*;
pub use game::*;
pub use movegen::*;
pub use perft::{perft, perft_divide};
pub use san::{move_to_san, parse_san};
pub use types::*;
pub use uci::*;
pub use zobrist::{ZOBRIST, position_key};

// =============================================================================
// Engine trait — the service a presentation layer asks for moves
// =============================================================================

/// Result of a search operation
#[derive(Debug, Clone)]
pub struct SearchResult {
    /// The best move found (None if no legal moves or depth 0)
    pub best_move: Option<Move>,
    /// Evaluation from White's perspective, in pawns
    pub score: f64,
    /// Search depth in plies
    pub depth: u8,
    /// Number of nodes searched
    pub nodes: u64,
}

/// Trait that all chess engines must implement.
pub trait Engine: Send {
    /// Search the game's current position `depth` plies deep.
    ///
    /// The game is borrowed mutably for the duration of the search and must
    /// be handed back exactly as it was received.
    fn search(&mut self, game: &mut Game, depth: u8) -> SearchResult;

    /// Returns the engine's name for UCI identification
    fn name(&self) -> &str;

    /// Returns the engine's author for UCI identification
    fn author(&self) -> &str {
        "chess-ai"
    }

    /// Reset internal state for a new game
    fn new_game(&mut self) {}

    /// Optional: Set a UCI option. Returns true if the option was recognized.
    fn set_option(&mut self, _name: &str, _value: &str) -> bool {
        false
    }
}
