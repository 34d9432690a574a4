//! Terminal front end: a human plays the classical engine.

pub mod config;
pub mod game_loop;

pub use config::{ConfigError, EngineConfig, Side};
pub use game_loop::{GameLoop, State, parse_human_move, render_board};
