//! Piece value table supplied by the caller of a search.
//!
//! Values are signed: White's pieces count positive and Black's negative, so
//! summing the table over the board gives the material balance directly.

use std::collections::BTreeMap;

use chess_core::{Color, Piece, PieceKind};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors raised while building a [`PieceValueTable`].
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("unknown piece symbol '{0}' (expected one of PNBRQKpnbrqk)")]
    UnknownSymbol(String),

    #[error("piece value table has no entry for '{0}'")]
    MissingSymbol(char),

    #[error("piece value for '{symbol}' is not finite")]
    NonFinite { symbol: char },

    #[error("failed to parse piece values: {0}")]
    Toml(#[from] toml::de::Error),
}

const SYMBOLS: [char; 12] = ['P', 'N', 'B', 'R', 'Q', 'K', 'p', 'n', 'b', 'r', 'q', 'k'];

/// Signed relative strength for every piece symbol.
///
/// Serializes as a map from FEN symbol to value, e.g. `P = 1.0`, `p = -1.0`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "BTreeMap<String, f64>", into = "BTreeMap<String, f64>")]
pub struct PieceValueTable {
    /// Indexed by [color][piece_kind]
    values: [[f64; 6]; 2],
}

impl Default for PieceValueTable {
    fn default() -> Self {
        Self::standard()
    }
}

impl PieceValueTable {
    /// Pawn 1, knight 3, bishop 3, rook 5, queen 9, king 10; Black mirrored negative.
    pub fn standard() -> Self {
        let white = [1.0, 3.0, 3.0, 5.0, 9.0, 10.0];
        Self {
            values: [white, white.map(|v| -v)],
        }
    }

    /// Builds a table from `(symbol, value)` pairs. All twelve symbols are required.
    pub fn from_symbols(
        pairs: impl IntoIterator<Item = (char, f64)>,
    ) -> Result<Self, ConfigError> {
        let mut values = [[None; 6]; 2];
        for (symbol, value) in pairs {
            let piece = Piece::from_symbol(symbol)
                .ok_or_else(|| ConfigError::UnknownSymbol(symbol.to_string()))?;
            if !value.is_finite() {
                return Err(ConfigError::NonFinite { symbol });
            }
            values[piece.color.idx()][piece.kind.idx()] = Some(value);
        }

        let mut table = [[0.0; 6]; 2];
        for symbol in SYMBOLS {
            let piece = Piece::from_symbol(symbol).ok_or(ConfigError::MissingSymbol(symbol))?;
            table[piece.color.idx()][piece.kind.idx()] = values[piece.color.idx()]
                [piece.kind.idx()]
            .ok_or(ConfigError::MissingSymbol(symbol))?;
        }
        Ok(Self { values: table })
    }

    /// Parses a TOML table such as `P = 1.0\np = -1.0\n...`.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(s)?)
    }

    #[inline]
    pub fn value(&self, piece: Piece) -> f64 {
        self.values[piece.color.idx()][piece.kind.idx()]
    }

    pub fn get(&self, color: Color, kind: PieceKind) -> f64 {
        self.value(Piece::new(color, kind))
    }
}

impl TryFrom<BTreeMap<String, f64>> for PieceValueTable {
    type Error = ConfigError;

    fn try_from(map: BTreeMap<String, f64>) -> Result<Self, Self::Error> {
        let mut pairs = Vec::with_capacity(map.len());
        for (key, value) in map {
            let mut chars = key.chars();
            match (chars.next(), chars.next()) {
                (Some(symbol), None) => pairs.push((symbol, value)),
                _ => return Err(ConfigError::UnknownSymbol(key)),
            }
        }
        Self::from_symbols(pairs)
    }
}

impl From<PieceValueTable> for BTreeMap<String, f64> {
    fn from(table: PieceValueTable) -> Self {
        SYMBOLS
            .iter()
            .filter_map(|&s| Piece::from_symbol(s).map(|p| (s.to_string(), table.value(p))))
            .collect()
    }
}

#[cfg(test)]
#[path = "values_tests.rs"]
mod values_tests;
