//! Static evaluation of a game position.
//!
//! Scores are in pawns from White's perspective: positive favours White.
//! Every positional term is computed for the piece's owner and then signed,
//! so a colour-mirrored position evaluates to the negated score.

use chess_core::{
    Color, Game, Outcome, Piece, PieceKind, Position, Termination, adjacent_squares, file_of,
    rank_of,
};

use crate::phase::{GamePhase, classify};
use crate::values::PieceValueTable;

pub type Score = f64;

/// Magnitude of a checkmate score. Finite so a mated side still ranks its moves.
pub const MATE_SCORE: Score = 1_000_000.0;

const MOBILITY_WEIGHT: f64 = 0.1;
const CENTER_BONUS: f64 = 0.3;
const KING_SAFETY_WEIGHT: f64 = 0.4;
const KING_ACTIVITY_WEIGHT: f64 = 0.6;
const MINOR_ACTIVITY_WEIGHT: f64 = 0.2;
const ROOK_WEIGHT: f64 = 0.3;
const PAWN_STRUCTURE_WEIGHT: f64 = 0.2;

/// d4, e4, d5, e5
const CENTER: [u8; 4] = [27, 28, 35, 36];

/// Development bonus and penalty for minor pieces, by phase.
fn development(phase: GamePhase) -> (f64, f64) {
    match phase {
        GamePhase::Opening => (0.2, -0.1),
        GamePhase::Middlegame => (0.1, -0.2),
        GamePhase::Endgame => (0.0, 0.0),
    }
}

#[inline]
fn sign(color: Color) -> f64 {
    match color {
        Color::White => 1.0,
        Color::Black => -1.0,
    }
}

/// Evaluates the game's current position.
///
/// Finished games score exactly: `±MATE_SCORE` for checkmate and `0.0` for
/// every draw. Otherwise the score sums material, mobility and the
/// positional terms below, plus a penalty on the side that just repeated a
/// position.
pub fn evaluate(game: &Game, values: &PieceValueTable) -> Score {
    match game.outcome() {
        Some(outcome) => terminal_score(outcome),
        None => ongoing_score(game, values),
    }
}

/// Exact score of a finished game.
pub fn terminal_score(outcome: Outcome) -> Score {
    match (outcome.termination, outcome.winner) {
        (Termination::Checkmate, Some(winner)) => sign(winner) * MATE_SCORE,
        _ => 0.0,
    }
}

/// [`evaluate`] for a game the caller already knows is still going.
pub(crate) fn ongoing_score(game: &Game, values: &PieceValueTable) -> Score {
    let pos = game.position();
    let phase = classify(pos);

    let mut score = material(pos, values) + mobility(game);
    for (sq, piece) in pos.pieces() {
        score += sign(piece.color) * piece_terms(pos, sq, piece, phase);
    }
    score + repetition(game)
}

/// Sum of the table over every occupied square.
pub fn material(pos: &Position, values: &PieceValueTable) -> Score {
    pos.pieces().map(|(_, piece)| values.value(piece)).sum()
}

/// Difference in legal move counts, each side counted as if it were to move.
pub fn mobility(game: &Game) -> Score {
    let white = game.legal_move_count(Color::White) as f64;
    let black = game.legal_move_count(Color::Black) as f64;
    MOBILITY_WEIGHT * (white - black)
}

/// Positional value of one piece for its owner.
fn piece_terms(pos: &Position, sq: u8, piece: Piece, phase: GamePhase) -> f64 {
    let color = piece.color;
    let mut value = 0.0;
    if piece.kind != PieceKind::King && CENTER.contains(&sq) {
        value += CENTER_BONUS;
    }

    match piece.kind {
        PieceKind::King => {
            value += KING_SAFETY_WEIGHT * king_safety(pos, sq);
            value += KING_ACTIVITY_WEIGHT * king_activity(sq, color, phase);
        }
        PieceKind::Knight | PieceKind::Bishop => {
            value += MINOR_ACTIVITY_WEIGHT * center_proximity(sq);
            let (developed, undeveloped) = development(phase);
            value += if on_start_square(sq, piece) {
                undeveloped
            } else {
                developed
            };
        }
        PieceKind::Rook => value += ROOK_WEIGHT * rook_placement(pos, sq, color),
        PieceKind::Pawn => value += PAWN_STRUCTURE_WEIGHT * pawn_structure(pos, sq, color),
        PieceKind::Queen => value += queen_placement(sq, color, phase),
    }
    value
}

/// 1.0 on the four center squares falling to 0.0 in the corners.
pub fn center_proximity(sq: u8) -> f64 {
    let df = (2 * file_of(sq) - 7).abs();
    let dr = (2 * rank_of(sq) - 7).abs();
    f64::from(14 - df - dr) / 12.0
}

/// Shelter around the king on `sq`: friendly neighbours help, empty ones hurt.
pub fn king_safety(pos: &Position, sq: u8) -> f64 {
    let Some(king) = pos.piece_at(sq) else {
        return 0.0;
    };
    adjacent_squares(sq)
        .map(|s| match pos.piece_at(s) {
            Some(p) if p.color == king.color => 0.3,
            Some(_) => 0.0,
            None => -0.2,
        })
        .sum()
}

pub fn king_activity(sq: u8, color: Color, phase: GamePhase) -> f64 {
    let advance = f64::from((rank_of(sq) - color.home_rank()).abs());
    match phase {
        GamePhase::Endgame => 0.8 * center_proximity(sq),
        GamePhase::Opening => -0.15 * advance,
        GamePhase::Middlegame => -0.1 * advance,
    }
}

fn on_start_square(sq: u8, piece: Piece) -> bool {
    if rank_of(sq) != piece.color.home_rank() {
        return false;
    }
    match piece.kind {
        PieceKind::Knight => matches!(file_of(sq), 1 | 6),
        PieceKind::Bishop => matches!(file_of(sq), 2 | 5),
        _ => false,
    }
}

/// Rank counted from `color`'s side of the board (0 = home rank).
fn relative_rank(sq: u8, color: Color) -> i8 {
    match color {
        Color::White => rank_of(sq),
        Color::Black => 7 - rank_of(sq),
    }
}

fn pawns_on_file(pos: &Position, file: i8) -> impl Iterator<Item = (u8, Piece)> + '_ {
    pos.pieces()
        .filter(move |&(s, p)| p.kind == PieceKind::Pawn && file_of(s) == file)
}

/// Open and semi-open files, plus the seventh rank.
pub fn rook_placement(pos: &Position, sq: u8, color: Color) -> f64 {
    let (mut own, mut enemy) = (false, false);
    for (_, pawn) in pawns_on_file(pos, file_of(sq)) {
        if pawn.color == color {
            own = true;
        } else {
            enemy = true;
        }
    }
    let file = match (own, enemy) {
        (false, false) => 0.3,
        (false, true) => 0.15,
        (true, _) => 0.0,
    };
    let seventh = if relative_rank(sq, color) == 6 { 0.2 } else { 0.0 };
    file + seventh
}

/// Isolated pawns are penalised; passed pawns are rewarded, more so once
/// they reach the sixth rank.
pub fn pawn_structure(pos: &Position, sq: u8, color: Color) -> f64 {
    let file = file_of(sq);
    let rank = relative_rank(sq, color);
    let ahead = |s: u8| relative_rank(s, color) > rank;

    let isolated = ![file - 1, file + 1]
        .into_iter()
        .any(|f| pawns_on_file(pos, f).any(|(_, p)| p.color == color));

    // an enemy pawn ahead on the same file also means no bonus
    let passed = !(file - 1..=file + 1)
        .any(|f| pawns_on_file(pos, f).any(|(s, p)| p.color != color && ahead(s)));

    let mut value = if isolated { -0.3 } else { 0.0 };
    if passed {
        value += if rank >= 5 { 0.5 } else { 0.2 };
    }
    value
}

pub fn queen_placement(sq: u8, color: Color, phase: GamePhase) -> f64 {
    let endgame = phase == GamePhase::Endgame;
    let home = rank_of(sq) == color.home_rank() && file_of(sq) == 3;
    if !endgame && home {
        -0.5
    } else if endgame && CENTER.contains(&sq) {
        0.2
    } else {
        0.0
    }
}

/// Penalty against whichever side made the move that repeated a position.
pub fn repetition(game: &Game) -> Score {
    let penalty = match game.repetition_count() {
        0 => return 0.0,
        1 => 0.2,
        _ => 0.8,
    };
    let mover = game.side_to_move().other();
    -sign(mover) * penalty
}

#[cfg(test)]
#[path = "eval_tests.rs"]
mod eval_tests;
