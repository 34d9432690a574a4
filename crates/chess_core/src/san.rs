//! Standard Algebraic Notation (`e4`, `Nbd7`, `exd5`, `O-O`, `e8=Q+`).
//!
//! Only the presentation layers read SAN; the search works with [`Move`]
//! values directly.

use crate::{board::Position, error::MoveParseError, movegen::legal_moves, types::*};

/// What a SAN token says about the move, before it is matched against the
/// legal move list.
#[derive(Debug, Default)]
struct SanPattern {
    kind: Option<PieceKind>,
    from_file: Option<i8>,
    from_rank: Option<i8>,
    to: u8,
    promo: Option<PieceKind>,
    castle_to_file: Option<i8>,
}

fn parse_pattern(san: &str) -> Option<SanPattern> {
    let body = san.trim_end_matches(['+', '#', '!', '?']);

    match body {
        "O-O" | "0-0" => {
            return Some(SanPattern {
                castle_to_file: Some(6),
                ..Default::default()
            });
        }
        "O-O-O" | "0-0-0" => {
            return Some(SanPattern {
                castle_to_file: Some(2),
                ..Default::default()
            });
        }
        _ => {}
    }

    let mut chars: Vec<char> = body.chars().collect();
    let mut pat = SanPattern::default();

    // Promotion suffix: "e8=Q" or "e8Q".
    if let Some(&last) = chars.last()
        && let Some(kind) = PieceKind::from_char(last)
        && last.is_ascii_uppercase()
    {
        if !matches!(
            kind,
            PieceKind::Queen | PieceKind::Rook | PieceKind::Bishop | PieceKind::Knight
        ) {
            return None;
        }
        pat.promo = Some(kind);
        chars.pop();
        if chars.last() == Some(&'=') {
            chars.pop();
        }
    }

    if chars.len() < 2 {
        return None;
    }
    let dest: String = chars.split_off(chars.len() - 2).into_iter().collect();
    pat.to = coord_to_sq(&dest)?;

    let mut rest = chars.as_slice();
    if let Some((&first, tail)) = rest.split_first()
        && first.is_ascii_uppercase()
    {
        let kind = PieceKind::from_char(first)?;
        if kind == PieceKind::Pawn {
            return None;
        }
        pat.kind = Some(kind);
        rest = tail;
    }

    if rest.last() == Some(&'x') {
        rest = &rest[..rest.len() - 1];
    }

    for &c in rest {
        match c {
            'a'..='h' if pat.from_file.is_none() => pat.from_file = Some(c as i8 - 'a' as i8),
            '1'..='8' if pat.from_rank.is_none() => pat.from_rank = Some(c as i8 - '1' as i8),
            _ => return None,
        }
    }

    if pat.kind.is_none() {
        pat.kind = Some(PieceKind::Pawn);
    }
    Some(pat)
}

impl SanPattern {
    fn matches(&self, pos: &Position, mv: Move) -> bool {
        let Some(piece) = pos.piece_at(mv.from) else {
            return false;
        };
        if let Some(file) = self.castle_to_file {
            return mv.is_castle && file_of(mv.to) == file;
        }
        if mv.is_castle {
            return false;
        }
        // A pawn token without a source file ("e4") is a push, never a capture.
        if piece.kind == PieceKind::Pawn
            && self.from_file.is_none()
            && file_of(mv.from) != file_of(mv.to)
        {
            return false;
        }
        Some(piece.kind) == self.kind
            && mv.to == self.to
            && mv.promo == self.promo
            && self.from_file.is_none_or(|f| file_of(mv.from) == f)
            && self.from_rank.is_none_or(|r| rank_of(mv.from) == r)
    }
}

/// Resolves a SAN token to the unique legal move it names.
pub fn parse_san(pos: &Position, san: &str) -> Result<Move, MoveParseError> {
    let pat =
        parse_pattern(san.trim()).ok_or_else(|| MoveParseError::Syntax(san.to_string()))?;

    let mut found = legal_moves(pos).into_iter().filter(|&m| pat.matches(pos, m));
    match (found.next(), found.next()) {
        (Some(mv), None) => Ok(mv),
        (Some(_), Some(_)) => Err(MoveParseError::Ambiguous(san.to_string())),
        (None, _) => Err(MoveParseError::Illegal(san.to_string())),
    }
}

/// Formats a legal move in SAN, with `+`/`#` suffixes.
pub fn move_to_san(pos: &Position, mv: Move) -> String {
    let mut out = String::with_capacity(8);
    let piece = pos.piece_at(mv.from).expect("no piece on from-square");

    if mv.is_castle {
        out.push_str(if file_of(mv.to) == 6 { "O-O" } else { "O-O-O" });
    } else {
        let capture = pos.is_capture(mv);
        if piece.kind == PieceKind::Pawn {
            if capture {
                out.push((b'a' + file_of(mv.from) as u8) as char);
            }
        } else {
            out.push(piece.kind.to_char().to_ascii_uppercase());
            let rivals: Vec<Move> = legal_moves(pos)
                .into_iter()
                .filter(|m| {
                    m.to == mv.to && m.from != mv.from && pos.piece_at(m.from) == Some(piece)
                })
                .collect();
            if !rivals.is_empty() {
                let file_unique = rivals.iter().all(|m| file_of(m.from) != file_of(mv.from));
                let rank_unique = rivals.iter().all(|m| rank_of(m.from) != rank_of(mv.from));
                let coord = sq_to_coord(mv.from);
                if file_unique {
                    out.push_str(&coord[..1]);
                } else if rank_unique {
                    out.push_str(&coord[1..]);
                } else {
                    out.push_str(&coord);
                }
            }
        }
        if capture {
            out.push('x');
        }
        out.push_str(&sq_to_coord(mv.to));
        if let Some(p) = mv.promo {
            out.push('=');
            out.push(p.to_char().to_ascii_uppercase());
        }
    }

    let mut after = pos.clone();
    after.make_move(mv);
    if after.in_check(after.side_to_move) {
        let mated = legal_moves(&after).is_empty();
        out.push(if mated { '#' } else { '+' });
    }
    out
}

#[cfg(test)]
#[path = "san_tests.rs"]
mod san_tests;
