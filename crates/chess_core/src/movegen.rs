use crate::{board::Position, types::*};

const KNIGHT_DELTAS: [(i8, i8); 8] = [
    (1, 2),
    (2, 1),
    (-1, 2),
    (-2, 1),
    (1, -2),
    (2, -1),
    (-1, -2),
    (-2, -1),
];
const KING_DELTAS: [(i8, i8); 8] = [
    (1, 1),
    (1, 0),
    (1, -1),
    (0, 1),
    (0, -1),
    (-1, 1),
    (-1, 0),
    (-1, -1),
];
const DIAGONALS: [(i8, i8); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];
const ORTHOGONALS: [(i8, i8); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];
const PROMOTIONS: [PieceKind; 4] = [
    PieceKind::Queen,
    PieceKind::Rook,
    PieceKind::Bishop,
    PieceKind::Knight,
];

/// Generate all legal moves, returning a freshly allocated vector.
/// Works on a scratch copy, so the caller's position is untouched.
pub fn legal_moves(pos: &Position) -> Vec<Move> {
    let mut tmp = pos.clone();
    let mut out = Vec::with_capacity(64);
    legal_moves_into(&mut tmp, &mut out);
    out
}

/// Generate all legal moves into the provided buffer, reusing it across calls.
pub fn legal_moves_into(pos: &mut Position, out: &mut Vec<Move>) {
    out.clear();
    pseudo_moves(pos, out);

    let mover = pos.side_to_move;
    // Filter illegal moves in-place by playing them on the mutable position.
    out.retain(|&mv| {
        let undo = pos.make_move(mv);
        let illegal = pos.in_check(mover);
        pos.unmake_move(mv, undo);
        !illegal
    });
}

/// Number of legal moves `color` would have if it were its turn.
///
/// The side to move is overridden on a scratch copy. When the override
/// changes the mover, the en-passant square is dropped since it belonged
/// to the other side.
pub fn legal_move_count(pos: &Position, color: Color) -> usize {
    let mut tmp = pos.clone();
    if tmp.side_to_move != color {
        tmp.side_to_move = color;
        tmp.en_passant = None;
    }
    let mut out = Vec::with_capacity(64);
    legal_moves_into(&mut tmp, &mut out);
    out.len()
}

fn pseudo_moves(pos: &Position, out: &mut Vec<Move>) {
    let mover = pos.side_to_move;
    for (from, pc) in pos.pieces() {
        if pc.color != mover {
            continue;
        }
        match pc.kind {
            PieceKind::Pawn => gen_pawn(pos, from, mover, out),
            PieceKind::Knight => gen_steps(pos, from, mover, out, &KNIGHT_DELTAS),
            PieceKind::Bishop => gen_slider(pos, from, mover, out, &DIAGONALS),
            PieceKind::Rook => gen_slider(pos, from, mover, out, &ORTHOGONALS),
            PieceKind::Queen => {
                gen_slider(pos, from, mover, out, &DIAGONALS);
                gen_slider(pos, from, mover, out, &ORTHOGONALS);
            }
            PieceKind::King => {
                gen_steps(pos, from, mover, out, &KING_DELTAS);
                gen_castle(pos, mover, out);
            }
        }
    }
}

/// Push a pawn move, expanding it into the four promotions on the last rank.
fn push_pawn_move(from: u8, to: u8, c: Color, out: &mut Vec<Move>) {
    if rank_of(to) == c.other().home_rank() {
        for pk in PROMOTIONS {
            let mut mv = Move::new(from, to);
            mv.promo = Some(pk);
            out.push(mv);
        }
    } else {
        out.push(Move::new(from, to));
    }
}

fn gen_pawn(pos: &Position, from: u8, c: Color, out: &mut Vec<Move>) {
    let f = file_of(from);
    let r = rank_of(from);
    let dir = c.forward();
    let start_rank = c.home_rank() + dir;

    if let Some(to) = sq(f, r + dir)
        && pos.piece_at(to).is_none()
    {
        push_pawn_move(from, to, c, out);
        if r == start_rank
            && let Some(to2) = sq(f, r + 2 * dir)
            && pos.piece_at(to2).is_none()
        {
            out.push(Move::new(from, to2));
        }
    }

    for df in [-1, 1] {
        let Some(to) = sq(f + df, r + dir) else {
            continue;
        };
        match pos.piece_at(to) {
            Some(target) if target.color != c => push_pawn_move(from, to, c, out),
            None if pos.en_passant == Some(to)
                && sq(f + df, r).and_then(|s| pos.piece_at(s))
                    == Some(Piece::new(c.other(), PieceKind::Pawn)) =>
            {
                let mut mv = Move::new(from, to);
                mv.is_en_passant = true;
                out.push(mv);
            }
            _ => {}
        }
    }
}

fn gen_steps(pos: &Position, from: u8, c: Color, out: &mut Vec<Move>, deltas: &[(i8, i8)]) {
    let f = file_of(from);
    let r = rank_of(from);
    for (df, dr) in deltas {
        if let Some(to) = sq(f + df, r + dr) {
            match pos.piece_at(to) {
                Some(pc) if pc.color == c => {}
                _ => out.push(Move::new(from, to)),
            }
        }
    }
}

fn gen_slider(pos: &Position, from: u8, c: Color, out: &mut Vec<Move>, dirs: &[(i8, i8)]) {
    let f0 = file_of(from);
    let r0 = rank_of(from);
    for (df, dr) in dirs {
        let mut f = f0 + df;
        let mut r = r0 + dr;
        while let Some(to) = sq(f, r) {
            match pos.piece_at(to) {
                None => out.push(Move::new(from, to)),
                Some(pc) if pc.color != c => {
                    out.push(Move::new(from, to));
                    break;
                }
                _ => break,
            }
            f += df;
            r += dr;
        }
    }
}

struct CastleRule {
    king_from: u8,
    king_to: u8,
    rook_from: u8,
    empty: &'static [u8],
    crossed: [u8; 2],
}

const WHITE_CASTLES: [CastleRule; 2] = [
    CastleRule {
        king_from: 4,
        king_to: 6,
        rook_from: 7,
        empty: &[5, 6],
        crossed: [5, 6],
    },
    CastleRule {
        king_from: 4,
        king_to: 2,
        rook_from: 0,
        empty: &[3, 2, 1],
        crossed: [3, 2],
    },
];

const BLACK_CASTLES: [CastleRule; 2] = [
    CastleRule {
        king_from: 60,
        king_to: 62,
        rook_from: 63,
        empty: &[61, 62],
        crossed: [61, 62],
    },
    CastleRule {
        king_from: 60,
        king_to: 58,
        rook_from: 56,
        empty: &[59, 58, 57],
        crossed: [59, 58],
    },
];

fn gen_castle(pos: &Position, c: Color, out: &mut Vec<Move>) {
    // Can't castle out of check.
    if pos.in_check(c) {
        return;
    }

    let (rules, rights) = match c {
        Color::White => (&WHITE_CASTLES, [pos.castling.wk, pos.castling.wq]),
        Color::Black => (&BLACK_CASTLES, [pos.castling.bk, pos.castling.bq]),
    };
    let enemy = c.other();
    for (rule, allowed) in rules.iter().zip(rights) {
        if !allowed
            || pos.piece_at(rule.king_from) != Some(Piece::new(c, PieceKind::King))
            || pos.piece_at(rule.rook_from) != Some(Piece::new(c, PieceKind::Rook))
        {
            continue;
        }
        if rule.empty.iter().any(|&s| pos.piece_at(s).is_some()) {
            continue;
        }
        if rule.crossed.iter().any(|&s| pos.is_square_attacked(s, enemy)) {
            continue;
        }
        let mut mv = Move::new(rule.king_from, rule.king_to);
        mv.is_castle = true;
        out.push(mv);
    }
}

#[cfg(test)]
#[path = "movegen_tests.rs"]
mod movegen_tests;
