use crate::{
    board::{Position, START_FEN},
    error::{MoveParseError, SetupError},
    game::Game,
    movegen::legal_moves,
    types::*,
};

pub fn move_to_uci(mv: Move) -> String {
    let mut s = String::with_capacity(5);
    s.push_str(&sq_to_coord(mv.from));
    s.push_str(&sq_to_coord(mv.to));
    if let Some(p) = mv.promo {
        s.push(p.to_char());
    }
    s
}

/// Parses coordinate notation (`e2e4`, `e7e8q`) and resolves it against the
/// legal moves of `pos`, so castle and en-passant flags come out right.
pub fn parse_uci_move(pos: &Position, txt: &str) -> Result<Move, MoveParseError> {
    let syntax = || MoveParseError::Syntax(txt.to_string());
    if !(4..=5).contains(&txt.len()) || !txt.is_ascii() {
        return Err(syntax());
    }
    let from = coord_to_sq(&txt[0..2]).ok_or_else(syntax)?;
    let to = coord_to_sq(&txt[2..4]).ok_or_else(syntax)?;
    let promo = match txt[4..].chars().next() {
        None => None,
        Some(c) => match PieceKind::from_char(c) {
            Some(k @ (PieceKind::Queen | PieceKind::Rook | PieceKind::Bishop | PieceKind::Knight)) => {
                Some(k)
            }
            _ => return Err(syntax()),
        },
    };

    legal_moves(pos)
        .into_iter()
        .find(|m| m.from == from && m.to == to && m.promo == promo)
        .ok_or_else(|| MoveParseError::Illegal(txt.to_string()))
}

/// Builds the game described by the arguments of a UCI `position` command:
/// `startpos [moves ...]` or `fen <fields> [moves ...]`.
pub fn game_from_uci_position(args: &[&str]) -> Result<Game, SetupError> {
    let moves_at = args.iter().position(|&a| a == "moves");
    let (setup, moves) = match moves_at {
        Some(i) => (&args[..i], &args[i + 1..]),
        None => (args, &[][..]),
    };

    let mut game = match setup.split_first() {
        Some((&"fen", fields)) => Game::from_fen(&fields.join(" "))?,
        _ => Game::from_fen(START_FEN)?,
    };

    for txt in moves {
        let mv = parse_uci_move(game.position(), txt)?;
        game.push(mv);
    }
    Ok(game)
}

#[cfg(test)]
#[path = "uci_tests.rs"]
mod uci_tests;
