//! Board-placement parser.
//!
//! Reads the piece-placement field of a FEN-style string. Rows are separated
//! by `/` and the first row is rank 1 (the top of the screen, Player 2's home
//! rank), so the usual FEN starting placement describes this game's starting
//! layout unchanged. Uppercase letters belong to Player 1 (white).

use crate::errors::GameError;
use crate::game_state::chess_types::{PieceKind, Player, Position};

/// Parse a placement string into `(kind, owner, position)` triples in
/// reading order.
pub fn parse_layout(layout: &str) -> Result<Vec<(PieceKind, Player, Position)>, GameError> {
    let rows: Vec<&str> = layout.trim().split('/').collect();
    if rows.len() != 8 {
        return Err(GameError::WrongRowCount(rows.len()));
    }

    let mut placed = Vec::with_capacity(32);
    for (row_index, row) in rows.iter().enumerate() {
        let rank = row_index as i8 + 1;
        let mut width = 0usize;

        for ch in row.chars() {
            if let Some(empty_count) = ch.to_digit(10) {
                if !(1..=8).contains(&empty_count) {
                    return Err(GameError::InvalidLayoutToken(ch));
                }
                width += empty_count as usize;
                continue;
            }

            let (owner, kind) = piece_from_layout_char(ch).ok_or(GameError::InvalidLayoutToken(ch))?;
            width += 1;
            if width > 8 {
                return Err(GameError::WrongRowWidth(rank, width));
            }
            placed.push((kind, owner, Position::new(width as i8, rank)));
        }

        if width != 8 {
            return Err(GameError::WrongRowWidth(rank, width));
        }
    }

    Ok(placed)
}

/// Accepts `white`/`black`, `w`/`b` or the player numbers `1`/`2`.
pub fn parse_player(text: &str) -> Result<Player, GameError> {
    match text.to_ascii_lowercase().as_str() {
        "white" | "w" | "1" => Ok(Player::White),
        "black" | "b" | "2" => Ok(Player::Black),
        _ => Err(GameError::UnknownPlayer(text.to_owned())),
    }
}

pub fn piece_from_layout_char(ch: char) -> Option<(Player, PieceKind)> {
    let owner = if ch.is_ascii_uppercase() {
        Player::White
    } else if ch.is_ascii_lowercase() {
        Player::Black
    } else {
        return None;
    };

    let kind = match ch.to_ascii_lowercase() {
        'p' => PieceKind::Pawn,
        'n' => PieceKind::Knight,
        'b' => PieceKind::Bishop,
        'r' => PieceKind::Castle,
        'q' => PieceKind::Queen,
        'k' => PieceKind::King,
        _ => return None,
    };

    Some((owner, kind))
}
