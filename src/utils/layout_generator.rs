//! Board-placement generator, the inverse of `layout_parser`.

use crate::game_state::chess_types::{Piece, PieceKind, Player, Position};
use crate::move_generation::occupancy::Occupancy;

pub fn generate_layout(pieces: &[Piece]) -> String {
    let occupancy = Occupancy::new(pieces);
    let mut out = String::with_capacity(64);

    for rank in 1..=8 {
        let mut empty_count = 0u8;

        for file in 1..=8 {
            if let Some(piece) = occupancy.piece_at(Position::new(file, rank)) {
                if empty_count > 0 {
                    out.push(char::from(b'0' + empty_count));
                    empty_count = 0;
                }
                out.push(piece_to_layout_char(piece.owner, piece.kind));
            } else {
                empty_count += 1;
            }
        }

        if empty_count > 0 {
            out.push(char::from(b'0' + empty_count));
        }

        if rank < 8 {
            out.push('/');
        }
    }

    out
}

pub fn piece_to_layout_char(owner: Player, kind: PieceKind) -> char {
    let base = match kind {
        PieceKind::Pawn => 'p',
        PieceKind::Knight => 'n',
        PieceKind::Bishop => 'b',
        PieceKind::Castle => 'r',
        PieceKind::Queen => 'q',
        PieceKind::King => 'k',
    };

    match owner {
        Player::White => base.to_ascii_uppercase(),
        Player::Black => base,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::GameError;
    use crate::game_state::game_state::GameState;

    #[test]
    fn layout_survives_a_few_moves() -> Result<(), GameError> {
        let mut state = GameState::new_game();
        state.update(Position::new(5, 7), true);
        state.update(Position::new(5, 6), true);
        state.update(Position::new(7, 1), true);
        state.update(Position::new(6, 3), true);

        let layout = state.layout();
        assert_eq!(layout, "rnbqkb1r/pppppppp/5n2/8/8/4P3/PPPP1PPP/RNBQKBNR");
        let reparsed = GameState::from_layout(&layout, Player::White)?;
        assert_eq!(reparsed.layout(), layout);
        Ok(())
    }
}
