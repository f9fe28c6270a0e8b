//! Terminal-oriented Unicode board renderer.
//!
//! Creates a human-readable board view for the text front-end, tests and
//! diagnostics. Rank 1 (Player 2's home row) is printed at the top, the way
//! the board appears on screen.

use crate::game_state::chess_types::*;
use crate::game_state::game_state::GameState;

/// Render the board. Empty reachable cells of the selected piece show as `*`
/// and capturable enemy pieces are wrapped in brackets.
pub fn render_game_state(game_state: &GameState) -> String {
    let mut out = String::new();
    let reachable = game_state.reachable_blocks();
    let selected = game_state.selected_piece().map(|piece| piece.position);

    out.push_str("   1  2  3  4  5  6  7  8\n");

    for rank in 1..=8i8 {
        out.push(char::from(b'0' + rank as u8));
        out.push(' ');

        for file in 1..=8i8 {
            let position = Position::new(file, rank);
            let block = reachable.iter().find(|b| b.position == position);
            let symbol = match game_state.piece_at(position) {
                Some(piece) => piece_to_unicode(piece.owner, piece.kind),
                None if block.is_some() => '*',
                None => '·',
            };

            let (open, close) = if selected == Some(position) {
                ('<', '>')
            } else if block.map(|b| b.kind) == Some(BlockKind::ContainsEnemyPiece) {
                ('[', ']')
            } else {
                (' ', ' ')
            };
            out.push(open);
            out.push(symbol);
            out.push(close);
        }

        out.push(' ');
        out.push(char::from(b'0' + rank as u8));
        out.push('\n');
    }

    out.push_str("   1  2  3  4  5  6  7  8\n");
    out.push_str(&format!("{} to move", game_state.current_player()));

    out
}

pub fn piece_to_unicode(owner: Player, kind: PieceKind) -> char {
    match (owner, kind) {
        (Player::White, PieceKind::Pawn) => '♙',
        (Player::White, PieceKind::Knight) => '♘',
        (Player::White, PieceKind::Bishop) => '♗',
        (Player::White, PieceKind::Castle) => '♖',
        (Player::White, PieceKind::Queen) => '♕',
        (Player::White, PieceKind::King) => '♔',
        (Player::Black, PieceKind::Pawn) => '♟',
        (Player::Black, PieceKind::Knight) => '♞',
        (Player::Black, PieceKind::Bishop) => '♝',
        (Player::Black, PieceKind::Castle) => '♜',
        (Player::Black, PieceKind::Queen) => '♛',
        (Player::Black, PieceKind::King) => '♚',
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_starting_board() {
        let rendered = render_game_state(&GameState::new_game());
        let lines: Vec<&str> = rendered.lines().collect();

        assert_eq!(lines.len(), 11);
        assert!(lines[1].starts_with("1  ♜  ♞  ♝  ♛  ♚"));
        assert!(lines[8].starts_with("8  ♖  ♘  ♗  ♕  ♔"));
        assert_eq!(lines[10], "Player 1 to move");
    }

    #[test]
    fn marks_selection_and_reachable_cells() {
        let mut state = GameState::new_game();
        state.update(Position::new(2, 8), true);
        let rendered = render_game_state(&state);
        let lines: Vec<&str> = rendered.lines().collect();

        assert!(lines[8].contains("<♘>"));
        assert_eq!(lines[6].matches('*').count(), 2);
    }
}
