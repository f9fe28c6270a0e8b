//! Core value types shared by move generation, the turn state machine and
//! the render boundary.

use std::fmt;

use crate::game_state::chess_rules::{BOARD_MAX, BOARD_MIN};

pub use crate::game_state::game_state::GameState;

/// Side owning a piece. Player 1 plays the white pieces from the bottom of
/// the screen (rank 8), Player 2 the black pieces from the top (rank 1).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Player {
    White,
    Black,
}

impl Player {
    /// Player number as shown to the user (`1` or `2`).
    #[inline]
    pub const fn number(self) -> u8 {
        match self {
            Player::White => 1,
            Player::Black => 2,
        }
    }

    #[inline]
    pub const fn index(self) -> usize {
        match self {
            Player::White => 0,
            Player::Black => 1,
        }
    }

    #[inline]
    pub const fn opposite(self) -> Self {
        match self {
            Player::White => Player::Black,
            Player::Black => Player::White,
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Player {}", self.number())
    }
}

/// Piece kind. Fixed when the piece is created.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    King,
    Queen,
    Castle,
    Bishop,
    Knight,
    Pawn,
}

impl PieceKind {
    #[inline]
    pub const fn name(self) -> &'static str {
        match self {
            PieceKind::King => "King",
            PieceKind::Queen => "Queen",
            PieceKind::Castle => "Castle",
            PieceKind::Bishop => "Bishop",
            PieceKind::Knight => "Knight",
            PieceKind::Pawn => "Pawn",
        }
    }
}

/// Board cell `(file, rank)`. Both axes run `1..=8` on the board; values
/// outside that range are legal and simply denote an off-board cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    pub file: i8,
    pub rank: i8,
}

impl Position {
    #[inline]
    pub const fn new(file: i8, rank: i8) -> Self {
        Self { file, rank }
    }

    #[inline]
    pub const fn is_on_board(self) -> bool {
        self.file >= BOARD_MIN
            && self.file <= BOARD_MAX
            && self.rank >= BOARD_MIN
            && self.rank <= BOARD_MAX
    }

    /// Shift by a file/rank delta. The result may be off-board.
    #[inline]
    pub const fn offset(self, d_file: i8, d_rank: i8) -> Self {
        Self {
            file: self.file.saturating_add(d_file),
            rank: self.rank.saturating_add(d_rank),
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.file, self.rank)
    }
}

/// Stable piece identifier. Never reused within one game, so a captured
/// piece's id can no longer resolve to anything.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PieceId(pub u32);

/// One piece on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Piece {
    pub id: PieceId,
    pub kind: PieceKind,
    pub owner: Player,
    pub position: Position,
}

/// Classification of a reachable destination.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockKind {
    Empty,
    ContainsEnemyPiece,
}

/// A destination the selected piece may move or capture into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReachableBlock {
    pub position: Position,
    pub kind: BlockKind,
}

impl ReachableBlock {
    #[inline]
    pub const fn empty(position: Position) -> Self {
        Self {
            position,
            kind: BlockKind::Empty,
        }
    }

    #[inline]
    pub const fn capture(position: Position) -> Self {
        Self {
            position,
            kind: BlockKind::ContainsEnemyPiece,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn board_bounds_are_inclusive() {
        assert!(Position::new(BOARD_MIN, BOARD_MIN).is_on_board());
        assert!(Position::new(BOARD_MAX, BOARD_MAX).is_on_board());
        assert!(!Position::new(BOARD_MIN - 1, 4).is_on_board());
        assert!(!Position::new(4, BOARD_MAX + 1).is_on_board());
    }

    #[test]
    fn offset_saturates_instead_of_wrapping() {
        let far = Position::new(i8::MAX, i8::MIN).offset(1, -1);
        assert_eq!(far, Position::new(i8::MAX, i8::MIN));
        assert!(!far.is_on_board());
    }
}
