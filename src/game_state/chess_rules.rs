//! Canonical rule constants.
//!
//! Board extent, the fixed starting layout and the per-owner pawn direction
//! live here so move generation and setup read them from one place.

use crate::game_state::chess_types::{PieceKind, Player};

/// Lowest on-board file/rank.
pub const BOARD_MIN: i8 = 1;
/// Highest on-board file/rank.
pub const BOARD_MAX: i8 = 8;
/// Longest possible ray on an 8x8 board.
pub const MAX_RAY_STEPS: usize = 7;

/// Starting layout in board-placement notation, first row = rank 1.
pub const STARTING_LAYOUT: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR";

/// Back rank from file 1 to file 8.
pub const BACK_RANK: [PieceKind; 8] = [
    PieceKind::Castle,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Castle,
];

/// `(home rank, pawn rank)` for a player.
#[inline]
pub const fn home_ranks(player: Player) -> (i8, i8) {
    match player {
        Player::White => (8, 7),
        Player::Black => (1, 2),
    }
}

/// Rank delta of a pawn's forward step.
#[inline]
pub const fn pawn_direction(player: Player) -> i8 {
    match player {
        Player::White => -1,
        Player::Black => 1,
    }
}

/// Sizing hint for a piece's reachable-block vector. Not a cap.
#[inline]
pub const fn reachable_capacity_hint(kind: PieceKind) -> usize {
    match kind {
        PieceKind::King => 8,
        PieceKind::Queen => 27,
        PieceKind::Castle => 14,
        PieceKind::Bishop => 13,
        PieceKind::Knight => 8,
        PieceKind::Pawn => 3,
    }
}
