//! Read-only occupancy queries over the live piece collection.
//!
//! The collection is scanned linearly; there is no cell index to keep in
//! sync, so a snapshot is just a borrowed slice.

use crate::game_state::chess_types::{Piece, Player, Position};

/// What a cell holds from the point of view of one player.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellContent {
    OffBoard,
    Empty,
    Enemy,
    Ally,
}

/// Immutable view of board occupancy handed to move generation.
#[derive(Debug, Clone, Copy)]
pub struct Occupancy<'a> {
    pieces: &'a [Piece],
}

impl<'a> Occupancy<'a> {
    #[inline]
    pub fn new(pieces: &'a [Piece]) -> Self {
        Self { pieces }
    }

    /// First piece standing on `position`, if any.
    #[inline]
    pub fn piece_at(&self, position: Position) -> Option<&'a Piece> {
        self.pieces.iter().find(|piece| piece.position == position)
    }

    /// Classify `position` for a piece owned by `viewer`.
    pub fn content_for(&self, viewer: Player, position: Position) -> CellContent {
        if !position.is_on_board() {
            return CellContent::OffBoard;
        }
        match self.piece_at(position) {
            None => CellContent::Empty,
            Some(piece) if piece.owner == viewer => CellContent::Ally,
            Some(_) => CellContent::Enemy,
        }
    }
}
