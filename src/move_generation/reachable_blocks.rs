//! Reachable-block generation for a single piece.
//!
//! Dispatches on the piece kind to the per-kind generators in `moves`. The
//! result ignores check entirely: it is the set of cells the piece may move
//! or capture into given the current occupancy.

use crate::game_state::chess_rules::reachable_capacity_hint;
use crate::game_state::chess_types::{Piece, PieceKind, ReachableBlock};
use crate::move_generation::occupancy::Occupancy;
use crate::moves::bishop_moves::bishop_blocks;
use crate::moves::castle_moves::castle_blocks;
use crate::moves::king_moves::king_blocks;
use crate::moves::knight_moves::knight_blocks;
use crate::moves::pawn_moves::pawn_blocks;
use crate::moves::queen_moves::queen_blocks;

pub fn find_reachable_blocks(piece: &Piece, occupancy: &Occupancy<'_>) -> Vec<ReachableBlock> {
    let mut out = Vec::with_capacity(reachable_capacity_hint(piece.kind));
    let (owner, from) = (piece.owner, piece.position);

    match piece.kind {
        PieceKind::King => king_blocks(occupancy, owner, from, &mut out),
        PieceKind::Queen => queen_blocks(occupancy, owner, from, &mut out),
        PieceKind::Castle => castle_blocks(occupancy, owner, from, &mut out),
        PieceKind::Bishop => bishop_blocks(occupancy, owner, from, &mut out),
        PieceKind::Knight => knight_blocks(occupancy, owner, from, &mut out),
        PieceKind::Pawn => pawn_blocks(occupancy, owner, from, &mut out),
    }

    out
}
