//! Queen destinations: union of the castle and bishop rays.

use crate::game_state::chess_types::{Player, Position, ReachableBlock};
use crate::move_generation::occupancy::Occupancy;
use crate::moves::bishop_moves::bishop_blocks;
use crate::moves::castle_moves::castle_blocks;

#[inline]
pub fn queen_blocks(
    occupancy: &Occupancy<'_>,
    owner: Player,
    from: Position,
    out: &mut Vec<ReachableBlock>,
) {
    castle_blocks(occupancy, owner, from, out);
    bishop_blocks(occupancy, owner, from, out);
}
