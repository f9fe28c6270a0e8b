//! Castle (rook) destinations: the four orthogonal rays.

use crate::game_state::chess_types::{Player, Position, ReachableBlock};
use crate::move_generation::occupancy::Occupancy;
use crate::moves::block_classification::trace_rays;

pub const CASTLE_DIRECTIONS: [(i8, i8); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];

#[inline]
pub fn castle_blocks(
    occupancy: &Occupancy<'_>,
    owner: Player,
    from: Position,
    out: &mut Vec<ReachableBlock>,
) {
    trace_rays(occupancy, owner, from, &CASTLE_DIRECTIONS, out);
}
