//! Bishop destinations: the four diagonal rays.

use crate::game_state::chess_types::{Player, Position, ReachableBlock};
use crate::move_generation::occupancy::Occupancy;
use crate::moves::block_classification::trace_rays;

pub const BISHOP_DIRECTIONS: [(i8, i8); 4] = [(1, -1), (-1, -1), (1, 1), (-1, 1)];

#[inline]
pub fn bishop_blocks(
    occupancy: &Occupancy<'_>,
    owner: Player,
    from: Position,
    out: &mut Vec<ReachableBlock>,
) {
    trace_rays(occupancy, owner, from, &BISHOP_DIRECTIONS, out);
}
