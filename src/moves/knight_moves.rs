//! Knight destinations: the eight L-shaped jumps.

use crate::game_state::chess_types::{Player, Position, ReachableBlock};
use crate::move_generation::occupancy::Occupancy;
use crate::moves::block_classification::push_offsets;

pub const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (-2, -1),
    (-1, -2),
    (1, -2),
    (2, -1),
    (2, 1),
    (1, 2),
    (-1, 2),
    (-2, 1),
];

#[inline]
pub fn knight_blocks(
    occupancy: &Occupancy<'_>,
    owner: Player,
    from: Position,
    out: &mut Vec<ReachableBlock>,
) {
    push_offsets(occupancy, owner, from, &KNIGHT_OFFSETS, out);
}
