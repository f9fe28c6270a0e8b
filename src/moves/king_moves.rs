//! King destinations: the eight adjacent cells.

use crate::game_state::chess_types::{Player, Position, ReachableBlock};
use crate::move_generation::occupancy::Occupancy;
use crate::moves::block_classification::push_offsets;

pub const KING_OFFSETS: [(i8, i8); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

#[inline]
pub fn king_blocks(
    occupancy: &Occupancy<'_>,
    owner: Player,
    from: Position,
    out: &mut Vec<ReachableBlock>,
) {
    push_offsets(occupancy, owner, from, &KING_OFFSETS, out);
}
