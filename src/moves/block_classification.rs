//! Shared cell-classification rules used by every piece kind.
//!
//! A candidate cell is off-board, empty, enemy-occupied or ally-occupied.
//! Stepping pieces evaluate one cell per offset; sliding pieces keep walking
//! a ray while cells are empty.

use crate::game_state::chess_rules::MAX_RAY_STEPS;
use crate::game_state::chess_types::{Player, Position, ReachableBlock};
use crate::move_generation::occupancy::{CellContent, Occupancy};

/// Evaluate a single destination cell. Returns `true` when the cell is
/// blocked (off-board or occupied), which ends a sliding ray.
#[inline]
pub fn push_block(
    occupancy: &Occupancy<'_>,
    owner: Player,
    target: Position,
    out: &mut Vec<ReachableBlock>,
) -> bool {
    match occupancy.content_for(owner, target) {
        CellContent::Empty => {
            out.push(ReachableBlock::empty(target));
            false
        }
        CellContent::Enemy => {
            out.push(ReachableBlock::capture(target));
            true
        }
        CellContent::Ally | CellContent::OffBoard => true,
    }
}

/// Evaluate every fixed offset around `from` once.
pub fn push_offsets(
    occupancy: &Occupancy<'_>,
    owner: Player,
    from: Position,
    offsets: &[(i8, i8)],
    out: &mut Vec<ReachableBlock>,
) {
    for &(d_file, d_rank) in offsets {
        push_block(occupancy, owner, from.offset(d_file, d_rank), out);
    }
}

/// Walk outward from `from` along one direction until blocked.
pub fn trace_ray(
    occupancy: &Occupancy<'_>,
    owner: Player,
    from: Position,
    (d_file, d_rank): (i8, i8),
    out: &mut Vec<ReachableBlock>,
) {
    let mut target = from;
    for _ in 0..MAX_RAY_STEPS {
        target = target.offset(d_file, d_rank);
        if push_block(occupancy, owner, target, out) {
            break;
        }
    }
}

/// Walk every ray in `directions`.
pub fn trace_rays(
    occupancy: &Occupancy<'_>,
    owner: Player,
    from: Position,
    directions: &[(i8, i8)],
    out: &mut Vec<ReachableBlock>,
) {
    for &direction in directions {
        trace_ray(occupancy, owner, from, direction, out);
    }
}
