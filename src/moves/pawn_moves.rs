//! Pawn destinations.
//!
//! The forward cell is reachable only when empty; the two forward diagonals
//! only when they hold an enemy piece. There is no double step.

use crate::game_state::chess_rules::pawn_direction;
use crate::game_state::chess_types::{Player, Position, ReachableBlock};
use crate::move_generation::occupancy::{CellContent, Occupancy};

pub fn pawn_blocks(
    occupancy: &Occupancy<'_>,
    owner: Player,
    from: Position,
    out: &mut Vec<ReachableBlock>,
) {
    let forward = pawn_direction(owner);

    for d_file in [-1, 1] {
        let diagonal = from.offset(d_file, forward);
        if occupancy.content_for(owner, diagonal) == CellContent::Enemy {
            out.push(ReachableBlock::capture(diagonal));
        }
    }

    let ahead = from.offset(0, forward);
    if occupancy.content_for(owner, ahead) == CellContent::Empty {
        out.push(ReachableBlock::empty(ahead));
    }
}
