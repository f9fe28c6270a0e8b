//! Source regions on the piece sprite sheet.
//!
//! The sheet has one 64x64 column per piece kind. Row 0 holds Player 2's
//! (black) pieces and row 1 Player 1's (white) pieces.

use crate::game_state::chess_types::{PieceKind, Player};

/// Rectangle on a texture, in texels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpriteRegion {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

impl SpriteRegion {
    pub const fn new(x: u32, y: u32, width: u32, height: u32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn half_size(&self) -> (f32, f32) {
        (self.width as f32 / 2.0, self.height as f32 / 2.0)
    }
}

pub const PIECE_SPRITE_SIZE: u32 = 64;

const fn sprite_column(kind: PieceKind) -> u32 {
    match kind {
        PieceKind::King => 0,
        PieceKind::Queen => 1,
        PieceKind::Castle => 2,
        PieceKind::Knight => 3,
        PieceKind::Bishop => 4,
        PieceKind::Pawn => 5,
    }
}

pub const fn piece_region(kind: PieceKind, owner: Player) -> SpriteRegion {
    let row = match owner {
        Player::White => 1,
        Player::Black => 0,
    };
    SpriteRegion::new(
        sprite_column(kind) * PIECE_SPRITE_SIZE,
        row * PIECE_SPRITE_SIZE,
        PIECE_SPRITE_SIZE,
        PIECE_SPRITE_SIZE,
    )
}

/// Draw origin that centres a sprite inside a board block.
pub fn centred_origin(region: &SpriteRegion, block_size: (f32, f32)) -> (f32, f32) {
    let (half_w, half_h) = region.half_size();
    (half_w - block_size.0 / 2.0, half_h - block_size.1 / 2.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn regions_follow_sheet_layout() {
        assert_eq!(piece_region(PieceKind::King, Player::Black), SpriteRegion::new(0, 0, 64, 64));
        assert_eq!(piece_region(PieceKind::Knight, Player::Black).x, 192);
        assert_eq!(piece_region(PieceKind::Bishop, Player::White), SpriteRegion::new(256, 64, 64, 64));
        assert_eq!(piece_region(PieceKind::Pawn, Player::White).x, 320);
    }

    #[test]
    fn origin_centres_sprite_in_block() {
        let region = piece_region(PieceKind::Queen, Player::White);
        assert_eq!(centred_origin(&region, (82.0, 82.0)), (-9.0, -9.0));
    }
}
