//! Per-frame draw list handed to the sprite renderer.
//!
//! `FrameRenderer::render` reads the game state and produces every entity to
//! draw this frame, in painter's order: board, pieces, hover highlight,
//! selected block, reachable blocks, status text. It never mutates the game.
//! Positions are in virtual board coordinates; the window scale is applied by
//! the renderer's transform.

use std::time::Duration;

use crate::config::{GameConfig, Rgba};
use crate::game_state::chess_types::{BlockKind, PieceId, PieceKind, Player, Position};
use crate::game_state::game_state::GameState;
use crate::geometry::board_geometry::{BLOCK_INNER_SIZE, GAME_SIZE};
use crate::render::font::{BitmapFont, GLYPH_ORIGIN};
use crate::render::hover::HoverAnimation;
use crate::render::sprite_sheet::{centred_origin, piece_region, SpriteRegion};

const STATUS_TEXT_POSITION: (f32, f32) = (32.0, 5.0);
const STATUS_TEXT_SIZE: f32 = 0.75;

#[derive(Debug, Clone, PartialEq)]
pub enum DrawEntity {
    Board {
        region: SpriteRegion,
    },
    Piece {
        id: PieceId,
        kind: PieceKind,
        owner: Player,
        region: SpriteRegion,
        position: (f32, f32),
        origin: (f32, f32),
    },
    HoverHighlight {
        cell: Position,
        position: (f32, f32),
        size: (f32, f32),
        color: Rgba,
        intensity: f32,
    },
    SelectedBlock {
        cell: Position,
        position: (f32, f32),
        size: (f32, f32),
        color: Rgba,
    },
    ReachableBlock {
        cell: Position,
        kind: BlockKind,
        position: (f32, f32),
        size: (f32, f32),
        color: Rgba,
    },
    Glyph {
        ch: char,
        region: SpriteRegion,
        position: (f32, f32),
        origin: (f32, f32),
        size: f32,
        color: Rgba,
    },
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct DrawList {
    pub entities: Vec<DrawEntity>,
    /// Status-text characters the font could not draw this frame.
    pub missing_glyphs: Vec<char>,
}

impl DrawList {
    pub fn pieces(&self) -> impl Iterator<Item = &DrawEntity> {
        self.entities
            .iter()
            .filter(|e| matches!(e, DrawEntity::Piece { .. }))
    }

    pub fn reachable_cells(&self) -> Vec<Position> {
        self.entities
            .iter()
            .filter_map(|e| match e {
                DrawEntity::ReachableBlock { cell, .. } => Some(*cell),
                _ => None,
            })
            .collect()
    }

    pub fn hover_highlight(&self) -> Option<&DrawEntity> {
        self.entities
            .iter()
            .find(|e| matches!(e, DrawEntity::HoverHighlight { .. }))
    }

    pub fn text(&self) -> String {
        self.entities
            .iter()
            .filter_map(|e| match e {
                DrawEntity::Glyph { ch, .. } => Some(*ch),
                _ => None,
            })
            .collect()
    }
}

/// Render-side state that outlives a frame: the font table and the hover
/// fade timer.
#[derive(Debug, Clone, Default)]
pub struct FrameRenderer {
    font: BitmapFont,
    hover: HoverAnimation,
}

impl FrameRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn render(
        &mut self,
        state: &GameState,
        config: &GameConfig,
        frame_time: Duration,
    ) -> DrawList {
        let geometry = &config.geometry;
        let player = state.current_player();
        let mut list = DrawList::default();

        list.entities.push(DrawEntity::Board {
            region: SpriteRegion::new(0, 0, GAME_SIZE.0 as u32, GAME_SIZE.1 as u32),
        });

        for piece in state.pieces() {
            let region = piece_region(piece.kind, piece.owner);
            list.entities.push(DrawEntity::Piece {
                id: piece.id,
                kind: piece.kind,
                owner: piece.owner,
                region,
                position: geometry.position_to_screen(piece.position),
                origin: centred_origin(&region, geometry.block_size),
            });
        }

        let hovered = state.hovered_piece();
        self.hover.observe(hovered.map(|piece| piece.id));
        if let Some(piece) = hovered {
            if state.selection().is_none() && piece.owner == player {
                let intensity = self.hover.advance(
                    frame_time,
                    config.hover_duration,
                    config.hover_min_intensity,
                );
                list.entities.push(DrawEntity::HoverHighlight {
                    cell: piece.position,
                    position: geometry.position_to_screen(piece.position),
                    size: BLOCK_INNER_SIZE,
                    color: config.highlight_color(player),
                    intensity,
                });
            }
        }

        if let Some(piece) = state.selected_piece() {
            list.entities.push(DrawEntity::SelectedBlock {
                cell: piece.position,
                position: geometry.position_to_screen(piece.position),
                size: BLOCK_INNER_SIZE,
                color: config.highlight_color(player),
            });
        }

        for block in state.reachable_blocks() {
            list.entities.push(DrawEntity::ReachableBlock {
                cell: block.position,
                kind: block.kind,
                position: geometry.position_to_screen(block.position),
                size: BLOCK_INNER_SIZE,
                color: config.highlight_color(player),
            });
        }

        let status = self
            .font
            .layout(&player.to_string(), STATUS_TEXT_SIZE, STATUS_TEXT_POSITION);
        let text_color = config.text_color(player);
        list.entities
            .extend(status.glyphs.into_iter().map(|glyph| DrawEntity::Glyph {
                ch: glyph.ch,
                region: glyph.region,
                position: glyph.position,
                origin: GLYPH_ORIGIN,
                size: glyph.size,
                color: text_color,
            }));
        list.missing_glyphs = status.missing;

        list
    }
}
