//! Bitmap font laid out on a sprite sheet.
//!
//! The sheet is a 10x9 grid of 55x62 glyph cells holding the characters of
//! `GLYPH_SEQUENCE` in reading order. Characters missing from the sheet are
//! skipped and reported back to the caller instead of failing the frame.

use std::collections::HashMap;

use crate::render::sprite_sheet::SpriteRegion;

pub const GLYPH_SEQUENCE: &str =
    "*+,-./0123456789:;<=>?@ABCDEFGHIJKLMNOPQRSTUVWXYZ[\\]^_`abcdefghijklmnopqrstuvwxyz!\"#$%&'()";

const GLYPH_WIDTH: u32 = 55;
const GLYPH_HEIGHT: u32 = 62;
const COLUMNS: u32 = 10;
/// Horizontal advance between glyphs at size 1.
const LETTER_SPACING: f32 = 24.0;
/// Horizontal advance of a space at size 1.
const SPACE_WIDTH: f32 = 18.0;
/// Top-left padding inside each glyph cell.
pub const GLYPH_ORIGIN: (f32, f32) = (15.0, 13.0);

/// One glyph placed on screen.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlacedGlyph {
    pub ch: char,
    pub region: SpriteRegion,
    pub position: (f32, f32),
    pub size: f32,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct TextLayout {
    pub glyphs: Vec<PlacedGlyph>,
    /// Characters that have no glyph on the sheet, in order of appearance.
    pub missing: Vec<char>,
}

#[derive(Debug, Clone)]
pub struct BitmapFont {
    glyphs: HashMap<char, SpriteRegion>,
}

impl Default for BitmapFont {
    fn default() -> Self {
        Self::new()
    }
}

impl BitmapFont {
    pub fn new() -> Self {
        let glyphs = GLYPH_SEQUENCE
            .chars()
            .enumerate()
            .map(|(i, ch)| {
                let (row, column) = (i as u32 / COLUMNS, i as u32 % COLUMNS);
                let region = SpriteRegion::new(
                    column * GLYPH_WIDTH,
                    row * GLYPH_HEIGHT,
                    GLYPH_WIDTH,
                    GLYPH_HEIGHT,
                );
                (ch, region)
            })
            .collect();
        Self { glyphs }
    }

    pub fn glyph(&self, ch: char) -> Option<SpriteRegion> {
        self.glyphs.get(&ch).copied()
    }

    /// Lay out `text` starting at `position` (top-left of the first glyph).
    pub fn layout(&self, text: &str, size: f32, position: (f32, f32)) -> TextLayout {
        let mut out = TextLayout::default();
        let (mut x, y) = position;

        for (i, ch) in text.chars().enumerate() {
            if ch == ' ' {
                x += SPACE_WIDTH * size;
                continue;
            }
            if i != 0 {
                x += LETTER_SPACING * size;
            }
            match self.glyph(ch) {
                Some(region) => out.glyphs.push(PlacedGlyph {
                    ch,
                    region,
                    position: (x, y),
                    size,
                }),
                None => out.missing.push(ch),
            }
        }

        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sheet_holds_ninety_glyphs() {
        let font = BitmapFont::new();
        assert_eq!(GLYPH_SEQUENCE.chars().count(), 90);
        assert_eq!(font.glyph('*'), Some(SpriteRegion::new(0, 0, 55, 62)));
        assert_eq!(font.glyph('4'), Some(SpriteRegion::new(0, 62, 55, 62)));
        assert_eq!(font.glyph(')'), Some(SpriteRegion::new(495, 496, 55, 62)));
        assert_eq!(font.glyph('~'), None);
    }

    #[test]
    fn layout_advances_for_letters_and_spaces() {
        let font = BitmapFont::new();
        let layout = font.layout("Player 1", 0.5, (32.0, 5.0));

        assert!(layout.missing.is_empty());
        assert_eq!(layout.glyphs.len(), 7);
        assert_eq!(layout.glyphs[0].position, (32.0, 5.0));
        assert_eq!(layout.glyphs[1].position, (44.0, 5.0));
        // Five letter advances, then a space and one more letter advance.
        assert_eq!(layout.glyphs[6].position, (32.0 + 6.0 * 12.0 + 9.0, 5.0));
    }

    #[test]
    fn unknown_glyphs_are_skipped_and_reported() {
        let font = BitmapFont::new();
        let layout = font.layout("a~b€", 1.0, (0.0, 0.0));

        assert_eq!(layout.missing, vec!['~', '€']);
        let placed: Vec<char> = layout.glyphs.iter().map(|g| g.ch).collect();
        assert_eq!(placed, vec!['a', 'b']);
        assert_eq!(layout.glyphs[1].position, (48.0, 0.0));
    }
}
