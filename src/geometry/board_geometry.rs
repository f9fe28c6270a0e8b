//! Mapping between screen coordinates and board cells.
//!
//! The board texture is drawn at a fixed virtual resolution. A cell's
//! top-left corner sits at `margin + (cell - 1) * block_size`; the window may
//! be scaled, so incoming pointer coordinates are divided by `scale` first.

use crate::game_state::chess_types::Position;

/// Virtual width and height of the board texture.
pub const GAME_SIZE: (f32, f32) = (736.0, 736.0);
/// Margin between the texture corner and the first block.
pub const DEFAULT_MARGIN: (f32, f32) = (41.0, 41.0);
/// Block size including its right/bottom border.
pub const DEFAULT_BLOCK_SIZE: (f32, f32) = (82.0, 82.0);
/// Block size without the border; used for highlight quads.
pub const BLOCK_INNER_SIZE: (f32, f32) = (80.0, 80.0);

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoardGeometry {
    pub margin: (f32, f32),
    pub block_size: (f32, f32),
    pub scale: (f32, f32),
}

impl Default for BoardGeometry {
    fn default() -> Self {
        Self {
            margin: DEFAULT_MARGIN,
            block_size: DEFAULT_BLOCK_SIZE,
            scale: (1.0, 1.0),
        }
    }
}

impl BoardGeometry {
    /// Same geometry with the scale derived from a window size. Windows
    /// smaller than half the virtual size are treated as half size.
    pub fn with_window_size(self, width: f32, height: f32) -> Self {
        let width = width.max(GAME_SIZE.0 / 2.0);
        let height = height.max(GAME_SIZE.1 / 2.0);
        Self {
            scale: (width / GAME_SIZE.0, height / GAME_SIZE.1),
            ..self
        }
    }

    /// Window coordinates to a board cell. Anything outside the board maps to
    /// an off-board position.
    pub fn screen_to_position(&self, x: f32, y: f32) -> Position {
        let file = ((x / self.scale.0 - self.margin.0) / self.block_size.0).floor();
        let rank = ((y / self.scale.1 - self.margin.1) / self.block_size.1).floor();
        Position::new(to_axis(file), to_axis(rank))
    }

    /// Top-left corner of a cell in virtual coordinates.
    pub fn position_to_screen(&self, position: Position) -> (f32, f32) {
        (
            self.margin.0 + f32::from(position.file - 1) * self.block_size.0,
            self.margin.1 + f32::from(position.rank - 1) * self.block_size.1,
        )
    }

    /// Centre of a cell in window coordinates.
    pub fn block_centre(&self, position: Position) -> (f32, f32) {
        let (x, y) = self.position_to_screen(position);
        (
            (x + self.block_size.0 / 2.0) * self.scale.0,
            (y + self.block_size.1 / 2.0) * self.scale.1,
        )
    }
}

// Clamp far-away coordinates into a range that is still clearly off-board.
// Non-finite input has no cell and maps to 0.
fn to_axis(value: f32) -> i8 {
    if !value.is_finite() {
        return 0;
    }
    (value.clamp(-64.0, 64.0) as i8).saturating_add(1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn corners_of_first_and_last_block() {
        let geometry = BoardGeometry::default();
        assert_eq!(geometry.screen_to_position(41.0, 41.0), Position::new(1, 1));
        assert_eq!(geometry.screen_to_position(122.9, 122.9), Position::new(1, 1));
        assert_eq!(geometry.screen_to_position(123.0, 41.0), Position::new(2, 1));
        assert_eq!(geometry.screen_to_position(694.9, 694.9), Position::new(8, 8));
        assert_eq!(geometry.position_to_screen(Position::new(8, 8)), (615.0, 615.0));
    }

    #[test]
    fn margin_and_outside_map_off_board() {
        let geometry = BoardGeometry::default();
        assert!(!geometry.screen_to_position(10.0, 300.0).is_on_board());
        assert!(!geometry.screen_to_position(300.0, 0.0).is_on_board());
        assert!(!geometry.screen_to_position(700.0, 300.0).is_on_board());
        assert!(!geometry.screen_to_position(-1.0e9, 1.0e9).is_on_board());
    }

    #[test]
    fn non_finite_pointer_maps_off_board() {
        let geometry = BoardGeometry::default();
        assert!(!geometry.screen_to_position(f32::NAN, f32::NAN).is_on_board());
        assert!(!geometry.screen_to_position(f32::NAN, 300.0).is_on_board());
        assert!(!geometry.screen_to_position(300.0, f32::NAN).is_on_board());
        assert!(!geometry.screen_to_position(f32::INFINITY, 300.0).is_on_board());
        assert!(!geometry.screen_to_position(300.0, f32::NEG_INFINITY).is_on_board());
    }

    #[test]
    fn centre_round_trips_for_every_cell() {
        for geometry in [
            BoardGeometry::default(),
            BoardGeometry::default().with_window_size(1472.0, 1104.0),
        ] {
            for file in 1..=8 {
                for rank in 1..=8 {
                    let position = Position::new(file, rank);
                    let (x, y) = geometry.block_centre(position);
                    assert_eq!(geometry.screen_to_position(x, y), position);
                }
            }
        }
    }

    #[test]
    fn window_size_sets_scale_with_minimum() {
        let geometry = BoardGeometry::default().with_window_size(1472.0, 100.0);
        assert_eq!(geometry.scale, (2.0, 0.5));
        assert_eq!(geometry.screen_to_position(2.0 * 41.0, 0.5 * 41.0), Position::new(1, 1));
    }
}
