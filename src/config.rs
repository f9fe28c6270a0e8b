//! Runtime configuration: board geometry, window size and the hover
//! highlight animation.
//!
//! Defaults reproduce the stock board texture. Options can be changed by
//! name, which is how the text front-end's `setoption` command reaches them.

use std::time::Duration;

use crate::errors::GameError;
use crate::game_state::chess_types::Player;
use crate::geometry::board_geometry::{BoardGeometry, GAME_SIZE};

/// RGBA colour, components in `0..=255`.
pub type Rgba = [u8; 4];

/// Option names accepted by `GameConfig::set_option`.
pub const OPTION_NAMES: [&str; 7] = [
    "MarginX",
    "MarginY",
    "BlockSize",
    "WindowWidth",
    "WindowHeight",
    "HoverDurationMs",
    "HoverMinIntensity",
];

#[derive(Debug, Clone, PartialEq)]
pub struct GameConfig {
    pub geometry: BoardGeometry,
    pub window_size: (f32, f32),
    /// Time for the hover highlight to fade in.
    pub hover_duration: Duration,
    /// Highlight intensity at the start of the fade, in `[0, 1]`.
    pub hover_min_intensity: f32,
    /// Highlight colour per player, indexed by `Player::index`.
    pub highlight_colors: [Rgba; 2],
    /// Status text colour per player.
    pub text_colors: [Rgba; 2],
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            geometry: BoardGeometry::default(),
            window_size: GAME_SIZE,
            hover_duration: Duration::from_millis(250),
            hover_min_intensity: 0.1,
            // 60 % opacity overlays.
            highlight_colors: [[170, 170, 170, 153], [171, 149, 89, 153]],
            text_colors: [[212, 208, 225, 255], [192, 169, 107, 255]],
        }
    }
}

impl GameConfig {
    /// Geometry with the scale for the current window size applied.
    pub fn effective_geometry(&self) -> BoardGeometry {
        self.geometry
            .with_window_size(self.window_size.0, self.window_size.1)
    }

    pub fn highlight_color(&self, player: Player) -> Rgba {
        self.highlight_colors[player.index()]
    }

    pub fn text_color(&self, player: Player) -> Rgba {
        self.text_colors[player.index()]
    }

    pub fn set_option(&mut self, name: &str, value: &str) -> Result<(), GameError> {
        let invalid = || GameError::InvalidOptionValue(name.to_owned(), value.to_owned());

        if name.eq_ignore_ascii_case("MarginX") {
            self.geometry.margin.0 = parse_non_negative(value).ok_or_else(invalid)?;
        } else if name.eq_ignore_ascii_case("MarginY") {
            self.geometry.margin.1 = parse_non_negative(value).ok_or_else(invalid)?;
        } else if name.eq_ignore_ascii_case("BlockSize") {
            let size = parse_non_negative(value)
                .filter(|size| *size > 0.0)
                .ok_or_else(invalid)?;
            self.geometry.block_size = (size, size);
        } else if name.eq_ignore_ascii_case("WindowWidth") {
            self.window_size.0 = parse_non_negative(value).ok_or_else(invalid)?;
        } else if name.eq_ignore_ascii_case("WindowHeight") {
            self.window_size.1 = parse_non_negative(value).ok_or_else(invalid)?;
        } else if name.eq_ignore_ascii_case("HoverDurationMs") {
            let millis = value.parse::<u64>().map_err(|_| invalid())?;
            self.hover_duration = Duration::from_millis(millis);
        } else if name.eq_ignore_ascii_case("HoverMinIntensity") {
            self.hover_min_intensity = parse_non_negative(value)
                .filter(|v| *v <= 1.0)
                .ok_or_else(invalid)?;
        } else {
            return Err(GameError::UnknownOption(name.to_owned()));
        }

        Ok(())
    }
}

fn parse_non_negative(value: &str) -> Option<f32> {
    value
        .trim()
        .parse::<f32>()
        .ok()
        .filter(|v| v.is_finite() && *v >= 0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_stock_board() {
        let config = GameConfig::default();
        assert_eq!(config.geometry.margin, (41.0, 41.0));
        assert_eq!(config.geometry.block_size, (82.0, 82.0));
        assert_eq!(config.effective_geometry().scale, (1.0, 1.0));
        assert_eq!(config.hover_duration, Duration::from_millis(250));
    }

    #[test]
    fn options_are_case_insensitive() -> Result<(), GameError> {
        let mut config = GameConfig::default();
        config.set_option("blocksize", "100")?;
        config.set_option("WINDOWWIDTH", "1472")?;
        config.set_option("HoverDurationMs", "500")?;
        config.set_option("hoverminintensity", "0.5")?;

        assert_eq!(config.geometry.block_size, (100.0, 100.0));
        assert_eq!(config.effective_geometry().scale.0, 2.0);
        assert_eq!(config.hover_duration, Duration::from_millis(500));
        assert_eq!(config.hover_min_intensity, 0.5);
        Ok(())
    }

    #[test]
    fn rejects_bad_options() {
        let mut config = GameConfig::default();
        assert_eq!(
            config.set_option("Threads", "4"),
            Err(GameError::UnknownOption("Threads".to_owned()))
        );
        assert!(config.set_option("BlockSize", "0").is_err());
        assert!(config.set_option("MarginX", "-3").is_err());
        assert!(config.set_option("HoverMinIntensity", "1.5").is_err());
        assert!(config.set_option("HoverDurationMs", "soon").is_err());
        assert_eq!(config, GameConfig::default());
    }
}
