//! Fade-in animation for the hovered-piece highlight.

use std::time::Duration;

use crate::game_state::chess_types::PieceId;

#[derive(Debug, Clone, Copy, Default)]
pub struct HoverAnimation {
    elapsed: Duration,
    previous: Option<PieceId>,
}

impl HoverAnimation {
    pub fn new() -> Self {
        Self::default()
    }

    /// Restart the fade whenever the hovered piece changes. Called every
    /// frame, whether or not the highlight is drawn.
    pub fn observe(&mut self, hovered: Option<PieceId>) {
        if hovered != self.previous {
            self.elapsed = Duration::ZERO;
            self.previous = hovered;
        }
    }

    /// Advance by one drawn frame and return the highlight intensity, rising
    /// linearly from `min_intensity` to 1 over `duration`.
    pub fn advance(
        &mut self,
        frame_time: Duration,
        duration: Duration,
        min_intensity: f32,
    ) -> f32 {
        if self.elapsed < duration {
            self.elapsed += frame_time;
        }

        let progress = if duration.is_zero() {
            1.0
        } else {
            (self.elapsed.as_secs_f32() / duration.as_secs_f32()).min(1.0)
        };
        progress * (1.0 - min_intensity) + min_intensity
    }
}
