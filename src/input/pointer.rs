//! Pointer input for one frame.
//!
//! Mouse and touch backends deliver different raw data: a mouse is polled for
//! its held button state, a touch panel delivers discrete events. Both are
//! reduced to an `InputFrame` whose `pressed`/`released` flags are true only
//! on the frame the edge happened.

/// Input consumed by one game tick.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct InputFrame {
    /// Pointer position in window coordinates.
    pub pointer: (f32, f32),
    pub pressed: bool,
    pub released: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TouchPhase {
    Pressed,
    Moved,
    Released,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TouchEvent {
    pub phase: TouchPhase,
    pub position: (f32, f32),
}

/// Turns raw pointer samples into edge-triggered frames.
#[derive(Debug, Clone, Copy, Default)]
pub struct PointerTracker {
    position: (f32, f32),
    button_was_down: bool,
}

impl PointerTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Last known pointer position.
    pub fn position(&self) -> (f32, f32) {
        self.position
    }

    /// Feed one polled mouse sample.
    pub fn sample(&mut self, position: (f32, f32), button_down: bool) -> InputFrame {
        let frame = InputFrame {
            pointer: position,
            pressed: button_down && !self.button_was_down,
            released: !button_down && self.button_was_down,
        };
        self.position = position;
        self.button_was_down = button_down;
        frame
    }

    /// Feed the touch events received since the previous frame. The pointer
    /// follows the last event; the edge flags accumulate over the batch.
    pub fn touch(&mut self, events: &[TouchEvent]) -> InputFrame {
        let mut frame = InputFrame {
            pointer: self.position,
            ..InputFrame::default()
        };
        for event in events {
            frame.pointer = event.position;
            match event.phase {
                TouchPhase::Pressed => {
                    frame.pressed = true;
                    self.button_was_down = true;
                }
                TouchPhase::Released => {
                    frame.released = true;
                    self.button_was_down = false;
                }
                TouchPhase::Moved => {}
            }
        }
        self.position = frame.pointer;
        frame
    }

    /// A complete click at `position`: the returned frame carries the
    /// release edge. Used by scripted drivers.
    pub fn click(&mut self, position: (f32, f32)) -> InputFrame {
        self.sample(position, true);
        self.sample(position, false)
    }
}
