use std::collections::HashSet;

use super::types::{InputEvent, Key, MouseButton};

/// Logical pixels one "scroll line" advances by.
///
/// Used to fold `WheelDelta::Pixel` deltas into the same line-unit
/// accumulator as `WheelDelta::Line` input.
pub(crate) const SCROLL_LINE_PX: f32 = 24.0;

/// Per-frame input deltas.
///
/// `InputState` provides the current state (held keys/buttons, pointer
/// position). `InputFrame` provides events and transition sets for the
/// current frame and is cleared after each frame is consumed.
#[derive(Debug, Default)]
pub struct InputFrame {
    /// Raw events in arrival order.
    pub events: Vec<InputEvent>,

    /// Keys pressed this frame.
    pub keys_pressed: HashSet<Key>,

    /// Keys released this frame.
    pub keys_released: HashSet<Key>,

    /// Mouse buttons pressed this frame.
    pub buttons_pressed: HashSet<MouseButton>,

    /// Mouse buttons released this frame.
    pub buttons_released: HashSet<MouseButton>,

    /// Accumulated vertical scroll this frame, in line units.
    ///
    /// Positive = scroll down (reveal content below). Pixel-precision deltas
    /// are divided by [`SCROLL_LINE_PX`] before accumulation.
    pub scroll_delta: f32,
}

impl InputFrame {
    pub fn clear(&mut self) {
        self.events.clear();
        self.keys_pressed.clear();
        self.keys_released.clear();
        self.buttons_pressed.clear();
        self.buttons_released.clear();
        self.scroll_delta = 0.0;
    }

    pub fn push_event(&mut self, ev: InputEvent) {
        self.events.push(ev);
    }
}
