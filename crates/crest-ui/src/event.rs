use crest_engine::coords::Vec2;
use crest_engine::input::Key;

pub use crest_engine::input::Modifiers;

/// Input events routed through the widget tree.
#[derive(Debug, Clone)]
pub enum UiEvent {
    /// Primary mouse button pressed and released at `pos`.
    Click { pos: Vec2 },
    /// Mouse moved to `pos` (fired every frame).
    Hover { pos: Vec2 },
    /// Named key pressed (arrow keys, Page Up/Down, Home, End, …).
    KeyPress { key: Key, modifiers: Modifiers },
    /// Mouse wheel / trackpad scroll.
    ///
    /// `delta` > 0 → scroll down (reveal content below); < 0 → scroll up.
    /// Units are lines; multiply by a line height to get pixels.
    ScrollWheel { delta: f32 },
}

/// Result returned by [`Widget::on_event`].
///
/// [`Widget::on_event`]: crate::widget::Widget::on_event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventResult {
    /// Event was handled — stop routing to siblings / parents.
    Consumed,
    /// Event was not handled — keep routing.
    Ignored,
}

impl EventResult {
    #[inline]
    pub fn is_consumed(self) -> bool {
        self == EventResult::Consumed
    }
}
