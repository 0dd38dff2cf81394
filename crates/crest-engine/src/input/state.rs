use std::collections::HashSet;

use super::frame::{InputFrame, SCROLL_LINE_PX};
use super::types::{
    InputEvent,
    Key,
    KeyState,
    Modifiers,
    MouseButton,
    MouseButtonState,
    PointerButtonEvent,
    PointerMoveEvent,
    WheelDelta,
};

/// Current input state for a single window.
///
/// Holds "is down" information and the current pointer position. Per-frame
/// transitions are recorded into an `InputFrame`.
#[derive(Debug, Default)]
pub struct InputState {
    /// Current modifier state.
    pub modifiers: Modifiers,

    /// Whether the window is focused.
    pub focused: bool,

    /// Pointer position in logical pixels.
    pub pointer_pos: Option<(f32, f32)>,

    /// Set of currently held keys.
    pub keys_down: HashSet<Key>,

    /// Set of currently held mouse buttons.
    pub buttons_down: HashSet<MouseButton>,
}

impl InputState {
    /// Applies an input event to the current state and writes deltas to `frame`.
    pub fn apply_event(&mut self, frame: &mut InputFrame, ev: InputEvent) {
        match &ev {
            InputEvent::ModifiersChanged(m) => {
                self.modifiers = *m;
            }

            InputEvent::Focused(f) => {
                self.focused = *f;
                if !*f {
                    // Clear "down" sets on focus loss so nothing sticks
                    // when focus changes mid-press.
                    self.keys_down.clear();
                    self.buttons_down.clear();
                }
            }

            InputEvent::PointerMoved(PointerMoveEvent { x, y }) => {
                self.pointer_pos = Some((*x, *y));
            }

            InputEvent::PointerLeft => {
                self.pointer_pos = None;
            }

            InputEvent::Key { key, state, modifiers, .. } => {
                self.modifiers = *modifiers;

                match state {
                    KeyState::Pressed => {
                        if self.keys_down.insert(*key) {
                            frame.keys_pressed.insert(*key);
                        }
                    }
                    KeyState::Released => {
                        if self.keys_down.remove(key) {
                            frame.keys_released.insert(*key);
                        }
                    }
                }
            }

            InputEvent::PointerButton(PointerButtonEvent { button, state, x, y, modifiers }) => {
                self.pointer_pos = Some((*x, *y));
                self.modifiers = *modifiers;

                match state {
                    MouseButtonState::Pressed => {
                        if self.buttons_down.insert(*button) {
                            frame.buttons_pressed.insert(*button);
                        }
                    }
                    MouseButtonState::Released => {
                        if self.buttons_down.remove(button) {
                            frame.buttons_released.insert(*button);
                        }
                    }
                }
            }

            InputEvent::Wheel { delta, modifiers } => {
                self.modifiers = *modifiers;
                // Platform wheel Y is positive toward the top of the content;
                // the accumulator is positive-down so the sign flips here.
                frame.scroll_delta += match delta {
                    WheelDelta::Line { y, .. } => -y,
                    WheelDelta::Pixel { y, .. } => -y / SCROLL_LINE_PX,
                };
            }
        }

        frame.push_event(ev);
    }

    pub fn key_down(&self, key: Key) -> bool {
        self.keys_down.contains(&key)
    }

    pub fn button_down(&self, btn: MouseButton) -> bool {
        self.buttons_down.contains(&btn)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn wheel(y: f32) -> InputEvent {
        InputEvent::Wheel {
            delta: WheelDelta::Line { x: 0.0, y },
            modifiers: Modifiers::default(),
        }
    }

    #[test]
    fn wheel_events_accumulate_into_frame_delta() {
        let mut state = InputState::default();
        let mut frame = InputFrame::default();

        // Two notches away from the user (content up) then one back.
        state.apply_event(&mut frame, wheel(-1.0));
        state.apply_event(&mut frame, wheel(-1.0));
        state.apply_event(&mut frame, wheel(1.0));

        assert_eq!(frame.scroll_delta, 1.0);
        frame.clear();
        assert_eq!(frame.scroll_delta, 0.0);
    }

    #[test]
    fn pixel_delta_scales_to_line_units() {
        let mut state = InputState::default();
        let mut frame = InputFrame::default();

        state.apply_event(
            &mut frame,
            InputEvent::Wheel {
                delta: WheelDelta::Pixel { x: 0.0, y: -SCROLL_LINE_PX * 2.0 },
                modifiers: Modifiers::default(),
            },
        );

        assert_eq!(frame.scroll_delta, 2.0);
    }

    #[test]
    fn key_transitions_recorded_once() {
        let mut state = InputState::default();
        let mut frame = InputFrame::default();

        let press = InputEvent::Key {
            key: Key::ArrowDown,
            state: KeyState::Pressed,
            modifiers: Modifiers::default(),
            code: 0,
            repeat: false,
        };
        state.apply_event(&mut frame, press.clone());
        state.apply_event(&mut frame, press);

        assert!(state.key_down(Key::ArrowDown));
        assert_eq!(frame.keys_pressed.len(), 1);
    }

    #[test]
    fn focus_loss_clears_held_sets() {
        let mut state = InputState::default();
        let mut frame = InputFrame::default();

        state.apply_event(
            &mut frame,
            InputEvent::Key {
                key: Key::Space,
                state: KeyState::Pressed,
                modifiers: Modifiers::default(),
                code: 0,
                repeat: false,
            },
        );
        state.apply_event(&mut frame, InputEvent::Focused(false));

        assert!(!state.key_down(Key::Space));
        assert!(state.buttons_down.is_empty());
    }
}
