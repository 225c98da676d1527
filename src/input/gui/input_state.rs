use crate::core::navigation::controls::InputSnapshot;
use winit::event::{ElementState, MouseButton};
use winit::keyboard::KeyCode;

/// A control that stays reported as pressed for one snapshot even if it was
/// released again before that snapshot was taken.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
struct StickyControl {
    held: bool,
    pressed_since_snapshot: bool,
}

impl StickyControl {
    fn set(&mut self, pressed: bool) {
        self.held = pressed;
        if pressed {
            self.pressed_since_snapshot = true;
        }
    }

    fn take(&mut self) -> bool {
        let pressed = self.held || self.pressed_since_snapshot;
        self.pressed_since_snapshot = false;
        pressed
    }
}

/// Accumulates winit events between frames and turns them into one
/// [`InputSnapshot`] per frame.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct RawInputState {
    primary_button: StickyControl,
    zoom_in: StickyControl,
    zoom_out: StickyControl,
    reset: StickyControl,
    cursor_position: (f64, f64),
}

impl RawInputState {
    pub fn handle_key_event(&mut self, key_code: KeyCode, state: ElementState) {
        let pressed = state == ElementState::Pressed;

        match key_code {
            KeyCode::Equal | KeyCode::NumpadAdd => self.zoom_in.set(pressed),
            KeyCode::Minus | KeyCode::NumpadSubtract => self.zoom_out.set(pressed),
            KeyCode::Digit0 | KeyCode::Numpad0 => self.reset.set(pressed),
            _ => {}
        }
    }

    pub fn handle_mouse_button(&mut self, button: MouseButton, state: ElementState) {
        if button == MouseButton::Left {
            self.primary_button.set(state == ElementState::Pressed);
        }
    }

    pub fn handle_cursor_moved(&mut self, x: f64, y: f64) {
        self.cursor_position = (x, y);
    }

    pub fn snapshot(&mut self) -> InputSnapshot {
        InputSnapshot {
            primary_button_down: self.primary_button.take(),
            zoom_in_requested: self.zoom_in.take(),
            zoom_out_requested: self.zoom_out.take(),
            reset_requested: self.reset.take(),
            cursor_position: self.cursor_position,
        }
    }

    /// Releases every control, keeping the cursor where it was.
    pub fn release_all(&mut self) {
        *self = Self {
            cursor_position: self.cursor_position,
            ..Self::default()
        };
    }
}

#[cfg(test)]
mod tests {
    use super::RawInputState;
    use winit::{
        event::{ElementState, MouseButton},
        keyboard::KeyCode,
    };

    #[test]
    fn key_bindings_map_to_controls() {
        let mut input = RawInputState::default();

        input.handle_key_event(KeyCode::Equal, ElementState::Pressed);
        input.handle_key_event(KeyCode::NumpadSubtract, ElementState::Pressed);
        input.handle_key_event(KeyCode::Digit0, ElementState::Pressed);

        let snapshot = input.snapshot();
        assert!(snapshot.zoom_in_requested);
        assert!(snapshot.zoom_out_requested);
        assert!(snapshot.reset_requested);
        assert!(!snapshot.primary_button_down);
    }

    #[test]
    fn numpad_aliases_match_main_keys() {
        let mut input = RawInputState::default();

        input.handle_key_event(KeyCode::NumpadAdd, ElementState::Pressed);
        input.handle_key_event(KeyCode::Minus, ElementState::Pressed);
        input.handle_key_event(KeyCode::Numpad0, ElementState::Pressed);

        let snapshot = input.snapshot();
        assert!(snapshot.zoom_in_requested);
        assert!(snapshot.zoom_out_requested);
        assert!(snapshot.reset_requested);
    }

    #[test]
    fn held_control_stays_pressed_across_snapshots() {
        let mut input = RawInputState::default();

        input.handle_key_event(KeyCode::Equal, ElementState::Pressed);

        assert!(input.snapshot().zoom_in_requested);
        assert!(input.snapshot().zoom_in_requested);

        input.handle_key_event(KeyCode::Equal, ElementState::Released);
        assert!(!input.snapshot().zoom_in_requested);
    }

    #[test]
    fn tap_between_snapshots_is_seen_once() {
        let mut input = RawInputState::default();

        input.handle_mouse_button(MouseButton::Left, ElementState::Pressed);
        input.handle_mouse_button(MouseButton::Left, ElementState::Released);

        assert!(input.snapshot().primary_button_down);
        assert!(!input.snapshot().primary_button_down);
    }

    #[test]
    fn other_mouse_buttons_are_ignored() {
        let mut input = RawInputState::default();

        input.handle_mouse_button(MouseButton::Right, ElementState::Pressed);

        assert!(!input.snapshot().primary_button_down);
    }

    #[test]
    fn cursor_position_is_reported_in_raster_space() {
        let mut input = RawInputState::default();

        input.handle_cursor_moved(12.5, 300.0);

        assert_eq!(input.snapshot().cursor_position, (12.5, 300.0));
    }

    #[test]
    fn release_all_keeps_cursor() {
        let mut input = RawInputState::default();
        input.handle_cursor_moved(4.0, 8.0);
        input.handle_key_event(KeyCode::Minus, ElementState::Pressed);
        input.handle_mouse_button(MouseButton::Left, ElementState::Pressed);

        input.release_all();

        let snapshot = input.snapshot();
        assert!(!snapshot.zoom_out_requested);
        assert!(!snapshot.primary_button_down);
        assert_eq!(snapshot.cursor_position, (4.0, 8.0));
    }
}
