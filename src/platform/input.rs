//! Window event intake
//!
//! Winit delivers events through callbacks; `WindowInput` accumulates them
//! until the next tick drains them.

use glam::Vec2;
use winit::event::{ElementState, MouseButton, MouseScrollDelta, WindowEvent};
use winit::keyboard::{Key, NamedKey};

use crate::frame::{InputSnapshot, InputSource};

/// Pixels of trackpad scroll that count as one wheel notch
const PIXELS_PER_NOTCH: f32 = 50.0;

/// Pending input since the last drain
#[derive(Debug, Default, Clone)]
pub struct WindowInput {
    close_requested: bool,
    reset_requested: bool,
    wheel: f32,
    drag: Vec2,
    cursor: Option<Vec2>,
    middle_down: bool,
}

impl WindowInput {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a window event; returns true if it was consumed
    pub fn handle_event(&mut self, event: &WindowEvent) -> bool {
        match event {
            WindowEvent::CloseRequested => {
                self.request_close();
                true
            }
            WindowEvent::KeyboardInput { event, .. } if event.state == ElementState::Pressed => {
                match &event.logical_key {
                    Key::Named(NamedKey::Escape) => self.request_close(),
                    Key::Character(c) if c.as_str().eq_ignore_ascii_case("r") => {
                        self.reset_requested = true
                    }
                    _ => return false,
                }
                true
            }
            WindowEvent::MouseWheel { delta, .. } => {
                self.on_wheel(*delta);
                true
            }
            WindowEvent::MouseInput {
                state,
                button: MouseButton::Middle,
                ..
            } => {
                self.on_middle_button(*state == ElementState::Pressed);
                true
            }
            WindowEvent::CursorMoved { position, .. } => {
                self.on_cursor_moved(Vec2::new(position.x as f32, position.y as f32));
                true
            }
            WindowEvent::CursorLeft { .. } => {
                self.on_cursor_left();
                true
            }
            // Button releases are not delivered while unfocused
            WindowEvent::Focused(false) => {
                self.middle_down = false;
                false
            }
            _ => false,
        }
    }

    pub fn request_close(&mut self) {
        self.close_requested = true;
    }

    pub fn on_wheel(&mut self, delta: MouseScrollDelta) {
        self.wheel += match delta {
            MouseScrollDelta::LineDelta(_, y) => y,
            MouseScrollDelta::PixelDelta(p) => p.y as f32 / PIXELS_PER_NOTCH,
        };
    }

    pub fn on_middle_button(&mut self, pressed: bool) {
        self.middle_down = pressed;
    }

    pub fn on_cursor_moved(&mut self, position: Vec2) {
        if self.middle_down {
            if let Some(last) = self.cursor {
                self.drag += position - last;
            }
        }
        self.cursor = Some(position);
    }

    /// Drop the cursor and any held drag; a release outside the window is never seen
    pub fn on_cursor_left(&mut self) {
        self.cursor = None;
        self.middle_down = false;
    }

    /// Cursor position in window pixels, if inside the window
    pub fn cursor(&self) -> Option<Vec2> {
        self.cursor
    }

    /// Accumulated wheel notches since the last call
    pub fn take_wheel(&mut self) -> f32 {
        std::mem::take(&mut self.wheel)
    }

    /// Accumulated middle-button drag since the last call
    pub fn take_drag(&mut self) -> Vec2 {
        std::mem::take(&mut self.drag)
    }

    pub fn take_reset(&mut self) -> bool {
        std::mem::take(&mut self.reset_requested)
    }
}

impl InputSource for WindowInput {
    fn poll_events(&mut self) -> InputSnapshot {
        InputSnapshot {
            close_requested: std::mem::take(&mut self.close_requested),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use winit::dpi::PhysicalPosition;

    #[test]
    fn test_close_is_drained_by_poll() {
        let mut input = WindowInput::new();
        assert!(!input.poll_events().close_requested);

        assert!(input.handle_event(&WindowEvent::CloseRequested));
        assert!(input.poll_events().close_requested);
        assert!(!input.poll_events().close_requested);
    }

    #[test]
    fn test_wheel_accumulates() {
        let mut input = WindowInput::new();
        input.on_wheel(MouseScrollDelta::LineDelta(0.0, 1.0));
        input.on_wheel(MouseScrollDelta::LineDelta(0.0, 2.0));
        input.on_wheel(MouseScrollDelta::PixelDelta(PhysicalPosition::new(0.0, -50.0)));
        assert_eq!(input.take_wheel(), 2.0);
        assert_eq!(input.take_wheel(), 0.0);
    }

    #[test]
    fn test_drag_only_while_middle_held() {
        let mut input = WindowInput::new();
        input.on_cursor_moved(Vec2::new(10.0, 10.0));
        input.on_cursor_moved(Vec2::new(20.0, 20.0));
        assert_eq!(input.take_drag(), Vec2::ZERO);

        input.on_middle_button(true);
        input.on_cursor_moved(Vec2::new(25.0, 18.0));
        input.on_cursor_moved(Vec2::new(30.0, 18.0));
        input.on_middle_button(false);
        input.on_cursor_moved(Vec2::new(100.0, 100.0));

        assert_eq!(input.take_drag(), Vec2::new(10.0, -2.0));
        assert_eq!(input.cursor(), Some(Vec2::new(100.0, 100.0)));
    }

    #[test]
    fn test_unhandled_event_is_ignored() {
        let mut input = WindowInput::new();
        assert!(!input.handle_event(&WindowEvent::Focused(true)));
        assert!(!input.take_reset());
    }

    #[test]
    fn test_leaving_window_ends_drag() {
        let mut input = WindowInput::new();
        input.on_cursor_moved(Vec2::new(10.0, 10.0));
        input.on_middle_button(true);
        input.on_cursor_left();
        assert_eq!(input.cursor(), None);

        // Button was released outside; returning must not pan
        input.on_cursor_moved(Vec2::new(50.0, 50.0));
        input.on_cursor_moved(Vec2::new(80.0, 60.0));
        assert_eq!(input.take_drag(), Vec2::ZERO);
    }

    #[test]
    fn test_focus_loss_ends_drag() {
        let mut input = WindowInput::new();
        input.on_middle_button(true);
        input.on_cursor_moved(Vec2::new(10.0, 10.0));
        input.handle_event(&WindowEvent::Focused(false));

        input.on_cursor_moved(Vec2::new(30.0, 10.0));
        assert_eq!(input.take_drag(), Vec2::ZERO);
    }
}
