//! Winit window-event translation into gesture deltas.

use glam::Vec2;
use winit::event::{ElementState, MouseButton, MouseScrollDelta, WindowEvent};

use super::event::GestureEvent;

/// Pixels represented by one line of `MouseScrollDelta::LineDelta`.
const LINE_SCROLL_PIXELS: f32 = 12.0;

/// Translates winit window events into [`GestureEvent`]s.
///
/// Owns the transient pointer state that raw window events leave implicit
/// (last cursor position, pressed button, shift modifier). One adapter
/// instance per window; feed every `WindowEvent` through
/// [`translate`](Self::translate) and forward the returned gestures to the
/// view.
pub struct WinitGestureAdapter {
    last_cursor_pos: Option<Vec2>,
    mouse_pressed: bool,
    shift_pressed: bool,
}

impl Default for WinitGestureAdapter {
    fn default() -> Self {
        Self::new()
    }
}

impl WinitGestureAdapter {
    /// Create an adapter with no pointer state.
    #[must_use]
    pub fn new() -> Self {
        Self {
            last_cursor_pos: None,
            mouse_pressed: false,
            shift_pressed: false,
        }
    }

    /// Translate one window event into the gesture it maps to, if any.
    ///
    /// Left-drag orbits, shift-left-drag pans, the scroll wheel pans,
    /// and pinch gestures dolly.
    pub fn translate(&mut self, event: &WindowEvent) -> Option<GestureEvent> {
        match event {
            WindowEvent::MouseInput {
                button: MouseButton::Left,
                state,
                ..
            } => {
                self.mouse_pressed = *state == ElementState::Pressed;
                None
            }
            WindowEvent::ModifiersChanged(modifiers) => {
                self.shift_pressed = modifiers.state().shift_key();
                None
            }
            WindowEvent::CursorMoved { position, .. } => {
                let current =
                    Vec2::new(position.x as f32, position.y as f32);
                let delta = self
                    .last_cursor_pos
                    .map_or(Vec2::ZERO, |last| current - last);
                self.last_cursor_pos = Some(current);

                if !self.mouse_pressed || delta == Vec2::ZERO {
                    return None;
                }
                if self.shift_pressed {
                    Some(GestureEvent::Scroll {
                        dx: delta.x,
                        dy: delta.y,
                    })
                } else {
                    Some(GestureEvent::Drag {
                        dx: delta.x,
                        dy: delta.y,
                    })
                }
            }
            WindowEvent::MouseWheel { delta, .. } => {
                let (dx, dy) = match delta {
                    MouseScrollDelta::LineDelta(x, y) => {
                        (x * LINE_SCROLL_PIXELS, y * LINE_SCROLL_PIXELS)
                    }
                    MouseScrollDelta::PixelDelta(pos) => {
                        (pos.x as f32, pos.y as f32)
                    }
                };
                Some(GestureEvent::Scroll { dx, dy })
            }
            WindowEvent::PinchGesture { delta, .. } => {
                Some(GestureEvent::Magnify {
                    delta: *delta as f32,
                })
            }
            _ => None,
        }
    }
}
