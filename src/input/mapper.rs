//! Converts gesture deltas into camera mutations.

use super::event::GestureEvent;
use crate::camera::controller::CameraController;

/// The single seam between platform input and camera math.
///
/// Applies the controller's configured sensitivity factors and nothing
/// else: clamping stays with the controller, and the mapper carries no
/// state of its own.
#[derive(Debug, Default, Clone, Copy)]
pub struct InputMapper;

impl InputMapper {
    /// Apply one gesture to the controller.
    pub fn apply(self, camera: &mut CameraController, event: GestureEvent) {
        match event {
            GestureEvent::Drag { dx, dy } => {
                camera.orbit(dx * camera.angle_factor, dy * camera.angle_factor);
            }
            GestureEvent::Scroll { dx, dy } => camera.pan(dx, dy),
            GestureEvent::Magnify { delta } => {
                camera.dolly(-delta * camera.zoom_factor);
            }
        }
    }
}
