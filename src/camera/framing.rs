//! Scene-bounds-driven camera framing.
//!
//! Translates a bounding volume into orbit parameters: focus on the
//! volume's center, back the eye off to twice the bounding radius, and
//! scale pan/dolly sensitivity with the scene so interaction speed tracks
//! scene size.

use crate::camera::controller::CameraController;
use crate::scene::bounds::BoundingBox;

/// Pan sensitivity per meter of scene diameter.
const DRAG_FACTOR_SCALE: f32 = 0.01;
/// Dolly sensitivity per meter of scene diameter.
const ZOOM_FACTOR_SCALE: f32 = 1.0;

impl CameraController {
    /// Re-frame the view so `bounds` is fully visible.
    ///
    /// Empty bounds leave the controller untouched: the previous framing
    /// survives rather than collapsing onto the origin. With the same
    /// non-empty bounds this is idempotent: the second call changes
    /// nothing.
    pub fn reframe(&mut self, bounds: &BoundingBox) {
        let bounding_radius = bounds.bounding_radius();
        if bounding_radius == 0.0 {
            return;
        }

        // Floor like `set_scene_radius` so the dolly clamp range stays
        // valid even for sub-epsilon scenes.
        let distance = (2.0 * bounding_radius).max(f32::EPSILON);
        self.radius = distance;
        self.scene_radius = distance;
        self.look_at = bounds.center();
        self.drag_factor = DRAG_FACTOR_SCALE / 2.0 * distance;
        self.zoom_factor = ZOOM_FACTOR_SCALE / 2.0 * distance;
        self.look(None, None);

        log::debug!(
            "reframed: center {:?}, bounding radius {bounding_radius}",
            self.look_at
        );
    }
}

#[cfg(test)]
mod tests {
    use glam::Vec3;

    use super::*;

    fn snapshot(camera: &CameraController) -> (f32, f32, f32, Vec3, f32, f32, f32, Vec3) {
        (
            camera.theta(),
            camera.phi(),
            camera.radius(),
            camera.look_at(),
            camera.scene_radius(),
            camera.drag_factor,
            camera.zoom_factor,
            camera.camera.eye,
        )
    }

    #[test]
    fn empty_bounds_change_nothing() {
        let mut camera = CameraController::default();
        let before = snapshot(&camera);
        camera.reframe(&BoundingBox::EMPTY);
        assert_eq!(snapshot(&camera), before);
    }

    #[test]
    fn zero_radius_bounds_change_nothing() {
        let mut camera = CameraController::default();
        let before = snapshot(&camera);
        let point = BoundingBox::new(Vec3::ONE, Vec3::ONE);
        camera.reframe(&point);
        assert_eq!(snapshot(&camera), before);
    }

    #[test]
    fn reframe_centers_and_backs_off() {
        let mut camera = CameraController::default();
        let center = Vec3::new(1.0, 2.0, 3.0);
        let bounds = BoundingBox::from_center_radius(center, 2.0);
        camera.reframe(&bounds);

        let distance = 2.0 * bounds.bounding_radius();
        assert_eq!(camera.look_at(), center);
        assert_eq!(camera.radius(), distance);
        assert_eq!(camera.scene_radius(), distance);
        assert_eq!(camera.camera.eye, camera.eye_position());
        assert_eq!(camera.camera.target, center);
    }

    #[test]
    fn sensitivity_scales_with_scene_size() {
        let mut small = CameraController::default();
        let mut large = CameraController::default();
        small.reframe(&BoundingBox::from_center_radius(Vec3::ZERO, 1.0));
        large.reframe(&BoundingBox::from_center_radius(Vec3::ZERO, 100.0));

        assert!(large.drag_factor > small.drag_factor);
        assert!(large.zoom_factor > small.zoom_factor);
        assert_eq!(small.drag_factor, 0.01 / 2.0 * small.radius());
        assert_eq!(small.zoom_factor, 1.0 / 2.0 * small.radius());
    }

    #[test]
    fn reframe_is_idempotent() {
        let mut camera = CameraController::default();
        let bounds =
            BoundingBox::from_center_radius(Vec3::new(-3.0, 0.5, 8.0), 4.0);
        camera.reframe(&bounds);
        let first = snapshot(&camera);
        camera.reframe(&bounds);
        assert_eq!(snapshot(&camera), first);
    }

    #[test]
    fn tiny_scene_keeps_dolly_clamp_range_valid() {
        let mut camera = CameraController::default();
        camera.reframe(&BoundingBox::from_center_radius(Vec3::ZERO, 1.0e-8));
        assert!(camera.scene_radius() >= f32::EPSILON);
        // Must not panic: the clamp range stays non-empty.
        camera.dolly(-1.0);
        assert!(camera.radius() >= f32::EPSILON);
        assert!(camera.radius() <= camera.scene_radius());
    }

    #[test]
    fn dolly_respects_reframed_scene_radius() {
        let mut camera = CameraController::default();
        camera.reframe(&BoundingBox::from_center_radius(Vec3::ZERO, 3.0));
        camera.dolly(1.0e6);
        assert_eq!(camera.radius(), camera.scene_radius());
    }
}
