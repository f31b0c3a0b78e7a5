use std::f32::consts::FRAC_PI_2;

use glam::Vec3;

use crate::camera::core::Camera;
use crate::options::CameraOptions;

/// Margin keeping `phi` strictly off the poles, where the view direction
/// and the up vector would become parallel.
const PHI_MARGIN: f32 = 1.0e-5;

/// Orbital camera controller parameterized in spherical coordinates.
///
/// The eye orbits a focus point at `look_at`: `theta` is the azimuth in
/// the x-z plane (at zero the eye sits on the negative z axis), `phi` is
/// the elevation above the horizon, `radius` the focus-to-eye distance.
/// Every mutation refreshes the inner [`Camera`] so renderers always see
/// a consistent eye/target pair.
pub struct CameraController {
    pub(super) theta: f32,
    pub(super) phi: f32,
    pub(super) radius: f32,
    pub(super) look_at: Vec3,
    pub(super) scene_radius: f32,

    /// Orbit sensitivity in radians per pixel of drag.
    pub angle_factor: f32,
    /// Pan sensitivity in meters per pixel of scroll.
    pub drag_factor: f32,
    /// Dolly sensitivity in meters per unit of pinch magnification.
    pub zoom_factor: f32,

    /// Derived camera consumed by the renderer.
    pub camera: Camera,
}

impl Default for CameraController {
    fn default() -> Self {
        Self::new(&CameraOptions::default())
    }
}

impl CameraController {
    /// Create a controller from camera options, focused on the origin.
    #[must_use]
    pub fn new(options: &CameraOptions) -> Self {
        let mut controller = Self {
            theta: 0.0,
            phi: options.initial_elevation.to_radians(),
            radius: 1.0,
            look_at: Vec3::ZERO,
            scene_radius: 20.0,
            angle_factor: options.angle_factor,
            drag_factor: options.drag_factor,
            zoom_factor: options.zoom_factor,
            camera: Camera {
                eye: Vec3::ZERO,
                target: Vec3::ZERO,
                up: Vec3::Y,
                aspect: 1.6,
                fovy: options.fovy,
                znear: options.znear,
                zfar: options.zfar,
            },
        };
        controller.look(None, None);
        controller
    }

    /// Rotate around the focus point by angle deltas in radians.
    ///
    /// `theta` wraps freely; `phi` is clamped just inside `±π/2`.
    pub fn orbit(&mut self, d_theta: f32, d_phi: f32) {
        self.theta += d_theta;
        self.phi = (self.phi + d_phi)
            .clamp(-FRAC_PI_2 + PHI_MARGIN, FRAC_PI_2 - PHI_MARGIN);
        self.look(None, None);
    }

    /// Move the eye along the view axis by `d_radius` meters.
    ///
    /// The distance never reaches zero (that would degenerate the view
    /// vector) and never exceeds the scene radius.
    pub fn dolly(&mut self, d_radius: f32) {
        self.radius =
            (self.radius + d_radius).clamp(f32::EPSILON, self.scene_radius);
        self.look(None, None);
    }

    /// Move the focus point in the view plane from screen-space deltas.
    ///
    /// Screen-horizontal motion maps to the world axis orthogonal to the
    /// view direction, screen-vertical to world-vertical attenuated by
    /// `cos(phi)`. The theta/phi coupling across the x/z axes reproduces
    /// the long-standing interaction feel and is not to be reworked into
    /// a fully orthogonal mapping.
    pub fn pan(&mut self, dx: f32, dy: f32) {
        let (sin_theta, cos_theta) = self.theta.sin_cos();
        let (sin_phi, cos_phi) = self.phi.sin_cos();

        let world_dx = self.drag_factor * dx * cos_theta * cos_phi
            - self.drag_factor * dy * sin_theta * sin_phi;
        let world_dy = self.drag_factor * dy * cos_phi;
        let world_dz = self.drag_factor * dx * sin_theta * cos_phi
            + self.drag_factor * dy * cos_theta * sin_phi;

        self.look_at += Vec3::new(world_dx, world_dy, world_dz);
        self.look(None, None);
    }

    /// Eye position derived from the spherical parameters.
    #[must_use]
    pub fn eye_position(&self) -> Vec3 {
        self.look_at
            + self.radius
                * Vec3::new(
                    self.phi.cos() * self.theta.sin(),
                    self.phi.sin(),
                    -self.phi.cos() * self.theta.cos(),
                )
    }

    /// Rewrite the inner camera's viewing direction.
    ///
    /// Arguments default to the current focus point and the derived eye
    /// position, so `look(None, None)` re-synchronizes the camera after
    /// parameter changes.
    pub fn look(&mut self, at: Option<Vec3>, from: Option<Vec3>) {
        self.camera.target = at.unwrap_or(self.look_at);
        self.camera.eye = from.unwrap_or_else(|| self.eye_position());
    }

    /// Azimuth in radians.
    #[must_use]
    pub fn theta(&self) -> f32 {
        self.theta
    }

    /// Elevation in radians, strictly inside `(-π/2, π/2)`.
    #[must_use]
    pub fn phi(&self) -> f32 {
        self.phi
    }

    /// Focus-to-eye distance in meters.
    #[must_use]
    pub fn radius(&self) -> f32 {
        self.radius
    }

    /// The focus point the camera orbits around.
    #[must_use]
    pub fn look_at(&self) -> Vec3 {
        self.look_at
    }

    /// Upper bound for [`radius`](Self::radius).
    #[must_use]
    pub fn scene_radius(&self) -> f32 {
        self.scene_radius
    }

    /// Set the upper bound for the orbit distance, re-clamping the
    /// current distance into the new range.
    pub fn set_scene_radius(&mut self, scene_radius: f32) {
        self.scene_radius = scene_radius.max(f32::EPSILON);
        self.radius = self.radius.clamp(f32::EPSILON, self.scene_radius);
        self.look(None, None);
    }
}
