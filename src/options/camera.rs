use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Camera", inline)]
#[serde(default)]
/// Camera projection and gesture sensitivity parameters.
pub struct CameraOptions {
    /// Vertical field of view in degrees.
    #[schemars(title = "Field of View", range(min = 20.0, max = 90.0), extend("step" = 1.0))]
    pub fovy: f32,
    /// Near clipping plane distance.
    #[schemars(skip)]
    pub znear: f32,
    /// Far clipping plane distance.
    #[schemars(skip)]
    pub zfar: f32,
    /// Initial camera elevation above the horizon, in degrees.
    #[schemars(skip)]
    pub initial_elevation: f32,
    /// Orbit sensitivity in radians per pixel of drag.
    #[schemars(title = "Orbit Speed", range(min = 0.001, max = 0.1), extend("step" = 0.001))]
    pub angle_factor: f32,
    /// Pan sensitivity in meters per pixel of scroll. Rewritten on every
    /// re-framing so panning speed tracks scene size.
    #[schemars(title = "Pan Speed", range(min = 0.001, max = 1.0), extend("step" = 0.001))]
    pub drag_factor: f32,
    /// Dolly sensitivity in meters per unit of pinch magnification.
    /// Rewritten on every re-framing, like the pan speed.
    #[schemars(title = "Zoom Speed", range(min = 0.1, max = 10.0), extend("step" = 0.1))]
    pub zoom_factor: f32,
}

impl Default for CameraOptions {
    fn default() -> Self {
        Self {
            fovy: 45.0,
            znear: 0.1,
            zfar: 1000.0,
            initial_elevation: 15.0,
            angle_factor: 0.01,
            drag_factor: 0.01,
            zoom_factor: 1.0,
        }
    }
}
