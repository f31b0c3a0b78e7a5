/// Platform-agnostic gesture deltas.
///
/// These are fed into the [`InputMapper`](super::InputMapper), which turns
/// them into camera mutations. Platform layers construct them directly or
/// through an adapter (see the `platform` module behind the `viewer`
/// feature).
///
/// # Example
///
/// ```ignore
/// view.handle_gesture(GestureEvent::Drag { dx: 12.0, dy: -3.0 });
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GestureEvent {
    /// Pointer drag; orbits the camera around its focus point.
    Drag {
        /// Horizontal delta in physical pixels.
        dx: f32,
        /// Vertical delta in physical pixels.
        dy: f32,
    },
    /// Two-axis scroll; pans the focus point in the view plane.
    Scroll {
        /// Horizontal delta in physical pixels.
        dx: f32,
        /// Vertical delta in physical pixels.
        dy: f32,
    },
    /// Pinch magnification; positive deltas move the camera closer.
    Magnify {
        /// Dimensionless magnification delta.
        delta: f32,
    },
}
