//! View composition: scene, orbit camera, and the glue that keeps the
//! framing in sync with scene content.

use glam::Vec3;

use crate::camera::controller::CameraController;
use crate::input::{GestureEvent, InputMapper};
use crate::options::Options;
use crate::scene::bounds::BoundingBox;
use crate::scene::{Anchor, NodeId, Scene};

/// Half-extent of the reference floor carried by the camera rig, meters.
const FLOOR_HALF_EXTENT: f32 = 5.0;

/// A scene plus the orbit camera viewing it.
///
/// `OrbitView` owns the pieces a platform view would otherwise wire
/// together by hand: the scene graph, the camera controller, and the
/// camera's own rig anchor. The rig is excluded from bounds queries so
/// neither the camera nor the optional reference floor it carries ever
/// affects framing.
///
/// # Example
///
/// ```
/// use glam::Vec3;
/// use orbview::options::Options;
/// use orbview::scene::bounds::BoundingBox;
/// use orbview::scene::Anchor;
/// use orbview::view::OrbitView;
///
/// let mut view = OrbitView::new(&Options::default());
/// let content = Anchor::new(Vec3::ZERO)
///     .with_bounds(BoundingBox::from_center_radius(Vec3::ZERO, 2.0));
/// let _ = view.scene_mut().add_anchor(content);
/// view.sync_framing();
/// assert_eq!(view.camera().look_at(), Vec3::ZERO);
/// ```
pub struct OrbitView {
    scene: Scene,
    camera: CameraController,
    mapper: InputMapper,
    rig_id: NodeId,
    floor_id: NodeId,
}

impl OrbitView {
    /// Create a view with an empty scene and a camera rig.
    ///
    /// The rig anchor holds the reference floor (enabled per
    /// `options.display.show_floor`) and is excluded from framing from
    /// the start.
    #[must_use]
    pub fn new(options: &Options) -> Self {
        let mut scene = Scene::new();

        let mut rig = Anchor::new(Vec3::ZERO).with_name("camera-rig");
        let mut floor = Anchor::new(Vec3::ZERO)
            .with_name("floor")
            .with_bounds(BoundingBox::new(
                Vec3::new(-FLOOR_HALF_EXTENT, -0.01, -FLOOR_HALF_EXTENT),
                Vec3::new(FLOOR_HALF_EXTENT, 0.0, FLOOR_HALF_EXTENT),
            ));
        floor.enabled = options.display.show_floor;
        rig.add_child(floor);

        let rig_id = scene.add_anchor(rig);
        scene.set_excluded(rig_id, true);
        let floor_id = scene
            .anchor(rig_id)
            .and_then(|rig| rig.children().first())
            .map_or(NodeId::UNASSIGNED, Anchor::id);
        scene.mark_framed();

        Self {
            scene,
            camera: CameraController::new(&options.camera),
            mapper: InputMapper::default(),
            rig_id,
            floor_id,
        }
    }

    /// Forward one gesture to the camera.
    pub fn handle_gesture(&mut self, event: GestureEvent) {
        self.mapper.apply(&mut self.camera, event);
    }

    /// Re-frame the camera if scene content changed since the last call.
    ///
    /// Cheap when nothing changed. Call after scene mutations or on an
    /// external change notification; asynchronous loaders call this once
    /// their content has landed in the scene.
    pub fn sync_framing(&mut self) {
        if !self.scene.is_dirty() {
            return;
        }
        let bounds = self.scene.visual_bounds();
        self.camera.reframe(&bounds);
        self.scene.mark_framed();
    }

    /// Toggle the reference floor carried by the camera rig.
    ///
    /// The floor never affects framing: its anchor lives under the
    /// excluded rig.
    pub fn set_show_floor(&mut self, show: bool) {
        let floor_id = self.floor_id;
        if let Some(rig) = self.scene.anchor_mut(self.rig_id) {
            if let Some(floor) = rig
                .children_mut()
                .iter_mut()
                .find(|child| child.id() == floor_id)
            {
                floor.enabled = show;
            }
        }
    }

    /// Whether the reference floor is currently visible.
    #[must_use]
    pub fn show_floor(&self) -> bool {
        self.scene
            .anchor(self.rig_id)
            .and_then(|rig| {
                rig.children().iter().find(|c| c.id() == self.floor_id)
            })
            .is_some_and(|floor| floor.enabled)
    }

    /// The scene being viewed.
    #[must_use]
    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    /// Mutable scene access. Mutations mark the scene dirty; call
    /// [`sync_framing`](Self::sync_framing) afterwards.
    pub fn scene_mut(&mut self) -> &mut Scene {
        &mut self.scene
    }

    /// The orbit camera.
    #[must_use]
    pub fn camera(&self) -> &CameraController {
        &self.camera
    }

    /// Mutable camera access, e.g. for adjusting sensitivity factors.
    pub fn camera_mut(&mut self) -> &mut CameraController {
        &mut self.camera
    }

    /// Current world-space eye position.
    #[must_use]
    pub fn eye_position(&self) -> Vec3 {
        self.camera.eye_position()
    }

    /// Id of the excluded camera-rig anchor.
    #[must_use]
    pub fn rig_id(&self) -> NodeId {
        self.rig_id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn content_anchor(center: Vec3, radius: f32) -> Anchor {
        Anchor::new(center)
            .with_bounds(BoundingBox::from_center_radius(Vec3::ZERO, radius))
    }

    #[test]
    fn new_view_keeps_default_framing() {
        let mut view = OrbitView::new(&Options::default());
        let look_at = view.camera().look_at();
        let radius = view.camera().radius();
        view.sync_framing();
        assert_eq!(view.camera().look_at(), look_at);
        assert_eq!(view.camera().radius(), radius);
    }

    #[test]
    fn content_triggers_framing_on_sync() {
        let mut view = OrbitView::new(&Options::default());
        let center = Vec3::new(4.0, 0.0, 0.0);
        let _ = view.scene_mut().add_anchor(content_anchor(center, 1.0));
        view.sync_framing();

        assert_eq!(view.camera().look_at(), center);
        let expected = 2.0 * 3.0_f32.sqrt(); // twice the box half-diagonal
        assert!((view.camera().radius() - expected).abs() < 1e-5);
        assert_eq!(view.camera().scene_radius(), view.camera().radius());
    }

    #[test]
    fn sync_without_changes_preserves_user_navigation() {
        let mut view = OrbitView::new(&Options::default());
        let _ = view
            .scene_mut()
            .add_anchor(content_anchor(Vec3::ZERO, 2.0));
        view.sync_framing();

        view.handle_gesture(GestureEvent::Drag { dx: 30.0, dy: 10.0 });
        view.handle_gesture(GestureEvent::Magnify { delta: 0.5 });
        let theta = view.camera().theta();
        let radius = view.camera().radius();

        view.sync_framing();
        assert_eq!(view.camera().theta(), theta);
        assert_eq!(view.camera().radius(), radius);
    }

    #[test]
    fn floor_never_affects_framing() {
        let mut view = OrbitView::new(&Options::default());
        let _ = view
            .scene_mut()
            .add_anchor(content_anchor(Vec3::new(1.0, 0.0, 0.0), 1.0));
        view.sync_framing();
        let framed_look_at = view.camera().look_at();
        let framed_radius = view.camera().radius();

        assert!(!view.show_floor());
        view.set_show_floor(true);
        assert!(view.show_floor());
        view.sync_framing();
        assert_eq!(view.camera().look_at(), framed_look_at);
        assert_eq!(view.camera().radius(), framed_radius);
    }

    #[test]
    fn gestures_reach_the_camera() {
        let mut view = OrbitView::new(&Options::default());
        let theta = view.camera().theta();
        view.handle_gesture(GestureEvent::Drag { dx: 10.0, dy: 0.0 });
        assert!((view.camera().theta() - theta - 0.1).abs() < 1e-6);
    }

    #[test]
    fn rig_is_excluded_from_bounds() {
        let view = OrbitView::new(&Options::default());
        assert!(view.scene().is_excluded(view.rig_id()));
        assert!(view.scene().visual_bounds().is_empty());
    }
}
