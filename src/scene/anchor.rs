use glam::Vec3;

use super::bounds::BoundingBox;
use super::NodeId;

/// A positioned element of the scene graph.
///
/// Anchors carry a translation relative to their parent, optional content
/// bounds, an enabled flag, and child anchors. Identity is the stable
/// [`NodeId`] assigned when the anchor enters a [`Scene`](super::Scene);
/// two anchors are "the same node" exactly when their ids match, never
/// by reference.
#[derive(Debug, Clone)]
pub struct Anchor {
    pub(super) id: NodeId,
    /// Translation relative to the parent anchor (world space for
    /// top-level anchors).
    pub position: Vec3,
    /// Bounds of this anchor's own content, in local space.
    pub local_bounds: BoundingBox,
    /// Disabled anchors and their sub-trees are skipped by bounds queries.
    pub enabled: bool,
    /// Human-readable name for diagnostics.
    pub name: String,
    pub(super) children: Vec<Anchor>,
}

impl Anchor {
    /// Anchor at `position` with no content and no children.
    #[must_use]
    pub fn new(position: Vec3) -> Self {
        Self {
            id: NodeId::UNASSIGNED,
            position,
            local_bounds: BoundingBox::EMPTY,
            enabled: true,
            name: String::new(),
            children: Vec::new(),
        }
    }

    /// Builder: set the content bounds.
    #[must_use]
    pub fn with_bounds(mut self, bounds: BoundingBox) -> Self {
        self.local_bounds = bounds;
        self
    }

    /// Builder: set the diagnostic name.
    #[must_use]
    pub fn with_name(mut self, name: &str) -> Self {
        self.name = name.to_owned();
        self
    }

    /// Builder: start disabled.
    #[must_use]
    pub fn disabled(mut self) -> Self {
        self.enabled = false;
        self
    }

    /// Stable identity; [`NodeId::UNASSIGNED`] until added to a scene.
    #[must_use]
    pub fn id(&self) -> NodeId {
        self.id
    }

    /// Append a child anchor.
    pub fn add_child(&mut self, child: Anchor) {
        self.children.push(child);
    }

    /// Child anchors.
    #[must_use]
    pub fn children(&self) -> &[Anchor] {
        &self.children
    }

    /// Mutable access to the child anchors.
    pub fn children_mut(&mut self) -> &mut [Anchor] {
        &mut self.children
    }

    /// World-space visual bounds of this anchor.
    ///
    /// With `recursive` the bounds of the whole sub-tree are unioned in,
    /// each child offset by its accumulated translation. With
    /// `exclude_inactive` disabled anchors contribute nothing, including
    /// their descendants.
    #[must_use]
    pub fn visual_bounds(
        &self,
        recursive: bool,
        exclude_inactive: bool,
    ) -> BoundingBox {
        self.bounds_from(Vec3::ZERO, recursive, exclude_inactive)
    }

    fn bounds_from(
        &self,
        origin: Vec3,
        recursive: bool,
        exclude_inactive: bool,
    ) -> BoundingBox {
        if exclude_inactive && !self.enabled {
            return BoundingBox::EMPTY;
        }
        let world = origin + self.position;
        let mut bounds = self.local_bounds.translated(world);
        if recursive {
            for child in &self.children {
                bounds = bounds.union(&child.bounds_from(
                    world,
                    recursive,
                    exclude_inactive,
                ));
            }
        }
        bounds
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn child_translations_accumulate() {
        let mut parent = Anchor::new(Vec3::new(1.0, 0.0, 0.0));
        let child = Anchor::new(Vec3::new(1.0, 0.0, 0.0))
            .with_bounds(BoundingBox::from_center_radius(Vec3::ZERO, 0.5));
        parent.add_child(child);

        let bounds = parent.visual_bounds(true, true);
        assert_eq!(bounds.center(), Vec3::new(2.0, 0.0, 0.0));
        assert!((bounds.bounding_radius() - 0.5 * 3.0_f32.sqrt()).abs() < 1e-5);
    }

    #[test]
    fn non_recursive_query_ignores_children() {
        let mut parent = Anchor::new(Vec3::ZERO)
            .with_bounds(BoundingBox::from_center_radius(Vec3::ZERO, 1.0));
        parent.add_child(
            Anchor::new(Vec3::new(10.0, 0.0, 0.0))
                .with_bounds(BoundingBox::from_center_radius(Vec3::ZERO, 1.0)),
        );

        let bounds = parent.visual_bounds(false, true);
        assert_eq!(bounds.center(), Vec3::ZERO);
        assert!(!bounds.contains(Vec3::new(10.0, 0.0, 0.0)));
    }

    #[test]
    fn disabled_subtree_contributes_nothing() {
        let mut parent = Anchor::new(Vec3::ZERO)
            .with_bounds(BoundingBox::from_center_radius(Vec3::ZERO, 1.0));
        let mut off = Anchor::new(Vec3::new(5.0, 0.0, 0.0)).disabled();
        off.add_child(
            Anchor::new(Vec3::ZERO)
                .with_bounds(BoundingBox::from_center_radius(Vec3::ZERO, 1.0)),
        );
        parent.add_child(off);

        let bounds = parent.visual_bounds(true, true);
        assert!(!bounds.contains(Vec3::new(5.0, 0.0, 0.0)));

        // Without exclude_inactive the disabled sub-tree counts again.
        let all = parent.visual_bounds(true, false);
        assert!(all.contains(Vec3::new(5.0, 0.0, 0.0)));
    }

    #[test]
    fn contentless_anchor_has_empty_bounds() {
        let anchor = Anchor::new(Vec3::new(3.0, 1.0, 2.0));
        assert!(anchor.visual_bounds(true, true).is_empty());
    }
}
