//! Scene graph: anchors, bounding volumes, and exclusion-aware bounds
//! accumulation.
//!
//! The scene owns top-level [`Anchor`]s in a flat list. Each anchor gets a
//! stable [`NodeId`] on insertion; ids drive the exclusion set that keeps
//! the camera's own rig out of framing calculations. A generation counter
//! bumped on every mutation lets the view re-frame exactly when content
//! changed.

mod anchor;
/// Axis-aligned bounding volumes.
pub mod bounds;

pub use anchor::Anchor;
use bounds::BoundingBox;
use rustc_hash::FxHashSet;

// ---------------------------------------------------------------------------
// NodeId
// ---------------------------------------------------------------------------

/// Stable scene-node identity, assigned on insertion into a [`Scene`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(u32);

impl NodeId {
    /// Sentinel for anchors not yet added to a scene.
    pub const UNASSIGNED: Self = Self(u32::MAX);
}

// ---------------------------------------------------------------------------
// Scene
// ---------------------------------------------------------------------------

/// The authoritative scene. Owns all top-level anchors in a flat list.
pub struct Scene {
    /// Anchors in insertion order.
    anchors: Vec<Anchor>,
    /// Ids whose sub-trees never contribute to visual bounds.
    excluded: FxHashSet<NodeId>,
    next_node_id: u32,
    /// Monotonically increasing generation; bumped on any mutation.
    generation: u64,
    /// Generation that was last consumed by the view framer.
    framed_generation: u64,
}

impl Default for Scene {
    fn default() -> Self {
        Self::new()
    }
}

impl Scene {
    /// Create an empty scene.
    #[must_use]
    pub fn new() -> Self {
        Self {
            anchors: Vec::new(),
            excluded: FxHashSet::default(),
            next_node_id: 0,
            generation: 0,
            framed_generation: 0,
        }
    }

    // -- Change tracking --

    fn invalidate(&mut self) {
        self.generation += 1;
    }

    /// Whether scene content changed since the last [`mark_framed`](Self::mark_framed).
    #[must_use]
    pub fn is_dirty(&self) -> bool {
        self.generation != self.framed_generation
    }

    /// Force the scene dirty so the next framing pass recomputes bounds.
    pub fn force_dirty(&mut self) {
        self.invalidate();
    }

    /// Mark the current generation as framed (call after re-framing).
    pub fn mark_framed(&mut self) {
        self.framed_generation = self.generation;
    }

    // -- Anchor management --

    /// Add one anchor. Assigns fresh ids to it and its whole sub-tree and
    /// returns the top-level id.
    pub fn add_anchor(&mut self, mut anchor: Anchor) -> NodeId {
        self.assign_ids(&mut anchor);
        let id = anchor.id;
        self.anchors.push(anchor);
        self.invalidate();
        id
    }

    /// Add anchors in bulk. Returns the assigned top-level ids.
    pub fn add_anchors(&mut self, anchors: Vec<Anchor>) -> Vec<NodeId> {
        anchors
            .into_iter()
            .map(|anchor| self.add_anchor(anchor))
            .collect()
    }

    fn assign_ids(&mut self, anchor: &mut Anchor) {
        anchor.id = NodeId(self.next_node_id);
        self.next_node_id += 1;
        for child in &mut anchor.children {
            self.assign_ids(child);
        }
    }

    /// Remove a top-level anchor by id. Also drops it from the exclusion
    /// set. Returns the removed anchor, if any.
    pub fn remove_anchor(&mut self, id: NodeId) -> Option<Anchor> {
        let idx = self.anchors.iter().position(|a| a.id == id)?;
        let anchor = self.anchors.remove(idx);
        let _ = self.excluded.remove(&id);
        self.invalidate();
        Some(anchor)
    }

    /// Top-level anchor by id.
    #[must_use]
    pub fn anchor(&self, id: NodeId) -> Option<&Anchor> {
        self.anchors.iter().find(|a| a.id == id)
    }

    /// Mutable top-level anchor by id. Marks the scene changed, since the
    /// caller can alter anything the bounds depend on.
    pub fn anchor_mut(&mut self, id: NodeId) -> Option<&mut Anchor> {
        self.invalidate();
        self.anchors.iter_mut().find(|a| a.id == id)
    }

    /// All top-level anchors, in insertion order.
    #[must_use]
    pub fn anchors(&self) -> &[Anchor] {
        &self.anchors
    }

    /// Number of top-level anchors.
    #[must_use]
    pub fn len(&self) -> usize {
        self.anchors.len()
    }

    /// Whether the scene holds no anchors at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.anchors.is_empty()
    }

    // -- Exclusion --

    /// Mark a top-level anchor as excluded from (or re-admitted to)
    /// bounds accumulation. The camera's own rig is the typical member.
    pub fn set_excluded(&mut self, id: NodeId, excluded: bool) {
        let changed = if excluded {
            self.excluded.insert(id)
        } else {
            self.excluded.remove(&id)
        };
        if changed {
            self.invalidate();
        }
    }

    /// Whether an id is in the exclusion set.
    #[must_use]
    pub fn is_excluded(&self, id: NodeId) -> bool {
        self.excluded.contains(&id)
    }

    // -- Bounds --

    /// Union of the world-space visual bounds of every non-excluded
    /// top-level anchor, skipping disabled sub-trees.
    ///
    /// An empty scene, or one whose anchors are all excluded, yields
    /// [`BoundingBox::EMPTY`]; callers must treat a zero bounding radius
    /// as "nothing to frame". Read-only and safe to repeat.
    #[must_use]
    pub fn visual_bounds(&self) -> BoundingBox {
        let mut bounds = BoundingBox::EMPTY;
        for anchor in &self.anchors {
            if self.excluded.contains(&anchor.id) {
                continue;
            }
            bounds = bounds.union(&anchor.visual_bounds(true, true));
        }
        bounds
    }
}
