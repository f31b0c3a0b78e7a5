//! Axis-aligned bounding volumes for scene framing.

use glam::Vec3;

/// Axis-aligned box used as a visual bounding volume.
///
/// The empty box is the identity element for [`union`](Self::union): its
/// min corner sits at `+∞` and its max at `-∞`, so unioning replaces it
/// with the other operand.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    /// Minimum corner.
    pub min: Vec3,
    /// Maximum corner.
    pub max: Vec3,
}

impl Default for BoundingBox {
    fn default() -> Self {
        Self::EMPTY
    }
}

impl BoundingBox {
    /// The empty volume.
    pub const EMPTY: Self = Self {
        min: Vec3::INFINITY,
        max: Vec3::NEG_INFINITY,
    };

    /// Box from explicit corners.
    #[must_use]
    pub fn new(min: Vec3, max: Vec3) -> Self {
        Self { min, max }
    }

    /// Smallest box enclosing a sphere.
    #[must_use]
    pub fn from_center_radius(center: Vec3, radius: f32) -> Self {
        Self {
            min: center - Vec3::splat(radius),
            max: center + Vec3::splat(radius),
        }
    }

    /// Whether the box contains no points at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.min.x > self.max.x
            || self.min.y > self.max.y
            || self.min.z > self.max.z
    }

    /// Geometric center; the origin for the empty box.
    #[must_use]
    pub fn center(&self) -> Vec3 {
        if self.is_empty() {
            Vec3::ZERO
        } else {
            (self.min + self.max) * 0.5
        }
    }

    /// Radius of the smallest sphere centered at [`center`](Self::center)
    /// that contains the box. Zero for the empty box; callers treat a
    /// zero radius as "nothing to frame" and never divide by it.
    #[must_use]
    pub fn bounding_radius(&self) -> f32 {
        if self.is_empty() {
            0.0
        } else {
            (self.max - self.min).length() * 0.5
        }
    }

    /// Smallest box containing both operands.
    #[must_use]
    pub fn union(&self, other: &Self) -> Self {
        Self {
            min: self.min.min(other.min),
            max: self.max.max(other.max),
        }
    }

    /// Grow to include `point`.
    pub fn expand(&mut self, point: Vec3) {
        self.min = self.min.min(point);
        self.max = self.max.max(point);
    }

    /// The box shifted by `offset`.
    #[must_use]
    pub fn translated(&self, offset: Vec3) -> Self {
        if self.is_empty() {
            *self
        } else {
            Self {
                min: self.min + offset,
                max: self.max + offset,
            }
        }
    }

    /// Whether `point` lies inside or on the boundary.
    #[must_use]
    pub fn contains(&self, point: Vec3) -> bool {
        point.cmpge(self.min).all() && point.cmple(self.max).all()
    }
}
