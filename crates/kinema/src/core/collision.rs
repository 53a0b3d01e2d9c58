use glam::DVec2;

use crate::components::entity::Entity;

/// Axis-aligned rectangle with inclusive bounds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub min: DVec2,
    pub max: DVec2,
}

impl Aabb {
    /// Rectangle whose top-left corner is `corner`.
    pub fn from_corner(corner: DVec2, size: DVec2) -> Self {
        Self {
            min: corner,
            max: corner + size,
        }
    }

    /// The entity's extents placed at its current position.
    pub fn from_entity(entity: &Entity) -> Self {
        Self::from_corner(entity.pos(), entity.size())
    }

    /// Touching edges count as overlap.
    pub fn overlaps(&self, other: &Aabb) -> bool {
        self.min.x <= other.max.x
            && other.min.x <= self.max.x
            && self.min.y <= other.max.y
            && other.min.y <= self.max.y
    }
}

/// Whether two visible entities' rectangles intersect. Symmetric.
pub fn overlaps(a: &Entity, b: &Entity) -> bool {
    if !a.visible || !b.visible {
        return false;
    }
    Aabb::from_entity(a).overlaps(&Aabb::from_entity(b))
}
