//! Axis-aligned collision helpers
//!
//! Circle-vs-rectangle contact reduces to a point-in-rectangle test once the
//! rectangle is grown by the circle's radius on every side.

use glam::Vec2;

/// Axis-aligned bounding box
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub min: Vec2,
    pub max: Vec2,
}

impl Aabb {
    /// Box from a center point and full extents
    pub fn from_center_size(center: Vec2, size: Vec2) -> Self {
        let half = size / 2.0;
        Self {
            min: center - half,
            max: center + half,
        }
    }

    /// Grow the box by `amount` on every side
    pub fn expand(self, amount: f32) -> Self {
        Self {
            min: self.min - Vec2::splat(amount),
            max: self.max + Vec2::splat(amount),
        }
    }

    /// Closed containment test (edges count as inside)
    pub fn contains(&self, point: Vec2) -> bool {
        point.x >= self.min.x
            && point.x <= self.max.x
            && point.y >= self.min.y
            && point.y <= self.max.y
    }
}

/// Circle-vs-rectangle overlap: true when the circle's center lies within
/// the rectangle expanded by the circle's radius
pub fn circle_hits_rect(center: Vec2, radius: f32, rect: Aabb) -> bool {
    rect.expand(radius).contains(center)
}
