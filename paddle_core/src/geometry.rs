use glam::Vec2;

/// Axis-aligned bounding box
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub min: Vec2,
    pub max: Vec2,
}

impl Aabb {
    pub fn new(min: Vec2, max: Vec2) -> Self {
        Self { min, max }
    }

    /// Box spanned by a corner and an extent. Negative extents are normalized
    /// so `min <= max` on both axes.
    pub fn from_top_left_size(top_left: Vec2, size: Vec2) -> Self {
        let corner = top_left + size;
        Self {
            min: top_left.min(corner),
            max: top_left.max(corner),
        }
    }
}
