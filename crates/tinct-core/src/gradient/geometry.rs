//! Unit-space geometry for gradient shape parameters.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// A point in the [0, 1]² unit square of the surface a gradient is painted
/// on. `(0, 0)` is the top-leading corner, matching the anchor names the
/// picker surface uses.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct UnitPoint {
    pub x: f32,
    pub y: f32,
}

impl UnitPoint {
    pub const TOP_LEADING: Self = Self::new(0.0, 0.0);
    pub const TOP: Self = Self::new(0.5, 0.0);
    pub const TOP_TRAILING: Self = Self::new(1.0, 0.0);
    pub const LEADING: Self = Self::new(0.0, 0.5);
    pub const CENTER: Self = Self::new(0.5, 0.5);
    pub const TRAILING: Self = Self::new(1.0, 0.5);
    pub const BOTTOM_LEADING: Self = Self::new(0.0, 1.0);
    pub const BOTTOM: Self = Self::new(0.5, 1.0);
    pub const BOTTOM_TRAILING: Self = Self::new(1.0, 1.0);

    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub const fn as_vec2(&self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }

    /// Maps into a concrete surface of the given pixel size.
    pub fn resolve(&self, size: Vec2) -> Vec2 {
        self.as_vec2() * size
    }
}

impl From<Vec2> for UnitPoint {
    fn from(v: Vec2) -> Self {
        Self::new(v.x, v.y)
    }
}
