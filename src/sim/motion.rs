//! Shared position/velocity data and the surface bounds

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Position and velocity, embedded by value in every moving entity
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Motion {
    pub pos: Vec2,
    pub vel: Vec2,
}

impl Motion {
    /// Panics on non-finite components
    pub fn new(pos: Vec2, vel: Vec2) -> Self {
        assert!(pos.is_finite(), "non-finite position {pos}");
        assert!(vel.is_finite(), "non-finite velocity {vel}");
        Self { pos, vel }
    }

    /// Move by one step of velocity
    #[inline]
    pub fn advance(&mut self) {
        self.pos += self.vel;
    }
}

/// Drawing area size, captured once at startup
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub width: f32,
    pub height: f32,
}

impl Bounds {
    /// Panics unless both dimensions are positive and finite
    pub fn new(width: f32, height: f32) -> Self {
        assert!(
            width.is_finite() && height.is_finite() && width > 0.0 && height > 0.0,
            "invalid surface size {width}x{height}"
        );
        Self { width, height }
    }

    #[inline]
    pub fn size(&self) -> Vec2 {
        Vec2::new(self.width, self.height)
    }

    /// Clamp a centre so a circle of `radius` lies fully inside.
    /// The surface must be at least `2 * radius` on each axis.
    #[inline]
    pub fn clamp_inside(&self, pos: Vec2, radius: f32) -> Vec2 {
        pos.clamp(Vec2::splat(radius), self.size() - Vec2::splat(radius))
    }

    /// Whether a circle of `radius` at `pos` lies fully inside
    #[inline]
    pub fn contains(&self, pos: Vec2, radius: f32) -> bool {
        pos.x >= radius
            && pos.y >= radius
            && pos.x <= self.width - radius
            && pos.y <= self.height - radius
    }
}
