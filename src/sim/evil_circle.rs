//! The player-controlled evil circle
//!
//! It never moves on its own: the velocity slot holds the fixed distance a
//! single key press moves it.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::ball::Ball;
use super::motion::{Bounds, Motion};
use crate::error::RenderError;
use crate::renderer::Surface;

/// Direction of a single key-press displacement
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Left,
    Right,
    Up,
    Down,
}

impl Direction {
    /// Unit vector in screen coordinates (y grows downward)
    pub fn unit(self) -> Vec2 {
        match self {
            Direction::Left => Vec2::NEG_X,
            Direction::Right => Vec2::X,
            Direction::Up => Vec2::NEG_Y,
            Direction::Down => Vec2::Y,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvilCircle {
    /// `vel` is the per-press step, not a continuous velocity
    pub motion: Motion,
    pub radius: f32,
    pub line_width: f32,
    pub color: String,
}

impl EvilCircle {
    /// Panics on a non-positive radius or step
    pub fn new(pos: Vec2, step: f32, radius: f32, line_width: f32, color: impl Into<String>) -> Self {
        assert!(radius > 0.0, "evil circle radius must be positive, got {radius}");
        assert!(step > 0.0, "evil circle step must be positive, got {step}");
        Self {
            motion: Motion::new(pos, Vec2::splat(step)),
            radius,
            line_width,
            color: color.into(),
        }
    }

    #[inline]
    pub fn pos(&self) -> Vec2 {
        self.motion.pos
    }

    pub fn draw<S: Surface + ?Sized>(&self, surface: &mut S) -> Result<(), RenderError> {
        surface.stroke_circle(self.motion.pos, self.radius, self.line_width, &self.color)
    }

    /// Keep the whole circle on the surface
    pub fn clamp_to_bounds(&mut self, bounds: &Bounds) {
        self.motion.pos = bounds.clamp_inside(self.motion.pos, self.radius);
    }

    /// Move one step in `direction`, staying on the surface
    pub fn nudge(&mut self, direction: Direction, bounds: &Bounds) {
        self.motion.pos += direction.unit() * self.motion.vel;
        self.clamp_to_bounds(bounds);
    }

    /// Kill every alive ball this circle overlaps. Returns the number killed.
    pub fn collide(&self, balls: &mut [Ball]) -> usize {
        let mut killed = 0;
        for ball in balls.iter_mut().filter(|b| b.is_alive()) {
            if ball.overlaps(self.motion.pos, self.radius) {
                ball.kill();
                killed += 1;
            }
        }
        killed
    }
}
