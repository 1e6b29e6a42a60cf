//! Ball entity: bounces off the surface edges, recolours on contact

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::motion::{Bounds, Motion};
use super::random::{Rgb, random_color};
use crate::error::RenderError;
use crate::renderer::Surface;

/// A ball entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ball {
    pub motion: Motion,
    pub color: Rgb,
    /// Fixed for the ball's lifetime
    radius: f32,
    /// Cleared once by the evil circle, never set again
    alive: bool,
}

impl Ball {
    /// Panics on a non-positive radius
    pub fn new(pos: Vec2, vel: Vec2, color: Rgb, radius: f32) -> Self {
        assert!(
            radius.is_finite() && radius > 0.0,
            "ball radius must be positive, got {radius}"
        );
        Self {
            motion: Motion::new(pos, vel),
            color,
            radius,
            alive: true,
        }
    }

    #[inline]
    pub fn pos(&self) -> Vec2 {
        self.motion.pos
    }

    #[inline]
    pub fn radius(&self) -> f32 {
        self.radius
    }

    #[inline]
    pub fn is_alive(&self) -> bool {
        self.alive
    }

    /// Soft delete: the ball stays in the registry but stops taking part
    pub fn kill(&mut self) {
        self.alive = false;
    }

    /// Whether two circles overlap (touching does not count)
    #[inline]
    pub fn overlaps(&self, center: Vec2, radius: f32) -> bool {
        self.motion.pos.distance(center) < self.radius + radius
    }

    pub fn draw<S: Surface + ?Sized>(&self, surface: &mut S) -> Result<(), RenderError> {
        surface.fill_circle(self.motion.pos, self.radius, &self.color.to_string())
    }

    /// Reflect off any edge this step would cross, then advance
    pub fn update(&mut self, bounds: &Bounds) {
        let next = self.motion.pos + self.motion.vel;
        let r = self.radius;

        if next.x + r > bounds.width || next.x - r < 0.0 {
            self.motion.vel.x = -self.motion.vel.x;
        }
        if next.y + r > bounds.height || next.y - r < 0.0 {
            self.motion.vel.y = -self.motion.vel.y;
        }

        self.motion.advance();
        // Reflection alone can overshoot when the surface is barely wider
        // than one step
        self.motion.pos = bounds.clamp_inside(self.motion.pos, r);
    }
}

/// Recolour ball `index` and every other alive ball it overlaps with one
/// fresh colour per contact. Returns the number of contacts.
pub fn collide<R: Rng + ?Sized>(balls: &mut [Ball], index: usize, rng: &mut R) -> usize {
    if !balls[index].alive {
        return 0;
    }

    let mut contacts = 0;
    for other in 0..balls.len() {
        if other == index || !balls[other].alive {
            continue;
        }
        let (center, radius) = (balls[other].pos(), balls[other].radius);
        if balls[index].overlaps(center, radius) {
            let color = random_color(rng);
            balls[index].color = color;
            balls[other].color = color;
            contacts += 1;
        }
    }
    contacts
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    const RED: Rgb = Rgb::new(255, 0, 0);
    const BLUE: Rgb = Rgb::new(0, 0, 255);

    fn ball_at(x: f32, y: f32, radius: f32, color: Rgb) -> Ball {
        Ball::new(Vec2::new(x, y), Vec2::ZERO, color, radius)
    }

    #[test]
    #[should_panic]
    fn test_zero_radius_panics() {
        ball_at(10.0, 10.0, 0.0, RED);
    }

    #[test]
    fn test_update_moves_by_velocity() {
        let bounds = Bounds::new(200.0, 200.0);
        let mut ball = Ball::new(Vec2::new(100.0, 100.0), Vec2::new(5.0, -3.0), RED, 10.0);
        ball.update(&bounds);
        assert_eq!(ball.pos(), Vec2::new(105.0, 97.0));
        assert_eq!(ball.motion.vel, Vec2::new(5.0, -3.0));
    }

    #[test]
    fn test_update_reflects_off_right_wall() {
        let bounds = Bounds::new(200.0, 200.0);
        let mut ball = Ball::new(Vec2::new(187.0, 100.0), Vec2::new(7.0, 0.0), RED, 10.0);
        ball.update(&bounds);
        assert_eq!(ball.motion.vel.x, -7.0);
        assert_eq!(ball.pos(), Vec2::new(180.0, 100.0));
    }

    #[test]
    fn test_update_reflects_both_axes_in_corner() {
        let bounds = Bounds::new(200.0, 200.0);
        let mut ball = Ball::new(Vec2::new(12.0, 12.0), Vec2::new(-5.0, -5.0), RED, 10.0);
        ball.update(&bounds);
        assert_eq!(ball.motion.vel, Vec2::new(5.0, 5.0));
        assert!(bounds.contains(ball.pos(), ball.radius()));
    }

    #[test]
    fn test_collide_overlapping_pair_shares_new_color() {
        let mut rng = Pcg32::seed_from_u64(3);
        let mut balls = vec![ball_at(50.0, 50.0, 10.0, RED), ball_at(65.0, 50.0, 10.0, BLUE)];
        assert_eq!(collide(&mut balls, 0, &mut rng), 1);
        assert_eq!(balls[0].color, balls[1].color);
    }

    #[test]
    fn test_collide_touching_pair_unchanged() {
        let mut rng = Pcg32::seed_from_u64(3);
        // Distance 20 == r1 + r2: not an overlap
        let mut balls = vec![ball_at(50.0, 50.0, 10.0, RED), ball_at(70.0, 50.0, 10.0, BLUE)];
        assert_eq!(collide(&mut balls, 0, &mut rng), 0);
        assert_eq!(balls[0].color, RED);
        assert_eq!(balls[1].color, BLUE);
    }

    #[test]
    fn test_collide_ignores_dead_balls() {
        let mut rng = Pcg32::seed_from_u64(3);
        let mut balls = vec![ball_at(50.0, 50.0, 10.0, RED), ball_at(55.0, 50.0, 10.0, BLUE)];
        balls[1].kill();
        assert_eq!(collide(&mut balls, 0, &mut rng), 0);
        assert_eq!(collide(&mut balls, 1, &mut rng), 0);
        assert_eq!(balls[0].color, RED);
        assert_eq!(balls[1].color, BLUE);
    }

    #[test]
    fn test_draw_fills_circle() {
        use crate::renderer::{DrawCommand, RecordingSurface};

        let mut surface = RecordingSurface::new();
        ball_at(30.0, 40.0, 12.0, Rgb::new(1, 2, 3))
            .draw(&mut surface)
            .unwrap();
        assert_eq!(
            surface.commands,
            vec![DrawCommand::FillCircle {
                center: Vec2::new(30.0, 40.0),
                radius: 12.0,
                color: "rgb(1,2,3)".to_string(),
            }]
        );
    }

    proptest! {
        #[test]
        fn prop_update_stays_in_bounds(
            width in 50.0f32..1000.0,
            height in 50.0f32..1000.0,
            radius in 1.0f32..20.0,
            fx in 0.0f32..1.0,
            fy in 0.0f32..1.0,
            vx in -7i32..=7,
            vy in -7i32..=7,
            steps in 1usize..300,
        ) {
            let bounds = Bounds::new(width, height);
            let x = radius + fx * (width - 2.0 * radius);
            let y = radius + fy * (height - 2.0 * radius);
            let mut ball = Ball::new(Vec2::new(x, y), Vec2::new(vx as f32, vy as f32), RED, radius);
            for _ in 0..steps {
                ball.update(&bounds);
                prop_assert!(bounds.contains(ball.pos(), radius));
            }
        }

        #[test]
        fn prop_collide_iff_overlap(
            dx in -60.0f32..60.0,
            dy in -60.0f32..60.0,
            r1 in 1.0f32..25.0,
            r2 in 1.0f32..25.0,
        ) {
            let mut rng = Pcg32::seed_from_u64(11);
            let mut balls = vec![
                ball_at(100.0, 100.0, r1, RED),
                ball_at(100.0 + dx, 100.0 + dy, r2, BLUE),
            ];
            let overlapping = balls[0].pos().distance(balls[1].pos()) < r1 + r2;
            let contacts = collide(&mut balls, 0, &mut rng);
            prop_assert_eq!(contacts == 1, overlapping);
            if overlapping {
                prop_assert_eq!(balls[0].color, balls[1].color);
            } else {
                prop_assert_eq!(balls[0].color, RED);
                prop_assert_eq!(balls[1].color, BLUE);
            }
        }
    }
}
