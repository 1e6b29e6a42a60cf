//! Simulation state
//!
//! One context object owns every entity and the RNG; nothing is global.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;

use super::ball::Ball;
use super::evil_circle::EvilCircle;
use super::motion::Bounds;
use super::random::{random_color, random_int};
use crate::settings::Settings;

/// Complete simulation state
#[derive(Debug, Clone)]
pub struct SimState {
    /// Run seed for reproducibility
    pub seed: u64,
    /// Surface size, fixed for the run
    pub bounds: Bounds,
    /// Every ball ever spawned, in spawn order; dead ones stay
    pub balls: Vec<Ball>,
    pub evil_circle: EvilCircle,
    /// Translucent fill painted at the start of each tick
    pub overlay_color: String,
    /// Ticks run so far
    pub time_ticks: u64,
    pub(super) rng: Pcg32,
}

impl SimState {
    /// Spawn the ball population and the evil circle.
    ///
    /// Panics if `settings` do not fit `bounds`; run them through
    /// [`Settings::validate`] first.
    pub fn new(settings: &Settings, bounds: Bounds, seed: u64) -> Self {
        if let Err(e) = settings.validate(&bounds) {
            panic!("invalid settings: {e}");
        }

        let mut rng = Pcg32::seed_from_u64(seed);
        let balls = (0..settings.ball_count)
            .map(|_| spawn_ball(&mut rng, settings, &bounds))
            .collect();

        let (x, y) = settings.evil_start;
        let mut evil_circle = EvilCircle::new(
            Vec2::new(x, y),
            settings.evil_step,
            settings.evil_radius,
            settings.evil_line_width,
            settings.evil_color.clone(),
        );
        evil_circle.clamp_to_bounds(&bounds);

        Self {
            seed,
            bounds,
            balls,
            evil_circle,
            overlay_color: settings.overlay_color.clone(),
            time_ticks: 0,
            rng,
        }
    }

    pub fn alive_count(&self) -> usize {
        self.balls.iter().filter(|b| b.is_alive()).count()
    }
}

/// A ball fully inside `bounds` with integer position, radius and velocity
fn spawn_ball(rng: &mut Pcg32, settings: &Settings, bounds: &Bounds) -> Ball {
    let radius = random_int(rng, settings.ball_radius_min, settings.ball_radius_max);
    let x = random_int(rng, radius, bounds.width as i32 - radius);
    let y = random_int(rng, radius, bounds.height as i32 - radius);

    // A ball at rest in both axes would never bounce
    let speed = settings.ball_speed_max;
    let vel = loop {
        let vel = Vec2::new(
            random_int(rng, -speed, speed) as f32,
            random_int(rng, -speed, speed) as f32,
        );
        if vel != Vec2::ZERO {
            break vel;
        }
    };

    Ball::new(
        Vec2::new(x as f32, y as f32),
        vel,
        random_color(rng),
        radius as f32,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spawn_respects_settings() {
        let settings = Settings::default();
        let bounds = Bounds::new(800.0, 600.0);
        let state = SimState::new(&settings, bounds, 12345);

        assert_eq!(state.balls.len(), 25);
        assert_eq!(state.alive_count(), 25);
        for ball in &state.balls {
            assert!((10.0..=20.0).contains(&ball.radius()));
            assert!(bounds.contains(ball.pos(), ball.radius()));
            let vel = ball.motion.vel;
            assert!(vel.x.abs() <= 7.0 && vel.y.abs() <= 7.0);
            assert_ne!(vel, Vec2::ZERO);
        }
        assert_eq!(state.evil_circle.pos(), Vec2::new(100.0, 100.0));
        assert_eq!(state.evil_circle.motion.vel, Vec2::splat(20.0));
    }

    #[test]
    fn test_same_seed_same_population() {
        let settings = Settings::default();
        let bounds = Bounds::new(640.0, 480.0);
        let a = SimState::new(&settings, bounds, 7);
        let b = SimState::new(&settings, bounds, 7);
        assert_eq!(a.balls, b.balls);
    }

    #[test]
    #[should_panic(expected = "invalid settings")]
    fn test_invalid_settings_panic() {
        let settings = Settings {
            ball_count: 0,
            ..Default::default()
        };
        SimState::new(&settings, Bounds::new(800.0, 600.0), 1);
    }

    #[test]
    fn test_evil_start_clamped_onto_small_surface() {
        let settings = Settings {
            evil_start: (500.0, 500.0),
            ..Default::default()
        };
        let state = SimState::new(&settings, Bounds::new(300.0, 200.0), 1);
        assert_eq!(state.evil_circle.pos(), Vec2::new(290.0, 190.0));
    }
}
