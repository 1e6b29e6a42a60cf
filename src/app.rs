//! Loop driver
//!
//! Owns the simulation state, the drawing surface and the count readout.
//! The host calls `frame` once per display refresh and `handle_key` between
//! frames.

use crate::error::RenderError;
use crate::hud::{Readout, refresh_count};
use crate::platform::direction_for_key;
use crate::renderer::Surface;
use crate::sim::{SimState, TickReport, tick};

pub struct Simulation<S: Surface, R: Readout> {
    state: SimState,
    surface: S,
    readout: R,
}

impl<S: Surface, R: Readout> Simulation<S, R> {
    /// Take ownership of everything and show the starting count.
    ///
    /// This is the one refresh not caused by a pop, so the readout is never
    /// blank before the first kill.
    pub fn new(state: SimState, surface: S, mut readout: R) -> Self {
        refresh_count(&state.balls, &mut readout);
        Self {
            state,
            surface,
            readout,
        }
    }

    /// Run one tick. The readout is rewritten only when balls were popped.
    pub fn frame(&mut self) -> Result<TickReport, RenderError> {
        let report = tick(&mut self.state, &mut self.surface)?;
        if report.killed > 0 {
            refresh_count(&self.state.balls, &mut self.readout);
        }
        Ok(report)
    }

    /// Move the evil circle for a key press. Returns whether the key was used.
    pub fn handle_key(&mut self, key: &str) -> bool {
        match direction_for_key(key) {
            Some(direction) => {
                let bounds = self.state.bounds;
                self.state.evil_circle.nudge(direction, &bounds);
                true
            }
            None => false,
        }
    }

    pub fn state(&self) -> &SimState {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut SimState {
        &mut self.state
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    pub fn readout(&self) -> &R {
        &self.readout
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::RecordingSurface;
    use crate::settings::Settings;
    use crate::sim::{Ball, Bounds, Rgb};
    use glam::Vec2;

    /// Readout that remembers every write
    #[derive(Default)]
    struct History(Vec<String>);

    impl Readout for History {
        fn set_text(&mut self, text: &str) {
            self.0.push(text.to_string());
        }
    }

    fn simulation() -> Simulation<RecordingSurface, History> {
        let state = SimState::new(&Settings::default(), Bounds::new(800.0, 600.0), 77);
        Simulation::new(state, RecordingSurface::new(), History::default())
    }

    #[test]
    fn test_initial_count_shown() {
        let sim = simulation();
        assert_eq!(sim.readout().0, vec!["Ball count: 25".to_string()]);
    }

    #[test]
    fn test_pop_decrements_count_by_one() {
        let mut sim = simulation();
        let target = sim.state().evil_circle.pos();
        // Evil circle (radius 10) over the centre of a radius-15 ball
        sim.state_mut().balls = vec![
            Ball::new(target, Vec2::new(0.0, 1.0), Rgb::new(5, 5, 5), 15.0),
            Ball::new(Vec2::new(600.0, 400.0), Vec2::new(1.0, 0.0), Rgb::new(6, 6, 6), 15.0),
        ];
        let before = sim.state().alive_count();

        let report = sim.frame().unwrap();

        assert_eq!(report.killed, 1);
        assert!(!sim.state().balls[0].is_alive());
        assert_eq!(sim.state().alive_count(), before - 1);
        assert_eq!(sim.readout().0.last().map(String::as_str), Some("Ball count: 1"));
    }

    #[test]
    fn test_readout_untouched_without_kills() {
        let mut sim = simulation();
        // Leave only balls far away from the evil circle
        sim.state_mut()
            .balls
            .retain(|b| b.pos().distance(Vec2::new(100.0, 100.0)) > 60.0);
        let report = sim.frame().unwrap();
        assert_eq!(report.killed, 0);
        assert_eq!(sim.readout().0.len(), 1);
    }

    #[test]
    fn test_handle_key() {
        let mut sim = simulation();
        assert!(sim.handle_key("d"));
        assert_eq!(sim.state().evil_circle.pos(), Vec2::new(120.0, 100.0));
        assert!(!sim.handle_key("x"));
        assert_eq!(sim.state().evil_circle.pos(), Vec2::new(120.0, 100.0));
    }

    #[test]
    fn test_render_error_propagates() {
        let state = SimState::new(&Settings::default(), Bounds::new(800.0, 600.0), 1);
        let mut sim = Simulation::new(state, RecordingSurface::failing_after(0), History::default());
        assert!(sim.frame().is_err());
    }
}
