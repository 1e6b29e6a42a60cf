//! One simulation tick
//!
//! Order per tick: overlay, then every alive ball draws, bounces and
//! collides, then the evil circle draws, clamps and collides.

use glam::Vec2;

use super::ball::collide;
use super::state::SimState;
use crate::error::RenderError;
use crate::renderer::Surface;

/// What happened during a tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickReport {
    /// Balls the evil circle popped this tick
    pub killed: usize,
    /// Ball-ball overlaps found this tick
    pub contacts: usize,
}

/// Advance the simulation by one frame, drawing as it goes.
///
/// A render error aborts the tick mid-way and is returned to the caller.
pub fn tick<S: Surface + ?Sized>(
    state: &mut SimState,
    surface: &mut S,
) -> Result<TickReport, RenderError> {
    surface.fill_rect(Vec2::ZERO, state.bounds.size(), &state.overlay_color)?;

    let contacts = advance_balls(state, surface)?;
    let killed = advance_evil_circle(state, surface)?;

    state.time_ticks += 1;
    if killed > 0 {
        log::debug!(
            "Tick {}: evil circle popped {} ball(s), {} left",
            state.time_ticks,
            killed,
            state.alive_count()
        );
    }

    Ok(TickReport { killed, contacts })
}

/// Draw, bounce and collide every alive ball in registry order
pub fn advance_balls<S: Surface + ?Sized>(
    state: &mut SimState,
    surface: &mut S,
) -> Result<usize, RenderError> {
    let bounds = state.bounds;
    let mut contacts = 0;

    for i in 0..state.balls.len() {
        if !state.balls[i].is_alive() {
            continue;
        }
        state.balls[i].draw(surface)?;
        state.balls[i].update(&bounds);
        contacts += collide(&mut state.balls, i, &mut state.rng);
    }

    Ok(contacts)
}

/// Draw the evil circle, keep it on the surface and let it pop balls
pub fn advance_evil_circle<S: Surface + ?Sized>(
    state: &mut SimState,
    surface: &mut S,
) -> Result<usize, RenderError> {
    state.evil_circle.draw(surface)?;
    state.evil_circle.clamp_to_bounds(&state.bounds);
    Ok(state.evil_circle.collide(&mut state.balls))
}
