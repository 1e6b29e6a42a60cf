//! Simulation module
//!
//! All per-frame logic lives here:
//! - Seeded RNG only, so runs are reproducible
//! - Stable iteration order (registry order)
//! - Drawing goes through the `Surface` trait, never a concrete canvas

pub mod ball;
pub mod evil_circle;
pub mod motion;
pub mod random;
pub mod state;
pub mod tick;

pub use ball::{Ball, collide};
pub use evil_circle::{Direction, EvilCircle};
pub use motion::{Bounds, Motion};
pub use random::{Rgb, random_color, random_int};
pub use state::SimState;
pub use tick::{TickReport, advance_balls, advance_evil_circle, tick};
