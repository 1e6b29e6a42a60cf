//! Bouncing Balls - canvas balls and a keyboard-driven evil circle
//!
//! Core modules:
//! - `sim`: Simulation (entities, bouncing, collisions, tick)
//! - `renderer`: Drawing surfaces (2D canvas, in-memory recording)
//! - `platform`: Browser glue (key mapping, DOM setup)
//! - `hud`: Ball-count readout
//! - `settings`: Data-driven configuration

pub mod app;
pub mod error;
pub mod hud;
pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use app::Simulation;
pub use error::{RenderError, SettingsError};
pub use settings::Settings;

/// Crate-wide constants
pub mod consts {
    /// Surface width used when running without a browser
    pub const HEADLESS_WIDTH: f32 = 800.0;
    /// Surface height used when running without a browser
    pub const HEADLESS_HEIGHT: f32 = 600.0;
    /// Frames simulated by the native runner (10 seconds at 60 Hz)
    pub const HEADLESS_FRAMES: u32 = 600;

    /// Prefix of the ball-count readout text
    pub const COUNT_LABEL: &str = "Ball count";
}
