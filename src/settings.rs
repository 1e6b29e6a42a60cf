//! Simulation settings
//!
//! Read (never written) from LocalStorage on web; defaults everywhere else.

use serde::{Deserialize, Serialize};

use crate::error::SettingsError;
use crate::sim::Bounds;

/// Simulation settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // === Balls ===
    /// Number of balls spawned at startup
    pub ball_count: usize,
    /// Smallest ball radius (inclusive)
    pub ball_radius_min: i32,
    /// Largest ball radius (inclusive)
    pub ball_radius_max: i32,
    /// Velocity components are drawn from [-max, max]
    pub ball_speed_max: i32,

    // === Evil circle ===
    /// Spawn position
    pub evil_start: (f32, f32),
    /// Displacement per key press
    pub evil_step: f32,
    pub evil_radius: f32,
    pub evil_line_width: f32,
    pub evil_color: String,

    // === Frame ===
    /// Translucent fill painted over the previous frame (fading trails)
    pub overlay_color: String,
    /// Fixed RNG seed; time-based when absent
    pub seed: Option<u64>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            ball_count: 25,
            ball_radius_min: 10,
            ball_radius_max: 20,
            ball_speed_max: 7,

            evil_start: (100.0, 100.0),
            evil_step: 20.0,
            evil_radius: 10.0,
            evil_line_width: 3.0,
            evil_color: "white".to_string(),

            overlay_color: "rgba(21, 15, 43, 0.25)".to_string(),
            seed: None,
        }
    }
}

/// Upper bound on the ball population (collision checks are pairwise)
pub const MAX_BALLS: usize = 1000;

impl Settings {
    /// LocalStorage key
    #[allow(dead_code)]
    const STORAGE_KEY: &'static str = "bouncing_balls_settings";

    /// Parse settings from JSON; missing fields take their defaults
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Check that these settings can populate a surface of the given size
    pub fn validate(&self, bounds: &Bounds) -> Result<(), SettingsError> {
        if self.ball_count == 0 {
            return Err(SettingsError::NoBalls);
        }
        if self.ball_count > MAX_BALLS {
            return Err(SettingsError::TooManyBalls {
                count: self.ball_count,
                max: MAX_BALLS,
            });
        }
        if self.ball_radius_min < 1 || self.ball_radius_max < self.ball_radius_min {
            return Err(SettingsError::RadiusRange {
                min: self.ball_radius_min,
                max: self.ball_radius_max,
            });
        }
        if self.ball_speed_max < 1 {
            return Err(SettingsError::Speed(self.ball_speed_max));
        }
        for (field, value) in [
            ("radius", self.evil_radius),
            ("step", self.evil_step),
            ("line width", self.evil_line_width),
        ] {
            if !(value.is_finite() && value > 0.0) {
                return Err(SettingsError::EvilCircle { field, value });
            }
        }
        let (x, y) = self.evil_start;
        if !(x.is_finite() && y.is_finite()) {
            return Err(SettingsError::EvilStart { x, y });
        }
        let largest = self.ball_radius_max.max(self.evil_radius.ceil() as i32);
        let diameter = 2.0 * largest as f32;
        if bounds.width < diameter || bounds.height < diameter {
            return Err(SettingsError::SurfaceTooSmall {
                width: bounds.width,
                height: bounds.height,
                radius: largest,
            });
        }
        Ok(())
    }

    /// Resolve the settings to use for a surface, falling back to defaults
    /// when the stored ones are unusable
    pub fn checked(self, bounds: &Bounds) -> Self {
        match self.validate(bounds) {
            Ok(()) => self,
            Err(e) => {
                log::warn!("Ignoring stored settings: {}", e);
                Self::default()
            }
        }
    }

    /// Load settings from LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(Some(json)) = storage.get_item(Self::STORAGE_KEY) {
                match Self::from_json(&json) {
                    Ok(settings) => {
                        log::info!("Loaded settings from LocalStorage");
                        return settings;
                    }
                    Err(e) => log::warn!("Malformed settings in LocalStorage: {}", e),
                }
            }
        }

        log::info!("Using default settings");
        Self::default()
    }

    /// Native stub
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Self {
        Self::default()
    }
}
