//! Error types
//!
//! Rendering failures are unrecoverable and halt the frame loop.
//! Settings failures fall back to defaults at load time.

use thiserror::Error;

/// Failure while drawing a frame
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RenderError {
    /// The canvas refused to hand out a 2D context
    #[error("2d rendering context unavailable")]
    ContextUnavailable,
    /// A canvas call threw
    #[error("canvas error: {0}")]
    Canvas(String),
}

/// Settings that cannot produce a valid simulation
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SettingsError {
    #[error("ball count must be at least 1")]
    NoBalls,
    #[error("ball count {count} exceeds the limit of {max}")]
    TooManyBalls { count: usize, max: usize },
    #[error("invalid ball radius range {min}..={max}")]
    RadiusRange { min: i32, max: i32 },
    #[error("ball speed limit must be at least 1, got {0}")]
    Speed(i32),
    #[error("evil circle start ({x}, {y}) is not a finite position")]
    EvilStart { x: f32, y: f32 },
    #[error("evil circle {field} must be positive, got {value}")]
    EvilCircle { field: &'static str, value: f32 },
    #[error("surface {width}x{height} cannot fit a ball of radius {radius}")]
    SurfaceTooSmall { width: f32, height: f32, radius: i32 },
}

#[cfg(target_arch = "wasm32")]
impl From<wasm_bindgen::JsValue> for RenderError {
    fn from(value: wasm_bindgen::JsValue) -> Self {
        RenderError::Canvas(format!("{value:?}"))
    }
}

#[cfg(target_arch = "wasm32")]
impl From<RenderError> for wasm_bindgen::JsValue {
    fn from(value: RenderError) -> Self {
        wasm_bindgen::JsValue::from_str(&value.to_string())
    }
}
