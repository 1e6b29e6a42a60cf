//! Drawing surfaces
//!
//! The simulation only needs three primitives: a filled rectangle (the
//! translucent frame overlay), a filled circle and a circle outline.

#[cfg(target_arch = "wasm32")]
pub mod canvas;
pub mod recording;

#[cfg(target_arch = "wasm32")]
pub use canvas::CanvasSurface;
pub use recording::{DrawCommand, RecordingSurface};

use glam::Vec2;

use crate::error::RenderError;

/// A 2D target that keeps its pixels between frames
pub trait Surface {
    /// Fill an axis-aligned rectangle (colour may be translucent)
    fn fill_rect(&mut self, origin: Vec2, size: Vec2, color: &str) -> Result<(), RenderError>;

    /// Fill a circle
    fn fill_circle(&mut self, center: Vec2, radius: f32, color: &str) -> Result<(), RenderError>;

    /// Stroke a circle outline
    fn stroke_circle(
        &mut self,
        center: Vec2,
        radius: f32,
        line_width: f32,
        color: &str,
    ) -> Result<(), RenderError>;
}
