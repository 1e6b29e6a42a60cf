//! Canvas 2D surface (browser only)

use std::f64::consts::TAU;

use glam::Vec2;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use super::Surface;
use crate::error::RenderError;

/// Draws through a canvas' 2D context
pub struct CanvasSurface {
    ctx: CanvasRenderingContext2d,
}

impl CanvasSurface {
    /// Acquire the canvas' 2D context
    pub fn new(canvas: &HtmlCanvasElement) -> Result<Self, RenderError> {
        let ctx = canvas
            .get_context("2d")?
            .ok_or(RenderError::ContextUnavailable)?
            .dyn_into::<CanvasRenderingContext2d>()
            .map_err(|_| RenderError::ContextUnavailable)?;
        Ok(Self { ctx })
    }

    fn circle_path(&self, center: Vec2, radius: f32) -> Result<(), RenderError> {
        self.ctx.begin_path();
        self.ctx
            .arc(center.x as f64, center.y as f64, radius as f64, 0.0, TAU)?;
        Ok(())
    }
}

impl Surface for CanvasSurface {
    fn fill_rect(&mut self, origin: Vec2, size: Vec2, color: &str) -> Result<(), RenderError> {
        self.ctx.set_fill_style_str(color);
        self.ctx
            .fill_rect(origin.x as f64, origin.y as f64, size.x as f64, size.y as f64);
        Ok(())
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: &str) -> Result<(), RenderError> {
        self.circle_path(center, radius)?;
        self.ctx.set_fill_style_str(color);
        self.ctx.fill();
        Ok(())
    }

    fn stroke_circle(
        &mut self,
        center: Vec2,
        radius: f32,
        line_width: f32,
        color: &str,
    ) -> Result<(), RenderError> {
        self.circle_path(center, radius)?;
        self.ctx.set_line_width(line_width as f64);
        self.ctx.set_stroke_style_str(color);
        self.ctx.stroke();
        Ok(())
    }
}
