//! In-memory surface that records draw calls
//!
//! Used by the headless runner and by tests.

use glam::Vec2;

use super::Surface;
use crate::error::RenderError;

/// One recorded draw call
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    FillRect {
        origin: Vec2,
        size: Vec2,
        color: String,
    },
    FillCircle {
        center: Vec2,
        radius: f32,
        color: String,
    },
    StrokeCircle {
        center: Vec2,
        radius: f32,
        line_width: f32,
        color: String,
    },
}

/// Surface that stores every draw call since the last `clear`
#[derive(Debug, Default)]
pub struct RecordingSurface {
    pub commands: Vec<DrawCommand>,
    /// Fail every call once this many have succeeded (for error-path tests)
    fail_after: Option<usize>,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// A surface whose `n`-th and later calls fail
    #[cfg(test)]
    pub fn failing_after(n: usize) -> Self {
        Self {
            commands: Vec::new(),
            fail_after: Some(n),
        }
    }

    /// Drop recorded commands (call between frames to bound memory)
    pub fn clear(&mut self) {
        self.commands.clear();
    }

    pub fn filled_circles(&self) -> usize {
        self.commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::FillCircle { .. }))
            .count()
    }

    fn push(&mut self, command: DrawCommand) -> Result<(), RenderError> {
        if self.fail_after.is_some_and(|n| self.commands.len() >= n) {
            return Err(RenderError::Canvas("recording surface lost".to_string()));
        }
        self.commands.push(command);
        Ok(())
    }
}

impl Surface for RecordingSurface {
    fn fill_rect(&mut self, origin: Vec2, size: Vec2, color: &str) -> Result<(), RenderError> {
        self.push(DrawCommand::FillRect {
            origin,
            size,
            color: color.to_string(),
        })
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: &str) -> Result<(), RenderError> {
        self.push(DrawCommand::FillCircle {
            center,
            radius,
            color: color.to_string(),
        })
    }

    fn stroke_circle(
        &mut self,
        center: Vec2,
        radius: f32,
        line_width: f32,
        color: &str,
    ) -> Result<(), RenderError> {
        self.push(DrawCommand::StrokeCircle {
            center,
            radius,
            line_width,
            color: color.to_string(),
        })
    }
}
