//! Draw command recorder
//!
//! Stores every call made against it. Used by tests and the native headless
//! runner to inspect exactly what a frame painted.

use glam::Vec2;

use super::surface::{Color, DrawSurface, Font, monospace_text_width};
use crate::sim::Rect;

#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Clear(Rect),
    FillRect { rect: Rect, color: Color },
    FillCircle { center: Vec2, radius: f32, color: Color },
    Text { text: String, pos: Vec2, font: Font, color: Color },
}

#[derive(Debug, Clone, Default)]
pub struct RecordingSurface {
    pub commands: Vec<DrawCommand>,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// Forget recorded commands (call between frames)
    pub fn reset(&mut self) {
        self.commands.clear();
    }

    /// Text drawn so far, in order
    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.commands.iter().filter_map(|c| match c {
            DrawCommand::Text { text, .. } => Some(text.as_str()),
            _ => None,
        })
    }
}

impl DrawSurface for RecordingSurface {
    fn clear_rect(&mut self, rect: Rect) {
        self.commands.push(DrawCommand::Clear(rect));
    }

    fn fill_rect(&mut self, rect: Rect, color: Color) {
        self.commands.push(DrawCommand::FillRect { rect, color });
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Color) {
        self.commands.push(DrawCommand::FillCircle {
            center,
            radius,
            color,
        });
    }

    fn measure_text_width(&self, text: &str, font: &Font) -> f32 {
        monospace_text_width(text, font)
    }

    fn draw_text(&mut self, text: &str, pos: Vec2, font: &Font, color: Color) {
        self.commands.push(DrawCommand::Text {
            text: text.to_string(),
            pos,
            font: *font,
            color,
        });
    }
}
