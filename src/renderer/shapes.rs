//! Shape tessellation for 2D primitives
//!
//! [`FrameBatch`] turns the draw calls of one frame into a triangle list.
//! Text cannot be tessellated here; it is kept as [`TextRun`]s for the host
//! to lay over the canvas.

use glam::Vec2;
use std::f32::consts::TAU;

use super::surface::{Color, DrawSurface, Font, monospace_text_width};
use super::vertex::Vertex;
use crate::sim::Rect;

/// Segments used for a circle of radius `radius` (about one per 2 px of rim)
fn circle_segments(radius: f32) -> u32 {
    ((TAU * radius / 2.0) as u32).clamp(12, 64)
}

/// Generate vertices for a filled rectangle (two triangles)
pub fn rect(rect: &Rect, color: Color) -> [Vertex; 6] {
    let min = rect.pos;
    let max = rect.pos + rect.size;
    let top_right = Vec2::new(max.x, min.y);
    let bottom_left = Vec2::new(min.x, max.y);

    [
        Vertex::at(min, color),
        Vertex::at(bottom_left, color),
        Vertex::at(top_right, color),
        Vertex::at(top_right, color),
        Vertex::at(bottom_left, color),
        Vertex::at(max, color),
    ]
}

/// Generate vertices for a filled circle
pub fn circle(center: Vec2, radius: f32, color: Color, segments: u32) -> Vec<Vertex> {
    let mut vertices = Vec::with_capacity((segments * 3) as usize);

    for i in 0..segments {
        let theta1 = (i as f32 / segments as f32) * TAU;
        let theta2 = ((i + 1) as f32 / segments as f32) * TAU;

        // Triangle fan slice from the centre to the rim
        vertices.push(Vertex::at(center, color));
        vertices.push(Vertex::at(center + Vec2::from_angle(theta1) * radius, color));
        vertices.push(Vertex::at(center + Vec2::from_angle(theta2) * radius, color));
    }

    vertices
}

/// A string the host should draw on top of the triangles
#[derive(Debug, Clone, PartialEq)]
pub struct TextRun {
    pub text: String,
    pub pos: Vec2,
    pub font: Font,
    pub color: Color,
}

/// One frame's worth of geometry
#[derive(Debug, Clone, Default)]
pub struct FrameBatch {
    vertices: Vec<Vertex>,
    texts: Vec<TextRun>,
    background: Color,
}

impl FrameBatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    pub fn texts(&self) -> &[TextRun] {
        &self.texts
    }

    /// Color the pipeline should clear to before drawing
    pub fn background(&self) -> Color {
        self.background
    }
}

impl DrawSurface for FrameBatch {
    fn clear_rect(&mut self, area: Rect) {
        // The game only ever clears the whole canvas, which starts a new frame
        self.vertices.clear();
        self.texts.clear();
        self.vertices.extend(rect(&area, self.background));
    }

    fn fill_rect(&mut self, area: Rect, color: Color) {
        self.vertices.extend(rect(&area, color));
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Color) {
        self.vertices
            .extend(circle(center, radius, color, circle_segments(radius)));
    }

    fn measure_text_width(&self, text: &str, font: &Font) -> f32 {
        monospace_text_width(text, font)
    }

    fn draw_text(&mut self, text: &str, pos: Vec2, font: &Font, color: Color) {
        self.texts.push(TextRun {
            text: text.to_string(),
            pos,
            font: *font,
            color,
        });
    }
}
