//! Drawing surface abstraction
//!
//! The simulation paints through [`DrawSurface`] so the same frame can be
//! recorded in tests, tessellated for WebGPU, or anything else a host offers.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::{MESSAGE_FONT_FAMILY, MESSAGE_FONT_SIZE};
use crate::sim::Rect;

/// Advance width of a monospace glyph relative to the font size
const MONOSPACE_ADVANCE: f32 = 0.6;

/// Named colors used by the game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Color {
    #[default]
    White,
    Black,
    Red,
    Blue,
    Fuchsia,
}

impl Color {
    pub fn rgba(&self) -> [f32; 4] {
        match self {
            Color::White => [1.0, 1.0, 1.0, 1.0],
            Color::Black => [0.0, 0.0, 0.0, 1.0],
            Color::Red => [1.0, 0.0, 0.0, 1.0],
            Color::Blue => [0.0, 0.0, 1.0, 1.0],
            Color::Fuchsia => [1.0, 0.0, 1.0, 1.0],
        }
    }

    /// CSS color keyword
    pub fn as_str(&self) -> &'static str {
        match self {
            Color::White => "white",
            Color::Black => "black",
            Color::Red => "red",
            Color::Blue => "blue",
            Color::Fuchsia => "fuchsia",
        }
    }
}

/// Font description (size in pixels plus family name)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Font {
    pub size: f32,
    pub family: &'static str,
}

impl Font {
    /// Font used for the win/lose overlay
    pub const fn message() -> Self {
        Self {
            size: MESSAGE_FONT_SIZE,
            family: MESSAGE_FONT_FAMILY,
        }
    }

    /// CSS shorthand, e.g. `15px Courier New`
    pub fn css(&self) -> String {
        format!("{}px {}", self.size, self.family)
    }
}

/// Width of `text` when every glyph has the same advance
pub fn monospace_text_width(text: &str, font: &Font) -> f32 {
    text.chars().count() as f32 * font.size * MONOSPACE_ADVANCE
}

/// A 2D surface the game paints onto each frame
pub trait DrawSurface {
    /// Reset a region to the background
    fn clear_rect(&mut self, rect: Rect);

    fn fill_rect(&mut self, rect: Rect, color: Color);

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Color);

    /// Horizontal extent `text` would occupy in `font`
    fn measure_text_width(&self, text: &str, font: &Font) -> f32;

    /// Draw `text` with its left baseline at `pos`
    fn draw_text(&mut self, text: &str, pos: Vec2, font: &Font, color: Color);
}
