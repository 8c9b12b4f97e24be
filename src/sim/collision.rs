//! Collision detection between the ball and axis-aligned rectangles
//!
//! The test inflates the rectangle by the circle's radius on each axis
//! independently. Near corners it reports hits slightly more generously than
//! an exact circle/rectangle test, which is the feel the game is tuned for.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Axis-aligned rectangle, `pos` is the top-left corner
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub pos: Vec2,
    pub size: Vec2,
}

impl Rect {
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            pos: Vec2::new(x, y),
            size: Vec2::new(width, height),
        }
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        self.pos + self.size / 2.0
    }
}

/// A circle in canvas space
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Circle {
    pub center: Vec2,
    pub radius: f32,
}

/// Check whether a circle overlaps a rectangle
///
/// `dx`/`dy` are the per-axis distances from the circle centre to the
/// rectangle centre; the shapes touch when both fit inside the half extents
/// grown by the radius.
pub fn circle_intersects_rect(circle: &Circle, rect: &Rect) -> bool {
    let dx = (circle.center.x - rect.pos.x - rect.size.x / 2.0).abs();
    let dy = (circle.center.y - rect.pos.y - rect.size.y / 2.0).abs();

    dx <= rect.size.x / 2.0 + circle.radius && dy <= rect.size.y / 2.0 + circle.radius
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn circle(x: f32, y: f32, radius: f32) -> Circle {
        Circle {
            center: Vec2::new(x, y),
            radius,
        }
    }

    #[test]
    fn test_center_inside_rect() {
        let rect = Rect::new(10.0, 10.0, 40.0, 20.0);
        assert!(circle_intersects_rect(&circle(30.0, 20.0, 8.0), &rect));
    }

    #[test]
    fn test_edge_contact_counts() {
        let rect = Rect::new(10.0, 10.0, 40.0, 20.0);
        // Right edge at x=50, radius 8: touching at x=58
        assert!(circle_intersects_rect(&circle(58.0, 20.0, 8.0), &rect));
        assert!(!circle_intersects_rect(&circle(58.5, 20.0, 8.0), &rect));
        // Top edge at y=10
        assert!(circle_intersects_rect(&circle(30.0, 2.0, 8.0), &rect));
        assert!(!circle_intersects_rect(&circle(30.0, 1.0, 8.0), &rect));
    }

    #[test]
    fn test_corner_is_generous() {
        // Exact geometry would miss: distance to corner (50,10) is ~9.9 > 8
        let rect = Rect::new(10.0, 10.0, 40.0, 20.0);
        let c = circle(57.0, 3.0, 8.0);
        assert!((c.center - Vec2::new(50.0, 10.0)).length() > c.radius);
        assert!(circle_intersects_rect(&c, &rect));
    }

    #[test]
    fn test_far_away_misses() {
        let rect = Rect::new(0.0, 0.0, 10.0, 10.0);
        assert!(!circle_intersects_rect(&circle(100.0, 100.0, 8.0), &rect));
    }

    proptest! {
        // Integer-valued inputs keep every intermediate exact in f32, so
        // boundary cases compare equal on both sides of the mirror.
        #[test]
        fn reflection_about_center_axes_is_symmetric(
            rx in -200i32..200,
            ry in -200i32..200,
            half_w in 1i32..50,
            half_h in 1i32..50,
            ox in -150i32..150,
            oy in -150i32..150,
            radius in 1i32..20,
        ) {
            let (ox, oy, radius) = (ox as f32, oy as f32, radius as f32);
            let rect = Rect::new(rx as f32, ry as f32, (half_w * 2) as f32, (half_h * 2) as f32);
            let c = rect.center();
            let base = circle_intersects_rect(&circle(c.x + ox, c.y + oy, radius), &rect);
            let mirror_x = circle_intersects_rect(&circle(c.x - ox, c.y + oy, radius), &rect);
            let mirror_y = circle_intersects_rect(&circle(c.x + ox, c.y - oy, radius), &rect);
            let mirror_xy = circle_intersects_rect(&circle(c.x - ox, c.y - oy, radius), &rect);
            prop_assert_eq!(base, mirror_x);
            prop_assert_eq!(base, mirror_y);
            prop_assert_eq!(base, mirror_xy);
        }
    }
}
