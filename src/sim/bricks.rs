//! Brick field: layout, drawing and destruction

use glam::Vec2;

use super::collision::circle_intersects_rect;
use super::state::{Ball, Brick};
use crate::config::GameConfig;
use crate::consts::{BRICK_X_OFFSET, BRICK_Y_OFFSET};
use crate::renderer::{Color, DrawSurface};

/// Lay out the initial grid, row by row
pub fn generate(config: &GameConfig) -> Vec<Brick> {
    let columns = config.brick_columns();
    let mut bricks = Vec::with_capacity(config.brick_count());

    for i in 0..config.brick_rows {
        for j in 0..columns {
            let (i, j) = (i as f32, j as f32);
            let x = j * config.brick_width + BRICK_X_OFFSET + config.brick_x_padding * j;
            let y = i * config.brick_height + BRICK_Y_OFFSET + config.brick_y_padding * i;
            bricks.push(Brick {
                pos: Vec2::new(x, y),
                width: config.brick_width,
                height: config.brick_height,
                color: Color::Red,
            });
        }
    }

    log::info!(
        "Generated {} bricks ({} rows x {} columns)",
        bricks.len(),
        config.brick_rows,
        columns
    );
    bricks
}

pub fn draw_all<S: DrawSurface + ?Sized>(bricks: &[Brick], surface: &mut S) {
    for brick in bricks {
        surface.fill_rect(brick.rect(), brick.color);
    }
}

/// Destroy every brick the ball overlaps, bouncing once per brick.
///
/// Returns how many bricks were destroyed.
pub fn resolve_collisions(bricks: &mut Vec<Brick>, ball: &mut Ball) -> usize {
    let circle = ball.circle();
    let before = bricks.len();

    bricks.retain(|brick| {
        if circle_intersects_rect(&circle, &brick.rect()) {
            ball.vel.y = -ball.vel.y;
            false
        } else {
            true
        }
    });

    let destroyed = before - bricks.len();
    if destroyed > 0 {
        log::debug!(
            "Ball at ({:.1}, {:.1}) destroyed {} brick(s), {} left",
            ball.pos.x,
            ball.pos.y,
            destroyed,
            bricks.len()
        );
    }
    destroyed
}
