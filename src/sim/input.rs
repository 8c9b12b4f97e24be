//! Keyboard input handling
//!
//! Keys map to a paddle direction; press sets the velocity, release only
//! clears it when the paddle is still moving that way.

use super::state::Paddle;

/// Logical direction a key steers the paddle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Left,
    Right,
}

impl Direction {
    /// Canonical key name, used when synthesizing events
    pub fn key(&self) -> &'static str {
        match self {
            Direction::Left => "ArrowLeft",
            Direction::Right => "ArrowRight",
        }
    }
}

/// Map a `KeyboardEvent.key` value to a direction
pub fn direction_for_key(key: &str) -> Option<Direction> {
    match key {
        "a" | "A" | "ArrowLeft" => Some(Direction::Left),
        "d" | "D" | "ArrowRight" => Some(Direction::Right),
        _ => None,
    }
}

/// Handle key down event. Returns whether the key was recognized.
pub fn handle_key_down(paddle: &mut Paddle, key: &str) -> bool {
    match direction_for_key(key) {
        Some(Direction::Left) => paddle.xv = -paddle.speed,
        Some(Direction::Right) => paddle.xv = paddle.speed,
        None => return false,
    }
    true
}

/// Handle key up event. Returns whether the key was recognized.
pub fn handle_key_up(paddle: &mut Paddle, key: &str) -> bool {
    match direction_for_key(key) {
        Some(Direction::Left) => {
            if paddle.xv < 0.0 {
                paddle.xv = 0.0;
            }
        }
        Some(Direction::Right) => {
            if paddle.xv > 0.0 {
                paddle.xv = 0.0;
            }
        }
        None => return false,
    }
    true
}
