//! Simulation module
//!
//! All gameplay logic lives here:
//! - Per-frame physics in pixels per frame
//! - Seeded RNG only (initial ball direction)
//! - Painting goes through the `DrawSurface` trait, never a concrete backend

pub mod autopilot;
pub mod bricks;
pub mod collision;
pub mod input;
pub mod state;
pub mod tick;

pub use autopilot::Autopilot;
pub use collision::{Circle, Rect, circle_intersects_rect};
pub use input::{Direction, direction_for_key, handle_key_down, handle_key_up};
pub use state::{Ball, Brick, GameState, GameStatus, Paddle};
pub use tick::tick;
