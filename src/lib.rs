//! Brick Breaker - a classic paddle-and-ball arcade game
//!
//! Core modules:
//! - `sim`: Simulation (entities, collisions, bricks, input, per-frame tick)
//! - `renderer`: Drawing surface abstraction and WebGPU backend
//! - `config`: Tunable game constants
//! - `game`: Fixed timestep driver tying simulation to rendering

pub mod config;
pub mod game;
pub mod renderer;
pub mod sim;

pub use config::{ConfigError, GameConfig};
pub use game::Game;

use rand::Rng;

/// Game constants that are not exposed through [`GameConfig`]
pub mod consts {
    /// Fixed simulation timestep (physics is tuned in pixels per 60 Hz frame)
    pub const FRAME_DT: f32 = 1.0 / 60.0;
    /// Maximum substeps per host callback to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 4;
    /// Largest frame delta accepted from the host (seconds)
    pub const MAX_FRAME_DELTA: f32 = 0.1;

    /// The golden ratio, used throughout the default dimensions
    pub const PHI: f32 = 1.618_034;

    /// Fixed grid offset of the first brick column (pixels)
    pub const BRICK_X_OFFSET: f32 = 2.0;
    /// Fixed grid offset of the first brick row (pixels)
    pub const BRICK_Y_OFFSET: f32 = 5.0;

    /// Scale applied to the ball/paddle centre offset on paddle contact
    pub const PADDLE_DEFLECTION: f32 = 0.13;
    /// Horizontal ball speed cap after a paddle deflection
    pub const MAX_DEFLECTION_SPEED: f32 = 8.0;

    /// Overlay message font
    pub const MESSAGE_FONT_SIZE: f32 = 15.0;
    pub const MESSAGE_FONT_FAMILY: &str = "Courier New";

    pub const WIN_MESSAGE: &str = "Winner Winner Chicken Dinner";
    pub const LOSE_MESSAGE: &str = "Game over";
}

/// Restrict `value` to `[min, max]`
#[inline]
pub fn clamp(value: f32, min: f32, max: f32) -> f32 {
    value.max(min).min(max)
}

/// Uniformly pick -1.0 or +1.0
#[inline]
pub fn random_sign<R: Rng + ?Sized>(rng: &mut R) -> f32 {
    if rng.random_bool(0.5) { -1.0 } else { 1.0 }
}
