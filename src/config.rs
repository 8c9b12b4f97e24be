//! Tunable game configuration
//!
//! Defaults reproduce the classic layout: a 350 px wide golden-ratio canvas
//! with six rows of red bricks.

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::PHI;

/// Reasons a configuration cannot produce a playable game
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("canvas must have positive dimensions, got {width}x{height}")]
    Canvas { width: f32, height: f32 },
    #[error("bricks must have positive dimensions, got {width}x{height}")]
    BrickSize { width: f32, height: f32 },
    #[error("brick grid needs at least one row")]
    NoRows,
    #[error("brick width {brick_width} leaves no columns on a {canvas_width} px canvas")]
    NoColumns { canvas_width: f32, brick_width: f32 },
    #[error("paddle must have positive dimensions, got {width}x{height}")]
    PaddleSize { width: f32, height: f32 },
    #[error("ball radius must be positive, got {0}")]
    BallRadius(f32),
    #[error("invalid config JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("cannot read config file: {0}")]
    Io(#[from] std::io::Error),
}

/// Game dimensions and speeds
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub canvas_width: f32,
    pub canvas_height: f32,

    pub paddle_width: f32,
    pub paddle_height: f32,
    /// Horizontal paddle speed (pixels per frame)
    pub paddle_speed: f32,
    /// Gap between the paddle's bottom edge and the canvas bottom
    pub paddle_bottom_margin: f32,

    pub brick_width: f32,
    pub brick_height: f32,
    pub brick_rows: u32,
    pub brick_x_padding: f32,
    pub brick_y_padding: f32,

    pub ball_radius: f32,
    /// Initial horizontal ball speed; the direction is randomized
    pub ball_speed_x: f32,
    /// Initial vertical ball speed (positive = downward)
    pub ball_speed_y: f32,

    /// How far below the canvas the ball must fall to lose
    pub lose_margin: f32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            canvas_width: 350.0,
            canvas_height: 330.0 * PHI,

            paddle_width: 80.0,
            paddle_height: 100.0 * (1.0 / PHI).powi(4),
            paddle_speed: 3.0,
            paddle_bottom_margin: 30.0,

            brick_width: 35.0 * PHI,
            brick_height: 30.0 * (1.0 / PHI).powf(0.9),
            brick_rows: 6,
            brick_x_padding: 1.0,
            brick_y_padding: 26.0,

            ball_radius: 8.0,
            ball_speed_x: 2.0,
            ball_speed_y: 2.2,

            lose_margin: 100.0,
        }
    }
}

impl GameConfig {
    /// Parse a (possibly partial) JSON override on top of the defaults
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Read a JSON override file, see [`GameConfig::from_json`]
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Number of brick columns: one fewer than fit across the canvas
    pub fn brick_columns(&self) -> u32 {
        ((self.canvas_width / self.brick_width).floor() - 1.0).max(0.0) as u32
    }

    /// Total bricks in a freshly generated field
    pub fn brick_count(&self) -> usize {
        self.brick_columns() as usize * self.brick_rows as usize
    }

    /// Check that the configuration describes a playable grid
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.canvas_width > 0.0 && self.canvas_height > 0.0) {
            return Err(ConfigError::Canvas {
                width: self.canvas_width,
                height: self.canvas_height,
            });
        }
        if !(self.brick_width > 0.0 && self.brick_height > 0.0) {
            return Err(ConfigError::BrickSize {
                width: self.brick_width,
                height: self.brick_height,
            });
        }
        if self.brick_rows == 0 {
            return Err(ConfigError::NoRows);
        }
        if self.brick_columns() == 0 {
            return Err(ConfigError::NoColumns {
                canvas_width: self.canvas_width,
                brick_width: self.brick_width,
            });
        }
        if !(self.paddle_width > 0.0 && self.paddle_height > 0.0) {
            return Err(ConfigError::PaddleSize {
                width: self.paddle_width,
                height: self.paddle_height,
            });
        }
        if !(self.ball_radius > 0.0) {
            return Err(ConfigError::BallRadius(self.ball_radius));
        }
        Ok(())
    }
}
