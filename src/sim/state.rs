//! Game state and entity types
//!
//! Entities are plain records; per-entity movement lives in small methods and
//! the frame ordering lives in `tick`.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::bricks;
use super::collision::{Circle, Rect, circle_intersects_rect};
use crate::config::GameConfig;
use crate::consts::*;
use crate::renderer::Color;
use crate::{clamp, random_sign};

/// Outcome of the most recent frame
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum GameStatus {
    #[default]
    Playing,
    /// Every brick is gone
    Won,
    /// Ball fell well past the bottom edge
    Lost,
}

impl GameStatus {
    /// Overlay text and color for terminal states
    pub fn message(&self) -> Option<(&'static str, Color)> {
        match self {
            GameStatus::Playing => None,
            GameStatus::Won => Some((WIN_MESSAGE, Color::Fuchsia)),
            GameStatus::Lost => Some((LOSE_MESSAGE, Color::Red)),
        }
    }
}

/// The player's paddle
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Paddle {
    /// Top-left corner
    pub pos: Vec2,
    pub width: f32,
    pub height: f32,
    /// Horizontal velocity: `-speed`, `0` or `+speed`
    pub xv: f32,
    pub speed: f32,
    pub color: Color,
}

impl Paddle {
    /// Centered horizontally, resting just above the bottom margin
    pub fn spawn(config: &GameConfig) -> Self {
        Self {
            pos: Vec2::new(
                (config.canvas_width - config.paddle_width) / 2.0,
                config.canvas_height - config.paddle_height - config.paddle_bottom_margin,
            ),
            width: config.paddle_width,
            height: config.paddle_height,
            xv: 0.0,
            speed: config.paddle_speed,
            color: Color::Black,
        }
    }

    #[inline]
    pub fn rect(&self) -> Rect {
        Rect::new(self.pos.x, self.pos.y, self.width, self.height)
    }

    #[inline]
    pub fn center_x(&self) -> f32 {
        self.pos.x + self.width / 2.0
    }

    /// Stop the paddle if it is already outside the canvas and still heading out.
    ///
    /// Position is never corrected, so the paddle can overshoot by one frame.
    pub fn guard_bounds(&mut self, canvas_width: f32) {
        if self.pos.x < 0.0 && self.xv < 0.0 {
            self.xv = 0.0;
        } else if self.pos.x + self.width > canvas_width && self.xv > 0.0 {
            self.xv = 0.0;
        }
    }

    pub fn advance(&mut self) {
        self.pos.x += self.xv;
    }
}

/// The ball
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ball {
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
    pub color: Color,
}

impl Ball {
    /// Canvas centre, falling, with a random horizontal direction
    pub fn spawn(config: &GameConfig, rng: &mut Pcg32) -> Self {
        Self {
            pos: Vec2::new(config.canvas_width / 2.0, config.canvas_height / 2.0),
            vel: Vec2::new(config.ball_speed_x * random_sign(rng), config.ball_speed_y),
            radius: config.ball_radius,
            color: Color::Blue,
        }
    }

    #[inline]
    pub fn circle(&self) -> Circle {
        Circle {
            center: self.pos,
            radius: self.radius,
        }
    }

    /// Bounce off the side walls or, failing that, the top wall.
    ///
    /// There is no floor. The check runs every frame, so a ball still past a
    /// wall after one step flips again.
    pub fn reflect_off_walls(&mut self, canvas_width: f32) -> bool {
        if self.pos.x - self.radius <= 0.0 || self.pos.x + self.radius >= canvas_width {
            self.vel.x = -self.vel.x;
            return true;
        }

        if self.pos.y - self.radius <= 0.0 {
            self.vel.y = -self.vel.y;
            return true;
        }

        false
    }

    /// Send the ball upward, angled by where it struck the paddle
    pub fn deflect_off_paddle(&mut self, paddle: &Paddle) -> bool {
        if !circle_intersects_rect(&self.circle(), &paddle.rect()) {
            return false;
        }

        self.vel.y = -self.vel.y.abs();
        let offset = self.pos.x - paddle.center_x();
        self.vel.x = clamp(
            offset * PADDLE_DEFLECTION,
            -MAX_DEFLECTION_SPEED,
            MAX_DEFLECTION_SPEED,
        );
        true
    }

    /// Walls, then paddle, then integrate
    pub fn advance(&mut self, paddle: &Paddle, canvas_width: f32) {
        self.reflect_off_walls(canvas_width);
        self.deflect_off_paddle(paddle);
        self.pos += self.vel;
    }
}

/// A destructible brick. Removing it from the field destroys it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Brick {
    pub pos: Vec2,
    pub width: f32,
    pub height: f32,
    pub color: Color,
}

impl Brick {
    #[inline]
    pub fn rect(&self) -> Rect {
        Rect::new(self.pos.x, self.pos.y, self.width, self.height)
    }
}

/// Complete game state
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    /// Seed used for the initial ball direction
    pub seed: u64,
    pub width: f32,
    pub height: f32,
    /// Distance below the canvas at which the ball counts as lost
    pub lose_margin: f32,
    pub paddle: Paddle,
    pub ball: Ball,
    /// Live bricks in generation order
    pub bricks: Vec<Brick>,
    /// Frames simulated so far
    pub frame: u64,
    /// Status after the most recent frame
    pub status: GameStatus,
}

impl GameState {
    /// Spawn paddle and ball and lay out the brick field.
    ///
    /// # Panics
    /// If `config` does not validate; configuration is trusted input.
    pub fn new(config: &GameConfig, seed: u64) -> Self {
        if let Err(err) = config.validate() {
            panic!("invalid game config: {err}");
        }

        let mut rng = Pcg32::seed_from_u64(seed);
        Self {
            seed,
            width: config.canvas_width,
            height: config.canvas_height,
            lose_margin: config.lose_margin,
            paddle: Paddle::spawn(config),
            ball: Ball::spawn(config, &mut rng),
            bricks: bricks::generate(config),
            frame: 0,
            status: GameStatus::Playing,
        }
    }

    /// Terminal check: a cleared field wins before a lost ball is considered
    pub fn evaluate_status(&self) -> GameStatus {
        if self.bricks.is_empty() {
            GameStatus::Won
        } else if self.ball.pos.y > self.height + self.lose_margin {
            GameStatus::Lost
        } else {
            GameStatus::Playing
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ball_at(x: f32, y: f32, xv: f32, yv: f32) -> Ball {
        Ball {
            pos: Vec2::new(x, y),
            vel: Vec2::new(xv, yv),
            radius: 8.0,
            color: Color::Blue,
        }
    }

    #[test]
    fn test_spawn_positions() {
        let config = GameConfig::default();
        let state = GameState::new(&config, 1);

        assert_eq!(state.paddle.pos.x, 135.0);
        let expected_y = config.canvas_height - config.paddle_height - 30.0;
        assert!((state.paddle.pos.y - expected_y).abs() < 0.001);
        assert_eq!(state.paddle.xv, 0.0);

        assert_eq!(state.ball.pos.x, 175.0);
        assert!((state.ball.pos.y - config.canvas_height / 2.0).abs() < 0.001);
        assert_eq!(state.ball.vel.y, 2.2);
        assert_eq!(state.ball.vel.x.abs(), 2.0);
        assert_eq!(state.bricks.len(), 30);
        assert_eq!(state.status, GameStatus::Playing);
    }

    #[test]
    fn test_seed_determines_direction() {
        let config = GameConfig::default();
        let a = GameState::new(&config, 42);
        let b = GameState::new(&config, 42);
        assert_eq!(a.ball.vel, b.ball.vel);

        let directions: Vec<f32> = (0..32)
            .map(|seed| GameState::new(&config, seed).ball.vel.x)
            .collect();
        assert!(directions.contains(&2.0));
        assert!(directions.contains(&-2.0));
    }

    #[test]
    #[should_panic(expected = "invalid game config")]
    fn test_invalid_config_fails_fast() {
        let config = GameConfig {
            brick_width: 0.0,
            ..Default::default()
        };
        let _ = GameState::new(&config, 0);
    }

    #[test]
    fn test_paddle_guard_left() {
        let config = GameConfig::default();
        let mut paddle = Paddle::spawn(&config);
        paddle.pos.x = -1.0;
        paddle.xv = -3.0;
        paddle.guard_bounds(350.0);
        assert_eq!(paddle.xv, 0.0);

        // Moving back inward is allowed
        paddle.xv = 3.0;
        paddle.guard_bounds(350.0);
        assert_eq!(paddle.xv, 3.0);
    }

    #[test]
    fn test_paddle_guard_right() {
        let config = GameConfig::default();
        let mut paddle = Paddle::spawn(&config);
        paddle.pos.x = 271.0; // right edge at 351
        paddle.xv = 3.0;
        paddle.guard_bounds(350.0);
        assert_eq!(paddle.xv, 0.0);
    }

    #[test]
    fn test_paddle_guard_lags_one_frame() {
        let config = GameConfig::default();
        let mut paddle = Paddle::spawn(&config);
        paddle.pos.x = 1.0;
        paddle.xv = -3.0;

        // Still inside: guard does nothing, paddle overshoots to -2
        paddle.guard_bounds(350.0);
        paddle.advance();
        assert_eq!(paddle.pos.x, -2.0);

        // Next frame the guard fires and the paddle stays where it is
        paddle.guard_bounds(350.0);
        paddle.advance();
        assert_eq!(paddle.pos.x, -2.0);
        assert_eq!(paddle.xv, 0.0);
    }

    #[test]
    fn test_left_wall_flip_oscillates_while_overlapping() {
        // x - r = -1: beyond the wall, heading left
        let mut ball = ball_at(7.0, 200.0, -0.5, 0.0);
        assert!(ball.reflect_off_walls(350.0));
        assert_eq!(ball.vel.x, 0.5);
        ball.pos += ball.vel; // x = 7.5, still overlapping

        assert!(ball.reflect_off_walls(350.0));
        assert_eq!(ball.vel.x, -0.5);
        ball.pos += ball.vel; // back to 7.0

        assert!(ball.reflect_off_walls(350.0));
        assert_eq!(ball.vel.x, 0.5);
    }

    #[test]
    fn test_left_wall_flip_once_with_fast_ball() {
        let mut ball = ball_at(7.0, 200.0, -2.0, 0.0);
        assert!(ball.reflect_off_walls(350.0));
        ball.pos += ball.vel; // x = 9.0, clear of the wall
        assert!(!ball.reflect_off_walls(350.0));
        assert_eq!(ball.vel.x, 2.0);
    }

    #[test]
    fn test_top_wall_but_no_floor() {
        let mut ball = ball_at(100.0, 5.0, 1.0, -2.0);
        assert!(ball.reflect_off_walls(350.0));
        assert_eq!(ball.vel.y, 2.0);

        let mut ball = ball_at(100.0, 10_000.0, 1.0, 2.0);
        assert!(!ball.reflect_off_walls(350.0));
        assert_eq!(ball.vel.y, 2.0);
    }

    #[test]
    fn test_side_wall_takes_precedence_over_top() {
        // Top-left corner: only xv flips this frame
        let mut ball = ball_at(5.0, 5.0, -1.0, -1.0);
        assert!(ball.reflect_off_walls(350.0));
        assert_eq!(ball.vel, Vec2::new(1.0, -1.0));
    }

    #[test]
    fn test_paddle_deflection_angle() {
        let config = GameConfig::default();
        let paddle = Paddle::spawn(&config);
        let y = paddle.pos.y - 4.0;

        // 20 px right of centre
        let mut ball = ball_at(paddle.center_x() + 20.0, y, -2.0, 2.2);
        assert!(ball.deflect_off_paddle(&paddle));
        assert!((ball.vel.x - 2.6).abs() < 0.0001);
        assert_eq!(ball.vel.y, -2.2);

        // Already moving up stays up
        let mut ball = ball_at(paddle.center_x(), y, 0.0, -2.2);
        assert!(ball.deflect_off_paddle(&paddle));
        assert_eq!(ball.vel.y, -2.2);
        assert_eq!(ball.vel.x, 0.0);
    }

    #[test]
    fn test_paddle_deflection_clamped() {
        let config = GameConfig::default();
        let paddle = Paddle::spawn(&config);
        // 47 px left of centre: 47 * 0.13 = 6.11, inside the cap
        let mut ball = ball_at(paddle.center_x() - 47.0, paddle.pos.y, 1.0, 2.0);
        assert!(ball.deflect_off_paddle(&paddle));
        assert!((ball.vel.x + 6.11).abs() < 0.001);

        let wide = Paddle {
            width: 200.0,
            ..paddle.clone()
        };
        let mut ball = ball_at(wide.pos.x + 200.0, wide.pos.y, 1.0, 2.0);
        assert!(ball.deflect_off_paddle(&wide));
        assert_eq!(ball.vel.x, MAX_DEFLECTION_SPEED);
    }

    #[test]
    fn test_ball_misses_paddle() {
        let config = GameConfig::default();
        let paddle = Paddle::spawn(&config);
        let mut ball = ball_at(20.0, paddle.pos.y, 1.0, 2.0);
        assert!(!ball.deflect_off_paddle(&paddle));
        assert_eq!(ball.vel, Vec2::new(1.0, 2.0));
    }

    #[test]
    fn test_status_win_checked_before_loss() {
        let config = GameConfig::default();
        let mut state = GameState::new(&config, 3);
        assert_eq!(state.evaluate_status(), GameStatus::Playing);

        state.ball.pos.y = state.height + 101.0;
        assert_eq!(state.evaluate_status(), GameStatus::Lost);

        state.bricks.clear();
        assert_eq!(state.evaluate_status(), GameStatus::Won);
    }

    #[test]
    fn test_loss_needs_full_margin() {
        let config = GameConfig::default();
        let mut state = GameState::new(&config, 3);
        state.ball.pos.y = state.height + 100.0;
        assert_eq!(state.evaluate_status(), GameStatus::Playing);
    }
}
