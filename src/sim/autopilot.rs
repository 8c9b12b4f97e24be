//! Demo mode: steer the paddle under the ball
//!
//! The autopilot only ever presses and releases keys through the input
//! handlers, so it obeys exactly the same rules as a player.

use super::input::{Direction, handle_key_down, handle_key_up};
use super::state::GameState;

/// Fraction of the paddle width the aim point sweeps across
const AIM_SWEEP: f32 = 0.35;
/// Slow oscillation so the ball leaves the paddle at varied angles
const AIM_RATE: f32 = 0.013;

#[derive(Debug, Clone, Default)]
pub struct Autopilot {
    held: Option<Direction>,
}

impl Autopilot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Key currently held down by the autopilot
    pub fn held(&self) -> Option<Direction> {
        self.held
    }

    /// Direction that brings the paddle's aim point under the ball
    pub fn desired(state: &GameState) -> Option<Direction> {
        let paddle = &state.paddle;
        let offset = (state.frame as f32 * AIM_RATE).sin() * paddle.width * AIM_SWEEP;
        let aim = paddle.center_x() + offset;
        let error = state.ball.pos.x - aim;

        if error > paddle.speed {
            Some(Direction::Right)
        } else if error < -paddle.speed {
            Some(Direction::Left)
        } else {
            None
        }
    }

    /// Press/release keys so the paddle follows the ball
    pub fn steer(&mut self, state: &mut GameState) {
        let wanted = Self::desired(state);
        if wanted == self.held {
            return;
        }

        if let Some(dir) = self.held.take() {
            handle_key_up(&mut state.paddle, dir.key());
        }
        if let Some(dir) = wanted {
            handle_key_down(&mut state.paddle, dir.key());
        }
        self.held = wanted;
    }

    /// Let go of any held key
    pub fn release(&mut self, state: &mut GameState) {
        if let Some(dir) = self.held.take() {
            handle_key_up(&mut state.paddle, dir.key());
        }
    }
}
