//! Per-frame simulation step
//!
//! Order matters and each step sees the previous one's output:
//! bricks, paddle guard, paddle movement, ball movement, terminal check.

use super::bricks;
use super::state::{GameState, GameStatus};

/// Advance the game by one frame and return the resulting status.
///
/// Physics keeps running after the game is won or lost.
pub fn tick(state: &mut GameState) -> GameStatus {
    bricks::resolve_collisions(&mut state.bricks, &mut state.ball);

    state.paddle.guard_bounds(state.width);
    state.paddle.advance();

    state.ball.advance(&state.paddle, state.width);

    state.frame += 1;

    let status = state.evaluate_status();
    if status != state.status {
        log::info!(
            "Frame {}: {:?} -> {:?} ({} bricks left)",
            state.frame,
            state.status,
            status,
            state.bricks.len()
        );
        state.status = status;
    }
    status
}
