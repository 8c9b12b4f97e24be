//! Game driver
//!
//! Turns host refresh callbacks (variable rate) into fixed 60 Hz simulation
//! frames, then renders once per callback.

use crate::config::GameConfig;
use crate::consts::{FRAME_DT, MAX_FRAME_DELTA, MAX_SUBSTEPS};
use crate::renderer::{DrawSurface, draw_frame};
use crate::sim::{Autopilot, GameState, GameStatus, handle_key_down, handle_key_up, tick};

/// A running game plus its timing state
pub struct Game {
    pub state: GameState,
    accumulator: f32,
    autopilot: Option<Autopilot>,
}

impl Game {
    /// # Panics
    /// If `config` does not validate.
    pub fn new(config: &GameConfig, seed: u64) -> Self {
        let state = GameState::new(config, seed);
        log::info!(
            "Game initialized with seed {} ({}x{} canvas, {} bricks)",
            seed,
            state.width,
            state.height,
            state.bricks.len()
        );
        Self {
            state,
            accumulator: 0.0,
            autopilot: None,
        }
    }

    pub fn status(&self) -> GameStatus {
        self.state.status
    }

    /// Forward a key press to the paddle. Returns whether it was handled.
    pub fn key_down(&mut self, key: &str) -> bool {
        handle_key_down(&mut self.state.paddle, key)
    }

    /// Forward a key release to the paddle. Returns whether it was handled.
    pub fn key_up(&mut self, key: &str) -> bool {
        handle_key_up(&mut self.state.paddle, key)
    }

    pub fn autopilot_enabled(&self) -> bool {
        self.autopilot.is_some()
    }

    /// Switch demo mode on or off; returns the new setting
    pub fn toggle_autopilot(&mut self) -> bool {
        match self.autopilot.take() {
            Some(mut pilot) => pilot.release(&mut self.state),
            None => self.autopilot = Some(Autopilot::new()),
        }
        log::info!("Autopilot: {}", self.autopilot_enabled());
        self.autopilot_enabled()
    }

    /// Run exactly one simulation frame
    pub fn step(&mut self) -> GameStatus {
        if let Some(pilot) = self.autopilot.as_mut() {
            pilot.steer(&mut self.state);
        }
        tick(&mut self.state)
    }

    /// Advance by `dt` seconds of wall time; returns how many frames ran
    pub fn update(&mut self, dt: f32) -> u32 {
        // NaN would poison the accumulator for good
        if !dt.is_finite() {
            log::warn!("Ignoring non-finite frame delta {}", dt);
            return 0;
        }
        self.accumulator += dt.clamp(0.0, MAX_FRAME_DELTA);

        let mut substeps = 0;
        while self.accumulator >= FRAME_DT && substeps < MAX_SUBSTEPS {
            self.step();
            self.accumulator -= FRAME_DT;
            substeps += 1;
        }

        // Drop time we could not catch up on rather than spiralling
        if substeps == MAX_SUBSTEPS {
            self.accumulator = self.accumulator.min(FRAME_DT);
        }
        substeps
    }

    pub fn render<S: DrawSurface + ?Sized>(&self, surface: &mut S) {
        draw_frame(&self.state, surface);
    }
}
