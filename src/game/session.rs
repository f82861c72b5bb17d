// Game session - the surface the host application calls once per frame
//
// Typical frame:
//
// ```rust
// use paddle_arena::{ArenaConfig, PaddleGame};
//
// let mut game = PaddleGame::initialize(ArenaConfig::default())?;
// game.launch_ball();
//
// // every frame
// game.move_paddle_left(0.4);
// game.update(1.0 / 60.0);
// let snapshot = game.object_positions();
// let floats: &[f32] = snapshot.as_floats();
// ```

use glam::Vec2;

use super::config::ArenaConfig;
use super::export::PositionSnapshot;
use super::registry::Side;
use super::simulator::WorldSimulator;
use crate::error::InitializationError;

/// One game session: the arena, its score and its clock
pub struct PaddleGame {
    simulator: WorldSimulator,
}

impl PaddleGame {
    /// Build the arena; nothing runs if the configuration is malformed
    pub fn initialize(config: ArenaConfig) -> Result<Self, InitializationError> {
        Ok(Self {
            simulator: WorldSimulator::new(config)?,
        })
    }

    /// Start the ball moving; a no-op while it already moves unless configured otherwise
    pub fn launch_ball(&mut self) -> bool {
        self.simulator.launch_ball()
    }

    /// Command the left paddle. Positive moves up, scaled by `paddle_speed_scale`.
    pub fn move_paddle_left(&mut self, amount: f32) {
        self.move_paddle(Side::Left, amount);
    }

    /// Command the right paddle. Positive moves up, scaled by `paddle_speed_scale`.
    pub fn move_paddle_right(&mut self, amount: f32) {
        self.move_paddle(Side::Right, amount);
    }

    pub fn move_paddle(&mut self, side: Side, amount: f32) {
        let velocity = amount * self.simulator.config().paddle_speed_scale;
        self.simulator.set_paddle_velocity(side, velocity);
    }

    /// Goals scored by the left player
    pub fn player_one_score(&self) -> u32 {
        self.score(Side::Left)
    }

    /// Goals scored by the right player
    pub fn player_two_score(&self) -> u32 {
        self.score(Side::Right)
    }

    pub fn score(&self, player: Side) -> u32 {
        self.simulator.listener().score().get(player)
    }

    /// Advance by `elapsed` seconds of host time; negative or non-finite values count as zero
    pub fn update(&mut self, elapsed: f32) {
        self.simulator.step(elapsed);
    }

    /// Ball, left paddle and right paddle positions, in that order
    pub fn object_positions(&self) -> PositionSnapshot {
        self.simulator.export_positions()
    }

    pub fn ball_velocity(&self) -> Vec2 {
        self.simulator.ball_velocity()
    }

    /// Vertical range a paddle centre is kept in
    pub fn paddle_bounds(&self, side: Side) -> (f32, f32) {
        self.simulator.config().paddle_bounds(side)
    }

    /// Fixed sub-steps run since initialization
    pub fn step_count(&self) -> u64 {
        self.simulator.timestep().step_count()
    }

    /// Fraction of a sub-step waiting in the accumulator, for render interpolation
    pub fn alpha(&self) -> f32 {
        self.simulator.timestep().alpha()
    }

    pub fn config(&self) -> &ArenaConfig {
        self.simulator.config()
    }
}
