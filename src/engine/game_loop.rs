/// Fixed timestep accumulator
///
/// The host reports variable frame durations; the simulation only ever
/// advances in constant increments. Leftover time is carried across calls
/// so that the same sequence of frame durations always produces the same
/// number of sub-steps.
use crate::error::FrameWarning;

/// Default physics/update rate (60 updates per second)
pub const FIXED_TIMESTEP: f32 = 1.0 / 60.0;

/// Longest frame duration accepted in a single call, to avoid a spiral of death
pub const MAX_FRAME_TIME: f32 = 0.25;

/// Fixed timestep state
#[derive(Debug, Clone)]
pub struct FixedTimestep {
    /// Size of one sub-step in seconds
    step: f32,

    /// Per-call cap on the accepted frame duration
    max_frame_time: f32,

    /// Accumulated time not yet consumed by a sub-step
    accumulator: f32,

    /// Total number of frames reported
    frame_count: u64,

    /// Total sub-steps executed
    step_count: u64,
}

impl FixedTimestep {
    /// Create a new accumulator with the given sub-step size and frame cap
    pub fn new(step: f32, max_frame_time: f32) -> Self {
        Self {
            step,
            max_frame_time,
            accumulator: 0.0,
            frame_count: 0,
            step_count: 0,
        }
    }

    /// Report a frame duration and return how many sub-steps to run.
    ///
    /// Negative or non-finite durations count as zero; the returned warning
    /// lets the caller log the recovery.
    pub fn advance(&mut self, elapsed: f32) -> (u32, Option<FrameWarning>) {
        self.frame_count += 1;

        let (elapsed, warning) = if !elapsed.is_finite() || elapsed < 0.0 {
            (0.0, Some(FrameWarning::InvalidTimestep(elapsed)))
        } else {
            (elapsed.min(self.max_frame_time), None)
        };

        self.accumulator += elapsed;

        let mut steps = 0;
        while self.accumulator >= self.step {
            self.accumulator -= self.step;
            steps += 1;
        }

        self.step_count += steps as u64;
        (steps, warning)
    }

    /// Size of one sub-step (in seconds)
    pub fn step(&self) -> f32 {
        self.step
    }

    /// Time waiting in the accumulator (in seconds)
    pub fn accumulator(&self) -> f32 {
        self.accumulator
    }

    /// Interpolation alpha for smooth rendering between sub-steps
    /// Alpha = accumulated_time / fixed_timestep
    pub fn alpha(&self) -> f32 {
        self.accumulator / self.step
    }

    /// Total number of frames reported
    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }

    /// Total number of sub-steps executed
    pub fn step_count(&self) -> u64 {
        self.step_count
    }
}

impl Default for FixedTimestep {
    fn default() -> Self {
        Self::new(FIXED_TIMESTEP, MAX_FRAME_TIME)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_creation() {
        let timestep = FixedTimestep::default();
        assert_eq!(timestep.frame_count(), 0);
        assert_eq!(timestep.step_count(), 0);
        assert_eq!(timestep.accumulator(), 0.0);
    }

    #[test]
    fn test_fixed_timestep() {
        let timestep = FixedTimestep::default();
        assert_eq!(timestep.step(), FIXED_TIMESTEP);
        assert!((timestep.step() - 1.0 / 60.0).abs() < 0.0001);
    }

    #[test]
    fn test_exact_frame_runs_one_step() {
        let mut timestep = FixedTimestep::default();
        for _ in 0..10 {
            let (steps, warning) = timestep.advance(FIXED_TIMESTEP);
            assert_eq!(steps, 1);
            assert!(warning.is_none());
        }
        assert_eq!(timestep.step_count(), 10);
    }

    #[test]
    fn test_short_frames_accumulate() {
        let mut timestep = FixedTimestep::new(0.25, 1.0);

        assert_eq!(timestep.advance(0.125).0, 0);
        assert_eq!(timestep.advance(0.125).0, 1);
        assert_eq!(timestep.accumulator(), 0.0);
    }

    #[test]
    fn test_leftover_carried() {
        let mut timestep = FixedTimestep::new(0.25, 1.0);

        assert_eq!(timestep.advance(0.625).0, 2);
        assert_eq!(timestep.accumulator(), 0.125);
        assert_eq!(timestep.alpha(), 0.5);
    }

    #[test]
    fn test_negative_elapsed_clamped() {
        let mut timestep = FixedTimestep::default();
        let (steps, warning) = timestep.advance(-1.0);

        assert_eq!(steps, 0);
        assert!(matches!(warning, Some(FrameWarning::InvalidTimestep(_))));
        assert_eq!(timestep.accumulator(), 0.0);
        assert_eq!(timestep.frame_count(), 1);
    }

    #[test]
    fn test_nan_elapsed_clamped() {
        let mut timestep = FixedTimestep::default();
        let (steps, warning) = timestep.advance(f32::NAN);

        assert_eq!(steps, 0);
        assert!(warning.is_some());
        assert_eq!(timestep.accumulator(), 0.0);
    }

    #[test]
    fn test_long_frame_capped() {
        let mut timestep = FixedTimestep::new(0.25, 1.0);

        // 10 seconds would be 40 steps, but only 1 second is accepted
        let (steps, _) = timestep.advance(10.0);
        assert_eq!(steps, 4);
    }
}
