// Launch control - picks the direction of every launch and serve

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use super::registry::Side;
use crate::error::InitializationError;

/// How the ball direction is chosen when it is launched or served
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LaunchPolicy {
    /// Always the same direction (need not be normalized)
    Fixed { direction: Vec2 },

    /// Random angle in `[-max_angle, max_angle]` radians from the horizontal,
    /// drawn from a generator seeded with `seed`
    Random { seed: u64, max_angle: f32 },
}

impl LaunchPolicy {
    pub(crate) fn validate(&self) -> Result<(), InitializationError> {
        match *self {
            LaunchPolicy::Fixed { direction } => {
                let length = direction.length();
                if !(length > 0.0) || !length.is_finite() {
                    return Err(InitializationError::InvalidParameter {
                        name: "launch direction",
                        value: length,
                    });
                }
            }
            LaunchPolicy::Random { max_angle, .. } => {
                if !(0.0..std::f32::consts::FRAC_PI_2).contains(&max_angle) {
                    return Err(InitializationError::InvalidParameter {
                        name: "launch max_angle",
                        value: max_angle,
                    });
                }
            }
        }
        Ok(())
    }
}

/// Produces unit launch directions according to a policy
#[derive(Debug, Clone)]
pub struct Launcher {
    policy: LaunchPolicy,
    rng: Pcg32,
}

impl Launcher {
    pub fn new(policy: LaunchPolicy) -> Self {
        let seed = match policy {
            LaunchPolicy::Random { seed, .. } => seed,
            LaunchPolicy::Fixed { .. } => 0,
        };

        Self {
            policy,
            rng: Pcg32::seed_from_u64(seed),
        }
    }

    pub fn policy(&self) -> LaunchPolicy {
        self.policy
    }

    /// Unit direction for the next launch.
    ///
    /// With `toward` set, the horizontal component points at that side's goal.
    pub fn next_direction(&mut self, toward: Option<Side>) -> Vec2 {
        let direction = match self.policy {
            LaunchPolicy::Fixed { direction } => direction.normalize(),
            LaunchPolicy::Random { max_angle, .. } => {
                let angle = if max_angle > 0.0 {
                    self.rng.gen_range(-max_angle..=max_angle)
                } else {
                    0.0
                };
                let horizontal = if self.rng.gen_bool(0.5) { 1.0 } else { -1.0 };
                Vec2::new(horizontal * angle.cos(), angle.sin())
            }
        };

        match toward {
            Some(side) => aim_at(direction, side),
            None => direction,
        }
    }
}

/// Point the horizontal component of a unit direction at `side`
fn aim_at(direction: Vec2, side: Side) -> Vec2 {
    let horizontal = direction.x.abs();
    if horizontal < f32::EPSILON {
        // A purely vertical serve would never reach either goal
        return Vec2::new(side.sign(), 0.0);
    }
    Vec2::new(side.sign() * horizontal, direction.y)
}
