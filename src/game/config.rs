// Arena configuration - every body in the game is placed from these constants
// Nothing here can be changed once the simulation is running

use glam::Vec2;

use super::launch::LaunchPolicy;
use super::registry::{BodyKind, Side};
use crate::engine::game_loop::{FIXED_TIMESTEP, MAX_FRAME_TIME};
use crate::error::InitializationError;

/// Placement of a rectangular body (paddle, goal or wall)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RectSpec {
    /// Centre x in world units
    pub x: f32,
    /// Centre y in world units
    pub y: f32,
    /// Full width in world units
    pub width: f32,
    /// Full height in world units
    pub height: f32,
}

impl RectSpec {
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn center(&self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }

    pub fn half_extents(&self) -> Vec2 {
        Vec2::new(self.width / 2.0, self.height / 2.0)
    }
}

/// Placement of the ball
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BallSpec {
    pub x: f32,
    pub y: f32,
    pub radius: f32,
}

impl BallSpec {
    pub fn center(&self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }
}

/// Complete arena description
#[derive(Debug, Clone, PartialEq)]
pub struct ArenaConfig {
    // Bodies
    pub paddle_left: RectSpec,
    pub paddle_right: RectSpec,
    pub goal_left: RectSpec,
    pub goal_right: RectSpec,
    pub wall_top: RectSpec,
    pub wall_bottom: RectSpec,
    pub ball: BallSpec,

    // Motion
    /// Ball speed after a launch or serve (units/second)
    pub ball_speed: f32,
    /// Paddle velocity (units/second) per unit of paddle command
    pub paddle_speed_scale: f32,
    /// How the launch direction is chosen
    pub launch: LaunchPolicy,
    /// Whether `launch_ball` restarts a ball that is already moving
    pub relaunch_while_moving: bool,

    // Timing
    /// Size of one simulation sub-step (seconds)
    pub fixed_timestep: f32,
    /// Longest frame duration accepted by a single update (seconds)
    pub max_frame_time: f32,
}

/// The standard arena layout
pub const DEFAULT_ARENA: ArenaConfig = ArenaConfig {
    paddle_left: RectSpec::new(100.0, 300.0, 10.0, 100.0),
    paddle_right: RectSpec::new(700.0, 300.0, 10.0, 100.0),

    goal_left: RectSpec::new(50.0, 300.0, 10.0, 1000.0),
    goal_right: RectSpec::new(750.0, 300.0, 10.0, 1000.0),

    wall_top: RectSpec::new(425.0, 600.0, 1000.0, 10.0),
    wall_bottom: RectSpec::new(425.0, 0.0, 1000.0, 10.0),

    ball: BallSpec {
        x: 425.0,
        y: 300.0,
        radius: 15.0,
    },

    ball_speed: 300.0,
    paddle_speed_scale: 500.0,
    launch: LaunchPolicy::Fixed {
        direction: Vec2::new(-1.0, 0.0),
    },
    relaunch_while_moving: false,

    fixed_timestep: FIXED_TIMESTEP,
    max_frame_time: MAX_FRAME_TIME,
};

impl Default for ArenaConfig {
    fn default() -> Self {
        DEFAULT_ARENA
    }
}

impl ArenaConfig {
    /// Rectangle spec for a box-shaped body, `None` for the ball
    pub fn rect(&self, kind: BodyKind) -> Option<&RectSpec> {
        match kind {
            BodyKind::PaddleLeft => Some(&self.paddle_left),
            BodyKind::PaddleRight => Some(&self.paddle_right),
            BodyKind::GoalLeft => Some(&self.goal_left),
            BodyKind::GoalRight => Some(&self.goal_right),
            BodyKind::WallTop => Some(&self.wall_top),
            BodyKind::WallBottom => Some(&self.wall_bottom),
            BodyKind::Ball => None,
        }
    }

    /// Paddle spec for one side
    pub fn paddle(&self, side: Side) -> &RectSpec {
        match side {
            Side::Left => &self.paddle_left,
            Side::Right => &self.paddle_right,
        }
    }

    /// Vertical range the centre of a paddle may occupy.
    ///
    /// The paddle stops flush against the inner face of each wall.
    pub fn paddle_bounds(&self, side: Side) -> (f32, f32) {
        let half_height = self.paddle(side).height / 2.0;
        let min = self.wall_bottom.y + self.wall_bottom.height / 2.0 + half_height;
        let max = self.wall_top.y - self.wall_top.height / 2.0 - half_height;
        (min, max)
    }

    /// Check every constant before any body is built
    pub fn validate(&self) -> Result<(), InitializationError> {
        for kind in BodyKind::ALL {
            let Some(rect) = self.rect(kind) else {
                continue;
            };

            if !rect.x.is_finite() || !rect.y.is_finite() {
                return Err(InitializationError::NonFinitePosition {
                    body: kind,
                    x: rect.x,
                    y: rect.y,
                });
            }

            // Written so that NaN sizes are rejected as well
            if !(rect.width > 0.0 && rect.height > 0.0)
                || !rect.width.is_finite()
                || !rect.height.is_finite()
            {
                return Err(InitializationError::NonPositiveSize {
                    body: kind,
                    width: rect.width,
                    height: rect.height,
                });
            }
        }

        if !self.ball.x.is_finite() || !self.ball.y.is_finite() {
            return Err(InitializationError::NonFinitePosition {
                body: BodyKind::Ball,
                x: self.ball.x,
                y: self.ball.y,
            });
        }

        if !(self.ball.radius > 0.0) || !self.ball.radius.is_finite() {
            return Err(InitializationError::NonPositiveRadius(self.ball.radius));
        }

        let parameters = [
            ("ball_speed", self.ball_speed),
            ("paddle_speed_scale", self.paddle_speed_scale),
            ("fixed_timestep", self.fixed_timestep),
            ("max_frame_time", self.max_frame_time),
        ];
        for (name, value) in parameters {
            if !(value > 0.0) || !value.is_finite() {
                return Err(InitializationError::InvalidParameter { name, value });
            }
        }

        self.launch.validate()?;

        for side in [Side::Left, Side::Right] {
            let (min, max) = self.paddle_bounds(side);
            if min > max {
                return Err(InitializationError::ArenaTooShort { min, max });
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        assert!(ArenaConfig::default().validate().is_ok());
    }

    #[test]
    fn test_default_constants() {
        let config = ArenaConfig::default();
        assert_eq!(config.ball.center(), Vec2::new(425.0, 300.0));
        assert_eq!(config.ball.radius, 15.0);
        assert_eq!(config.paddle_left.center(), Vec2::new(100.0, 300.0));
        assert_eq!(config.paddle_right.center(), Vec2::new(700.0, 300.0));
    }

    #[test]
    fn test_paddle_bounds_inside_walls() {
        let config = ArenaConfig::default();
        let (min, max) = config.paddle_bounds(Side::Left);

        assert_eq!(min, 55.0);
        assert_eq!(max, 545.0);
        assert!(min >= config.wall_bottom.y + config.paddle_left.height / 2.0);
        assert!(max <= config.wall_top.y - config.paddle_left.height / 2.0);
    }

    #[test]
    fn test_zero_paddle_width_rejected() {
        let mut config = ArenaConfig::default();
        config.paddle_right.width = 0.0;

        assert_eq!(
            config.validate(),
            Err(InitializationError::NonPositiveSize {
                body: BodyKind::PaddleRight,
                width: 0.0,
                height: 100.0,
            })
        );
    }

    #[test]
    fn test_negative_goal_height_rejected() {
        let mut config = ArenaConfig::default();
        config.goal_left.height = -10.0;
        assert!(matches!(
            config.validate(),
            Err(InitializationError::NonPositiveSize {
                body: BodyKind::GoalLeft,
                ..
            })
        ));
    }

    #[test]
    fn test_nan_size_rejected() {
        let mut config = ArenaConfig::default();
        config.wall_top.height = f32::NAN;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_zero_radius_rejected() {
        let mut config = ArenaConfig::default();
        config.ball.radius = 0.0;
        assert_eq!(
            config.validate(),
            Err(InitializationError::NonPositiveRadius(0.0))
        );
    }

    #[test]
    fn test_zero_timestep_rejected() {
        let mut config = ArenaConfig::default();
        config.fixed_timestep = 0.0;
        assert!(matches!(
            config.validate(),
            Err(InitializationError::InvalidParameter {
                name: "fixed_timestep",
                ..
            })
        ));
    }

    #[test]
    fn test_paddle_taller_than_arena_rejected() {
        let mut config = ArenaConfig::default();
        config.paddle_left.height = 800.0;
        assert!(matches!(
            config.validate(),
            Err(InitializationError::ArenaTooShort { .. })
        ));
    }
}
