// World simulator - owns the physics world and drives it in fixed sub-steps
//
// Each sub-step:
// 1. paddle velocity commands are clamped to the arena and applied
// 2. rapier integrates the moving bodies and runs the narrow phase
// 3. begin/end contact events are classified by the contact listener
// 4. the listener's responses (bounces, goals, paddle stops) are applied

use glam::Vec2;
use log::{debug, info, warn};

use super::config::ArenaConfig;
use super::export::PositionSnapshot;
use super::launch::Launcher;
use super::listener::{ContactEvent, ContactListener, ContactResponse, RulesListener};
use super::registry::{body_position, body_velocity, BodyHandles, BodyKind, BodyRegistry, Side};
use crate::core::math::{clamp, closest_point_on_box, reflect};
use crate::engine::game_loop::FixedTimestep;
use crate::engine::physics::{CollisionEvent, PhysicsWorld, Vector};
use crate::error::{FrameWarning, InitializationError};

/// Normals shorter than this are treated as missing
const MIN_NORMAL_LENGTH: f32 = 1e-3;

/// The arena simulation
pub struct WorldSimulator<L: ContactListener = RulesListener> {
    config: ArenaConfig,
    physics: PhysicsWorld,
    registry: BodyRegistry,
    timestep: FixedTimestep,
    listener: L,
    launcher: Launcher,

    /// Commanded vertical velocity of each paddle, `[left, right]`
    paddle_commands: [f32; 2],

    /// Set when the ball was relocated during the current sub-step
    ball_reset_this_step: bool,
}

impl WorldSimulator<RulesListener> {
    /// Build the arena with the standard game rules
    pub fn new(config: ArenaConfig) -> Result<Self, InitializationError> {
        Self::with_listener(config, RulesListener::new())
    }
}

impl<L: ContactListener> WorldSimulator<L> {
    /// Build the arena with a custom contact listener
    pub fn with_listener(config: ArenaConfig, listener: L) -> Result<Self, InitializationError> {
        config.validate()?;

        let mut physics = PhysicsWorld::new(config.fixed_timestep);
        let registry = BodyRegistry::build(&mut physics, &config);

        info!(
            "World simulator ready: {} bodies, dt = {:.4}s",
            registry.len(),
            config.fixed_timestep
        );

        Ok(Self {
            timestep: FixedTimestep::new(config.fixed_timestep, config.max_frame_time),
            launcher: Launcher::new(config.launch),
            config,
            physics,
            registry,
            listener,
            paddle_commands: [0.0; 2],
            ball_reset_this_step: false,
        })
    }

    pub fn config(&self) -> &ArenaConfig {
        &self.config
    }

    pub fn listener(&self) -> &L {
        &self.listener
    }

    pub fn timestep(&self) -> &FixedTimestep {
        &self.timestep
    }

    /// Advance the simulation by `elapsed` seconds of host time.
    ///
    /// Returns the number of fixed sub-steps that were run.
    pub fn step(&mut self, elapsed: f32) -> u32 {
        let (steps, warning) = self.timestep.advance(elapsed);
        if let Some(warning) = warning {
            warn!("{}", warning);
        }

        for _ in 0..steps {
            self.sub_step();
        }

        steps
    }

    /// Set the commanded vertical velocity of one paddle (units/second)
    pub fn set_paddle_velocity(&mut self, side: Side, velocity: f32) {
        // Non-finite commands would poison the body transform
        self.paddle_commands[side_index(side)] = if velocity.is_finite() {
            velocity
        } else {
            0.0
        };
    }

    /// Commanded vertical velocity of one paddle
    pub fn paddle_command(&self, side: Side) -> f32 {
        self.paddle_commands[side_index(side)]
    }

    /// Give the ball the configured speed.
    ///
    /// Returns false when the ball is already moving and relaunching is disabled.
    pub fn launch_ball(&mut self) -> bool {
        let moving = self.ball_velocity().length_squared() > 0.0;
        if moving && !self.config.relaunch_while_moving {
            debug!("Launch ignored, ball already moving");
            return false;
        }

        let velocity = self.launcher.next_direction(None) * self.config.ball_speed;
        self.set_ball_velocity(velocity);
        info!("Ball launched with velocity ({:.1}, {:.1})", velocity.x, velocity.y);
        true
    }

    /// Current ball position
    pub fn ball_position(&self) -> Vec2 {
        self.position_of(self.registry.ball())
    }

    /// Current ball velocity
    pub fn ball_velocity(&self) -> Vec2 {
        body_velocity(&self.physics, self.registry.ball()).unwrap_or(Vec2::ZERO)
    }

    /// Current position of any arena body
    pub fn body_position(&self, kind: BodyKind) -> Option<Vec2> {
        self.registry
            .get(kind)
            .and_then(|handles| body_position(&self.physics, handles))
    }

    /// Current centre of one paddle
    pub fn paddle_position(&self, side: Side) -> Vec2 {
        self.body_position(BodyKind::paddle(side))
            .unwrap_or_else(|| self.config.paddle(side).center())
    }

    /// Copy of the renderable positions
    pub fn export_positions(&self) -> PositionSnapshot {
        PositionSnapshot::new(
            self.ball_position(),
            self.paddle_position(Side::Left),
            self.paddle_position(Side::Right),
            self.config.ball.radius,
        )
    }

    fn position_of(&self, handles: BodyHandles) -> Vec2 {
        body_position(&self.physics, handles).unwrap_or(Vec2::ZERO)
    }

    fn sub_step(&mut self) {
        self.ball_reset_this_step = false;

        self.apply_paddle_commands();
        self.physics.step();
        self.contain_paddles();

        self.listener.begin_step();
        for event in self.physics.get_collision_events() {
            self.dispatch(event);
        }
    }

    /// Clamp each paddle command so the paddle ends the step inside the arena
    fn apply_paddle_commands(&mut self) {
        let dt = self.config.fixed_timestep;

        for side in [Side::Left, Side::Right] {
            let Some(handles) = self.registry.get(BodyKind::paddle(side)) else {
                continue;
            };

            let y = self.position_of(handles).y;
            let (min, max) = self.config.paddle_bounds(side);
            let requested = self.paddle_commands[side_index(side)];
            let applied = clamp(requested, (min - y) / dt, (max - y) / dt);

            if applied != requested {
                let warning = FrameWarning::OutOfBoundsCommand {
                    side,
                    requested,
                    applied,
                };
                debug!("{}", warning);
            }

            if let Some(body) = self.physics.get_rigid_body_mut(handles.body) {
                body.set_linvel(Vector::new(0.0, applied), true);
            }
        }
    }

    /// Snap paddles back inside the arena after integration rounding
    fn contain_paddles(&mut self) {
        for side in [Side::Left, Side::Right] {
            let Some(handles) = self.registry.get(BodyKind::paddle(side)) else {
                continue;
            };

            let position = self.position_of(handles);
            let (min, max) = self.config.paddle_bounds(side);
            let contained = clamp(position.y, min, max);

            if contained != position.y {
                if let Some(body) = self.physics.get_rigid_body_mut(handles.body) {
                    body.set_translation(Vector::new(position.x, contained), true);
                    body.set_linvel(Vector::new(0.0, 0.0), true);
                }
            }
        }
    }

    fn dispatch(&mut self, event: CollisionEvent) {
        match event {
            CollisionEvent::Started {
                collider1,
                collider2,
                sensor,
                normal,
            } => {
                let (Some(kind_a), Some(kind_b)) = (
                    self.registry.kind_of(collider1),
                    self.registry.kind_of(collider2),
                ) else {
                    return;
                };

                let normal = if sensor {
                    None
                } else {
                    normal
                        .map(|n| Vec2::new(n.x, n.y))
                        .filter(|n| n.length() > MIN_NORMAL_LENGTH)
                        .map(Vec2::normalize)
                };

                let contact = ContactEvent::new(kind_a, kind_b, normal);
                let response = self.listener.begin_contact(&contact);
                self.apply(response);
            }
            CollisionEvent::Stopped {
                collider1,
                collider2,
                ..
            } => {
                if let (Some(kind_a), Some(kind_b)) = (
                    self.registry.kind_of(collider1),
                    self.registry.kind_of(collider2),
                ) {
                    self.listener
                        .end_contact(&ContactEvent::new(kind_a, kind_b, None));
                }
            }
        }
    }

    fn apply(&mut self, response: ContactResponse) {
        match response {
            ContactResponse::Ignore => {}
            ContactResponse::ReflectBall { normal } => self.reflect_ball(normal),
            ContactResponse::ReflectBallOffPaddle { paddle, normal } => {
                let geometric = self.paddle_normal(paddle);
                // Trust the reported normal only when it agrees with the shapes
                let normal = normal
                    .filter(|n| n.dot(geometric) > 0.0)
                    .unwrap_or(geometric);
                self.reflect_ball(normal);
            }
            ContactResponse::HaltPaddle { paddle, normal } => {
                let index = side_index(paddle);
                // Only a paddle still pushing into the wall is stopped
                if self.paddle_commands[index] * normal.y > 0.0 {
                    debug!("{:?} paddle stopped at wall", paddle);
                    self.paddle_commands[index] = 0.0;
                    if let Some(handles) = self.registry.get(BodyKind::paddle(paddle)) {
                        if let Some(body) = self.physics.get_rigid_body_mut(handles.body) {
                            body.set_linvel(Vector::new(0.0, 0.0), true);
                        }
                    }
                }
            }
            ContactResponse::ResetBall { serve_toward } => self.reset_ball(serve_toward),
        }
    }

    /// Elastic bounce: the normal component flips, the tangential one is kept
    fn reflect_ball(&mut self, normal: Vec2) {
        if self.ball_reset_this_step {
            return;
        }

        let velocity = self.ball_velocity();
        // A ball already leaving the obstacle must not be turned back into it
        if velocity.dot(normal) <= 0.0 {
            return;
        }

        self.set_ball_velocity(reflect(velocity, normal));
    }

    /// Unit normal from the ball toward the closest point of a paddle
    fn paddle_normal(&self, side: Side) -> Vec2 {
        let ball = self.ball_position();
        let paddle = self.paddle_position(side);
        let half_extents = self.config.paddle(side).half_extents();

        let closest = closest_point_on_box(ball, paddle, half_extents);
        let toward = closest - ball;
        if toward.length() > MIN_NORMAL_LENGTH {
            toward.normalize()
        } else {
            // Ball centre inside the paddle, push it back toward the middle
            Vec2::new((paddle.x - ball.x).signum(), 0.0)
        }
    }

    fn reset_ball(&mut self, serve_toward: Side) {
        let center = self.config.ball.center();
        let velocity = self.launcher.next_direction(Some(serve_toward)) * self.config.ball_speed;

        let ball = self.registry.ball();
        if let Some(body) = self.physics.get_rigid_body_mut(ball.body) {
            body.set_translation(Vector::new(center.x, center.y), true);
            body.set_linvel(Vector::new(velocity.x, velocity.y), true);
        }
        self.ball_reset_this_step = true;

        info!("Ball reset, serving toward {:?}", serve_toward);
    }

    fn set_ball_velocity(&mut self, velocity: Vec2) {
        let ball = self.registry.ball();
        if let Some(body) = self.physics.get_rigid_body_mut(ball.body) {
            body.set_linvel(Vector::new(velocity.x, velocity.y), true);
        }
    }
}

fn side_index(side: Side) -> usize {
    match side {
        Side::Left => 0,
        Side::Right => 1,
    }
}
