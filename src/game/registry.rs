// Body registry - the fixed set of bodies that make up the arena

use std::collections::HashMap;

use glam::Vec2;
use log::info;

use super::config::ArenaConfig;
use crate::engine::physics::{
    presets, Collider, ColliderHandle, PhysicsWorld, RigidBody, RigidBodyHandle,
};

/// Which player a paddle or goal belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    /// The other player
    pub fn opponent(self) -> Side {
        match self {
            Side::Left => Side::Right,
            Side::Right => Side::Left,
        }
    }

    /// -1 for the left side, +1 for the right side
    pub fn sign(self) -> f32 {
        match self {
            Side::Left => -1.0,
            Side::Right => 1.0,
        }
    }
}

/// Tag carried by every body in the arena
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BodyKind {
    PaddleLeft,
    PaddleRight,
    GoalLeft,
    GoalRight,
    WallTop,
    WallBottom,
    Ball,
}

impl BodyKind {
    /// Every kind, in registration order
    pub const ALL: [BodyKind; 7] = [
        BodyKind::PaddleLeft,
        BodyKind::PaddleRight,
        BodyKind::GoalLeft,
        BodyKind::GoalRight,
        BodyKind::WallTop,
        BodyKind::WallBottom,
        BodyKind::Ball,
    ];

    /// Solid bodies take part in collision response, goals are sensors
    pub fn is_solid(self) -> bool {
        !self.is_goal()
    }

    pub fn is_goal(self) -> bool {
        matches!(self, BodyKind::GoalLeft | BodyKind::GoalRight)
    }

    pub fn is_paddle(self) -> bool {
        matches!(self, BodyKind::PaddleLeft | BodyKind::PaddleRight)
    }

    pub fn is_wall(self) -> bool {
        matches!(self, BodyKind::WallTop | BodyKind::WallBottom)
    }

    /// Owning side for paddles and goals
    pub fn side(self) -> Option<Side> {
        match self {
            BodyKind::PaddleLeft | BodyKind::GoalLeft => Some(Side::Left),
            BodyKind::PaddleRight | BodyKind::GoalRight => Some(Side::Right),
            _ => None,
        }
    }

    pub fn paddle(side: Side) -> BodyKind {
        match side {
            Side::Left => BodyKind::PaddleLeft,
            Side::Right => BodyKind::PaddleRight,
        }
    }

    /// Bodies that move during play
    pub fn is_dynamic(self) -> bool {
        self.is_paddle() || self == BodyKind::Ball
    }
}

/// Rigid body and collider pair belonging to one arena body
#[derive(Debug, Clone, Copy)]
pub struct BodyHandles {
    pub body: RigidBodyHandle,
    pub collider: ColliderHandle,
}

/// Maps every arena body to its physics handles and back
#[derive(Debug)]
pub struct BodyRegistry {
    handles: HashMap<BodyKind, BodyHandles>,
    collider_to_kind: HashMap<ColliderHandle, BodyKind>,
    /// Ball handles are looked up every sub-step, so they are kept apart
    ball: BodyHandles,
}

impl BodyRegistry {
    /// Create every arena body inside `physics`.
    ///
    /// The configuration must already be validated.
    pub fn build(physics: &mut PhysicsWorld, config: &ArenaConfig) -> Self {
        let mut handles = HashMap::with_capacity(BodyKind::ALL.len());
        let mut collider_to_kind = HashMap::with_capacity(BodyKind::ALL.len());

        let mut register = |kind: BodyKind, body: RigidBody, collider: Collider| {
            let body = physics.add_rigid_body(body);
            let collider = physics.add_collider(collider, body);
            handles.insert(kind, BodyHandles { body, collider });
            collider_to_kind.insert(collider, kind);
            BodyHandles { body, collider }
        };

        for kind in BodyKind::ALL {
            let Some(rect) = config.rect(kind) else {
                continue;
            };

            let (body, collider) = if kind.is_paddle() {
                (
                    presets::paddle_body(rect.x, rect.y),
                    presets::paddle_collider(rect.width, rect.height),
                )
            } else if kind.is_goal() {
                (
                    presets::goal_body(rect.x, rect.y),
                    presets::goal_collider(rect.width, rect.height),
                )
            } else {
                (
                    presets::wall_body(rect.x, rect.y),
                    presets::wall_collider(rect.width, rect.height),
                )
            };
            register(kind, body, collider);
        }

        let ball = register(
            BodyKind::Ball,
            presets::ball_body(config.ball.x, config.ball.y),
            presets::ball_collider(config.ball.radius),
        );

        info!("Arena built with {} bodies", handles.len());

        Self {
            handles,
            collider_to_kind,
            ball,
        }
    }

    /// Handles of the ball
    pub fn ball(&self) -> BodyHandles {
        self.ball
    }

    /// Handles of any body; `None` only if the registry was not built from a full arena
    pub fn get(&self, kind: BodyKind) -> Option<BodyHandles> {
        self.handles.get(&kind).copied()
    }

    /// Which arena body owns a collider
    pub fn kind_of(&self, collider: ColliderHandle) -> Option<BodyKind> {
        self.collider_to_kind.get(&collider).copied()
    }

    /// Number of registered bodies
    pub fn len(&self) -> usize {
        self.handles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handles.is_empty()
    }
}

/// Current translation of a registered body as a glam vector
pub fn body_position(physics: &PhysicsWorld, handles: BodyHandles) -> Option<Vec2> {
    physics
        .get_rigid_body(handles.body)
        .map(|body| Vec2::new(body.translation().x, body.translation().y))
}

/// Current linear velocity of a registered body as a glam vector
pub fn body_velocity(physics: &PhysicsWorld, handles: BodyHandles) -> Option<Vec2> {
    physics
        .get_rigid_body(handles.body)
        .map(|body| Vec2::new(body.linvel().x, body.linvel().y))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn build_default() -> (PhysicsWorld, BodyRegistry) {
        let config = ArenaConfig::default();
        let mut physics = PhysicsWorld::new(config.fixed_timestep);
        let registry = BodyRegistry::build(&mut physics, &config);
        (physics, registry)
    }

    #[test]
    fn test_registry_holds_every_body_once() {
        let (physics, registry) = build_default();

        assert_eq!(registry.len(), 7);
        assert_eq!(physics.body_count(), 7);
        for kind in BodyKind::ALL {
            let handles = registry.get(kind).expect("every kind is registered");
            assert_eq!(registry.kind_of(handles.collider), Some(kind));
        }
    }

    #[test]
    fn test_goals_are_sensors() {
        let (physics, registry) = build_default();

        for kind in BodyKind::ALL {
            let handles = registry.get(kind).expect("registered");
            let collider = physics.get_collider(handles.collider).expect("collider");
            assert_eq!(collider.is_sensor(), !kind.is_solid(), "{kind:?}");
        }
    }

    #[test]
    fn test_initial_positions() {
        let (physics, registry) = build_default();

        assert_eq!(
            body_position(&physics, registry.ball()),
            Some(Vec2::new(425.0, 300.0))
        );
        let left = registry.get(BodyKind::PaddleLeft).expect("registered");
        assert_eq!(
            body_position(&physics, left),
            Some(Vec2::new(100.0, 300.0))
        );
        assert_eq!(body_velocity(&physics, registry.ball()), Some(Vec2::ZERO));
    }

    #[test]
    fn test_side_helpers() {
        assert_eq!(Side::Left.opponent(), Side::Right);
        assert_eq!(BodyKind::GoalRight.side(), Some(Side::Right));
        assert_eq!(BodyKind::WallTop.side(), None);
        assert_eq!(BodyKind::paddle(Side::Left), BodyKind::PaddleLeft);
        assert!(BodyKind::Ball.is_dynamic());
        assert!(!BodyKind::WallBottom.is_dynamic());
    }
}
