use super::collision::CollisionGroups;
use rapier2d::prelude::*;

pub use rapier2d::prelude::{ColliderHandle, RigidBodyHandle};

/// Builder for creating rigid bodies with common configurations
pub struct BodyBuilder {
    body_type: RigidBodyType,
    position: Isometry<Real>,
    linvel: Vector<Real>,
    can_sleep: bool,
}

impl BodyBuilder {
    /// Create a new kinematic velocity-based body.
    ///
    /// Moved only by the velocity the game assigns to it, never by contacts.
    pub fn new_kinematic_velocity_based() -> Self {
        Self {
            body_type: RigidBodyType::KinematicVelocityBased,
            position: Isometry::identity(),
            linvel: Vector::zeros(),
            can_sleep: false,
        }
    }

    /// Create a new fixed (static) body (completely immovable)
    pub fn new_fixed() -> Self {
        Self {
            body_type: RigidBodyType::Fixed,
            position: Isometry::identity(),
            linvel: Vector::zeros(),
            can_sleep: false,
        }
    }

    /// Set the initial position of the body
    pub fn position(mut self, x: Real, y: Real) -> Self {
        self.position = Isometry::translation(x, y);
        self
    }

    /// Set the initial linear velocity
    pub fn linvel(mut self, x: Real, y: Real) -> Self {
        self.linvel = vector![x, y];
        self
    }

    /// Build the rigid body
    pub fn build(self) -> RigidBody {
        RigidBodyBuilder::new(self.body_type)
            .position(self.position)
            .linvel(self.linvel)
            .gravity_scale(0.0)
            .can_sleep(self.can_sleep)
            .locked_axes(LockedAxes::ROTATION_LOCKED)
            .build()
    }
}

/// Builder for creating colliders with common configurations
pub struct ColliderBuilder2D {
    shape: SharedShape,
    collision_groups: CollisionGroups,
    is_sensor: bool,
    restitution: Real,
}

impl ColliderBuilder2D {
    /// Create a box-shaped collider
    pub fn box_shape(half_width: Real, half_height: Real) -> Self {
        Self {
            shape: SharedShape::cuboid(half_width, half_height),
            collision_groups: CollisionGroups::Wall,
            is_sensor: false,
            restitution: 1.0,
        }
    }

    /// Create a circle-shaped collider
    pub fn circle(radius: Real) -> Self {
        Self {
            shape: SharedShape::ball(radius),
            collision_groups: CollisionGroups::Ball,
            is_sensor: false,
            restitution: 1.0,
        }
    }

    /// Set the collision groups for filtering
    pub fn collision_groups(mut self, groups: CollisionGroups) -> Self {
        self.collision_groups = groups;
        self
    }

    /// Make this a sensor (detects overlap but doesn't cause physical response)
    pub fn sensor(mut self, is_sensor: bool) -> Self {
        self.is_sensor = is_sensor;
        self
    }

    /// Set restitution/bounciness (0.0 = no bounce, 1.0 = perfect bounce)
    pub fn restitution(mut self, restitution: Real) -> Self {
        self.restitution = restitution;
        self
    }

    /// Build the collider
    pub fn build(self) -> Collider {
        // Every body in the arena is kinematic or fixed, so the default
        // dynamic-only pair filter would never report a contact.
        rapier2d::prelude::ColliderBuilder::new(self.shape)
            .collision_groups(self.collision_groups.to_interaction_groups())
            .sensor(self.is_sensor)
            .friction(0.0)
            .restitution(self.restitution)
            .active_collision_types(ActiveCollisionTypes::all())
            .active_events(ActiveEvents::COLLISION_EVENTS)
            .build()
    }
}

/// Common rigid body configurations for arena objects
pub mod presets {
    use super::*;

    /// Create a paddle body (kinematic, moved by commanded velocity)
    pub fn paddle_body(x: Real, y: Real) -> RigidBody {
        BodyBuilder::new_kinematic_velocity_based()
            .position(x, y)
            .build()
    }

    /// Create a paddle collider (box shape)
    pub fn paddle_collider(width: Real, height: Real) -> Collider {
        ColliderBuilder2D::box_shape(width / 2.0, height / 2.0)
            .collision_groups(CollisionGroups::Paddle)
            .build()
    }

    /// Create the ball body (kinematic, starts at rest)
    pub fn ball_body(x: Real, y: Real) -> RigidBody {
        BodyBuilder::new_kinematic_velocity_based()
            .position(x, y)
            .linvel(0.0, 0.0)
            .build()
    }

    /// Create the ball collider (circle shape)
    pub fn ball_collider(radius: Real) -> Collider {
        ColliderBuilder2D::circle(radius)
            .collision_groups(CollisionGroups::Ball)
            .build()
    }

    /// Create a wall body (fixed/static)
    pub fn wall_body(x: Real, y: Real) -> RigidBody {
        BodyBuilder::new_fixed().position(x, y).build()
    }

    /// Create a wall collider (box shape)
    pub fn wall_collider(width: Real, height: Real) -> Collider {
        ColliderBuilder2D::box_shape(width / 2.0, height / 2.0)
            .collision_groups(CollisionGroups::Wall)
            .build()
    }

    /// Create a goal body (fixed/static)
    pub fn goal_body(x: Real, y: Real) -> RigidBody {
        BodyBuilder::new_fixed().position(x, y).build()
    }

    /// Create a goal collider (sensor box, detects but doesn't block)
    pub fn goal_collider(width: Real, height: Real) -> Collider {
        ColliderBuilder2D::box_shape(width / 2.0, height / 2.0)
            .collision_groups(CollisionGroups::Goal)
            .sensor(true)
            .restitution(0.0)
            .build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_body_builder_kinematic() {
        let body = BodyBuilder::new_kinematic_velocity_based()
            .position(10.0, 20.0)
            .linvel(5.0, 0.0)
            .build();

        assert_eq!(body.body_type(), RigidBodyType::KinematicVelocityBased);
        assert_eq!(body.translation().x, 10.0);
        assert_eq!(body.translation().y, 20.0);
        assert_eq!(body.linvel().x, 5.0);
    }

    #[test]
    fn test_collider_builder_box() {
        let collider = ColliderBuilder2D::box_shape(1.0, 2.0).build();

        assert!(!collider.is_sensor());
        assert_eq!(collider.friction(), 0.0);
        assert_eq!(collider.restitution(), 1.0);
    }

    #[test]
    fn test_goal_preset_is_sensor() {
        let body = presets::goal_body(50.0, 300.0);
        let collider = presets::goal_collider(10.0, 1000.0);

        assert_eq!(body.body_type(), RigidBodyType::Fixed);
        assert!(collider.is_sensor());
    }

    #[test]
    fn test_ball_preset() {
        let body = presets::ball_body(425.0, 300.0);
        let collider = presets::ball_collider(15.0);

        assert!(body.is_kinematic());
        assert!(body.is_rotation_locked());
        assert!(!collider.is_sensor());
    }
}
