use rapier2d::prelude::*;
use std::sync::Mutex;

/// Collision groups for filtering what objects can collide with each other
///
/// Goals only ever need to see the ball, and walls never need to see goals
/// even though their shapes overlap at the arena corners.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollisionGroups {
    /// The ball
    Ball = 0b0000_0001,

    /// Player paddles
    Paddle = 0b0000_0010,

    /// Top and bottom arena walls
    Wall = 0b0000_0100,

    /// Goal sensors behind each paddle
    Goal = 0b0000_1000,
}

impl CollisionGroups {
    /// Convert to rapier2d's InteractionGroups
    pub fn to_interaction_groups(self) -> InteractionGroups {
        let memberships = Group::from_bits_truncate(self as u32);

        // Define what each group can interact with
        let filter = match self {
            CollisionGroups::Ball => Group::from_bits_truncate(
                CollisionGroups::Paddle as u32
                    | CollisionGroups::Wall as u32
                    | CollisionGroups::Goal as u32,
            ),

            // Paddles are stopped by walls and hit the ball
            CollisionGroups::Paddle => Group::from_bits_truncate(
                CollisionGroups::Ball as u32 | CollisionGroups::Wall as u32,
            ),

            CollisionGroups::Wall => Group::from_bits_truncate(
                CollisionGroups::Ball as u32 | CollisionGroups::Paddle as u32,
            ),

            CollisionGroups::Goal => Group::from_bits_truncate(CollisionGroups::Ball as u32),
        };

        InteractionGroups::new(memberships, filter)
    }
}

/// Collision event reported by the physics step
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CollisionEvent {
    /// Two colliders started touching (or a sensor started overlapping)
    Started {
        collider1: ColliderHandle,
        collider2: ColliderHandle,
        /// True when one of the colliders is a sensor
        sensor: bool,
        /// World-space contact normal pointing from collider1 toward collider2
        normal: Option<Vector<Real>>,
    },

    /// Two colliders stopped touching
    Stopped {
        collider1: ColliderHandle,
        collider2: ColliderHandle,
        sensor: bool,
    },
}

/// Queue for storing collision events during physics step
pub struct CollisionEventQueue {
    events: Mutex<Vec<CollisionEvent>>,
}

impl CollisionEventQueue {
    pub fn new() -> Self {
        Self {
            events: Mutex::new(Vec::with_capacity(16)),
        }
    }

    /// Clear all events (call at start of physics step)
    pub fn clear(&self) {
        if let Ok(mut events) = self.events.lock() {
            events.clear();
        }
    }

    /// Get all collision events from the last step
    pub fn events(&self) -> Vec<CollisionEvent> {
        self.events
            .lock()
            .map(|events| events.clone())
            .unwrap_or_default()
    }

    /// Add a collision event
    fn push(&self, event: CollisionEvent) {
        if let Ok(mut events) = self.events.lock() {
            events.push(event);
        }
    }
}

impl Default for CollisionEventQueue {
    fn default() -> Self {
        Self::new()
    }
}

/// Normal of the first non-empty manifold, oriented from `collider1` outward
fn contact_normal(pair: &ContactPair, collider1: ColliderHandle) -> Option<Vector<Real>> {
    let manifold = pair.manifolds.iter().find(|m| !m.points.is_empty())?;
    let normal = manifold.data.normal;

    if pair.collider1 == collider1 {
        Some(normal)
    } else {
        Some(-normal)
    }
}

// Implement rapier2d's EventHandler trait for our event queue
impl EventHandler for CollisionEventQueue {
    fn handle_collision_event(
        &self,
        _bodies: &RigidBodySet,
        _colliders: &ColliderSet,
        event: rapier2d::prelude::CollisionEvent,
        contact_pair: Option<&ContactPair>,
    ) {
        match event {
            rapier2d::prelude::CollisionEvent::Started(h1, h2, flags) => {
                self.push(CollisionEvent::Started {
                    collider1: h1,
                    collider2: h2,
                    sensor: flags.contains(CollisionEventFlags::SENSOR),
                    normal: contact_pair.and_then(|pair| contact_normal(pair, h1)),
                });
            }
            rapier2d::prelude::CollisionEvent::Stopped(h1, h2, flags) => {
                self.push(CollisionEvent::Stopped {
                    collider1: h1,
                    collider2: h2,
                    sensor: flags.contains(CollisionEventFlags::SENSOR),
                });
            }
        }
    }

    fn handle_contact_force_event(
        &self,
        _dt: Real,
        _bodies: &RigidBodySet,
        _colliders: &ColliderSet,
        _contact_pair: &ContactPair,
        _total_force_magnitude: Real,
    ) {
        // Responses are velocity reflections, forces are never inspected
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collision_groups_bits() {
        // Ensure each group has a unique bit
        let groups = [
            CollisionGroups::Ball,
            CollisionGroups::Paddle,
            CollisionGroups::Wall,
            CollisionGroups::Goal,
        ];

        for (i, group1) in groups.iter().enumerate() {
            for (j, group2) in groups.iter().enumerate() {
                if i != j {
                    assert_ne!(
                        *group1 as u32, *group2 as u32,
                        "Groups must have unique bits"
                    );
                }
            }
        }
    }

    #[test]
    fn test_goal_only_sees_ball() {
        let goal = CollisionGroups::Goal.to_interaction_groups();

        assert!(goal.test(CollisionGroups::Ball.to_interaction_groups()));
        assert!(!goal.test(CollisionGroups::Paddle.to_interaction_groups()));
        assert!(!goal.test(CollisionGroups::Wall.to_interaction_groups()));
    }

    #[test]
    fn test_paddle_collides_with_wall_and_ball() {
        let paddle = CollisionGroups::Paddle.to_interaction_groups();

        assert!(paddle.test(CollisionGroups::Wall.to_interaction_groups()));
        assert!(paddle.test(CollisionGroups::Ball.to_interaction_groups()));
        assert!(!paddle.test(CollisionGroups::Paddle.to_interaction_groups()));
    }

    #[test]
    fn test_queue_clear() {
        let queue = CollisionEventQueue::new();
        assert!(queue.events().is_empty());
        queue.clear();
        assert!(queue.events().is_empty());
    }
}
