// Collision listener - turns raw contacts into game rules
//
// The simulator reports every begin/end of contact between two arena bodies.
// The listener decides what each contact means (goal, bounce, paddle stop)
// and answers with a response the simulator applies to the bodies.

use glam::Vec2;
use log::{debug, info};

use super::registry::{BodyKind, Side};
use super::score::Score;

/// One contact between two arena bodies, valid for the current sub-step only
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ContactEvent {
    pub kind_a: BodyKind,
    pub kind_b: BodyKind,
    /// Unit normal pointing from `kind_a` toward `kind_b`; `None` for sensor overlaps
    pub normal: Option<Vec2>,
}

/// What a contact means for the game
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ContactClass {
    /// Ball entered the goal owned by `goal`
    BallGoal { goal: Side },
    /// Ball touched a paddle; `normal` points from the ball into the paddle
    BallPaddle { paddle: Side, normal: Option<Vec2> },
    /// Ball touched a wall; `normal` points from the ball into the wall
    BallWall { normal: Vec2 },
    /// Paddle reached a wall; `normal` points from the paddle into the wall
    PaddleWall { paddle: Side, normal: Vec2 },
    /// Pair with no game meaning
    Other,
}

impl ContactEvent {
    pub fn new(kind_a: BodyKind, kind_b: BodyKind, normal: Option<Vec2>) -> Self {
        Self {
            kind_a,
            kind_b,
            normal,
        }
    }

    /// The same contact seen from the other body
    pub fn swapped(&self) -> Self {
        Self {
            kind_a: self.kind_b,
            kind_b: self.kind_a,
            normal: self.normal.map(|n| -n),
        }
    }

    /// Classify the pair regardless of which body is reported first
    pub fn classify(&self) -> ContactClass {
        if self.kind_b == BodyKind::Ball || (self.kind_b.is_paddle() && self.kind_a.is_wall()) {
            return self.swapped().classify_ordered();
        }
        self.classify_ordered()
    }

    fn classify_ordered(&self) -> ContactClass {
        match (self.kind_a, self.kind_b) {
            (BodyKind::Ball, other) if other.is_goal() => match other.side() {
                Some(goal) => ContactClass::BallGoal { goal },
                None => ContactClass::Other,
            },
            (BodyKind::Ball, other) if other.is_paddle() => match other.side() {
                Some(paddle) => ContactClass::BallPaddle {
                    paddle,
                    normal: self.normal,
                },
                None => ContactClass::Other,
            },
            (BodyKind::Ball, other) if other.is_wall() => ContactClass::BallWall {
                normal: wall_normal(other),
            },
            (paddle, wall) if paddle.is_paddle() && wall.is_wall() => match paddle.side() {
                Some(side) => ContactClass::PaddleWall {
                    paddle: side,
                    normal: wall_normal(wall),
                },
                None => ContactClass::Other,
            },
            _ => ContactClass::Other,
        }
    }
}

/// Walls only ever push back along the vertical axis
fn wall_normal(wall: BodyKind) -> Vec2 {
    if wall == BodyKind::WallTop {
        Vec2::Y
    } else {
        Vec2::NEG_Y
    }
}

/// Physical effect requested by the listener
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ContactResponse {
    /// Nothing to do
    Ignore,
    /// Elastic reflection of the ball; `normal` points from the ball into the obstacle
    ReflectBall { normal: Vec2 },
    /// Elastic reflection of the ball off a paddle; `normal` is the reported
    /// contact normal from the ball into the paddle, if any
    ReflectBallOffPaddle { paddle: Side, normal: Option<Vec2> },
    /// Stop a paddle that is pushing into a wall
    HaltPaddle { paddle: Side, normal: Vec2 },
    /// Move the ball back to the centre and serve it toward `serve_toward`
    ResetBall { serve_toward: Side },
}

/// Receives contact events from the simulator, synchronously, once per pair per sub-step
pub trait ContactListener {
    /// Called before the events of a new sub-step are delivered
    fn begin_step(&mut self) {}

    /// Two bodies started touching
    fn begin_contact(&mut self, event: &ContactEvent) -> ContactResponse;

    /// Two bodies stopped touching
    fn end_contact(&mut self, _event: &ContactEvent) {}
}

/// The rules of the game: goals score, everything solid bounces
#[derive(Debug, Default)]
pub struct RulesListener {
    score: Score,
    /// Set once a goal has been counted in the current sub-step
    goal_this_step: bool,
}

impl RulesListener {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn score(&self) -> &Score {
        &self.score
    }
}

impl ContactListener for RulesListener {
    fn begin_step(&mut self) {
        self.goal_this_step = false;
    }

    fn begin_contact(&mut self, event: &ContactEvent) -> ContactResponse {
        match event.classify() {
            ContactClass::BallGoal { goal } => {
                if self.goal_this_step {
                    return ContactResponse::Ignore;
                }
                self.goal_this_step = true;

                // Entering a goal scores for the opponent of its owner
                let scorer = goal.opponent();
                self.score.increment(scorer);
                info!(
                    "{:?} player scores ({} - {})",
                    scorer,
                    self.score.left(),
                    self.score.right()
                );

                ContactResponse::ResetBall { serve_toward: goal }
            }
            ContactClass::BallPaddle { paddle, normal } => {
                debug!("Ball hit {:?} paddle", paddle);
                ContactResponse::ReflectBallOffPaddle { paddle, normal }
            }
            ContactClass::BallWall { normal } => {
                debug!("Ball hit wall");
                ContactResponse::ReflectBall { normal }
            }
            ContactClass::PaddleWall { paddle, normal } => {
                ContactResponse::HaltPaddle { paddle, normal }
            }
            ContactClass::Other => ContactResponse::Ignore,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_left_goal_scores_for_right_player() {
        let mut listener = RulesListener::new();
        listener.begin_step();

        let response =
            listener.begin_contact(&ContactEvent::new(BodyKind::Ball, BodyKind::GoalLeft, None));

        assert_eq!(
            response,
            ContactResponse::ResetBall {
                serve_toward: Side::Left
            }
        );
        assert_eq!(listener.score().right(), 1);
        assert_eq!(listener.score().left(), 0);
    }

    #[test]
    fn test_right_goal_scores_for_left_player() {
        let mut listener = RulesListener::new();
        listener.begin_step();

        // Order of the pair must not matter
        let response =
            listener.begin_contact(&ContactEvent::new(BodyKind::GoalRight, BodyKind::Ball, None));

        assert_eq!(
            response,
            ContactResponse::ResetBall {
                serve_toward: Side::Right
            }
        );
        assert_eq!(listener.score().left(), 1);
        assert_eq!(listener.score().right(), 0);
    }

    #[test]
    fn test_second_goal_in_same_step_ignored() {
        let mut listener = RulesListener::new();
        listener.begin_step();

        let event = ContactEvent::new(BodyKind::Ball, BodyKind::GoalLeft, None);
        listener.begin_contact(&event);
        assert_eq!(listener.begin_contact(&event), ContactResponse::Ignore);
        assert_eq!(listener.score().right(), 1);

        listener.begin_step();
        listener.begin_contact(&event);
        assert_eq!(listener.score().right(), 2);
    }

    #[test]
    fn test_wall_bounce_is_vertical() {
        let mut listener = RulesListener::new();

        let top = listener.begin_contact(&ContactEvent::new(
            BodyKind::WallTop,
            BodyKind::Ball,
            Some(Vec2::NEG_Y),
        ));
        assert_eq!(top, ContactResponse::ReflectBall { normal: Vec2::Y });

        let bottom =
            listener.begin_contact(&ContactEvent::new(BodyKind::Ball, BodyKind::WallBottom, None));
        assert_eq!(bottom, ContactResponse::ReflectBall { normal: Vec2::NEG_Y });
    }

    #[test]
    fn test_paddle_normal_oriented_from_ball() {
        let mut listener = RulesListener::new();

        // Normal reported from the paddle toward the ball
        let response = listener.begin_contact(&ContactEvent::new(
            BodyKind::PaddleLeft,
            BodyKind::Ball,
            Some(Vec2::X),
        ));

        assert_eq!(
            response,
            ContactResponse::ReflectBallOffPaddle {
                paddle: Side::Left,
                normal: Some(Vec2::NEG_X)
            }
        );
    }

    #[test]
    fn test_paddle_without_normal() {
        let mut listener = RulesListener::new();
        let response =
            listener.begin_contact(&ContactEvent::new(BodyKind::Ball, BodyKind::PaddleRight, None));

        assert_eq!(
            response,
            ContactResponse::ReflectBallOffPaddle {
                paddle: Side::Right,
                normal: None
            }
        );
    }

    #[test]
    fn test_paddle_wall_halts_paddle() {
        let mut listener = RulesListener::new();
        let response =
            listener.begin_contact(&ContactEvent::new(BodyKind::WallTop, BodyKind::PaddleRight, None));

        assert_eq!(
            response,
            ContactResponse::HaltPaddle {
                paddle: Side::Right,
                normal: Vec2::Y
            }
        );
    }

    #[test]
    fn test_non_scoring_pairs_ignored() {
        let mut listener = RulesListener::new();
        let response =
            listener.begin_contact(&ContactEvent::new(BodyKind::WallTop, BodyKind::GoalLeft, None));

        assert_eq!(response, ContactResponse::Ignore);
        assert_eq!(*listener.score(), Score::new());
    }
}
