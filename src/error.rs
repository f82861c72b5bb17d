// Error types for the arena core

use crate::game::registry::{BodyKind, Side};

/// Configuration problems detected while building the arena.
///
/// Fatal: no simulation exists when one of these is returned.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum InitializationError {
    #[error("{body:?} has non-positive size {width}x{height}")]
    NonPositiveSize {
        body: BodyKind,
        width: f32,
        height: f32,
    },

    #[error("ball radius must be positive, got {0}")]
    NonPositiveRadius(f32),

    #[error("{name} must be positive and finite, got {value}")]
    InvalidParameter { name: &'static str, value: f32 },

    #[error("{body:?} position ({x}, {y}) is not finite")]
    NonFinitePosition { body: BodyKind, x: f32, y: f32 },

    #[error("arena is too short for the paddles: bounds [{min}, {max}]")]
    ArenaTooShort { min: f32, max: f32 },
}

/// Per-frame problems that are recovered locally and only logged.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum FrameWarning {
    #[error("invalid timestep {0}, treated as 0")]
    InvalidTimestep(f32),

    #[error("{side:?} paddle command {requested} clamped to {applied}")]
    OutOfBoundsCommand {
        side: Side,
        requested: f32,
        applied: f32,
    },
}
