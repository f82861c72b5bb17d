// State exporter - fixed-layout snapshot of everything the renderer draws

use bytemuck::{Pod, Zeroable};
use glam::Vec2;

use super::registry::BodyKind;

/// Layout version of [`PositionSnapshot`]
pub const SNAPSHOT_VERSION: u32 = 1;

/// Bodies in the snapshot, in buffer order
pub const EXPORT_ORDER: [BodyKind; 3] = [BodyKind::Ball, BodyKind::PaddleLeft, BodyKind::PaddleRight];

/// Number of floats in the flat buffer
pub const EXPORT_FLOATS: usize = EXPORT_ORDER.len() * 2;

/// Position of one renderable body
#[repr(C)]
#[derive(Copy, Clone, Debug, Default, PartialEq, Pod, Zeroable)]
pub struct BodyPosition {
    pub x: f32,
    pub y: f32,
}

impl BodyPosition {
    pub fn new(position: Vec2) -> Self {
        Self {
            x: position.x,
            y: position.y,
        }
    }

    pub fn to_vec2(self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }
}

/// Copy of the renderable body positions, taken between two updates
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct PositionSnapshot {
    /// Layout version, always [`SNAPSHOT_VERSION`]
    pub version: u32,
    /// Ball, left paddle, right paddle
    pub positions: [BodyPosition; 3],
    /// Ball radius, so the renderer can size the sphere
    pub ball_radius: f32,
}

impl PositionSnapshot {
    pub fn new(ball: Vec2, paddle_left: Vec2, paddle_right: Vec2, ball_radius: f32) -> Self {
        Self {
            version: SNAPSHOT_VERSION,
            positions: [
                BodyPosition::new(ball),
                BodyPosition::new(paddle_left),
                BodyPosition::new(paddle_right),
            ],
            ball_radius,
        }
    }

    pub fn ball(&self) -> BodyPosition {
        self.positions[0]
    }

    pub fn paddle_left(&self) -> BodyPosition {
        self.positions[1]
    }

    pub fn paddle_right(&self) -> BodyPosition {
        self.positions[2]
    }

    /// Position of any exported body
    pub fn get(&self, kind: BodyKind) -> Option<BodyPosition> {
        EXPORT_ORDER
            .iter()
            .position(|k| *k == kind)
            .map(|index| self.positions[index])
    }

    /// Flat `[x0, y0, x1, y1, x2, y2]` view in export order
    pub fn as_floats(&self) -> &[f32] {
        bytemuck::cast_slice(&self.positions)
    }
}
