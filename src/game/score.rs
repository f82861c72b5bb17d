// Score tracker - two counters that only ever go up

use super::registry::Side;

/// Goals scored by each player during this session
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Score {
    left: u32,
    right: u32,
}

impl Score {
    pub fn new() -> Self {
        Self::default()
    }

    /// Goals scored by one side
    pub fn get(&self, player: Side) -> u32 {
        match player {
            Side::Left => self.left,
            Side::Right => self.right,
        }
    }

    /// Goals scored by the left player (player one)
    pub fn left(&self) -> u32 {
        self.left
    }

    /// Goals scored by the right player (player two)
    pub fn right(&self) -> u32 {
        self.right
    }

    /// Credit one goal to `player`; only the contact listener calls this
    pub(crate) fn increment(&mut self, player: Side) {
        match player {
            Side::Left => self.left = self.left.saturating_add(1),
            Side::Right => self.right = self.right.saturating_add(1),
        }
    }
}
