// Engine modules: fixed-step clock and physics

pub mod game_loop;
pub mod physics;
