//! Physics core of a two-player paddle-and-goal arena game.
//!
//! The host application owns the window, input and rendering. Once per frame
//! it forwards paddle commands, calls [`PaddleGame::update`] and reads back
//! [`PaddleGame::object_positions`].

pub mod core;
pub mod engine;
pub mod error;
pub mod game;

pub use error::{FrameWarning, InitializationError};
pub use game::{
    ArenaConfig, BodyKind, LaunchPolicy, PaddleGame, PositionSnapshot, Side, WorldSimulator,
};
