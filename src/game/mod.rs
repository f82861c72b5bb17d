// Arena game: body registry, simulation, contact rules, scoring and export
//
// - `config`: named constants for every body and tuning value
// - `registry`: the fixed set of bodies and their physics handles
// - `simulator`: fixed-step world simulation
// - `listener`: contact classification and game rules
// - `score`: per-player goal counters
// - `launch`: launch and serve directions
// - `export`: fixed-layout position snapshot for the renderer
// - `session`: host-facing facade

pub mod config;
pub mod export;
pub mod launch;
pub mod listener;
pub mod registry;
pub mod score;
pub mod session;
pub mod simulator;

// Re-export commonly used types
pub use config::{ArenaConfig, BallSpec, RectSpec, DEFAULT_ARENA};
pub use export::{BodyPosition, PositionSnapshot, EXPORT_ORDER, SNAPSHOT_VERSION};
pub use launch::LaunchPolicy;
pub use listener::{ContactEvent, ContactListener, ContactResponse, RulesListener};
pub use registry::{BodyKind, Side};
pub use score::Score;
pub use session::PaddleGame;
pub use simulator::WorldSimulator;
