//! Driftfield game core.
//!
//! Alternating terrain and space levels: whole-number levels walk the avatar
//! over ground, half-step levels fly it through a procedurally maintained
//! asteroid field. Rendering, physics simulation, and windowing live behind
//! the host traits in the `renderer` and `physics` crates, so the whole core
//! runs headless.

pub mod avatar;
pub mod config;
pub mod mode;
pub mod state;
pub mod update;

pub use avatar::Avatar;
pub use config::GameConfig;
pub use mode::{play_mode_for_level, DisplayMode, GameModeMachine, PlayMode};
pub use state::GameState;
