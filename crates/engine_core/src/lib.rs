//! Core simulation types shared across all systems:
//! - Transform and spatial components
//! - Axis indexing for per-axis field logic
//! - Simulation clock with freeze/resume (menu pause)

pub mod axis;
pub mod clock;
pub mod components;
pub mod transform;

pub use axis::*;
pub use clock::*;
pub use components::*;
pub use transform::*;

// Re-export commonly used types
pub use glam::{Quat, Vec2, Vec3};
pub use hecs::{Entity, World};
