//! Render/asset collaborator boundary and the follow-camera rig.
//!
//! The core never draws; it loads models by name, pushes transforms for the
//! avatar, camera, and each asteroid instance, and toggles fog. Everything
//! past that boundary belongs to the engine.

pub mod camera;
pub mod host;

pub use camera::*;
pub use host::*;
