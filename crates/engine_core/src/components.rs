//! Common components for entities stored in the `hecs` world.

use glam::Vec3;

/// Velocity component for moving entities.
///
/// For asteroid instances `linear` is the constant per-instance drift and
/// `angular` the constant per-instance spin, both fixed at spawn.
#[derive(Debug, Clone, Copy, Default)]
pub struct Velocity {
    pub linear: Vec3,
    /// Per-frame spin in degrees around each axis.
    pub angular: Vec3,
}

impl Velocity {
    pub fn with_angular(linear: Vec3, angular: Vec3) -> Self {
        Self { linear, angular }
    }
}
