//! Transform component for spatial positioning.
//!
//! World convention is Z-up with Y as the forward/depth axis, so yaw is a
//! rotation about Z and pitch a rotation about X.

use glam::{Quat, Vec3};

/// A 3D transform representing position, rotation, and scale.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    pub position: Vec3,
    pub rotation: Quat,
    pub scale: Vec3,
}

impl Default for Transform {
    fn default() -> Self {
        Self {
            position: Vec3::ZERO,
            rotation: Quat::IDENTITY,
            scale: Vec3::ONE,
        }
    }
}

impl Transform {
    /// Create a new transform at the given position.
    pub fn from_position(position: Vec3) -> Self {
        Self {
            position,
            ..Default::default()
        }
    }

    /// Create a new transform with position and rotation.
    pub fn from_position_rotation(position: Vec3, rotation: Quat) -> Self {
        Self {
            position,
            rotation,
            ..Default::default()
        }
    }

    /// Forward direction (positive Y rotated by the current orientation).
    pub fn forward(&self) -> Vec3 {
        self.rotation * Vec3::Y
    }

    /// Up direction (positive Z rotated by the current orientation).
    pub fn up(&self) -> Vec3 {
        self.rotation * Vec3::Z
    }

    /// Translate the transform by a delta.
    pub fn translate(&mut self, delta: Vec3) {
        self.position += delta;
    }

    /// Set heading from yaw in degrees (rotation about the Z axis).
    pub fn set_yaw_degrees(&mut self, yaw: f32) {
        self.rotation = Quat::from_rotation_z(yaw.to_radians());
    }

    /// Set orientation from yaw and pitch in degrees (Z then X rotation).
    pub fn set_yaw_pitch_degrees(&mut self, yaw: f32, pitch: f32) {
        self.rotation =
            Quat::from_rotation_z(yaw.to_radians()) * Quat::from_rotation_x(pitch.to_radians());
    }
}
