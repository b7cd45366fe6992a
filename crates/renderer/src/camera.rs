//! Third-person follow camera.
//!
//! The rig trails the avatar at a zoomable distance, yawing with the
//! avatar's heading and pitching from accumulated mouse-Y, clamped so the
//! view can never flip.

use engine_core::Transform;
use glam::Vec3;

/// Degrees of yaw per pixel of mouse-X, pitch per pixel of mouse-Y.
pub const ROT_RATE: (f32, f32) = (0.4, 0.25);
/// Camera height above the avatar.
pub const ELEVATION: f32 = 6.5;
/// Default follow distance.
pub const AVATAR_DIST: f32 = 20.0;
/// Pitch accumulator clamp, degrees either side of level.
pub const FLEX_ROT_BOUND: f32 = 20.0;

/// Follow-camera state: pitch accumulator, mirrored yaw, zoom distance.
#[derive(Debug, Clone)]
pub struct CameraRig {
    /// Accumulated pitch in degrees, clamped to ±[`FLEX_ROT_BOUND`].
    pitch: f32,
    /// Heading in degrees; mirrors the avatar's yaw on terrain levels.
    yaw: f32,
    /// Follow distance in the yaw plane.
    pub avatar_dist: f32,
    /// Mouse sensitivity multiplier.
    pub sensitivity: f32,
}

impl Default for CameraRig {
    fn default() -> Self {
        Self {
            pitch: 0.0,
            yaw: 0.0,
            avatar_dist: AVATAR_DIST,
            sensitivity: 1.0,
        }
    }
}

impl CameraRig {
    pub fn new(sensitivity: f32, avatar_dist: f32) -> Self {
        Self {
            sensitivity,
            avatar_dist,
            ..Default::default()
        }
    }

    /// Yaw shift in degrees for a mouse-X delta. The caller applies this to
    /// the avatar heading (terrain only) and mirrors it back via [`set_yaw`].
    ///
    /// [`set_yaw`]: CameraRig::set_yaw
    pub fn yaw_shift_for(&self, mouse_dx: f32) -> f32 {
        -(mouse_dx * ROT_RATE.0 * self.sensitivity)
    }

    /// Accumulate pitch from a mouse-Y delta, clamping to the flex bound.
    pub fn add_pitch(&mut self, mouse_dy: f32) {
        self.pitch -= mouse_dy * ROT_RATE.1 * self.sensitivity;
        self.pitch = self.pitch.clamp(-FLEX_ROT_BOUND, FLEX_ROT_BOUND);
    }

    /// Mirror the avatar's heading.
    pub fn set_yaw(&mut self, yaw_degrees: f32) {
        self.yaw = yaw_degrees;
    }

    /// Adjust follow distance by discrete scroll steps (negative zooms in).
    pub fn zoom(&mut self, steps: i32) {
        self.avatar_dist += steps as f32;
    }

    pub fn pitch(&self) -> f32 {
        self.pitch
    }

    pub fn yaw(&self) -> f32 {
        self.yaw
    }

    /// Camera transform for this frame: behind the avatar in the yaw plane,
    /// raised by the elevation offset, oriented by yaw then pitch.
    pub fn view_transform(&self, avatar_position: Vec3) -> Transform {
        let yaw_rad = self.yaw.to_radians();
        let offset = Vec3::new(
            self.avatar_dist * yaw_rad.sin(),
            -self.avatar_dist * yaw_rad.cos(),
            ELEVATION,
        );
        let mut transform = Transform::from_position(avatar_position + offset);
        transform.set_yaw_pitch_degrees(self.yaw, self.pitch);
        transform
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pitch_clamps_to_flex_bound() {
        let mut rig = CameraRig::default();
        rig.add_pitch(-10_000.0);
        assert_eq!(rig.pitch(), FLEX_ROT_BOUND);
        rig.add_pitch(20_000.0);
        assert_eq!(rig.pitch(), -FLEX_ROT_BOUND);
    }

    #[test]
    fn view_sits_behind_and_above_avatar_at_zero_yaw() {
        let rig = CameraRig::default();
        let t = rig.view_transform(Vec3::new(3.0, 4.0, 5.0));
        let expected = Vec3::new(3.0, 4.0 - AVATAR_DIST, 5.0 + ELEVATION);
        assert!((t.position - expected).length() < 1e-4, "position was {:?}", t.position);
    }

    #[test]
    fn view_follows_yaw_around_avatar() {
        let mut rig = CameraRig::default();
        rig.set_yaw(90.0);
        let t = rig.view_transform(Vec3::ZERO);
        // at +90° yaw the camera swings to +X of the avatar
        let expected = Vec3::new(AVATAR_DIST, 0.0, ELEVATION);
        assert!((t.position - expected).length() < 1e-3, "position was {:?}", t.position);
    }

    #[test]
    fn zoom_steps_follow_distance() {
        let mut rig = CameraRig::default();
        rig.zoom(-1);
        rig.zoom(-1);
        assert_eq!(rig.avatar_dist, AVATAR_DIST - 2.0);
        rig.zoom(3);
        assert_eq!(rig.avatar_dist, AVATAR_DIST + 1.0);
    }

    #[test]
    fn sensitivity_scales_mouse_response() {
        let mut rig = CameraRig::new(2.0, AVATAR_DIST);
        assert_eq!(rig.yaw_shift_for(10.0), -(10.0 * ROT_RATE.0 * 2.0));
        rig.add_pitch(4.0);
        assert_eq!(rig.pitch(), -(4.0 * ROT_RATE.1 * 2.0));
    }
}
