//! Fixed world axes for per-axis field and velocity logic.
//!
//! Convention (Z-up): X is breadth/lateral, Y is depth/forward, Z is height.

use glam::Vec3;

/// One of the three world axes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
    Z,
}

impl Axis {
    /// All axes in component order.
    pub const ALL: [Axis; 3] = [Axis::X, Axis::Y, Axis::Z];

    /// Component index into a `Vec3` or a 3-element array.
    pub fn index(self) -> usize {
        match self {
            Axis::X => 0,
            Axis::Y => 1,
            Axis::Z => 2,
        }
    }

    /// The two axes orthogonal to this one, in `(index + 1, index + 2)` order.
    pub fn orthogonal(self) -> (Axis, Axis) {
        match self {
            Axis::X => (Axis::Y, Axis::Z),
            Axis::Y => (Axis::Z, Axis::X),
            Axis::Z => (Axis::X, Axis::Y),
        }
    }

    /// Read this axis's component of a vector.
    pub fn component(self, v: Vec3) -> f32 {
        v[self.index()]
    }

    /// Write this axis's component of a vector.
    pub fn set_component(self, v: &mut Vec3, value: f32) {
        v[self.index()] = value;
    }
}
