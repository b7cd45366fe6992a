//! Asteroid instance components and model variants.

use physics::ColliderHandle;
use renderer::ModelHandle;

/// Visual/collision variants an asteroid can spawn as.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AsteroidKind {
    Rubble,
    Shard,
}

impl AsteroidKind {
    pub const ALL: [AsteroidKind; 2] = [AsteroidKind::Rubble, AsteroidKind::Shard];

    /// Model asset name, resolved by the render host.
    pub fn model_path(self) -> &'static str {
        match self {
            AsteroidKind::Rubble => "models/Asteroid_2",
            AsteroidKind::Shard => "models/Asteroid_3",
        }
    }

    /// Nominal model radius. The render-side mesh bounds live behind the
    /// host boundary, so collision sizing starts from this instead.
    pub fn base_radius(self) -> f32 {
        match self {
            AsteroidKind::Rubble => 1.0,
            AsteroidKind::Shard => 1.3,
        }
    }

    /// Fraction of the nominal radius used for the collision sphere, so
    /// grazing a jagged silhouette doesn't kill the avatar.
    pub fn radial_scale(self) -> f32 {
        0.66
    }

    /// Collision sphere radius for this variant.
    pub fn collision_radius(self) -> f32 {
        self.base_radius() * self.radial_scale()
    }
}

/// Component marking an entity as a live asteroid instance.
#[derive(Debug, Clone, Copy)]
pub struct Asteroid {
    pub kind: AsteroidKind,
    /// Scene instance owned by the render host.
    pub model: ModelHandle,
    /// Collision sphere owned by the physics host.
    pub collider: ColliderHandle,
}
