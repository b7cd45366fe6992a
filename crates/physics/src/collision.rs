//! Typed collision events and collider tags.

/// Whether a contact began or ended this traversal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactKind {
    Enter,
    Exit,
}

/// Role of a registered collision volume. Event receivers ignore tags they
/// don't care about.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColliderTag {
    /// The avatar's own probe volume.
    Avatar,
    /// Walkable ground (terrain levels).
    Ground,
    /// Lethal contact (asteroid bodies).
    Hazard,
    /// Non-interactive scenery.
    Scenery,
}

/// One contact notification, delivered synchronously during the per-tick
/// collision traversal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CollisionEvent {
    pub kind: ContactKind,
    pub tag: ColliderTag,
}

impl CollisionEvent {
    pub fn new(kind: ContactKind, tag: ColliderTag) -> Self {
        Self { kind, tag }
    }
}
