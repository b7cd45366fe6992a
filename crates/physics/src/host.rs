//! The abstract physics host and a headless implementation.

use glam::Vec3;

use crate::collision::{ColliderTag, CollisionEvent};

/// Handle to a registered collision volume.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColliderHandle(pub u64);

/// Handle to an applied linear force.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ForceHandle(pub u64);

/// Handle to a registered rigid body.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BodyHandle(pub u64);

/// Boundary to the engine's physics/collision systems.
///
/// All calls are infallible from the core's point of view; a host that
/// cannot honor a request simply drops it. `traverse` runs exactly once per
/// tick, invoked by the core, and delivers every contact event produced
/// since the previous traversal before returning.
pub trait PhysicsHost {
    /// Register a rigid body with the given mass; the avatar uses this on
    /// terrain levels so gravity and thrust forces have something to act on.
    fn register_body(&mut self, mass: f32) -> BodyHandle;

    /// Release a rigid body.
    fn remove_body(&mut self, handle: BodyHandle);

    /// Register a collision sphere of `radius` centered at `center` in the
    /// owning object's local frame.
    fn register_sphere(&mut self, tag: ColliderTag, center: Vec3, radius: f32) -> ColliderHandle;

    /// Release a collision volume.
    fn remove_collider(&mut self, handle: ColliderHandle);

    /// Apply a persistent linear force. `mass_dependent` false means the
    /// force is an acceleration independent of body mass.
    fn apply_force(&mut self, force: Vec3, mass_dependent: bool) -> ForceHandle;

    /// Remove a previously applied force.
    fn remove_force(&mut self, handle: ForceHandle);

    /// Run one collision traversal, delivering pending contact events to
    /// `sink` synchronously.
    fn traverse(&mut self, sink: &mut dyn FnMut(CollisionEvent));
}

/// Headless physics host: performs no simulation, hands out handles, and
/// delivers whatever contact events were queued on it. Used by the harness
/// binary and by tests that script collision sequences.
#[derive(Debug, Default)]
pub struct HeadlessPhysics {
    next_handle: u64,
    /// Currently registered bodies (handle, mass).
    pub bodies: Vec<(BodyHandle, f32)>,
    /// Currently registered collider handles (registration order).
    pub colliders: Vec<(ColliderHandle, ColliderTag)>,
    /// Currently applied forces.
    pub forces: Vec<(ForceHandle, Vec3)>,
    pending: Vec<CollisionEvent>,
}

impl HeadlessPhysics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a contact event for delivery on the next traversal.
    pub fn push_contact(&mut self, event: CollisionEvent) {
        self.pending.push(event);
    }

    fn next(&mut self) -> u64 {
        self.next_handle += 1;
        self.next_handle
    }
}

impl PhysicsHost for HeadlessPhysics {
    fn register_body(&mut self, mass: f32) -> BodyHandle {
        let handle = BodyHandle(self.next());
        self.bodies.push((handle, mass));
        handle
    }

    fn remove_body(&mut self, handle: BodyHandle) {
        self.bodies.retain(|(h, _)| *h != handle);
    }

    fn register_sphere(&mut self, tag: ColliderTag, _center: Vec3, _radius: f32) -> ColliderHandle {
        let handle = ColliderHandle(self.next());
        self.colliders.push((handle, tag));
        handle
    }

    fn remove_collider(&mut self, handle: ColliderHandle) {
        self.colliders.retain(|(h, _)| *h != handle);
    }

    fn apply_force(&mut self, force: Vec3, _mass_dependent: bool) -> ForceHandle {
        let handle = ForceHandle(self.next());
        self.forces.push((handle, force));
        handle
    }

    fn remove_force(&mut self, handle: ForceHandle) {
        self.forces.retain(|(h, _)| *h != handle);
    }

    fn traverse(&mut self, sink: &mut dyn FnMut(CollisionEvent)) {
        for event in self.pending.drain(..) {
            sink(event);
        }
    }
}
