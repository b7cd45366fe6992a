//! Kinematic avatar controller.
//!
//! The avatar accumulates velocity from held keys, clamps it per axis to the
//! active mode's envelope, and integrates its own position. Jumping fires a
//! mass-independent thrust through the physics host for a fixed number of
//! frames; landing state is tracked from ground contact events with a short
//! grace window so walking over seams doesn't drop the jump permission.

use engine_core::Transform;
use glam::Vec3;
use input::{InputState, Key};
use physics::{
    BodyHandle, ColliderHandle, ColliderTag, CollisionEvent, ContactKind, ForceHandle,
    PhysicsHost,
};
use renderer::{ModelHandle, RenderHost};

use crate::mode::PlayMode;

/// Avatar model asset name.
pub const MODEL_PATH: &str = "models/panda";
/// Uniform model scale.
pub const MODEL_SCALE: f32 = 0.5;
/// Rigid body mass in kilograms.
pub const MASS: f32 = 50.0;
/// Probe sphere center in the avatar's local frame.
pub const COLLIDER_CENTER: Vec3 = Vec3::new(0.0, 0.0, 1.0);
/// Probe sphere radius.
pub const COLLIDER_RADIUS: f32 = 1.0;

/// Constant downward pull, applied through the physics host.
pub const GRAVITY: Vec3 = Vec3::new(0.0, 0.0, -9.81);
/// Mass-independent jump thrust.
pub const JUMP_FORCE: Vec3 = Vec3::new(0.0, 0.0, 50.0);
/// Frames the jump thrust stays applied, and frames it takes to recharge.
pub const JUMP_THRUST_INTERVAL: u32 = 10;
/// Input polls after leaving the ground before the jump permission lapses.
pub const LAND_GAP_PERMISSION: u32 = 5;

/// Forced forward speed on space levels (negative Y is into the field).
pub const SPACE_SPEED: f32 = -8.0;
/// Per-poll velocity increments on terrain, by axis.
pub const TERRAIN_ACCEL: Vec3 = Vec3::new(1.0, 5.0, 0.0);
/// Per-poll velocity increments in space, by axis (signs follow key mapping).
pub const SPACE_ACCEL: Vec3 = Vec3::new(-1.0, 0.0, -1.0);
/// Velocity envelope on terrain, by axis.
pub const TERRAIN_MAX_VEL: Vec3 = Vec3::new(5.0, 15.0, 0.0);
/// Velocity envelope in space, by axis.
pub const SPACE_MAX_VEL: Vec3 = Vec3::new(5.0, SPACE_SPEED, 5.0);

/// Pull an out-of-envelope component back to whichever signed bound it is
/// closer to. Equidistant values resolve to the negative bound.
fn clamp_component(value: f32, bound: f32) -> f32 {
    if value.abs() > bound.abs() {
        let (low, high) = (-bound, bound);
        if (value - low).abs() <= (value - high).abs() {
            low
        } else {
            high
        }
    } else {
        value
    }
}

/// Player-controlled avatar state.
pub struct Avatar {
    pub transform: Transform,
    pub velocity: Vec3,
    /// Heading in degrees about the vertical axis.
    pub yaw: f32,
    /// False once a hazard contact kills this life.
    pub alive: bool,

    landed: bool,
    /// Input polls since ground contact was lost; zero while grounded.
    land_gap: u32,
    thrusting: bool,
    /// Climbs back to [`JUMP_THRUST_INTERVAL`] while the thrust is live.
    thrust_counter: u32,
    jump_force: Option<ForceHandle>,

    pub model: ModelHandle,
    body: BodyHandle,
    collider: ColliderHandle,
    /// Live while a terrain level is loaded; space levels have no gravity.
    gravity: Option<ForceHandle>,
}

impl Avatar {
    /// Load the avatar's model and register its body and probe volume with
    /// the hosts. Gravity is bound separately, per level mode.
    pub fn new(physics: &mut dyn PhysicsHost, renderer: &mut dyn RenderHost) -> Self {
        let model = renderer.load_model(MODEL_PATH);
        let body = physics.register_body(MASS);
        let collider = physics.register_sphere(ColliderTag::Avatar, COLLIDER_CENTER, COLLIDER_RADIUS);

        let mut transform = Transform::default();
        transform.scale = Vec3::splat(MODEL_SCALE);
        renderer.set_transform(model, &transform);

        Self {
            transform,
            velocity: Vec3::ZERO,
            yaw: 0.0,
            alive: true,
            landed: false,
            land_gap: 0,
            thrusting: false,
            thrust_counter: JUMP_THRUST_INTERVAL,
            jump_force: None,
            model,
            body,
            collider,
            gravity: None,
        }
    }

    /// Apply the constant downward pull for a terrain level. Idempotent.
    pub fn bind_gravity(&mut self, physics: &mut dyn PhysicsHost) {
        if self.gravity.is_none() {
            self.gravity = Some(physics.apply_force(GRAVITY, true));
        }
    }

    /// Withdraw gravity when a space level loads. Idempotent.
    pub fn unbind_gravity(&mut self, physics: &mut dyn PhysicsHost) {
        if let Some(handle) = self.gravity.take() {
            physics.remove_force(handle);
        }
    }

    pub fn gravity_bound(&self) -> bool {
        self.gravity.is_some()
    }

    pub fn landed(&self) -> bool {
        self.landed
    }

    pub fn thrusting(&self) -> bool {
        self.thrusting
    }

    /// Return to the level start state for a fresh life. The gravity force
    /// persists; a still-live jump thrust is withdrawn.
    pub fn reset(&mut self, physics: &mut dyn PhysicsHost) {
        if let Some(handle) = self.jump_force.take() {
            physics.remove_force(handle);
        }
        self.transform = Transform::default();
        self.transform.scale = Vec3::splat(MODEL_SCALE);
        self.velocity = Vec3::ZERO;
        self.yaw = 0.0;
        self.alive = true;
        self.landed = false;
        self.land_gap = 0;
        self.thrusting = false;
        self.thrust_counter = JUMP_THRUST_INTERVAL;
    }

    /// Poll held keys into velocity, fire jump thrust, and age the landing
    /// grace window. Runs once per simulation tick while playing.
    pub fn handle_input(
        &mut self,
        input: &InputState,
        mode: PlayMode,
        physics: &mut dyn PhysicsHost,
    ) {
        match mode {
            PlayMode::Terrain => {
                if input.is_held(Key::Forward) {
                    self.velocity.y += TERRAIN_ACCEL.y;
                }
                if input.is_held(Key::Backward) {
                    self.velocity.y -= TERRAIN_ACCEL.y;
                }
                if input.is_held(Key::Left) {
                    self.velocity.x -= TERRAIN_ACCEL.x;
                }
                if input.is_held(Key::Right) {
                    self.velocity.x += TERRAIN_ACCEL.x;
                }
                if input.is_held(Key::Jump) {
                    self.try_jump(physics);
                }
                self.velocity.x = clamp_component(self.velocity.x, TERRAIN_MAX_VEL.x);
                self.velocity.y = clamp_component(self.velocity.y, TERRAIN_MAX_VEL.y);
                self.velocity.z = clamp_component(self.velocity.z, TERRAIN_MAX_VEL.z);
            }
            PlayMode::Space => {
                // Forward progress is forced; keys steer laterally and
                // vertically. Key-to-sign mapping matches the flipped
                // acceleration constants.
                self.velocity.y = SPACE_SPEED;
                if input.is_held(Key::Forward) {
                    self.velocity.z += SPACE_ACCEL.z;
                }
                if input.is_held(Key::Backward) {
                    self.velocity.z -= SPACE_ACCEL.z;
                }
                if input.is_held(Key::Left) {
                    self.velocity.x -= SPACE_ACCEL.x;
                }
                if input.is_held(Key::Right) {
                    self.velocity.x += SPACE_ACCEL.x;
                }
                self.velocity.x = clamp_component(self.velocity.x, SPACE_MAX_VEL.x);
                self.velocity.y = clamp_component(self.velocity.y, SPACE_MAX_VEL.y);
                self.velocity.z = clamp_component(self.velocity.z, SPACE_MAX_VEL.z);
            }
        }

        // Age the landing grace window: the jump permission survives a few
        // polls of lost ground contact before lapsing.
        if self.land_gap >= LAND_GAP_PERMISSION {
            self.landed = false;
        } else if self.land_gap > 0 {
            self.land_gap += 1;
        }
    }

    fn try_jump(&mut self, physics: &mut dyn PhysicsHost) {
        if self.landed && self.thrust_counter == JUMP_THRUST_INTERVAL && !self.thrusting {
            self.landed = false;
            self.thrusting = true;
            self.thrust_counter = 0;
            self.jump_force = Some(physics.apply_force(JUMP_FORCE, false));
            log::debug!("jump thrust fired");
        }
    }

    /// Integrate position and age a live jump thrust. Runs once per
    /// simulation tick while playing, before input polling.
    pub fn advance(&mut self, dt: f32, physics: &mut dyn PhysicsHost) {
        self.transform.position += self.velocity * dt;

        if self.thrusting {
            self.landed = false;
            if self.thrust_counter < JUMP_THRUST_INTERVAL {
                self.thrust_counter += 1;
            } else {
                if let Some(handle) = self.jump_force.take() {
                    physics.remove_force(handle);
                }
                self.thrusting = false;
            }
        }
    }

    /// React to one contact event from the collision traversal. Tags the
    /// avatar doesn't care about are ignored.
    pub fn on_collision(&mut self, event: &CollisionEvent) {
        match (event.kind, event.tag) {
            (ContactKind::Enter, ColliderTag::Ground) => {
                self.landed = true;
                self.land_gap = 0;
            }
            (ContactKind::Exit, ColliderTag::Ground) => {
                self.land_gap = 1;
            }
            (ContactKind::Enter, ColliderTag::Hazard) => {
                self.alive = false;
                log::info!("avatar struck a hazard");
            }
            _ => {}
        }
    }

    /// Drop the avatar's host-side registrations.
    pub fn release(&mut self, physics: &mut dyn PhysicsHost, renderer: &mut dyn RenderHost) {
        if let Some(handle) = self.jump_force.take() {
            physics.remove_force(handle);
        }
        self.unbind_gravity(physics);
        physics.remove_body(self.body);
        physics.remove_collider(self.collider);
        renderer.release_model(self.model);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use physics::HeadlessPhysics;
    use renderer::HeadlessRenderer;

    fn rig() -> (Avatar, HeadlessPhysics, HeadlessRenderer, InputState) {
        let mut physics = HeadlessPhysics::new();
        let mut renderer = HeadlessRenderer::new();
        let avatar = Avatar::new(&mut physics, &mut renderer);
        (avatar, physics, renderer, InputState::new())
    }

    fn hold(input: &mut InputState, key: Key) {
        input.begin_frame();
        input.process_key(key, true);
    }

    fn ground_enter() -> CollisionEvent {
        CollisionEvent::new(ContactKind::Enter, ColliderTag::Ground)
    }

    fn ground_exit() -> CollisionEvent {
        CollisionEvent::new(ContactKind::Exit, ColliderTag::Ground)
    }

    #[test]
    fn terrain_forward_velocity_saturates_at_envelope() {
        let (mut avatar, mut physics, _renderer, mut input) = rig();
        hold(&mut input, Key::Forward);
        for _ in 0..10 {
            avatar.handle_input(&input, PlayMode::Terrain, &mut physics);
        }
        assert_eq!(avatar.velocity.y, TERRAIN_MAX_VEL.y);
        assert_eq!(avatar.velocity.z, 0.0, "terrain envelope pins vertical speed");
    }

    #[test]
    fn clamp_resolves_to_nearer_bound_and_negative_on_ties() {
        assert_eq!(clamp_component(7.0, 5.0), 5.0);
        assert_eq!(clamp_component(-7.0, 5.0), -5.0);
        assert_eq!(clamp_component(3.0, 5.0), 3.0);
        assert_eq!(clamp_component(0.1, 0.0), -0.0);
        // negative bound keeps a pinned value untouched
        assert_eq!(clamp_component(SPACE_SPEED, SPACE_SPEED), SPACE_SPEED);
        assert_eq!(clamp_component(-9.0, SPACE_SPEED), SPACE_SPEED);
    }

    #[test]
    fn space_mode_pins_forward_speed_every_poll() {
        let (mut avatar, mut physics, _renderer, mut input) = rig();
        input.begin_frame();
        avatar.handle_input(&input, PlayMode::Space, &mut physics);
        assert_eq!(avatar.velocity.y, SPACE_SPEED);
        avatar.velocity.y = 100.0;
        avatar.handle_input(&input, PlayMode::Space, &mut physics);
        assert_eq!(avatar.velocity.y, SPACE_SPEED);
    }

    #[test]
    fn space_steering_signs_follow_key_mapping() {
        let (mut avatar, mut physics, _renderer, mut input) = rig();
        hold(&mut input, Key::Forward);
        avatar.handle_input(&input, PlayMode::Space, &mut physics);
        assert!(avatar.velocity.z < 0.0, "forward dives");

        let (mut avatar, mut physics, _renderer, mut input) = rig();
        hold(&mut input, Key::Left);
        avatar.handle_input(&input, PlayMode::Space, &mut physics);
        assert!(avatar.velocity.x > 0.0, "left strafes positive breadth");
    }

    #[test]
    fn jump_requires_ground_contact() {
        let (mut avatar, mut physics, _renderer, mut input) = rig();
        let baseline = physics.forces.len();
        hold(&mut input, Key::Jump);
        avatar.handle_input(&input, PlayMode::Terrain, &mut physics);
        assert!(!avatar.thrusting(), "airborne jump must not fire");
        assert_eq!(physics.forces.len(), baseline);
    }

    #[test]
    fn jump_thrust_fires_then_withdraws_after_interval() {
        let (mut avatar, mut physics, _renderer, mut input) = rig();
        avatar.on_collision(&ground_enter());
        let baseline = physics.forces.len();

        hold(&mut input, Key::Jump);
        avatar.handle_input(&input, PlayMode::Terrain, &mut physics);
        assert!(avatar.thrusting());
        assert!(!avatar.landed());
        assert_eq!(physics.forces.len(), baseline + 1, "thrust force applied");

        for _ in 0..=JUMP_THRUST_INTERVAL {
            avatar.advance(1.0 / 60.0, &mut physics);
        }
        assert!(!avatar.thrusting(), "thrust ends after the interval");
        assert_eq!(physics.forces.len(), baseline, "thrust force withdrawn");
    }

    #[test]
    fn jump_permission_lapses_on_fifth_poll_after_leaving_ground() {
        let (mut avatar, mut physics, _renderer, mut input) = rig();
        avatar.on_collision(&ground_enter());
        avatar.on_collision(&ground_exit());

        input.begin_frame();
        for _ in 0..(LAND_GAP_PERMISSION - 1) {
            avatar.handle_input(&input, PlayMode::Terrain, &mut physics);
            assert!(avatar.landed(), "grace window keeps jump permission");
        }
        avatar.handle_input(&input, PlayMode::Terrain, &mut physics);
        assert!(!avatar.landed(), "permission lapses after the grace window");
    }

    #[test]
    fn regaining_ground_contact_restores_permission() {
        let (mut avatar, mut physics, _renderer, mut input) = rig();
        avatar.on_collision(&ground_enter());
        avatar.on_collision(&ground_exit());
        input.begin_frame();
        for _ in 0..2 {
            avatar.handle_input(&input, PlayMode::Terrain, &mut physics);
        }
        avatar.on_collision(&ground_enter());
        for _ in 0..20 {
            avatar.handle_input(&input, PlayMode::Terrain, &mut physics);
        }
        assert!(avatar.landed(), "grounded avatar keeps permission indefinitely");
    }

    #[test]
    fn hazard_contact_is_lethal_and_scenery_is_ignored() {
        let (mut avatar, _physics, _renderer, _input) = rig();
        avatar.on_collision(&CollisionEvent::new(ContactKind::Enter, ColliderTag::Scenery));
        assert!(avatar.alive);
        avatar.on_collision(&CollisionEvent::new(ContactKind::Exit, ColliderTag::Hazard));
        assert!(avatar.alive, "only hazard entry kills");
        avatar.on_collision(&CollisionEvent::new(ContactKind::Enter, ColliderTag::Hazard));
        assert!(!avatar.alive);
    }

    #[test]
    fn reset_restores_fresh_life_and_withdraws_thrust() {
        let (mut avatar, mut physics, _renderer, mut input) = rig();
        let baseline = physics.forces.len();
        avatar.on_collision(&ground_enter());
        hold(&mut input, Key::Jump);
        avatar.handle_input(&input, PlayMode::Terrain, &mut physics);
        avatar.on_collision(&CollisionEvent::new(ContactKind::Enter, ColliderTag::Hazard));

        avatar.reset(&mut physics);
        assert!(avatar.alive);
        assert_eq!(avatar.velocity, Vec3::ZERO);
        assert_eq!(avatar.transform.position, Vec3::ZERO);
        assert!(!avatar.thrusting());
        assert_eq!(physics.forces.len(), baseline, "lingering thrust withdrawn");
    }

    #[test]
    fn gravity_binds_and_unbinds_idempotently() {
        let (mut avatar, mut physics, _renderer, _input) = rig();
        assert!(!avatar.gravity_bound(), "no gravity until a terrain level binds it");
        assert!(
            physics.forces.iter().all(|(_, force)| *force != GRAVITY),
            "fresh avatar must not pull: {:?}",
            physics.forces
        );

        avatar.bind_gravity(&mut physics);
        avatar.bind_gravity(&mut physics);
        assert!(avatar.gravity_bound());
        let pulls = physics.forces.iter().filter(|(_, f)| *f == GRAVITY).count();
        assert_eq!(pulls, 1, "rebinding must not stack forces");

        avatar.unbind_gravity(&mut physics);
        avatar.unbind_gravity(&mut physics);
        assert!(!avatar.gravity_bound());
        assert!(physics.forces.iter().all(|(_, force)| *force != GRAVITY));
    }

    #[test]
    fn release_withdraws_every_host_registration() {
        let (mut avatar, mut physics, mut renderer, mut input) = rig();
        avatar.bind_gravity(&mut physics);
        avatar.on_collision(&ground_enter());
        hold(&mut input, Key::Jump);
        avatar.handle_input(&input, PlayMode::Terrain, &mut physics);

        avatar.release(&mut physics, &mut renderer);
        assert!(physics.forces.is_empty(), "forces left: {:?}", physics.forces);
        assert!(physics.bodies.is_empty(), "body registration leaked");
        assert!(physics.colliders.is_empty());
        assert!(renderer.models.is_empty());
    }

    #[test]
    fn advance_integrates_position_from_velocity() {
        let (mut avatar, mut physics, _renderer, _input) = rig();
        avatar.velocity = Vec3::new(1.0, SPACE_SPEED, -2.0);
        avatar.advance(0.5, &mut physics);
        assert_eq!(avatar.transform.position, Vec3::new(0.5, SPACE_SPEED * 0.5, -1.0));
    }
}
