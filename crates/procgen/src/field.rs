//! Asteroid field seeding, culling, and leading-edge respawning.
//!
//! The field is an axis-aligned slab of grid "successions": one jittered
//! asteroid per grid point of the plane orthogonal to a spawn axis. Each
//! tick the manager retires instances that fail the view predicate,
//! advances the rest in the avatar-relative frame, then walks each axis
//! outward from the occupied edge and spawns new successions until the
//! configured bound is covered again.

use engine_core::{Axis, Transform, Velocity};
use glam::{EulerRot, Quat, Vec3};
use hecs::{Entity, World};
use physics::{ColliderTag, PhysicsHost};
use rand::prelude::*;
use renderer::RenderHost;
use thiserror::Error;

use crate::asteroid::{Asteroid, AsteroidKind};

/// Depth margin in front of the camera lens before an instance is culled.
const LENS_OFFSET: f32 = 4.0;
/// Upper bound on a spawned instance's drift speed per axis.
const TRANS_MAG: f32 = 1.0;
/// Upper bound on per-frame spin, degrees per axis.
const SPIN_MAG: f32 = 0.1;

#[derive(Debug, Error)]
pub enum FieldError {
    /// Succession spacing is derived from `ln(level)`, so levels at or
    /// below 1 cannot seed a field.
    #[error("level {0} cannot seed an asteroid field (must exceed 1)")]
    InvalidLevelConfig(f32),
}

/// Fixed per-level field geometry.
#[derive(Debug, Clone)]
pub struct FieldConfig {
    /// Per-axis `(min, max)` bounds of the populated slab.
    pub expanse: [(f32, f32); 3],
    /// Per-axis grid spacing between successions.
    pub interval: [f32; 3],
    /// Positional jitter magnitude applied per instance at spawn.
    pub deviation: f32,
}

impl FieldConfig {
    /// Derive field geometry from the level number. Harder (higher) levels
    /// pack successions closer together.
    pub fn for_level(level: f32) -> Result<Self, FieldError> {
        if level <= 1.0 {
            return Err(FieldError::InvalidLevelConfig(level));
        }
        let (breadth, depth, height) = (10.0, 28.0, 15.0);
        let difficulty_factor = 1.0 / level.ln();
        // Spacing shrinks with level; never below one unit or the spawn
        // walk would stop stepping.
        let step = (5.0 * difficulty_factor).floor().max(1.0);
        Ok(Self {
            expanse: [(-breadth, breadth), (0.0, depth), (-height, height)],
            interval: [step, step, step],
            deviation: 5.0,
        })
    }

    /// Slack added to the expanse before an instance counts as out of view:
    /// one grid step plus the worst-case spawn jitter.
    pub fn buffer(&self) -> f32 {
        self.interval[0] + self.deviation + 1.0
    }
}

/// Procedural asteroid field manager for one space level.
pub struct AsteroidField {
    config: FieldConfig,
    /// Whether instances visually spin (graphics setting).
    spin_enabled: bool,
    rng: StdRng,
}

impl AsteroidField {
    /// Build the field for a level and populate the initial slab at the far
    /// depth edge, one succession per Y grid step until the height bound is
    /// covered.
    pub fn initialize(
        level: f32,
        world: &mut World,
        physics: &mut dyn PhysicsHost,
        renderer: &mut dyn RenderHost,
    ) -> Result<Self, FieldError> {
        Self::initialize_with_rng(level, StdRng::from_entropy(), world, physics, renderer)
    }

    /// [`initialize`](AsteroidField::initialize) with a caller-supplied RNG,
    /// for deterministic spawning in tests.
    pub fn initialize_with_rng(
        level: f32,
        rng: StdRng,
        world: &mut World,
        physics: &mut dyn PhysicsHost,
        renderer: &mut dyn RenderHost,
    ) -> Result<Self, FieldError> {
        let config = FieldConfig::for_level(level)?;
        let mut field = Self {
            config,
            spin_enabled: true,
            rng,
        };

        let depth_edge = field.config.expanse[Axis::Y.index()].1;
        let height_bound = field.config.expanse[Axis::Z.index()].1;
        let mut covered = 0.0;
        while covered < height_bound {
            field.gen_succession(Axis::Y, depth_edge, world, physics, renderer);
            covered += field.config.interval[Axis::Y.index()];
        }

        log::info!(
            "asteroid field seeded for level {}: interval {:?}, {} instances",
            level,
            field.config.interval,
            world.query::<&Asteroid>().iter().count()
        );
        Ok(field)
    }

    pub fn config(&self) -> &FieldConfig {
        &self.config
    }

    /// Toggle per-instance spin (graphics setting, on by default).
    pub fn set_spin_enabled(&mut self, enabled: bool) {
        self.spin_enabled = enabled;
    }

    /// Spawn one succession: a full grid of jittered instances on the plane
    /// orthogonal to `axis` at `distance` along it. Grid coordinates run
    /// from the axis minimum up past the maximum by less than one step.
    pub fn gen_succession(
        &mut self,
        axis: Axis,
        distance: f32,
        world: &mut World,
        physics: &mut dyn PhysicsHost,
        renderer: &mut dyn RenderHost,
    ) {
        let (col_axis, row_axis) = axis.orthogonal();
        let (col_min, col_max) = self.config.expanse[col_axis.index()];
        let (row_min, row_max) = self.config.expanse[row_axis.index()];
        let col_step = self.config.interval[col_axis.index()];
        let row_step = self.config.interval[row_axis.index()];

        let mut col = col_min;
        while col < col_max + col_step {
            let mut row = row_min;
            while row < row_max + row_step {
                let mut base = Vec3::ZERO;
                axis.set_component(&mut base, distance);
                col_axis.set_component(&mut base, col);
                row_axis.set_component(&mut base, row);
                self.spawn_instance(base, world, physics, renderer);
                row += row_step;
            }
            col += col_step;
        }
    }

    /// Spawn a single asteroid at a grid point: random variant, positional
    /// jitter, constant drift/spin, random orientation, collision sphere.
    fn spawn_instance(
        &mut self,
        grid_point: Vec3,
        world: &mut World,
        physics: &mut dyn PhysicsHost,
        renderer: &mut dyn RenderHost,
    ) {
        let rng = &mut self.rng;
        let mut jittered = grid_point;
        for i in 0..3 {
            let sign = if rng.gen_bool(0.5) { 1.0 } else { -1.0 };
            jittered[i] += self.config.deviation * rng.gen::<f32>() * sign;
        }

        let kind = AsteroidKind::ALL[rng.gen_range(0..AsteroidKind::ALL.len())];
        let drift = Vec3::new(
            TRANS_MAG * rng.gen::<f32>(),
            TRANS_MAG * rng.gen::<f32>(),
            TRANS_MAG * rng.gen::<f32>(),
        );
        let spin = Vec3::new(
            SPIN_MAG * rng.gen::<f32>(),
            SPIN_MAG * rng.gen::<f32>(),
            SPIN_MAG * rng.gen::<f32>(),
        );
        let orientation = Quat::from_euler(
            EulerRot::ZXY,
            (rng.gen::<f32>() * 360.0).to_radians(),
            (rng.gen::<f32>() * 360.0).to_radians(),
            (rng.gen::<f32>() * 360.0).to_radians(),
        );

        let transform = Transform::from_position_rotation(jittered, orientation);
        let model = renderer.load_model(kind.model_path());
        let collider = physics.register_sphere(ColliderTag::Hazard, Vec3::ZERO, kind.collision_radius());
        renderer.set_transform(model, &transform);
        world.spawn((
            transform,
            Velocity::with_angular(drift, spin),
            Asteroid { kind, model, collider },
        ));
    }

    /// View predicate: false once an instance leaves the buffered expanse
    /// laterally or below, or falls behind the camera lens in depth.
    pub fn in_view(&self, position: Vec3, view_distance: f32) -> bool {
        let buffer = self.config.buffer();
        let (x_min, x_max) = self.config.expanse[Axis::X.index()];
        let (z_min, _) = self.config.expanse[Axis::Z.index()];

        !(position.x < x_min - buffer
            || position.x > x_max + buffer
            || position.y < -view_distance + LENS_OFFSET
            || position.z < z_min - buffer)
    }

    /// Per-tick field upkeep, in the avatar-relative frame:
    /// 1. retire instances failing [`in_view`](AsteroidField::in_view);
    /// 2. advance survivors by `(drift + avatar_velocity) * dt` plus spin;
    /// 3. recompute the occupied slab (empty set: skip spawning, retry next
    ///    tick);
    /// 4. per axis, spawn successions stepping outward from the occupied
    ///    edge toward the bound opposite the avatar's motion.
    pub fn maintain(
        &mut self,
        _avatar_position: Vec3,
        avatar_velocity: Vec3,
        view_distance: f32,
        dt: f32,
        world: &mut World,
        physics: &mut dyn PhysicsHost,
        renderer: &mut dyn RenderHost,
    ) {
        // 1. Retire out-of-view instances.
        let retired: Vec<(Entity, Asteroid)> = world
            .query::<(&Transform, &Asteroid)>()
            .iter()
            .filter(|(_, (transform, _))| !self.in_view(transform.position, view_distance))
            .map(|(entity, (_, asteroid))| (entity, *asteroid))
            .collect();
        for (entity, asteroid) in retired {
            renderer.release_model(asteroid.model);
            physics.remove_collider(asteroid.collider);
            // entity is alive: it was observed in the query above
            let _ = world.despawn(entity);
        }

        // 2. Advance survivors. Avatar motion is folded into every instance
        // so the avatar appears stationary relative to the drifting field.
        for (_, (transform, velocity, asteroid)) in
            world.query_mut::<(&mut Transform, &Velocity, &Asteroid)>()
        {
            transform.position += (velocity.linear + avatar_velocity) * dt;
            if self.spin_enabled {
                transform.rotation *= Quat::from_euler(
                    EulerRot::ZXY,
                    velocity.angular.z.to_radians(),
                    velocity.angular.x.to_radians(),
                    velocity.angular.y.to_radians(),
                );
            }
            renderer.set_transform(asteroid.model, transform);
        }

        // 3. Occupied slab from the live set.
        let mut occupied: Option<([f32; 3], [f32; 3])> = None;
        for (_, transform) in world.query::<&Transform>().with::<&Asteroid>().iter() {
            let p = transform.position;
            let (min, max) = occupied.get_or_insert(([p.x, p.y, p.z], [p.x, p.y, p.z]));
            for i in 0..3 {
                min[i] = min[i].min(p[i]);
                max[i] = max[i].max(p[i]);
            }
        }
        let Some((occupied_min, occupied_max)) = occupied else {
            log::debug!("asteroid field empty, skipping spawn this tick");
            return;
        };

        // 4. Refill toward the bound the avatar is moving away from.
        for axis in Axis::ALL {
            let i = axis.index();
            let (lo, hi) = self.config.expanse[i];
            let bound = if avatar_velocity[i] > 0.0 { lo } else { hi };
            let mut edge = if bound < 0.0 {
                occupied_min[i]
            } else {
                occupied_max[i]
            };
            let direction = bound.signum();
            while edge.abs() < bound.abs() {
                edge += direction * self.config.interval[i];
                self.gen_succession(axis, edge, world, physics, renderer);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use physics::HeadlessPhysics;
    use renderer::HeadlessRenderer;

    fn seeded_field(level: f32) -> (AsteroidField, World, HeadlessPhysics, HeadlessRenderer) {
        let mut world = World::new();
        let mut physics = HeadlessPhysics::new();
        let mut renderer = HeadlessRenderer::new();
        let field = AsteroidField::initialize_with_rng(
            level,
            StdRng::seed_from_u64(0x5eed),
            &mut world,
            &mut physics,
            &mut renderer,
        )
        .expect("level above 1 must seed");
        (field, world, physics, renderer)
    }

    fn count(world: &World) -> usize {
        world.query::<&Asteroid>().iter().count()
    }

    #[test]
    fn levels_at_or_below_one_are_rejected() {
        for level in [1.0, 0.5, -3.0] {
            let mut world = World::new();
            let mut physics = HeadlessPhysics::new();
            let mut renderer = HeadlessRenderer::new();
            let result =
                AsteroidField::initialize(level, &mut world, &mut physics, &mut renderer);
            assert!(
                matches!(result, Err(FieldError::InvalidLevelConfig(_))),
                "level {} must be rejected",
                level
            );
            assert_eq!(count(&world), 0, "failed init must not leave instances");
        }
    }

    #[test]
    fn level_two_seeds_nonempty_field_inside_buffered_expanse() {
        let (field, world, physics, renderer) = seeded_field(2.0);
        let n = count(&world);
        assert!(n > 0, "initial field must not be empty");
        assert_eq!(physics.colliders.len(), n, "one collider per instance");
        assert_eq!(renderer.models.len(), n, "one model per instance");

        let buffer = field.config().buffer();
        for (_, (transform, _)) in world.query::<(&Transform, &Asteroid)>().iter() {
            let p = transform.position;
            for (i, (lo, hi)) in field.config().expanse.iter().enumerate() {
                assert!(
                    p[i] >= lo - buffer && p[i] <= hi + buffer,
                    "instance at {:?} escapes buffered expanse on axis {}",
                    p,
                    i
                );
            }
        }
    }

    #[test]
    fn fresh_grid_instances_survive_a_generous_view_distance() {
        let (field, world, _physics, _renderer) = seeded_field(2.0);
        for (_, (transform, _)) in world.query::<(&Transform, &Asteroid)>().iter() {
            assert!(
                field.in_view(transform.position, 1000.0),
                "instance at {:?} should be in view",
                transform.position
            );
        }
    }

    #[test]
    fn spawn_randomization_stays_within_documented_magnitudes() {
        let (_, world, _physics, _renderer) = seeded_field(2.0);
        for (_, (velocity, _)) in world.query::<(&Velocity, &Asteroid)>().iter() {
            for i in 0..3 {
                assert!((0.0..TRANS_MAG).contains(&velocity.linear[i]));
                assert!((0.0..SPIN_MAG).contains(&velocity.angular[i]));
            }
        }
    }

    #[test]
    fn maintain_on_empty_set_skips_spawning_without_panic() {
        let (mut field, mut world, mut physics, mut renderer) = seeded_field(2.0);
        let doomed: Vec<Entity> = world
            .query::<&Asteroid>()
            .iter()
            .map(|(entity, _)| entity)
            .collect();
        for entity in doomed {
            let _ = world.despawn(entity);
        }
        field.maintain(
            Vec3::ZERO,
            Vec3::new(0.0, -8.0, 0.0),
            20.0,
            1.0 / 60.0,
            &mut world,
            &mut physics,
            &mut renderer,
        );
        assert_eq!(count(&world), 0, "empty set must skip spawning this tick");
    }

    /// Constant avatar motion away from the leading edge must keep the
    /// instance count bounded: spawns at the leading edge are matched by
    /// retirements at the trailing edge.
    #[test]
    fn maintain_keeps_instance_count_bounded_over_many_ticks() {
        let (mut field, mut world, mut physics, mut renderer) = seeded_field(2.0);
        let avatar_velocity = Vec3::new(0.0, -8.0, 0.0);
        let dt = 1.0 / 60.0;

        let mut peak = 0;
        for _ in 0..1000 {
            field.maintain(
                Vec3::ZERO,
                avatar_velocity,
                20.0,
                dt,
                &mut world,
                &mut physics,
                &mut renderer,
            );
            peak = peak.max(count(&world));
        }
        let final_count = count(&world);
        assert!(final_count > 0, "treadmill must keep the field populated");
        assert!(peak < 1500, "unbounded growth: peaked at {}", peak);
        // host-side books stay in lockstep with the arena
        assert_eq!(physics.colliders.len(), final_count);
        assert_eq!(renderer.models.len(), final_count);
    }
}
