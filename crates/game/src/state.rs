//! Top-level game state: level lifecycle, arena, clock, and camera.

use engine_core::{Clock, Entity, World};
use input::InputState;
use physics::PhysicsHost;
use procgen::{Asteroid, AsteroidField, FieldConfig, FieldError};
use renderer::{CameraRig, RenderHost};

use crate::avatar::Avatar;
use crate::config::GameConfig;
use crate::mode::{play_mode_for_level, GameModeMachine, PlayMode};

/// Sky texture for a space level, if the level has one authored.
pub fn space_texture_for_level(level: f32) -> Option<String> {
    (level < 10.0).then(|| format!("textures/space{}.jpg", level as u32))
}

/// Everything the simulation owns across frames.
pub struct GameState {
    pub config: GameConfig,
    /// Arena for asteroid instances.
    pub world: World,
    pub clock: Clock,
    pub input: InputState,
    pub modes: GameModeMachine,
    pub play_mode: PlayMode,
    pub level: f32,
    pub avatar: Avatar,
    /// Field manager, present on space levels only.
    pub field: Option<AsteroidField>,
    pub camera: CameraRig,
}

impl GameState {
    /// Build the simulation and load the configured starting level. The game
    /// sits at the main menu until [`start`](GameState::start).
    pub fn new(
        config: GameConfig,
        physics: &mut dyn PhysicsHost,
        renderer: &mut dyn RenderHost,
    ) -> Result<Self, FieldError> {
        let avatar = Avatar::new(physics, renderer);
        let camera = CameraRig::new(config.sensitivity, config.view_distance);
        let start_level = config.start_level;
        let mut state = Self {
            config,
            world: World::new(),
            clock: Clock::new(),
            input: InputState::new(),
            modes: GameModeMachine::new(),
            play_mode: play_mode_for_level(start_level),
            level: start_level,
            avatar,
            field: None,
            camera,
        };
        state.load_level(start_level, physics, renderer)?;
        Ok(state)
    }

    /// Leave the main menu and begin play.
    pub fn start(&mut self) {
        self.modes.start();
    }

    /// Tear down the current level and load `level`. A level the field
    /// cannot be built for is refused: the error is returned and the running
    /// level is left untouched.
    pub fn load_level(
        &mut self,
        level: f32,
        physics: &mut dyn PhysicsHost,
        renderer: &mut dyn RenderHost,
    ) -> Result<(), FieldError> {
        let mode = play_mode_for_level(level);
        if mode == PlayMode::Space {
            // validate before tearing down the running level
            FieldConfig::for_level(level)?;
        }

        self.clear_field(physics, renderer);
        self.avatar.reset(physics);
        // Gravity belongs to terrain; space flight has no gravity binding.
        match mode {
            PlayMode::Terrain => self.avatar.bind_gravity(physics),
            PlayMode::Space => self.avatar.unbind_gravity(physics),
        }
        self.level = level;
        self.play_mode = mode;
        self.field = match mode {
            PlayMode::Space => {
                if let Some(texture) = space_texture_for_level(level) {
                    renderer.load_sky_texture(&texture);
                }
                let mut field =
                    AsteroidField::initialize(level, &mut self.world, physics, renderer)?;
                field.set_spin_enabled(self.config.ast_rotation);
                Some(field)
            }
            PlayMode::Terrain => None,
        };
        log::info!("level {} loaded as {:?}", level, mode);
        Ok(())
    }

    /// Advance to the next level (half-step increments alternate terrain and
    /// space).
    pub fn advance_level(
        &mut self,
        physics: &mut dyn PhysicsHost,
        renderer: &mut dyn RenderHost,
    ) -> Result<(), FieldError> {
        self.load_level(self.level + 0.5, physics, renderer)
    }

    /// Reload the current level for a fresh life after death.
    pub fn restart(
        &mut self,
        physics: &mut dyn PhysicsHost,
        renderer: &mut dyn RenderHost,
    ) -> Result<(), FieldError> {
        self.load_level(self.level, physics, renderer)?;
        self.modes.revive();
        Ok(())
    }

    /// Live asteroid instances in the arena.
    pub fn asteroid_count(&self) -> usize {
        self.world.query::<&Asteroid>().iter().count()
    }

    /// Despawn every asteroid instance and release its host-side resources.
    fn clear_field(&mut self, physics: &mut dyn PhysicsHost, renderer: &mut dyn RenderHost) {
        let doomed: Vec<(Entity, Asteroid)> = self
            .world
            .query::<&Asteroid>()
            .iter()
            .map(|(entity, asteroid)| (entity, *asteroid))
            .collect();
        for (entity, asteroid) in doomed {
            renderer.release_model(asteroid.model);
            physics.remove_collider(asteroid.collider);
            let _ = self.world.despawn(entity);
        }
        self.field = None;
    }
}
