//! Per-frame simulation step.

use input::Key;
use physics::PhysicsHost;
use renderer::RenderHost;

use crate::mode::{DisplayMode, PlayMode};
use crate::state::GameState;

impl GameState {
    /// Advance the simulation by one frame. The host feeds this frame's
    /// events into `self.input` (after `begin_frame`) before calling.
    pub fn update(
        &mut self,
        wall_dt: f32,
        physics: &mut dyn PhysicsHost,
        renderer: &mut dyn RenderHost,
    ) {
        if self.input.is_pressed(Key::Menu) {
            self.modes.toggle_menu(&mut self.clock, renderer);
        }

        let dt = self.clock.advance(wall_dt);
        if self.modes.display() == DisplayMode::Play {
            self.play_tick(dt, physics, renderer);
        }
    }

    /// One gameplay tick: motion, field upkeep, input, camera, collisions.
    fn play_tick(
        &mut self,
        dt: f32,
        physics: &mut dyn PhysicsHost,
        renderer: &mut dyn RenderHost,
    ) {
        if !self.avatar.alive {
            self.modes.die();
            return;
        }

        self.avatar.advance(dt, physics);
        if self.play_mode == PlayMode::Space {
            if let Some(field) = self.field.as_mut() {
                field.maintain(
                    self.avatar.transform.position,
                    self.avatar.velocity,
                    self.config.view_distance,
                    dt,
                    &mut self.world,
                    physics,
                    renderer,
                );
            }
        }

        self.avatar.handle_input(&self.input, self.play_mode, physics);

        // Mouse look. On terrain the avatar turns with the mouse and the
        // camera mirrors its heading; in space the heading is fixed and only
        // pitch responds. Zoom is a terrain affordance.
        let mouse = self.input.mouse_delta();
        if self.play_mode == PlayMode::Terrain {
            self.avatar.yaw += self.camera.yaw_shift_for(mouse.x);
            self.avatar.transform.set_yaw_degrees(self.avatar.yaw);
            self.camera.set_yaw(self.avatar.yaw);

            if self.input.is_scroll_up() {
                self.camera.zoom(-1);
            } else if self.input.is_scroll_down() {
                self.camera.zoom(1);
            }
        }
        self.camera.add_pitch(mouse.y);

        renderer.set_camera(&self.camera.view_transform(self.avatar.transform.position));
        renderer.set_transform(self.avatar.model, &self.avatar.transform);

        let avatar = &mut self.avatar;
        physics.traverse(&mut |event| avatar.on_collision(&event));
    }
}
