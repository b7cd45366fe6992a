//! Headless harness: boots the simulation against the headless hosts and
//! drives a scripted session, logging what a windowed front end would show.

use std::path::Path;

use anyhow::Result;
use driftfield::{DisplayMode, GameConfig, GameState};
use input::Key;
use physics::HeadlessPhysics;
use renderer::HeadlessRenderer;

const FRAMES: u32 = 600;
const DT: f32 = 1.0 / 60.0;

fn main() -> Result<()> {
    env_logger::init();

    let config = GameConfig::load(Path::new("config.ron"));
    let mut physics = HeadlessPhysics::new();
    let mut renderer = HeadlessRenderer::new();
    let mut state = GameState::new(config, &mut physics, &mut renderer)?;
    state.start();

    for frame in 0..FRAMES {
        state.input.begin_frame();

        // Scripted session: hold forward, weave, pause briefly mid-run.
        state.input.process_key(Key::Forward, true);
        if (120..180).contains(&frame) {
            state.input.process_key(Key::Left, true);
        } else {
            state.input.process_key(Key::Left, false);
        }
        if frame % 90 == 0 {
            state.input.process_mouse_motion((0.0, 3.0));
        }
        if frame == 300 || frame == 330 {
            state.input.process_key(Key::Menu, true);
        } else {
            state.input.process_key(Key::Menu, false);
        }

        state.update(DT, &mut physics, &mut renderer);

        if state.modes.display() == DisplayMode::Dead {
            log::info!(
                "life ended at frame {} ({} instances live); restarting",
                frame,
                state.asteroid_count()
            );
            state.restart(&mut physics, &mut renderer)?;
        }
    }

    log::info!(
        "session done: {:.1}s simulated over {} frames, level {}, {} instances live",
        state.clock.elapsed_seconds(),
        state.clock.frame_count(),
        state.level,
        state.asteroid_count()
    );
    state.avatar.release(&mut physics, &mut renderer);
    Ok(())
}
