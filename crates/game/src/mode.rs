//! Display-mode state machine and play-mode selection.

use engine_core::Clock;
use renderer::{FogSettings, RenderHost};

/// Which outer screen the game is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisplayMode {
    /// Title screen; the simulation has not started.
    MainMenu,
    /// Live gameplay.
    Play,
    /// Paused over the frozen scene.
    InGameMenu,
    /// Life over; awaiting restart.
    Dead,
}

/// Which controller flavor the current level uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayMode {
    /// Whole-number levels: walk and jump over ground.
    Terrain,
    /// Half-step levels: forced flight through the asteroid field.
    Space,
}

/// Whole-number levels play on terrain; fractional levels fly through space.
pub fn play_mode_for_level(level: f32) -> PlayMode {
    if level.fract() == 0.0 {
        PlayMode::Terrain
    } else {
        PlayMode::Space
    }
}

/// Owns the display mode and applies the engine-side effects of each
/// transition (clock freeze, menu fog). Invalid transitions are ignored.
#[derive(Debug)]
pub struct GameModeMachine {
    display: DisplayMode,
}

impl Default for GameModeMachine {
    fn default() -> Self {
        Self {
            display: DisplayMode::MainMenu,
        }
    }
}

impl GameModeMachine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn display(&self) -> DisplayMode {
        self.display
    }

    /// Leave the title screen and begin play.
    pub fn start(&mut self) {
        if self.display == DisplayMode::MainMenu {
            self.display = DisplayMode::Play;
            log::info!("entering play");
        } else {
            log::debug!("start ignored in {:?}", self.display);
        }
    }

    /// Toggle the in-game menu. Entering freezes the clock and fogs the
    /// scene; leaving undoes both.
    pub fn toggle_menu(&mut self, clock: &mut Clock, renderer: &mut dyn RenderHost) {
        match self.display {
            DisplayMode::Play => {
                clock.freeze();
                renderer.set_fog(FogSettings::menu());
                self.display = DisplayMode::InGameMenu;
            }
            DisplayMode::InGameMenu => {
                renderer.clear_fog();
                clock.resume();
                self.display = DisplayMode::Play;
            }
            other => log::debug!("menu toggle ignored in {:?}", other),
        }
    }

    /// The current life ended.
    pub fn die(&mut self) {
        if self.display == DisplayMode::Play {
            self.display = DisplayMode::Dead;
            log::info!("life over");
        }
    }

    /// A fresh life begins; only valid from the death screen.
    pub fn revive(&mut self) {
        if self.display == DisplayMode::Dead {
            self.display = DisplayMode::Play;
        } else {
            log::debug!("revive ignored in {:?}", self.display);
        }
    }
}
