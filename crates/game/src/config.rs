//! Player-tunable settings, persisted as RON.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Settings read at startup from `config.ron`. Missing or malformed
/// files fall back to defaults; unknown fields are individually defaulted so
/// old config files survive upgrades.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Whether asteroid instances visually spin.
    pub ast_rotation: bool,
    /// Mouse sensitivity multiplier for the camera rig.
    pub sensitivity: f32,
    /// Level loaded when play begins.
    pub start_level: f32,
    /// Camera follow distance; doubles as the depth at which asteroid
    /// instances behind the camera are culled.
    pub view_distance: f32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            ast_rotation: true,
            sensitivity: 1.0,
            start_level: 1.5,
            view_distance: 20.0,
        }
    }
}

impl GameConfig {
    /// Load settings from `path`, falling back to defaults if the file is
    /// missing or malformed.
    pub fn load(path: &Path) -> Self {
        match fs::read_to_string(path) {
            Ok(text) => match ron::from_str(&text) {
                Ok(config) => {
                    log::info!("loaded settings from {}", path.display());
                    config
                }
                Err(err) => {
                    log::warn!(
                        "malformed settings at {} ({}); using defaults",
                        path.display(),
                        err
                    );
                    Self::default()
                }
            },
            Err(err) => {
                log::warn!(
                    "no settings at {} ({}); using defaults",
                    path.display(),
                    err
                );
                Self::default()
            }
        }
    }

    /// Persist settings to `path`, creating parent directories as needed.
    pub fn save(&self, path: &Path) -> anyhow::Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let text = ron::ser::to_string_pretty(self, ron::ser::PrettyConfig::default())?;
        fs::write(path, text)?;
        log::info!("saved settings to {}", path.display());
        Ok(())
    }
}
