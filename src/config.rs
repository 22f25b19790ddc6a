use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::{fs, path::Path};
use tracing::warn;

const DEFAULT_CONFIG_PATH: &str = "config/game.toml";

/// Gameplay tuning loaded from `config/game.toml`.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct GameConfig {
    /// Player movement speed in world units per second.
    pub player_speed: f32,
    /// Interaction reach, measured center-to-center.
    pub interaction_range: f32,
    /// Seconds a planted crop takes to mature.
    pub growth_duration: f32,
    /// Seconds a dialogue message stays on screen.
    pub dialogue_seconds: f32,
    /// Draw wireframe collision boxes.
    pub debug_collisions: bool,
    pub window_width: u32,
    pub window_height: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            player_speed: 5.0,
            interaction_range: 3.0,
            growth_duration: 5.0,
            dialogue_seconds: 3.0,
            debug_collisions: false,
            window_width: 800,
            window_height: 600,
        }
    }
}

impl GameConfig {
    /// Load configuration from the default path.
    pub fn load() -> Self {
        Self::load_from_path(Path::new(DEFAULT_CONFIG_PATH))
    }

    /// Load configuration from an explicit path, falling back to defaults on errors.
    pub fn load_from_path(path: &Path) -> Self {
        match fs::read_to_string(path) {
            Ok(contents) => match toml::from_str::<GameConfig>(&contents) {
                Ok(cfg) => cfg,
                Err(err) => {
                    warn!("Failed to parse {}: {err}. Using defaults", path.display());
                    GameConfig::default()
                }
            },
            Err(err) => {
                if err.kind() == std::io::ErrorKind::NotFound {
                    warn!("Game config not found at {}. Using defaults", path.display());
                } else {
                    warn!("Failed to read {}: {err}. Using defaults", path.display());
                }
                GameConfig::default()
            }
        }
    }

    /// Save configuration to the default path.
    pub fn save(&self) -> Result<()> {
        self.save_to_path(Path::new(DEFAULT_CONFIG_PATH))
    }

    /// Save configuration to an explicit path.
    pub fn save_to_path(&self, path: &Path) -> Result<()> {
        let toml = toml::to_string_pretty(self)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, toml)?;
        Ok(())
    }
}
