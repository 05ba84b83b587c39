/// Runtime configuration, read from an optional TOML file.
///
/// Every field has a default, so an empty file (or none at all) gives the
/// stock game.

use std::path::{Path, PathBuf};

use log::info;
use serde::Deserialize;

use crate::error::{GameError, Result};

/// Read from the working directory when no `--config` is given.
pub const DEFAULT_CONFIG_FILE: &str = "canvas_shooter.toml";

#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Directory the asset keys are resolved against.
    pub asset_dir: PathBuf,
    /// Target frame length in milliseconds (33 ≈ 30 FPS).
    pub frame_ms: u64,
    /// Fixed RNG seed; random when absent.
    pub seed: Option<u64>,
    /// Treat a failed asset load as fatal instead of using placeholder art.
    pub strict_assets: bool,
    pub tuning: Tuning,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            asset_dir: PathBuf::from("."),
            frame_ms: 33,
            seed: None,
            strict_assets: false,
            tuning: Tuning::default(),
        }
    }
}

/// Gameplay constants.
#[derive(Clone, Copy, Debug, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct Tuning {
    /// Pixels per second.
    pub player_speed: f32,
    pub bullet_speed: f32,
    pub enemy_speed: f32,
    /// A volley needs strictly more than this many ms since the last one.
    pub fire_cooldown_ms: u64,
    /// Base of the spawn curve `1 - decay^elapsed`.
    pub spawn_decay: f32,
    pub kill_score: u32,
}

impl Default for Tuning {
    fn default() -> Self {
        Tuning {
            player_speed: 200.0,
            bullet_speed: 500.0,
            enemy_speed: 100.0,
            fire_cooldown_ms: 100,
            spawn_decay: 0.993,
            kill_score: 100,
        }
    }
}

impl Config {
    pub fn from_toml(text: &str, origin: &Path) -> Result<Config> {
        toml::from_str(text).map_err(|source| GameError::Config {
            path: origin.to_path_buf(),
            source,
        })
    }

    pub fn load(path: &Path) -> Result<Config> {
        let text = std::fs::read_to_string(path)?;
        let config = Config::from_toml(&text, path)?;
        info!("config loaded from {}", path.display());
        Ok(config)
    }

    /// `explicit` must exist; otherwise fall back to `DEFAULT_CONFIG_FILE`
    /// in `dir` if present, then to defaults.
    pub fn discover(explicit: Option<&Path>, dir: &Path) -> Result<Config> {
        if let Some(path) = explicit {
            return Config::load(path);
        }
        let fallback = dir.join(DEFAULT_CONFIG_FILE);
        if fallback.is_file() {
            Config::load(&fallback)
        } else {
            Ok(Config::default())
        }
    }
}
