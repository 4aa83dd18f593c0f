use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::{ConfigError, ConfigResult};
use crate::params::Params;

/// Display and asset configuration shared by every paddle
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub display_width: f32,
    pub logical_camera_width: f32,
    pub player_one_skin: PathBuf,
    pub player_two_skin: PathBuf,
    pub max_y: f32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            display_width: Params::DISPLAY_WIDTH,
            logical_camera_width: Params::LOGICAL_CAMERA_WIDTH,
            player_one_skin: PathBuf::from(Params::PLAYER_ONE_SKIN),
            player_two_skin: PathBuf::from(Params::PLAYER_TWO_SKIN),
            max_y: Params::MAX_Y,
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_toml_str(content: &str) -> ConfigResult<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Read a TOML config file, falling back to defaults when it does not exist
    pub fn from_file<P: AsRef<Path>>(path: P) -> ConfigResult<Self> {
        let path = path.as_ref();

        if !path.exists() {
            info!("No config at {:?}, using defaults", path);
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let config = Self::from_toml_str(&content)?;
        info!("Loaded config from {:?}", path);
        Ok(config)
    }

    /// Display width over logical camera width.
    ///
    /// Paddles apply this to their Y coordinate on every update, so a ratio
    /// other than 1.0 compounds from frame to frame.
    pub fn width_ratio(&self) -> f32 {
        self.display_width / self.logical_camera_width
    }
}
