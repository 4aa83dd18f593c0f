use std::path::{Path, PathBuf};
use thiserror::Error;

/// A sprite reference could not be turned into image data
#[derive(Error, Debug)]
#[error("failed to load sprite {}: {source}", path.display())]
pub struct AssetLoadError {
    pub path: PathBuf,
    #[source]
    pub source: image::ImageError,
}

impl AssetLoadError {
    pub fn new<P: AsRef<Path>>(path: P, source: image::ImageError) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }
}

pub type ConfigResult<T> = Result<T, ConfigError>;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
}
