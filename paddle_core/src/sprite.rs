use std::path::{Path, PathBuf};

use image::RgbaImage;
use tracing::debug;

use crate::error::AssetLoadError;

/// Decoded RGBA image owned by a paddle
#[derive(Debug, Clone)]
pub struct Sprite {
    image: RgbaImage,
    source: Option<PathBuf>,
}

impl Sprite {
    /// Load and decode an image file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, AssetLoadError> {
        let path = path.as_ref();
        let image = image::open(path)
            .map_err(|e| AssetLoadError::new(path, e))?
            .into_rgba8();

        debug!(
            "Loaded sprite {:?} ({}x{})",
            path,
            image.width(),
            image.height()
        );

        Ok(Self {
            image,
            source: Some(path.to_path_buf()),
        })
    }

    pub fn from_image(image: RgbaImage) -> Self {
        Self {
            image,
            source: None,
        }
    }

    pub fn width(&self) -> u32 {
        self.image.width()
    }

    pub fn height(&self) -> u32 {
        self.image.height()
    }

    pub fn image(&self) -> &RgbaImage {
        &self.image
    }

    /// File the sprite was decoded from, if any
    pub fn source(&self) -> Option<&Path> {
        self.source.as_deref()
    }
}
