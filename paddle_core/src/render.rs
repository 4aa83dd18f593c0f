//! Render targets a paddle can draw itself onto

use glam::Vec2;
use image::{imageops, Rgba, RgbaImage};

use crate::sprite::Sprite;

/// Anything that can composite a sprite at a position
pub trait RenderTarget {
    fn blit(&mut self, sprite: &Sprite, at: Vec2);
}

impl<T: RenderTarget + ?Sized> RenderTarget for &mut T {
    fn blit(&mut self, sprite: &Sprite, at: Vec2) {
        (**self).blit(sprite, at)
    }
}

/// CPU frame buffer backed by an RGBA image
#[derive(Debug, Clone)]
pub struct FrameBuffer {
    image: RgbaImage,
}

impl FrameBuffer {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            image: RgbaImage::new(width, height),
        }
    }

    pub fn clear(&mut self, color: Rgba<u8>) {
        for pixel in self.image.pixels_mut() {
            *pixel = color;
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

    pub fn into_image(self) -> RgbaImage {
        self.image
    }
}

/// Snap a float coordinate to the pixel grid (floor, saturating)
fn to_pixel(v: f32) -> i64 {
    v.floor().clamp(i32::MIN as f32, i32::MAX as f32) as i64
}

impl RenderTarget for FrameBuffer {
    fn blit(&mut self, sprite: &Sprite, at: Vec2) {
        // Off-canvas parts are clipped by overlay
        imageops::overlay(&mut self.image, sprite.image(), to_pixel(at.x), to_pixel(at.y));
    }
}
