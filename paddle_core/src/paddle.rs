use std::path::PathBuf;

use glam::Vec2;
use tracing::{debug, trace};

use crate::config::Config;
use crate::error::AssetLoadError;
use crate::geometry::Aabb;
use crate::input::{Key, KeyboardInput};
use crate::params::Params;
use crate::render::RenderTarget;
use crate::sprite::Sprite;

/// Construction inputs for a paddle
#[derive(Debug, Clone, PartialEq)]
pub struct PaddleSettings {
    pub position: Vec2, // top-left corner
    pub size: Vec2,
    pub speed: i32,
    pub skin: Option<PathBuf>, // None = the configured player one skin
}

impl Default for PaddleSettings {
    fn default() -> Self {
        Self {
            position: Vec2::new(Params::PADDLE_X, Params::PADDLE_Y),
            size: Vec2::new(Params::PADDLE_WIDTH, Params::PADDLE_HEIGHT),
            speed: Params::PADDLE_SPEED,
            skin: None,
        }
    }
}

/// A player-controlled paddle
#[derive(Debug, Clone)]
pub struct Paddle {
    position: Vec2,
    size: Vec2,
    speed: i32,
    sprite: Sprite,
    score: u32,
}

impl Paddle {
    /// Load the skin and build a paddle. Position, size and speed are not validated.
    pub fn load(settings: PaddleSettings, config: &Config) -> Result<Self, AssetLoadError> {
        let skin = settings
            .skin
            .clone()
            .unwrap_or_else(|| config.player_one_skin.clone());
        let sprite = Sprite::load(&skin)?;
        Ok(Self::with_sprite(settings, sprite))
    }

    /// Default player one paddle
    pub fn player_one(config: &Config) -> Result<Self, AssetLoadError> {
        Self::load(PaddleSettings::default(), config)
    }

    /// Build a paddle around an already decoded sprite. `settings.skin` is ignored.
    pub fn with_sprite(settings: PaddleSettings, sprite: Sprite) -> Self {
        debug!(
            "New paddle at {:?}, size {:?}, speed {}",
            settings.position, settings.size, settings.speed
        );
        Self {
            position: settings.position,
            size: settings.size,
            speed: settings.speed,
            sprite,
            score: 0,
        }
    }

    pub fn position(&self) -> Vec2 {
        self.position
    }

    /// Reposition the paddle, e.g. after an external collision response
    pub fn set_position(&mut self, position: Vec2) {
        self.position = position;
    }

    pub fn size(&self) -> Vec2 {
        self.size
    }

    pub fn speed(&self) -> i32 {
        self.speed
    }

    pub fn sprite(&self) -> &Sprite {
        &self.sprite
    }

    pub fn bounds(&self) -> Aabb {
        Aabb::from_top_left_size(self.position, self.size)
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn add_point(&mut self) {
        self.score = self.score.saturating_add(1);
    }

    pub fn reset_score(&mut self) {
        self.score = 0;
    }

    pub fn draw<R: RenderTarget + ?Sized>(&self, target: &mut R) {
        target.blit(&self.sprite, self.position);
    }

    /// Step up and/or down by `speed + bonus`. Holding both keys cancels out.
    /// No bounds are enforced here.
    pub fn move_by_keys<K: KeyboardInput + ?Sized>(&mut self, keys: &K, bonus: i32) {
        let dir = keys.is_pressed(Key::Down) as i32 - keys.is_pressed(Key::Up) as i32;
        if dir != 0 {
            let step = self.speed.saturating_add(bonus) as f32;
            self.position.y += dir as f32 * step;
        }
    }

    /// Project Y to display space, cap it, then draw.
    ///
    /// Projection is applied to the stored position, so calling this twice
    /// without moving scales Y twice.
    pub fn update<R: RenderTarget + ?Sized>(&mut self, target: &mut R, config: &Config) {
        let projected = project_y_by_width_ratio(self.position.y, config);
        self.position.y = clamp_y_max_only(projected, config.max_y);
        if self.position.y < projected {
            trace!("Paddle Y capped from {} to {}", projected, self.position.y);
        }
        self.draw(target);
    }
}

/// Scale a Y coordinate by `display_width / logical_camera_width`.
///
/// Uses the width ratio for a vertical coordinate; kept as-is until the
/// intended projection is confirmed.
pub fn project_y_by_width_ratio(y: f32, config: &Config) -> f32 {
    y * config.width_ratio()
}

/// Cap Y from above only. Negative Y passes through unchanged.
pub fn clamp_y_max_only(y: f32, max_y: f32) -> f32 {
    y.min(max_y)
}
