//! Keyboard-driven Pong paddle
//!
//! A paddle moves vertically from injected key state, projects its Y
//! coordinate into display space on update, and draws its sprite onto any
//! [`RenderTarget`].

pub mod config;
pub mod error;
pub mod geometry;
pub mod input;
pub mod paddle;
pub mod params;
pub mod render;
pub mod sprite;
pub mod systems;

pub use config::*;
pub use error::*;
pub use geometry::*;
pub use input::*;
pub use paddle::*;
pub use params::*;
pub use render::*;
pub use sprite::*;
pub use systems::*;

/// Run one frame for a single paddle: move from keys, then update and draw
pub fn run_frame<K, R>(paddle: &mut Paddle, keys: &K, target: &mut R, config: &Config, bonus: i32)
where
    K: KeyboardInput + ?Sized,
    R: RenderTarget + ?Sized,
{
    paddle.move_by_keys(keys, bonus);
    paddle.update(target, config);
}
