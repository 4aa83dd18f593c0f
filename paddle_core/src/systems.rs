use hecs::{Entity, World};

use crate::{Config, KeyboardInput, Paddle, RenderTarget};

/// Which player owns a paddle (0 = left / player one, 1 = right / player two)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PlayerSlot(pub u8);

/// Helper to spawn a paddle entity
pub fn create_paddle(world: &mut World, slot: PlayerSlot, paddle: Paddle) -> Entity {
    world.spawn((slot, paddle))
}

/// Apply keyboard movement to every paddle owned by `slot`
pub fn move_paddles<K: KeyboardInput + ?Sized>(
    world: &mut World,
    slot: PlayerSlot,
    keys: &K,
    bonus: i32,
) {
    for (_entity, (owner, paddle)) in world.query_mut::<(&PlayerSlot, &mut Paddle)>() {
        if *owner == slot {
            paddle.move_by_keys(keys, bonus);
        }
    }
}

/// Update and draw every paddle (deterministic: slot order, then entity ID)
pub fn update_paddles<R: RenderTarget + ?Sized>(
    world: &mut World,
    target: &mut R,
    config: &Config,
) {
    let mut order: Vec<(PlayerSlot, Entity)> = world
        .query::<&PlayerSlot>()
        .with::<&Paddle>()
        .iter()
        .map(|(entity, slot)| (*slot, entity))
        .collect();
    order.sort_by_key(|(slot, entity)| (*slot, entity.id()));

    for (_slot, entity) in order {
        if let Ok(mut paddle) = world.get::<&mut Paddle>(entity) {
            paddle.update(&mut *target, config);
        }
    }
}

/// Sum of scores for the paddles owned by `slot`
pub fn total_score(world: &World, slot: PlayerSlot) -> u32 {
    world
        .query::<(&PlayerSlot, &Paddle)>()
        .iter()
        .filter(|(_entity, (owner, _paddle))| **owner == slot)
        .map(|(_entity, (_owner, paddle))| paddle.score())
        .sum()
}
