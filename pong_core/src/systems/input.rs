use crate::{Config, Paddle, Side};
use hecs::World;
use log::warn;

/// Center the human paddle on a raw pointer Y, clamped to the arena
pub fn apply_pointer_input(world: &mut World, config: &Config, pointer_y: f32) {
    if !pointer_y.is_finite() {
        warn!("dropping non-finite pointer position {}", pointer_y);
        return;
    }

    for (_entity, paddle) in world.query_mut::<&mut Paddle>() {
        if paddle.side == Side::Human {
            paddle.y = config.clamp_paddle_y(pointer_y - paddle.height / 2.0);
        }
    }
}
