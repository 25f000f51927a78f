use hecs::World;

use crate::{Config, Paddle, Side};

/// Snap the human paddle to the tracked pointer position.
///
/// The paddle is not simulated: its center jumps straight to the pointer
/// each step, clamped to the field.
pub fn track_pointer(world: &mut World, config: &Config, pointer_y: f32) {
    for (_entity, paddle) in world.query_mut::<&mut Paddle>() {
        if paddle.side == Side::Human {
            paddle.y = config.clamp_paddle_y(pointer_y - config.paddle_height / 2.0);
        }
    }
}
