use hecs::World;

use crate::Ball;

/// Advance the ball by one frame of travel
pub fn move_ball(world: &mut World) {
    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        ball.pos += ball.vel;
    }
}
