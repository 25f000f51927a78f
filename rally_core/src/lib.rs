pub mod components;
pub mod config;
pub mod resources;
pub mod systems;

pub use components::*;
pub use config::*;
pub use resources::*;

use hecs::World;
use systems::*;

/// Advance the duel by exactly one frame.
///
/// One call covers one nominal frame of travel; nothing here scales by
/// wall-clock time. Callers freeze play by not calling this while no
/// round is active.
pub fn step(
    world: &mut World,
    config: &Config,
    score: &mut Score,
    events: &mut Events,
    rng: &mut GameRng,
    pointer_y: f32,
) {
    events.clear();

    // 1. Snap the human paddle onto the pointer
    track_pointer(world, config, pointer_y);

    // 2. Advance the ball
    move_ball(world);

    // 3. Bounce off the top and bottom edges
    bounce_walls(world, config, events);

    // 4. Rebound off either paddle
    paddle_collisions(world, config, events);

    // 5. Resolve exits past the left or right edge
    check_exits(world, config, score, events, rng);

    // 6. Opponent chases the ball
    drive_opponent(world, config);
}

/// Helper to create a paddle entity at its starting row
pub fn create_paddle(world: &mut World, side: Side, config: &Config) -> hecs::Entity {
    let y = (config.field_height - config.paddle_height) / 2.0;
    world.spawn((Paddle::new(side, y),))
}

/// Helper to create the ball entity, already served
pub fn create_ball(world: &mut World, config: &Config, rng: &mut GameRng) -> hecs::Entity {
    let mut ball = Ball::new(glam::Vec2::ZERO, glam::Vec2::ZERO);
    ball.reset(config, rng);
    world.spawn((ball,))
}
