use hecs::World;

use crate::{Ball, Config, Events, ExitMode, GameRng, Score, Side};

/// Resolve the ball leaving the field on the left or right.
///
/// At most one exit resolves per step. The ball is recentered either
/// way; in scored mode the far side is awarded the point first.
pub fn check_exits(
    world: &mut World,
    config: &Config,
    score: &mut Score,
    events: &mut Events,
    rng: &mut GameRng,
) {
    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        let exited = if ball.pos.x < 0.0 {
            Some(Side::Opponent)
        } else if ball.pos.x + config.ball_size > config.field_width {
            Some(Side::Human)
        } else {
            None
        };

        if let Some(side) = exited {
            if config.exit_mode == ExitMode::Scored {
                score.award(side);
                events.scored = Some(side);
            }
            ball.reset(config, rng);
        }
    }
}
