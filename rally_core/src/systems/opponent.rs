use hecs::World;

use crate::{Ball, Config, Paddle, Side};

/// Per-step displacement for the tracking paddle, as a pure function of
/// the two centers.
///
/// The paddle chases the ball at a fraction of full paddle speed and
/// holds still inside the dead zone, so it neither snaps perfectly onto
/// the ball nor jitters when nearly aligned.
pub fn tracking_shift(paddle_center: f32, ball_center: f32, config: &Config) -> f32 {
    let pace = config.paddle_speed * config.track_speed_factor;
    if paddle_center < ball_center - config.track_dead_zone {
        pace
    } else if paddle_center > ball_center + config.track_dead_zone {
        -pace
    } else {
        0.0
    }
}

/// Move the opponent paddle toward the ball, clamped to the field
pub fn drive_opponent(world: &mut World, config: &Config) {
    let ball_center = {
        let mut query = world.query::<&Ball>();
        query
            .iter()
            .next()
            .map(|(_e, ball)| ball.pos.y + config.ball_size / 2.0)
    };

    let ball_center = match ball_center {
        Some(center) => center,
        None => return,
    };

    for (_entity, paddle) in world.query_mut::<&mut Paddle>() {
        if paddle.side != Side::Opponent {
            continue;
        }
        let paddle_center = paddle.y + config.paddle_height / 2.0;
        let shift = tracking_shift(paddle_center, ball_center, config);
        paddle.y = config.clamp_paddle_y(paddle.y + shift);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::create_paddle;
    use glam::Vec2;

    fn opponent_y(world: &mut World) -> f32 {
        let mut y = f32::NAN;
        for (_e, paddle) in world.query_mut::<&mut Paddle>() {
            if paddle.side == Side::Opponent {
                y = paddle.y;
            }
        }
        y
    }

    #[test]
    fn shift_is_zero_inside_the_dead_zone() {
        let config = Config::new();
        assert_eq!(tracking_shift(250.0, 250.0, &config), 0.0);
        assert_eq!(tracking_shift(250.0, 259.0, &config), 0.0);
        assert_eq!(tracking_shift(250.0, 241.0, &config), 0.0);
    }

    #[test]
    fn shift_chases_at_reduced_pace() {
        let config = Config::new();
        let pace = config.paddle_speed * config.track_speed_factor;
        assert_eq!(tracking_shift(250.0, 300.0, &config), pace);
        assert_eq!(tracking_shift(250.0, 200.0, &config), -pace);
    }

    #[test]
    fn shift_is_idempotent_for_unchanged_inputs() {
        let config = Config::new();
        let first = tracking_shift(250.0, 320.0, &config);
        let second = tracking_shift(250.0, 320.0, &config);
        assert_eq!(first, second);
    }

    #[test]
    fn paddle_moves_toward_a_low_ball() {
        let mut world = World::new();
        let config = Config::new();
        create_paddle(&mut world, Side::Opponent, &config);
        world.spawn((Ball::new(Vec2::new(700.0, 450.0), Vec2::new(6.0, 0.0)),));
        let before = opponent_y(&mut world);

        drive_opponent(&mut world, &config);

        let pace = config.paddle_speed * config.track_speed_factor;
        assert_eq!(opponent_y(&mut world), before + pace);
    }

    #[test]
    fn paddle_clamps_at_the_bottom_edge() {
        let mut world = World::new();
        let config = Config::new();
        create_paddle(&mut world, Side::Opponent, &config);
        let floor = config.field_height - config.paddle_height;
        for (_e, paddle) in world.query_mut::<&mut Paddle>() {
            paddle.y = floor - 1.0;
        }
        world.spawn((Ball::new(Vec2::new(700.0, 490.0), Vec2::new(6.0, 0.0)),));

        drive_opponent(&mut world, &config);
        drive_opponent(&mut world, &config);

        assert_eq!(opponent_y(&mut world), floor);
    }

    #[test]
    fn paddle_holds_when_no_ball_exists() {
        let mut world = World::new();
        let config = Config::new();
        create_paddle(&mut world, Side::Opponent, &config);
        let before = opponent_y(&mut world);

        drive_opponent(&mut world, &config);

        assert_eq!(opponent_y(&mut world), before);
    }
}
