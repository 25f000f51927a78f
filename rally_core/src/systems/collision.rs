use hecs::World;

use crate::{Ball, Config, Events, Paddle, Side};

/// Bounce the ball off the top and bottom edges.
///
/// Only the velocity is flipped. The ball may overlap the edge by up to
/// one frame of travel until the flipped velocity carries it back in;
/// that transient overlap is accepted, not corrected.
pub fn bounce_walls(world: &mut World, config: &Config, events: &mut Events) {
    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        if ball.pos.y <= 0.0 || ball.pos.y + config.ball_size >= config.field_height {
            ball.vel.y = -ball.vel.y;
            events.wall_bounce = true;
        }
    }
}

/// Strict AABB overlap between the ball square and one paddle
fn overlaps(ball: &Ball, paddle_x: f32, paddle_y: f32, config: &Config) -> bool {
    ball.pos.x < paddle_x + config.paddle_width
        && ball.pos.x + config.ball_size > paddle_x
        && ball.pos.y < paddle_y + config.paddle_height
        && ball.pos.y + config.ball_size > paddle_y
}

/// Rebound the ball off either paddle.
///
/// Both paddles are checked independently each step. On contact the
/// ball's leading edge snaps flush to the paddle face so it cannot
/// tunnel through or stick inside, the horizontal velocity flips, and
/// the vertical velocity is steered by how far from the paddle center
/// the ball struck: full base speed at the tips, dead straight at the
/// middle. The snap also means a paddle can invert the ball at most
/// once per step.
pub fn paddle_collisions(world: &mut World, config: &Config, events: &mut Events) {
    let paddles: Vec<(Side, f32)> = world
        .query::<&Paddle>()
        .iter()
        .map(|(_e, p)| (p.side, p.y))
        .collect();

    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        for &(side, paddle_y) in &paddles {
            let paddle_x = config.paddle_x(side);
            if !overlaps(ball, paddle_x, paddle_y, config) {
                continue;
            }

            match side {
                Side::Human => ball.pos.x = paddle_x + config.paddle_width,
                Side::Opponent => ball.pos.x = paddle_x - config.ball_size,
            }
            ball.vel.x = -ball.vel.x;

            let offset = (ball.pos.y + config.ball_size / 2.0)
                - (paddle_y + config.paddle_height / 2.0);
            ball.vel.y = config.ball_speed * (offset / (config.paddle_height / 2.0));

            events.paddle_hit = Some(side);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::create_paddle;
    use glam::Vec2;

    fn world_with_paddle(side: Side, paddle_y: f32, config: &Config) -> World {
        let mut world = World::new();
        create_paddle(&mut world, side, config);
        for (_e, paddle) in world.query_mut::<&mut Paddle>() {
            paddle.y = paddle_y;
        }
        world
    }

    fn ball_state(world: &World) -> Ball {
        world
            .query::<&Ball>()
            .iter()
            .next()
            .map(|(_e, b)| *b)
            .expect("ball exists")
    }

    #[test]
    fn top_wall_flips_velocity_without_repositioning() {
        let mut world = World::new();
        let config = Config::new();
        let mut events = Events::new();
        world.spawn((Ball::new(Vec2::new(400.0, -2.0), Vec2::new(6.0, -3.0)),));

        bounce_walls(&mut world, &config, &mut events);

        let ball = ball_state(&world);
        assert_eq!(ball.vel.y, 3.0);
        assert_eq!(ball.vel.x, 6.0);
        // The overlap survives the bounce; the next step's travel clears it.
        assert_eq!(ball.pos.y, -2.0);
        assert!(events.wall_bounce);
    }

    #[test]
    fn bottom_wall_flips_velocity() {
        let mut world = World::new();
        let config = Config::new();
        let mut events = Events::new();
        let y = config.field_height - config.ball_size + 1.0;
        world.spawn((Ball::new(Vec2::new(400.0, y), Vec2::new(6.0, 3.0)),));

        bounce_walls(&mut world, &config, &mut events);

        let ball = ball_state(&world);
        assert_eq!(ball.vel.y, -3.0);
        assert!(events.wall_bounce);
    }

    #[test]
    fn center_hit_rebounds_dead_straight() {
        let config = Config::new();
        let paddle_y = 200.0;
        let mut world = world_with_paddle(Side::Human, paddle_y, &config);
        let mut events = Events::new();

        // Ball center aligned with paddle center, overlapping the face.
        let ball_y = paddle_y + config.paddle_height / 2.0 - config.ball_size / 2.0;
        world.spawn((Ball::new(Vec2::new(30.0, ball_y), Vec2::new(-6.0, 2.0)),));

        paddle_collisions(&mut world, &config, &mut events);

        let ball = ball_state(&world);
        assert_eq!(ball.vel.x, 6.0);
        assert_eq!(ball.vel.y, 0.0);
        assert_eq!(events.paddle_hit, Some(Side::Human));
    }

    #[test]
    fn edge_hit_rebounds_steeply() {
        let config = Config::new();
        let paddle_y = 200.0;
        let mut world = world_with_paddle(Side::Human, paddle_y, &config);
        let mut events = Events::new();

        // Ball near the top tip of the paddle.
        world.spawn((Ball::new(Vec2::new(30.0, paddle_y - 8.0), Vec2::new(-6.0, 1.0)),));

        paddle_collisions(&mut world, &config, &mut events);

        let ball = ball_state(&world);
        assert!(ball.vel.y < -4.0, "tip contact should send the ball sharply up");
        assert_eq!(ball.vel.x, 6.0);
    }

    #[test]
    fn human_hit_snaps_ball_to_the_paddle_face() {
        let config = Config::new();
        let mut world = world_with_paddle(Side::Human, 200.0, &config);
        let mut events = Events::new();
        world.spawn((Ball::new(Vec2::new(28.0, 230.0), Vec2::new(-6.0, 0.0)),));

        paddle_collisions(&mut world, &config, &mut events);

        let ball = ball_state(&world);
        assert_eq!(
            ball.pos.x,
            config.paddle_x(Side::Human) + config.paddle_width
        );
    }

    #[test]
    fn opponent_hit_snaps_ball_clear_of_the_paddle() {
        let config = Config::new();
        let mut world = world_with_paddle(Side::Opponent, 200.0, &config);
        let mut events = Events::new();
        let x = config.paddle_x(Side::Opponent) - config.ball_size + 4.0;
        world.spawn((Ball::new(Vec2::new(x, 230.0), Vec2::new(6.0, 0.0)),));

        paddle_collisions(&mut world, &config, &mut events);

        let ball = ball_state(&world);
        assert_eq!(ball.pos.x, config.paddle_x(Side::Opponent) - config.ball_size);
        assert_eq!(ball.vel.x, -6.0);
        assert_eq!(events.paddle_hit, Some(Side::Opponent));
    }

    #[test]
    fn contact_inverts_horizontal_velocity_exactly_once() {
        let config = Config::new();
        let mut world = world_with_paddle(Side::Human, 200.0, &config);
        let mut events = Events::new();
        world.spawn((Ball::new(Vec2::new(30.0, 230.0), Vec2::new(-6.0, 0.0)),));

        paddle_collisions(&mut world, &config, &mut events);
        let after_first = ball_state(&world);
        assert_eq!(after_first.vel.x, 6.0);

        // The snap moved the ball out of the paddle, so a second pass in
        // the same step leaves it untouched.
        paddle_collisions(&mut world, &config, &mut events);
        let after_second = ball_state(&world);
        assert_eq!(after_second.vel.x, 6.0);
        assert_eq!(after_second.pos, after_first.pos);
    }

    #[test]
    fn no_contact_when_ball_misses_the_paddle_row() {
        let config = Config::new();
        let mut world = world_with_paddle(Side::Human, 0.0, &config);
        let mut events = Events::new();
        world.spawn((Ball::new(Vec2::new(30.0, 400.0), Vec2::new(-6.0, 0.0)),));

        paddle_collisions(&mut world, &config, &mut events);

        let ball = ball_state(&world);
        assert_eq!(ball.vel.x, -6.0);
        assert!(events.paddle_hit.is_none());
    }

    #[test]
    fn collisions_with_no_ball_are_a_no_op() {
        let config = Config::new();
        let mut world = world_with_paddle(Side::Human, 200.0, &config);
        let mut events = Events::new();

        paddle_collisions(&mut world, &config, &mut events);
        bounce_walls(&mut world, &config, &mut events);

        assert!(events.paddle_hit.is_none());
        assert!(!events.wall_bounce);
    }
}
