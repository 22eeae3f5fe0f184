use crate::{Arena, Ball, Config, Events, GameRng, Side, SpeedRamp};
use hecs::World;
use log::debug;

/// Serve again once the ball leaves the arena on the left or right
pub fn check_out_of_bounds(
    world: &mut World,
    arena: &Arena,
    config: &Config,
    ramp: &mut SpeedRamp,
    now_ms: u64,
    rng: &mut GameRng,
    events: &mut Events,
) {
    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        let exited = if ball.left() < 0.0 {
            Side::Human
        } else if ball.right() > arena.width {
            Side::Ai
        } else {
            continue;
        };

        ball.reset(arena.center(), config.ball_speed_initial, rng);
        ramp.restart(now_ms);
        events.ball_out = Some(exited);

        debug!(
            "ball out past {:?} paddle, serving at ({}, {})",
            exited, ball.vel.x, ball.vel.y
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::create_ball;
    use glam::Vec2;

    fn setup_world() -> (World, Config, Arena, SpeedRamp, GameRng, Events) {
        let world = World::new();
        let config = Config::new();
        let arena = config.arena();
        let ramp = SpeedRamp::new(0);
        let rng = GameRng::new(12345); // Fixed seed for deterministic tests
        (world, config, arena, ramp, rng, Events::new())
    }

    fn ball(world: &World) -> Ball {
        world
            .query::<&Ball>()
            .iter()
            .next()
            .map(|(_e, b)| *b)
            .expect("ball exists")
    }

    #[test]
    fn test_ball_resets_after_leaving_left() {
        let (mut world, config, arena, mut ramp, mut rng, mut events) = setup_world();
        create_ball(&mut world, Vec2::new(5.0, 120.0), Vec2::new(-14.0, 3.0), 10.0, 14.5);

        check_out_of_bounds(&mut world, &arena, &config, &mut ramp, 7000, &mut rng, &mut events);

        let ball = ball(&world);
        assert_eq!(ball.pos, Vec2::new(400.0, 300.0));
        assert_eq!(ball.speed, 6.0);
        assert_eq!(ball.vel.x, -6.0, "Keeps heading toward the side it left");
        assert_eq!(ball.vel.y.abs(), 6.0);
        assert_eq!(ramp.last_increase_ms, 7000);
        assert_eq!(events.ball_out, Some(Side::Human));
    }

    #[test]
    fn test_ball_resets_after_leaving_right() {
        let (mut world, config, arena, mut ramp, mut rng, mut events) = setup_world();
        create_ball(&mut world, Vec2::new(795.0, 450.0), Vec2::new(11.0, -2.0), 10.0, 11.0);

        check_out_of_bounds(&mut world, &arena, &config, &mut ramp, 100, &mut rng, &mut events);

        let ball = ball(&world);
        assert_eq!(ball.pos, arena.center());
        assert_eq!(ball.vel.x, 6.0);
        assert_eq!(events.ball_out, Some(Side::Ai));
    }

    #[test]
    fn test_no_reset_when_ball_in_bounds() {
        let (mut world, config, arena, mut ramp, mut rng, mut events) = setup_world();
        create_ball(&mut world, Vec2::new(10.0, 300.0), Vec2::new(-6.0, 6.0), 10.0, 6.0);

        check_out_of_bounds(&mut world, &arena, &config, &mut ramp, 500, &mut rng, &mut events);

        assert_eq!(ball(&world).pos, Vec2::new(10.0, 300.0));
        assert_eq!(ramp.last_increase_ms, 0);
        assert_eq!(events.ball_out, None);
    }

    #[test]
    fn test_same_seed_same_serve() {
        let serve = |seed| {
            let (mut world, config, arena, mut ramp, _rng, mut events) = setup_world();
            let mut rng = GameRng::new(seed);
            create_ball(&mut world, Vec2::new(-20.0, 300.0), Vec2::new(-6.0, 6.0), 10.0, 6.0);
            check_out_of_bounds(&mut world, &arena, &config, &mut ramp, 0, &mut rng, &mut events);
            ball(&world).vel
        };
        assert_eq!(serve(42), serve(42));
    }
}
