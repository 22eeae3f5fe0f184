use crate::{Ball, Config, Events, SpeedRamp};
use glam::Vec2;
use hecs::World;
use log::trace;

/// Periodically speed the ball up.
///
/// Once the interval has elapsed the timer restarts whether or not the ball
/// sped up. The ball only speeds up while both velocity components are under
/// the cap, and the new velocity is rebuilt from the old heading and the
/// component signs rather than by scaling the vector.
pub fn ramp_ball_speed(
    world: &mut World,
    ramp: &mut SpeedRamp,
    now_ms: u64,
    config: &Config,
    events: &mut Events,
) {
    if !ramp.is_due(now_ms, config.speed_ramp_interval_ms) {
        return;
    }

    let cap = config.ball_speed_max;
    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        if ball.vel.x.abs() >= cap || ball.vel.y.abs() >= cap {
            continue;
        }

        let angle = ball.vel.y.atan2(ball.vel.x);
        let sign_x = if ball.vel.x > 0.0 { 1.0 } else { -1.0 };
        let sign_y = if ball.vel.y > 0.0 { 1.0 } else { -1.0 };

        let old_speed = ball.speed;
        ball.speed = (ball.speed + config.speed_ramp_increment).min(cap);
        ball.vel = Vec2::new(
            angle.cos().abs() * sign_x * ball.speed,
            angle.sin().abs() * sign_y * ball.speed,
        );

        if ball.speed > old_speed {
            events.speed_increased = true;
            trace!("ball speed {} -> {}", old_speed, ball.speed);
        }
    }

    ramp.restart(now_ms);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::create_ball;

    fn setup(vel: Vec2, speed: f32) -> (World, Config, SpeedRamp, Events) {
        let mut world = World::new();
        create_ball(&mut world, Vec2::new(400.0, 300.0), vel, 10.0, speed);
        (world, Config::new(), SpeedRamp::new(0), Events::new())
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
    fn test_speed_increases_after_interval() {
        let (mut world, config, mut ramp, mut events) = setup(Vec2::new(6.0, 6.0), 6.0);

        ramp_ball_speed(&mut world, &mut ramp, 3000, &config, &mut events);

        let ball = ball(&world);
        assert_eq!(ball.speed, 6.5);
        assert!((ball.vel.length() - 6.5).abs() < 1e-4);
        assert!((ball.vel.x - ball.vel.y).abs() < 1e-4, "Heading stays at 45°");
        assert!(ball.vel.x > 0.0 && ball.vel.y > 0.0);
        assert!(events.speed_increased);
        assert_eq!(ramp.last_increase_ms, 3000);
    }

    #[test]
    fn test_speed_unchanged_within_interval() {
        let (mut world, config, mut ramp, mut events) = setup(Vec2::new(6.0, 6.0), 6.0);

        ramp_ball_speed(&mut world, &mut ramp, 1000, &config, &mut events);
        ramp_ball_speed(&mut world, &mut ramp, 2999, &config, &mut events);

        assert_eq!(ball(&world).speed, 6.0);
        assert_eq!(ball(&world).vel, Vec2::new(6.0, 6.0));
        assert!(!events.speed_increased);
        assert_eq!(ramp.last_increase_ms, 0, "Timer only restarts once due");
    }

    #[test]
    fn test_negative_components_keep_their_sign() {
        let (mut world, config, mut ramp, mut events) = setup(Vec2::new(-3.0, -4.0), 5.0);

        ramp_ball_speed(&mut world, &mut ramp, 3000, &config, &mut events);

        let ball = ball(&world);
        assert_eq!(ball.speed, 5.5);
        assert!((ball.vel.x - (-3.3)).abs() < 1e-4, "got {}", ball.vel.x);
        assert!((ball.vel.y - (-4.4)).abs() < 1e-4, "got {}", ball.vel.y);
    }

    #[test]
    fn test_no_increase_when_component_at_cap() {
        let (mut world, config, mut ramp, mut events) = setup(Vec2::new(-20.0, 1.0), 20.0);

        ramp_ball_speed(&mut world, &mut ramp, 4000, &config, &mut events);

        assert_eq!(ball(&world).speed, 20.0);
        assert_eq!(ball(&world).vel, Vec2::new(-20.0, 1.0));
        assert!(!events.speed_increased);
        assert_eq!(ramp.last_increase_ms, 4000, "Timer restarts anyway");
    }

    #[test]
    fn test_no_increase_when_vertical_component_at_cap() {
        let (mut world, config, mut ramp, mut events) = setup(Vec2::new(2.0, -21.0), 20.0);

        ramp_ball_speed(&mut world, &mut ramp, 3000, &config, &mut events);

        assert_eq!(ball(&world).speed, 20.0);
        assert_eq!(ball(&world).vel, Vec2::new(2.0, -21.0));
        assert!(!events.speed_increased);
        assert_eq!(ramp.last_increase_ms, 3000);
    }

    #[test]
    fn test_speed_never_exceeds_cap() {
        // Diagonal heading keeps both components under the cap past speed 20
        let (mut world, config, mut ramp, mut events) = setup(Vec2::new(13.5, 13.5), 19.8);

        for i in 1..=10 {
            ramp_ball_speed(&mut world, &mut ramp, i * 3000, &config, &mut events);
            assert!(ball(&world).speed <= config.ball_speed_max);
        }
        assert_eq!(ball(&world).speed, config.ball_speed_max);
    }

    #[test]
    fn test_horizontal_ball_stays_horizontal() {
        let (mut world, config, mut ramp, mut events) = setup(Vec2::new(-6.0, 0.0), 6.0);

        ramp_ball_speed(&mut world, &mut ramp, 3000, &config, &mut events);

        let ball = ball(&world);
        assert!((ball.vel.x + 6.5).abs() < 1e-4);
        assert!(ball.vel.y.abs() < 1e-4);
    }
}
