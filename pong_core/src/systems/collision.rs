use crate::{ball_hits_paddle, Arena, Ball, Config, Events, Paddle, Side};
use glam::Vec2;
use hecs::World;

/// Reflect the ball off the top and bottom walls.
///
/// Only the velocity changes. The ball may sit slightly past the wall for a
/// tick.
pub fn bounce_off_walls(world: &mut World, arena: &Arena, events: &mut Events) {
    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        if ball.top() < 0.0 || ball.bottom() > arena.height {
            ball.vel.y = -ball.vel.y;
            events.ball_hit_wall = true;
        }
    }
}

/// Check the ball against one paddle and send it back across the arena
pub fn check_paddle_hit(world: &mut World, side: Side, config: &Config, events: &mut Events) {
    let paddle = world
        .query::<&Paddle>()
        .iter()
        .map(|(_e, p)| *p)
        .find(|p| p.side == side);

    let Some(paddle) = paddle else {
        return; // No paddle for this side
    };

    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        if !ball_hits_paddle(&paddle, ball) {
            continue;
        }

        // Push ball out of paddle, away from its goal
        let direction = match side {
            Side::Human => {
                ball.pos.x = paddle.x + paddle.width + ball.radius;
                1.0
            }
            Side::Ai => {
                ball.pos.x = paddle.x - ball.radius;
                -1.0
            }
        };

        // Relative hit position from -1 (top edge) to 1 (bottom edge)
        let half_height = paddle.height / 2.0;
        let collide_point = ((ball.pos.y - paddle.center_y()) / half_height).clamp(-1.0, 1.0);
        let angle = collide_point * config.max_deflection_rad();

        ball.speed = ball.speed.min(config.ball_speed_max);
        ball.vel = Vec2::new(
            direction * ball.speed * angle.cos(),
            ball.speed * angle.sin(),
        );

        events.paddle_hit = Some(side);
    }
}
