use crate::{Ball, Config, Paddle, Side};
use hecs::World;

/// Chase the ball with the AI paddle.
///
/// The paddle moves one fixed step per tick toward the ball's height and
/// holds while the ball is within the dead-zone around its center.
pub fn move_ai_paddle(world: &mut World, config: &Config) {
    let ball_y = world.query::<&Ball>().iter().next().map(|(_e, b)| b.pos.y);

    let Some(ball_y) = ball_y else {
        return; // No ball in world
    };

    for (_entity, paddle) in world.query_mut::<&mut Paddle>() {
        if paddle.side != Side::Ai {
            continue;
        }

        let center = paddle.center_y();
        if ball_y < center - config.ai_dead_zone {
            paddle.y -= config.paddle_step;
        } else if ball_y > center + config.ai_dead_zone {
            paddle.y += config.paddle_step;
        }

        paddle.y = config.clamp_paddle_y(paddle.y);
    }
}
