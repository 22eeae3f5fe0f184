pub mod arena;
pub mod components;
pub mod config;
pub mod error;
pub mod params;
pub mod resources;
pub mod snapshot;
pub mod state;
pub mod systems;

pub use arena::*;
pub use components::*;
pub use config::*;
pub use error::*;
pub use params::*;
pub use resources::*;
pub use snapshot::*;
pub use state::*;

use hecs::World;
use systems::*;

/// Run one tick of the deterministic Pong simulation
pub fn step(
    world: &mut World,
    config: &Config,
    ramp: &mut SpeedRamp,
    clock: &dyn Clock,
    rng: &mut GameRng,
    input: &PointerInput,
    events: &mut Events,
) {
    let arena = config.arena();
    let now_ms = clock.now_ms();

    // Clear events at start of frame
    events.clear();

    // 0. Ingest latest pointer position
    if let Some(pointer_y) = input.take() {
        apply_pointer_input(world, config, pointer_y);
    }

    // 1. Speed ramp
    ramp_ball_speed(world, ramp, now_ms, config, events);

    // 2. Move ball
    move_ball(world);

    // 3. Top/bottom walls
    bounce_off_walls(world, &arena, events);

    // 4-5. Paddles, human first
    check_paddle_hit(world, Side::Human, config, events);
    check_paddle_hit(world, Side::Ai, config, events);

    // 6. Ball left the arena
    check_out_of_bounds(world, &arena, config, ramp, now_ms, rng, events);

    // 7. AI paddle
    move_ai_paddle(world, config);
}

/// Helper to create a paddle entity sized from the config
pub fn create_paddle(world: &mut World, config: &Config, side: Side, y: f32) -> hecs::Entity {
    world.spawn((Paddle::new(
        side,
        config.paddle_x(side),
        y,
        config.paddle_width,
        config.paddle_height,
    ),))
}

/// Helper to create the ball entity
pub fn create_ball(
    world: &mut World,
    pos: glam::Vec2,
    vel: glam::Vec2,
    radius: f32,
    speed: f32,
) -> hecs::Entity {
    world.spawn((Ball::new(pos, vel, radius, speed),))
}
