/// Game tuning parameters for Pong
#[derive(Debug, Clone, Copy)]
pub struct Params;

impl Params {
    // Arena
    pub const ARENA_WIDTH: f32 = 800.0;
    pub const ARENA_HEIGHT: f32 = 600.0;

    // Paddle
    pub const PADDLE_WIDTH: f32 = 12.0;
    pub const PADDLE_HEIGHT: f32 = 90.0;
    pub const PADDLE_STEP: f32 = 6.0; // units per tick (AI paddle)
    pub const AI_DEAD_ZONE: f32 = 20.0; // +/- around paddle center

    // Ball
    pub const BALL_RADIUS: f32 = 10.0;
    pub const BALL_SPEED_INITIAL: f32 = 6.0; // units per tick
    pub const BALL_SPEED_MAX: f32 = 20.0;
    pub const MAX_DEFLECTION_DEG: f32 = 45.0;

    // Speed ramp
    pub const SPEED_RAMP_INTERVAL_MS: u64 = 3000;
    pub const SPEED_RAMP_INCREMENT: f32 = 0.5;
}
