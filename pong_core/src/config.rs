use crate::{Arena, ConfigError, Params, Side};

/// Game configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub arena_width: f32,
    pub arena_height: f32,
    pub paddle_width: f32,
    pub paddle_height: f32,
    pub paddle_step: f32,
    pub ai_dead_zone: f32,
    pub ball_radius: f32,
    pub ball_speed_initial: f32,
    pub ball_speed_max: f32,
    pub max_deflection_deg: f32,
    pub speed_ramp_interval_ms: u64,
    pub speed_ramp_increment: f32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            arena_width: Params::ARENA_WIDTH,
            arena_height: Params::ARENA_HEIGHT,
            paddle_width: Params::PADDLE_WIDTH,
            paddle_height: Params::PADDLE_HEIGHT,
            paddle_step: Params::PADDLE_STEP,
            ai_dead_zone: Params::AI_DEAD_ZONE,
            ball_radius: Params::BALL_RADIUS,
            ball_speed_initial: Params::BALL_SPEED_INITIAL,
            ball_speed_max: Params::BALL_SPEED_MAX,
            max_deflection_deg: Params::MAX_DEFLECTION_DEG,
            speed_ramp_interval_ms: Params::SPEED_RAMP_INTERVAL_MS,
            speed_ramp_increment: Params::SPEED_RAMP_INCREMENT,
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    /// Check the configuration before any entity is created.
    ///
    /// NaN and infinities are rejected up front, before the range checks.
    #[allow(clippy::neg_cmp_op_on_partial_ord)]
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (field, value) in self.float_fields() {
            if !value.is_finite() {
                return Err(ConfigError::NonFinite { field, value });
            }
        }
        if !(self.arena_width > 0.0 && self.arena_height > 0.0) {
            return Err(ConfigError::ArenaSize {
                width: self.arena_width,
                height: self.arena_height,
            });
        }
        if !(self.paddle_width > 0.0 && self.paddle_height > 0.0) {
            return Err(ConfigError::PaddleSize {
                width: self.paddle_width,
                height: self.paddle_height,
            });
        }
        // Both paddles sit side by side on the same row at serve time
        if self.paddle_width * 2.0 > self.arena_width || self.paddle_height > self.arena_height {
            return Err(ConfigError::PaddleTooLarge {
                width: self.paddle_width,
                height: self.paddle_height,
                arena_width: self.arena_width,
                arena_height: self.arena_height,
            });
        }
        if !(self.ball_radius > 0.0) {
            return Err(ConfigError::BallRadius(self.ball_radius));
        }
        if !(self.ball_speed_initial > 0.0) {
            return Err(ConfigError::InitialSpeed(self.ball_speed_initial));
        }
        if !(self.ball_speed_max >= self.ball_speed_initial) {
            return Err(ConfigError::SpeedCap {
                cap: self.ball_speed_max,
                initial: self.ball_speed_initial,
            });
        }
        if !(self.speed_ramp_increment >= 0.0) {
            return Err(ConfigError::RampIncrement(self.speed_ramp_increment));
        }
        if self.speed_ramp_interval_ms == 0 {
            return Err(ConfigError::RampInterval);
        }
        if !(self.paddle_step > 0.0) {
            return Err(ConfigError::PaddleStep(self.paddle_step));
        }
        if !(self.ai_dead_zone >= 0.0) {
            return Err(ConfigError::DeadZone(self.ai_dead_zone));
        }
        if !(self.max_deflection_deg > 0.0 && self.max_deflection_deg < 90.0) {
            return Err(ConfigError::MaxDeflection(self.max_deflection_deg));
        }
        Ok(())
    }

    fn float_fields(&self) -> [(&'static str, f32); 11] {
        [
            ("arena_width", self.arena_width),
            ("arena_height", self.arena_height),
            ("paddle_width", self.paddle_width),
            ("paddle_height", self.paddle_height),
            ("paddle_step", self.paddle_step),
            ("ai_dead_zone", self.ai_dead_zone),
            ("ball_radius", self.ball_radius),
            ("ball_speed_initial", self.ball_speed_initial),
            ("ball_speed_max", self.ball_speed_max),
            ("max_deflection_deg", self.max_deflection_deg),
            ("speed_ramp_increment", self.speed_ramp_increment),
        ]
    }

    pub fn arena(&self) -> Arena {
        Arena::new(self.arena_width, self.arena_height)
    }

    /// Get left-edge X position for a paddle
    pub fn paddle_x(&self, side: Side) -> f32 {
        match side {
            Side::Human => 0.0,
            Side::Ai => self.arena_width - self.paddle_width,
        }
    }

    /// Top-left Y that vertically centers a paddle in the arena
    pub fn paddle_start_y(&self) -> f32 {
        self.arena_height / 2.0 - self.paddle_height / 2.0
    }

    /// Clamp paddle top-left Y so the whole paddle stays inside the arena
    pub fn clamp_paddle_y(&self, y: f32) -> f32 {
        y.clamp(0.0, self.arena_height - self.paddle_height)
    }

    pub fn max_deflection_rad(&self) -> f32 {
        self.max_deflection_deg.to_radians()
    }
}
