/// Rejected game configuration
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigError {
    #[error("{field} must be finite, got {value}")]
    NonFinite { field: &'static str, value: f32 },

    #[error("arena must have positive size, got {width}x{height}")]
    ArenaSize { width: f32, height: f32 },

    #[error("paddle must have positive size, got {width}x{height}")]
    PaddleSize { width: f32, height: f32 },

    #[error("paddle {width}x{height} does not fit in arena {arena_width}x{arena_height}")]
    PaddleTooLarge {
        width: f32,
        height: f32,
        arena_width: f32,
        arena_height: f32,
    },

    #[error("ball radius must be positive, got {0}")]
    BallRadius(f32),

    #[error("initial ball speed must be positive, got {0}")]
    InitialSpeed(f32),

    #[error("speed cap {cap} is below initial speed {initial}")]
    SpeedCap { cap: f32, initial: f32 },

    #[error("speed ramp increment must not be negative, got {0}")]
    RampIncrement(f32),

    #[error("speed ramp interval must be non-zero")]
    RampInterval,

    #[error("paddle step must be positive, got {0}")]
    PaddleStep(f32),

    #[error("AI dead-zone must not be negative, got {0}")]
    DeadZone(f32),

    #[error("max deflection must be between 0 and 90 degrees, got {0}")]
    MaxDeflection(f32),
}
