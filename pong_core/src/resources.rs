use std::sync::atomic::{AtomicBool, AtomicU32, AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Instant;

use crate::Side;

/// Monotonic time source, in milliseconds
pub trait Clock {
    fn now_ms(&self) -> u64;
}

/// Clock backed by `std::time::Instant`, counting from its creation
#[derive(Debug, Clone, Copy)]
pub struct SystemClock {
    start: Instant,
}

impl SystemClock {
    pub fn new() -> Self {
        Self {
            start: Instant::now(),
        }
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for SystemClock {
    fn now_ms(&self) -> u64 {
        self.start.elapsed().as_millis() as u64
    }
}

/// Clock that only moves when told to.
///
/// Clones share the same time, so a test can keep one handle and give the
/// other to the game.
#[derive(Debug, Clone, Default)]
pub struct ManualClock(Arc<AtomicU64>);

impl ManualClock {
    pub fn new(start_ms: u64) -> Self {
        Self(Arc::new(AtomicU64::new(start_ms)))
    }

    pub fn advance(&self, ms: u64) {
        self.0.fetch_add(ms, Ordering::Relaxed);
    }

    pub fn set(&self, ms: u64) {
        self.0.store(ms, Ordering::Relaxed);
    }
}

impl Clock for ManualClock {
    fn now_ms(&self) -> u64 {
        self.0.load(Ordering::Relaxed)
    }
}

/// Random number generator
pub struct GameRng(pub rand::rngs::StdRng);

impl GameRng {
    pub fn new(seed: u64) -> Self {
        use rand::SeedableRng;
        Self(rand::rngs::StdRng::seed_from_u64(seed))
    }

    /// Seed from the platform entropy source (needs the `js` feature on wasm32)
    pub fn from_entropy() -> Self {
        use rand::SeedableRng;
        Self(rand::rngs::StdRng::from_entropy())
    }
}

impl Default for GameRng {
    fn default() -> Self {
        Self::new(12345)
    }
}

/// Speed ramp timer
#[derive(Debug, Clone, Copy, Default)]
pub struct SpeedRamp {
    pub last_increase_ms: u64,
}

impl SpeedRamp {
    pub fn new(now_ms: u64) -> Self {
        Self {
            last_increase_ms: now_ms,
        }
    }

    pub fn is_due(&self, now_ms: u64, interval_ms: u64) -> bool {
        now_ms.saturating_sub(self.last_increase_ms) >= interval_ms
    }

    pub fn restart(&mut self, now_ms: u64) {
        self.last_increase_ms = now_ms;
    }
}

/// Events that occurred during this frame
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Events {
    pub ball_hit_wall: bool,
    pub paddle_hit: Option<Side>,
    pub speed_increased: bool,
    pub ball_out: Option<Side>, // side whose goal line the ball crossed
}

impl Events {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.ball_hit_wall = false;
        self.paddle_hit = None;
        self.speed_increased = false;
        self.ball_out = None;
    }
}

#[derive(Debug, Default)]
struct PointerSlot {
    bits: AtomicU32,
    fresh: AtomicBool,
}

/// Latest pointer Y written by the input adapter.
///
/// Writers overwrite, the tick reads at most once. Cloning hands out another
/// handle to the same slot.
#[derive(Debug, Clone, Default)]
pub struct PointerInput {
    slot: Arc<PointerSlot>,
}

impl PointerInput {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&self, y: f32) {
        self.slot.bits.store(y.to_bits(), Ordering::Relaxed);
        self.slot.fresh.store(true, Ordering::Release);
    }

    /// Take the most recent value, if one arrived since the last call
    pub fn take(&self) -> Option<f32> {
        if self.slot.fresh.swap(false, Ordering::Acquire) {
            Some(f32::from_bits(self.slot.bits.load(Ordering::Relaxed)))
        } else {
            None
        }
    }
}
