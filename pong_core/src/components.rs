use glam::Vec2;

/// Which side of the arena a paddle defends
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    /// Left paddle, driven by pointer input
    Human,
    /// Right paddle, driven by the AI controller
    Ai,
}

/// Paddle component - axis-aligned box anchored at its top-left corner
#[derive(Debug, Clone, Copy)]
pub struct Paddle {
    pub side: Side,
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Paddle {
    pub fn new(side: Side, x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            side,
            x,
            y,
            width,
            height,
        }
    }

    pub fn center_y(&self) -> f32 {
        self.y + self.height / 2.0
    }
}

/// Ball component - the pong ball
///
/// `speed` is the target magnitude of `vel`. The two are kept only loosely in
/// sync: paddle hits and the speed ramp rebuild `vel` from an angle and `speed`.
#[derive(Debug, Clone, Copy)]
pub struct Ball {
    pub pos: Vec2, // center
    pub vel: Vec2,
    pub radius: f32,
    pub speed: f32,
}

impl Ball {
    pub fn new(pos: Vec2, vel: Vec2, radius: f32, speed: f32) -> Self {
        Self {
            pos,
            vel,
            radius,
            speed,
        }
    }

    pub fn left(&self) -> f32 {
        self.pos.x - self.radius
    }

    pub fn right(&self) -> f32 {
        self.pos.x + self.radius
    }

    pub fn top(&self) -> f32 {
        self.pos.y - self.radius
    }

    pub fn bottom(&self) -> f32 {
        self.pos.y + self.radius
    }

    /// Serve from `center` at `speed`, keeping the current horizontal direction.
    /// The vertical direction is drawn from `rng`.
    pub fn reset(&mut self, center: Vec2, speed: f32, rng: &mut crate::GameRng) {
        use rand::Rng;

        let dir_x = if self.vel.x > 0.0 { 1.0 } else { -1.0 };
        let dir_y = if rng.0.gen_bool(0.5) { 1.0 } else { -1.0 };

        self.pos = center;
        self.speed = speed;
        self.vel = Vec2::new(dir_x * speed, dir_y * speed);
    }
}
