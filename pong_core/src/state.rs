use glam::Vec2;
use hecs::World;
use log::info;

use crate::{
    create_ball, create_paddle, step, Arena, Ball, Clock, Config, ConfigError, Events, GameRng,
    Paddle, PointerInput, Renderer, Side, Snapshot, SpeedRamp,
};

/// Everything one session of the game owns.
///
/// Created once at startup and driven by calling [`GameState::update`] (or
/// [`GameState::frame`] with a renderer) once per display refresh.
pub struct GameState {
    pub world: World,
    pub config: Config,
    pub arena: Arena,
    pub ramp: SpeedRamp,
    pub events: Events,
    pub rng: GameRng,
    pub tick: u64,
    input: PointerInput,
    clock: Box<dyn Clock>,
}

impl GameState {
    pub fn new(config: Config, clock: Box<dyn Clock>, rng: GameRng) -> Result<Self, ConfigError> {
        config.validate()?;

        let mut world = World::new();
        let arena = config.arena();

        let paddle_y = config.paddle_start_y();
        create_paddle(&mut world, &config, Side::Human, paddle_y);
        create_paddle(&mut world, &config, Side::Ai, paddle_y);

        // First serve heads down and to the right
        let speed = config.ball_speed_initial;
        create_ball(
            &mut world,
            arena.center(),
            Vec2::new(speed, speed),
            config.ball_radius,
            speed,
        );

        let ramp = SpeedRamp::new(clock.now_ms());

        info!(
            "game created: arena {}x{}, ball speed {} (cap {})",
            arena.width, arena.height, speed, config.ball_speed_max
        );

        Ok(Self {
            world,
            config,
            arena,
            ramp,
            events: Events::new(),
            rng,
            tick: 0,
            input: PointerInput::new(),
            clock,
        })
    }

    /// Handle for the input adapter to write pointer positions into
    pub fn input(&self) -> PointerInput {
        self.input.clone()
    }

    /// Advance the simulation by one tick
    pub fn update(&mut self) {
        step(
            &mut self.world,
            &self.config,
            &mut self.ramp,
            self.clock.as_ref(),
            &mut self.rng,
            &self.input,
            &mut self.events,
        );
        self.tick += 1;
    }

    /// Update, then draw the result
    pub fn frame<R: Renderer + ?Sized>(&mut self, renderer: &mut R) {
        self.update();
        if let Some(snapshot) = self.snapshot() {
            renderer.render(&self.arena, &snapshot);
        }
    }

    pub fn snapshot(&self) -> Option<Snapshot> {
        Snapshot::capture(&self.world)
    }

    pub fn ball(&self) -> Option<Ball> {
        self.world
            .query::<&Ball>()
            .iter()
            .next()
            .map(|(_e, ball)| *ball)
    }

    pub fn paddle(&self, side: Side) -> Option<Paddle> {
        self.world
            .query::<&Paddle>()
            .iter()
            .map(|(_e, paddle)| *paddle)
            .find(|paddle| paddle.side == side)
    }

    /// Overwrite the ball's motion, e.g. to set up a rally
    pub fn set_ball(&mut self, pos: Vec2, vel: Vec2, speed: f32) {
        for (_entity, ball) in self.world.query_mut::<&mut Ball>() {
            ball.pos = pos;
            ball.vel = vel;
            ball.speed = speed;
        }
    }
}
