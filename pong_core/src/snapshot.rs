//! Read-only view of the entities handed to a renderer once per tick

use hecs::World;

use crate::{Arena, Ball, Paddle, Side};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RectSnapshot {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl From<&Paddle> for RectSnapshot {
    fn from(paddle: &Paddle) -> Self {
        Self {
            x: paddle.x,
            y: paddle.y,
            w: paddle.width,
            h: paddle.height,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CircleSnapshot {
    pub x: f32,
    pub y: f32,
    pub r: f32,
}

impl From<&Ball> for CircleSnapshot {
    fn from(ball: &Ball) -> Self {
        Self {
            x: ball.pos.x,
            y: ball.pos.y,
            r: ball.radius,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Snapshot {
    pub human_paddle: RectSnapshot,
    pub ai_paddle: RectSnapshot,
    pub ball: CircleSnapshot,
}

impl Snapshot {
    /// Returns `None` unless the world holds both paddles and a ball
    pub fn capture(world: &World) -> Option<Self> {
        let mut human_paddle = None;
        let mut ai_paddle = None;
        for (_e, paddle) in world.query::<&Paddle>().iter() {
            match paddle.side {
                Side::Human => human_paddle = Some(RectSnapshot::from(paddle)),
                Side::Ai => ai_paddle = Some(RectSnapshot::from(paddle)),
            }
        }

        let ball = world
            .query::<&Ball>()
            .iter()
            .next()
            .map(|(_e, ball)| CircleSnapshot::from(ball))?;

        Some(Self {
            human_paddle: human_paddle?,
            ai_paddle: ai_paddle?,
            ball,
        })
    }
}

/// Draws a frame. Never feeds anything back into the simulation.
pub trait Renderer {
    fn render(&mut self, arena: &Arena, snapshot: &Snapshot);
}
