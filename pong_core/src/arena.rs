use glam::Vec2;

use crate::{Ball, Paddle};

/// Axis-aligned bounding box
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub min: Vec2,
    pub max: Vec2,
}

impl Aabb {
    pub fn new(min: Vec2, max: Vec2) -> Self {
        Self { min, max }
    }

    pub fn from_paddle(paddle: &Paddle) -> Self {
        Self {
            min: Vec2::new(paddle.x, paddle.y),
            max: Vec2::new(paddle.x + paddle.width, paddle.y + paddle.height),
        }
    }

    /// Bounding square of the ball, not the circle itself
    pub fn from_ball(ball: &Ball) -> Self {
        let half = Vec2::splat(ball.radius);
        Self {
            min: ball.pos - half,
            max: ball.pos + half,
        }
    }

    /// Strict overlap test: boxes that only share an edge do not overlap
    pub fn overlaps(&self, other: &Aabb) -> bool {
        self.min.x < other.max.x
            && self.max.x > other.min.x
            && self.min.y < other.max.y
            && self.max.y > other.min.y
    }
}

/// Ball vs paddle hit test
pub fn ball_hits_paddle(paddle: &Paddle, ball: &Ball) -> bool {
    Aabb::from_ball(ball).overlaps(&Aabb::from_paddle(paddle))
}

/// Playing field, origin at the top-left corner
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Arena {
    pub width: f32,
    pub height: f32,
}

impl Arena {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    pub fn center(&self) -> Vec2 {
        Vec2::new(self.width / 2.0, self.height / 2.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Side;

    fn paddle() -> Paddle {
        Paddle::new(Side::Human, 0.0, 255.0, 12.0, 90.0)
    }

    fn ball_at(x: f32, y: f32) -> Ball {
        Ball::new(Vec2::new(x, y), Vec2::ZERO, 10.0, 6.0)
    }

    #[test]
    fn test_ball_overlapping_paddle_face() {
        assert!(ball_hits_paddle(&paddle(), &ball_at(15.0, 300.0)));
    }

    #[test]
    fn test_ball_touching_paddle_edge_does_not_hit() {
        // Ball's left edge sits exactly on the paddle's right edge
        assert!(!ball_hits_paddle(&paddle(), &ball_at(22.0, 300.0)));
        // Ball's bottom edge sits exactly on the paddle's top edge
        assert!(!ball_hits_paddle(&paddle(), &ball_at(6.0, 245.0)));
    }

    #[test]
    fn test_ball_above_paddle_misses() {
        assert!(!ball_hits_paddle(&paddle(), &ball_at(6.0, 100.0)));
    }

    #[test]
    fn test_ball_clipping_paddle_corner_hits() {
        // Bounding boxes overlap by one unit in each axis
        assert!(ball_hits_paddle(&paddle(), &ball_at(21.0, 246.0)));
    }

    #[test]
    fn test_aabb_overlap_is_symmetric() {
        let a = Aabb::new(Vec2::new(0.0, 0.0), Vec2::new(10.0, 10.0));
        let b = Aabb::new(Vec2::new(5.0, 5.0), Vec2::new(15.0, 15.0));
        assert!(a.overlaps(&b));
        assert!(b.overlaps(&a));
    }

    #[test]
    fn test_arena_center() {
        let arena = Arena::new(800.0, 600.0);
        assert_eq!(arena.center(), Vec2::new(400.0, 300.0));
    }
}
