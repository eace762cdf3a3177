use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Which end of the table a player defends.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    /// The human-controlled side.
    Home,
    /// The opponent side, CPU-controlled by default.
    Away,
}

impl Side {
    pub fn other(self) -> Side {
        match self {
            Side::Home => Side::Away,
            Side::Away => Side::Home,
        }
    }
}

/// Ball component - the single in-play ball body
#[derive(Debug, Clone, Copy)]
pub struct Ball {
    pub pos: Vec2,
    pub vel: Vec2,
}

impl Ball {
    /// A fresh ball rests at its kickoff position until something hits it.
    pub fn at_rest(pos: Vec2) -> Self {
        Self {
            pos,
            vel: Vec2::ZERO,
        }
    }

    pub fn speed(&self) -> f32 {
        self.vel.length()
    }
}

/// Paddle component - one player figure, sliding along a fixed X
#[derive(Debug, Clone, Copy)]
pub struct Paddle {
    pub side: Side,
    pub x: f32,
    pub y: f32,
}

impl Paddle {
    pub fn new(side: Side, x: f32, y: f32) -> Self {
        Self { side, x, y }
    }
}

/// Slide intent for a paddle, in -1.0..=1.0
#[derive(Debug, Clone, Copy, Default)]
pub struct PaddleIntent {
    pub dir: f32,
}

impl PaddleIntent {
    pub fn new() -> Self {
        Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_side_other() {
        assert_eq!(Side::Home.other(), Side::Away);
        assert_eq!(Side::Away.other(), Side::Home);
    }

    #[test]
    fn test_ball_at_rest_has_zero_speed() {
        let ball = Ball::at_rest(Vec2::new(3.0, 4.0));
        assert_eq!(ball.pos, Vec2::new(3.0, 4.0));
        assert_eq!(ball.speed(), 0.0);
    }

    #[test]
    fn test_ball_speed_is_velocity_magnitude() {
        let mut ball = Ball::at_rest(Vec2::ZERO);
        ball.vel = Vec2::new(3.0, 4.0);
        assert_eq!(ball.speed(), 5.0);
    }
}
