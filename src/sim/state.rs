//! Game state and core simulation types
//!
//! Everything a match needs to resume or replay deterministically lives here.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::config::Config;

/// Which half of the playfield a paddle defends
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    /// The other side
    pub fn opponent(self) -> Side {
        match self {
            Side::Left => Side::Right,
            Side::Right => Side::Left,
        }
    }

    /// Index into [`GameState::paddles`]
    pub fn index(self) -> usize {
        match self {
            Side::Left => 0,
            Side::Right => 1,
        }
    }

    /// Horizontal direction of travel toward this side
    pub fn sign(self) -> f32 {
        match self {
            Side::Left => -1.0,
            Side::Right => 1.0,
        }
    }
}

/// A player's paddle
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Paddle {
    /// Fixed at creation
    pub side: Side,
    /// Center of the paddle; only `pos.y` changes after creation
    pub pos: Vec2,
    /// Extents (width, height), read-only after creation
    pub size: Vec2,
    /// Vertical speed (units/sec)
    pub speed: f32,
    /// Points scored against the opposite side
    pub score: u32,
}

impl Paddle {
    pub fn new(side: Side, pos: Vec2, size: Vec2, speed: f32) -> Self {
        Self {
            side,
            pos,
            size,
            speed,
            score: 0,
        }
    }
}

/// The ball
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ball {
    /// Center
    pub pos: Vec2,
    /// Each axis component keeps magnitude `speed`; bounces and serves only
    /// flip signs
    pub vel: Vec2,
    pub radius: f32,
    pub speed: f32,
}

impl Ball {
    pub fn new(radius: f32, speed: f32) -> Self {
        Self {
            pos: Vec2::ZERO,
            vel: Vec2::ZERO,
            radius,
            speed,
        }
    }

    /// Reset to the serve point and send the ball toward `side`.
    ///
    /// The vertical component is always positive at serve, so every serve
    /// travels toward the lower half regardless of the prior trajectory.
    pub fn serve(&mut self, center: Vec2, side: Side) {
        self.pos = center;
        self.vel = Vec2::new(side.sign() * self.speed, self.speed);
    }
}

/// Complete match state (deterministic, serializable)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    /// Both paddles, indexed by [`Side::index`]
    pub paddles: [Paddle; 2],
    pub ball: Ball,
}

impl GameState {
    /// Set up a match: paddles centered against their side walls, ball
    /// served toward the right.
    ///
    /// Panics if `config` violates its documented preconditions.
    pub fn new(config: &Config) -> Self {
        config.validate();

        let mid_y = config.center().y;
        let paddles = [Side::Left, Side::Right].map(|side| {
            Paddle::new(
                side,
                Vec2::new(config.paddle_x(side), mid_y),
                config.paddle_size,
                config.paddle_speed,
            )
        });

        let mut ball = Ball::new(config.ball_radius, config.ball_speed);
        ball.serve(config.center(), Side::Right);

        Self { paddles, ball }
    }

    pub fn paddle(&self, side: Side) -> &Paddle {
        &self.paddles[side.index()]
    }

    pub fn paddle_mut(&mut self, side: Side) -> &mut Paddle {
        &mut self.paddles[side.index()]
    }
}
