//! Match configuration
//!
//! All tuning for a match lives here; the simulation carries no globals.
//! Invalid values are a host configuration error and fail fast in
//! [`Config::validate`] rather than producing undefined motion.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::sim::Side;

/// Static configuration for a match
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Playfield dimensions (width, height)
    pub viewport: Vec2,
    /// Paddle extents (width, height)
    pub paddle_size: Vec2,
    /// Paddle vertical speed (units/sec)
    pub paddle_speed: f32,
    /// Distance of each paddle center from its side wall
    pub paddle_margin: f32,
    /// Ball radius
    pub ball_radius: f32,
    /// Per-axis ball speed (units/sec)
    pub ball_speed: f32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            viewport: Vec2::new(VIEWPORT_WIDTH, VIEWPORT_HEIGHT),
            paddle_size: Vec2::new(PADDLE_WIDTH, PADDLE_HEIGHT),
            paddle_speed: PADDLE_SPEED,
            paddle_margin: PADDLE_MARGIN,
            ball_radius: BALL_RADIUS,
            ball_speed: BALL_SPEED,
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    /// Check preconditions, panicking on the first violation.
    ///
    /// A viewport that cannot fit the ball or a paddle breaks the wall-clamp
    /// and paddle-clamp arithmetic, so a bad config must never reach the
    /// frame loop.
    pub fn validate(&self) {
        assert!(self.ball_radius > 0.0, "ball_radius must be positive");
        assert!(self.ball_speed > 0.0, "ball_speed must be positive");
        assert!(self.paddle_speed > 0.0, "paddle_speed must be positive");
        assert!(
            self.paddle_size.x > 0.0 && self.paddle_size.y > 0.0,
            "paddle_size must be positive"
        );
        assert!(
            self.viewport.x > 2.0 * self.ball_radius,
            "viewport width must exceed the ball diameter"
        );
        assert!(
            self.viewport.y > 2.0 * self.ball_radius,
            "viewport height must exceed the ball diameter"
        );
        assert!(
            self.viewport.y >= self.paddle_size.y,
            "viewport height must fit a paddle"
        );
    }

    /// Center of the playfield (the serve point)
    pub fn center(&self) -> Vec2 {
        self.viewport / 2.0
    }

    /// X position of a paddle's center
    pub fn paddle_x(&self, side: Side) -> f32 {
        match side {
            Side::Left => self.paddle_margin,
            Side::Right => self.viewport.x - self.paddle_margin,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        Config::default().validate();
    }

    #[test]
    fn test_paddle_x() {
        let config = Config::new();
        assert_eq!(config.paddle_x(Side::Left), 50.0, "Left paddle X position");
        assert_eq!(config.paddle_x(Side::Right), 550.0, "Right paddle X position");
    }

    #[test]
    fn test_center() {
        let config = Config::new();
        assert_eq!(config.center(), Vec2::new(300.0, 200.0));
    }

    #[test]
    #[should_panic(expected = "ball_radius must be positive")]
    fn test_rejects_zero_radius() {
        let config = Config {
            ball_radius: 0.0,
            ..Config::default()
        };
        config.validate();
    }

    #[test]
    #[should_panic(expected = "viewport height must exceed the ball diameter")]
    fn test_rejects_viewport_smaller_than_ball() {
        let config = Config {
            viewport: Vec2::new(600.0, 20.0),
            paddle_size: Vec2::new(20.0, 10.0),
            ..Config::default()
        };
        config.validate();
    }
}
