//! Pong - a two-player ball-and-paddle simulation
//!
//! Core modules:
//! - `sim`: Deterministic simulation (paddle motion, ball physics, scoring)
//! - `config`: Match configuration, validated before play starts
//!
//! The crate owns no window, renderer, or input device. A host drives it
//! once per frame through [`sim::tick`], handing in a delta time, an input
//! snapshot, and the match [`Config`]; it reads back entity positions,
//! scores, and per-frame events.

pub mod config;
pub mod sim;

pub use config::Config;
pub use sim::{Ball, FrameEvents, GameState, Paddle, PaddleInput, Side, TickInput};

/// Game configuration constants
pub mod consts {
    /// Fixed simulation timestep for hosts without their own clock (120 Hz)
    pub const SIM_DT: f32 = 1.0 / 120.0;

    /// Playfield dimensions
    pub const VIEWPORT_WIDTH: f32 = 600.0;
    pub const VIEWPORT_HEIGHT: f32 = 400.0;

    /// Paddle defaults - centers inset from the side walls
    pub const PADDLE_WIDTH: f32 = 20.0;
    pub const PADDLE_HEIGHT: f32 = 70.0;
    pub const PADDLE_MARGIN: f32 = 50.0;
    pub const PADDLE_SPEED: f32 = 500.0;

    /// Ball defaults
    pub const BALL_RADIUS: f32 = 12.5;
    pub const BALL_SPEED: f32 = 300.0;
}
