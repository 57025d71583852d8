//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Every update receives its inputs explicitly (delta time, input snapshot,
//!   viewport bounds) - no engine singletons
//! - Fixed update order within a frame: both paddles, then the ball
//! - No rendering or platform dependencies

pub mod collision;
pub mod state;
pub mod tick;

pub use collision::{Aabb, circle_hits_rect};
pub use state::{Ball, GameState, Paddle, Side};
pub use tick::{FrameEvents, PaddleInput, TickInput, tick, update_ball, update_paddle};
