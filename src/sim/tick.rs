//! Per-frame simulation update
//!
//! One frame advances in a fixed order: both paddle controllers, then the
//! ball. The ball update consumes the paddle transforms produced earlier in
//! the same frame, so [`tick`] must not be reordered.

use super::collision::{Aabb, circle_hits_rect};
use super::state::{Ball, GameState, Paddle, Side};
use crate::config::Config;

/// Directional intent for one paddle
#[derive(Debug, Clone, Copy, Default)]
pub struct PaddleInput {
    pub up: bool,
    pub down: bool,
}

/// Input snapshot for a single frame (deterministic)
#[derive(Debug, Clone, Copy, Default)]
pub struct TickInput {
    pub left: PaddleInput,
    pub right: PaddleInput,
}

impl TickInput {
    pub fn for_side(&self, side: Side) -> PaddleInput {
        match side {
            Side::Left => self.left,
            Side::Right => self.right,
        }
    }
}

/// What happened during one frame, for the host (sound, score display)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FrameEvents {
    pub wall_bounce: bool,
    pub paddle_bounce: bool,
    /// Side whose score was credited this frame
    pub scored: Option<Side>,
}

/// Advance one paddle by one frame.
///
/// Up moves toward y = 0, down toward y = viewport_height. When both signals
/// are held, down wins: the branches are evaluated up-then-down and the last
/// write sticks. The result is clamped so the paddle never leaves the
/// playfield.
pub fn update_paddle(paddle: &mut Paddle, input: PaddleInput, viewport_height: f32, dt: f32) {
    let mut velocity = 0.0;
    if input.up {
        velocity = -paddle.speed;
    }
    if input.down {
        velocity = paddle.speed;
    }

    let half = paddle.size.y / 2.0;
    paddle.pos.y += velocity * dt;
    paddle.pos.y = paddle.pos.y.clamp(half, viewport_height - half);
}

/// Advance the ball by one frame: integrate, reflect off ceiling and floor,
/// detect scoring, then resolve paddle contact.
///
/// Ceiling and floor checks clamp the position before flipping the velocity,
/// so a large `dt` cannot drive the ball out of the playfield and the next
/// frame sees the clamped position. Paddle contact reverses the horizontal
/// velocity with no positional correction; the ball may overlap a paddle for
/// a frame before the reversed velocity carries it out.
pub fn update_ball(
    ball: &mut Ball,
    paddles: &mut [Paddle; 2],
    config: &Config,
    dt: f32,
) -> FrameEvents {
    let mut events = FrameEvents::default();
    let viewport = config.viewport;

    ball.pos += ball.vel * dt;

    // Independent ifs: the clamp must land even when one integration step
    // overshoots a boundary
    if ball.pos.y <= ball.radius {
        ball.pos.y = ball.radius;
        ball.vel.y = -ball.vel.y;
        events.wall_bounce = true;
    }
    if ball.pos.y >= viewport.y - ball.radius {
        ball.pos.y = viewport.y - ball.radius;
        ball.vel.y = -ball.vel.y;
        events.wall_bounce = true;
    }

    // Crossing a side boundary ends the point: the conceding side's opponent
    // is credited and the ball is re-served toward the conceder
    if ball.pos.x <= ball.radius {
        score_point(ball, paddles, Side::Left, config, &mut events);
    } else if ball.pos.x >= viewport.x - ball.radius {
        score_point(ball, paddles, Side::Right, config, &mut events);
    }

    for paddle in paddles.iter() {
        let bounds = Aabb::from_center_size(paddle.pos, paddle.size);
        if circle_hits_rect(ball.pos, ball.radius, bounds) {
            ball.vel.x = -ball.vel.x;
            events.paddle_bounce = true;
            log::debug!("ball bounced off {:?} paddle", paddle.side);
        }
    }

    events
}

fn score_point(
    ball: &mut Ball,
    paddles: &mut [Paddle; 2],
    conceding: Side,
    config: &Config,
    events: &mut FrameEvents,
) {
    let scorer = conceding.opponent();
    paddles[scorer.index()].score += 1;
    ball.serve(config.center(), conceding);
    events.scored = Some(scorer);

    log::info!(
        "{:?} scores ({} - {})",
        scorer,
        paddles[Side::Left.index()].score,
        paddles[Side::Right.index()].score,
    );
}

/// Advance the whole match by one frame
pub fn tick(state: &mut GameState, input: &TickInput, config: &Config, dt: f32) -> FrameEvents {
    for paddle in state.paddles.iter_mut() {
        update_paddle(paddle, input.for_side(paddle.side), config.viewport.y, dt);
    }
    update_ball(&mut state.ball, &mut state.paddles, config, dt)
}
