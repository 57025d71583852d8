//! Headless demo host
//!
//! Drives the simulation the way a real engine would: a fixed-timestep loop
//! feeding per-frame input snapshots, here supplied by a ball-tracking
//! autopilot on both paddles. Frame events surface through the log; the
//! final match state prints as a JSON snapshot.
//!
//! Run with `RUST_LOG=debug` to see individual bounces.

use pong_core::Config;
use pong_core::consts::SIM_DT;
use pong_core::sim::{GameState, PaddleInput, Side, TickInput, tick};

/// Vertical slack before the autopilot reacts; without it the paddles
/// oscillate around the ball's row every frame
const TRACK_DEADZONE: f32 = 10.0;

/// Simulated match length in seconds
const MATCH_SECONDS: f32 = 60.0;

/// Chase the ball vertically, the simplest input source that rallies
fn autopilot(state: &GameState, side: Side) -> PaddleInput {
    let paddle = state.paddle(side);
    let dy = state.ball.pos.y - paddle.pos.y;
    PaddleInput {
        up: dy < -TRACK_DEADZONE,
        down: dy > TRACK_DEADZONE,
    }
}

fn main() {
    env_logger::init();

    let config = Config::default();
    let mut state = GameState::new(&config);

    let frames = (MATCH_SECONDS / SIM_DT) as u32;
    log::info!("running {MATCH_SECONDS}s match ({frames} frames at {SIM_DT:.4}s)");

    for _ in 0..frames {
        let input = TickInput {
            left: autopilot(&state, Side::Left),
            right: autopilot(&state, Side::Right),
        };
        tick(&mut state, &input, &config, SIM_DT);
    }

    log::info!(
        "final score: {} - {}",
        state.paddle(Side::Left).score,
        state.paddle(Side::Right).score,
    );

    match serde_json::to_string_pretty(&state) {
        Ok(snapshot) => println!("{snapshot}"),
        Err(err) => log::error!("failed to serialize final state: {err}"),
    }
}
