//! Per-frame simulation tick
//!
//! Drives one round: resolve collisions against the projected step, check for
//! a terminal outcome, then commit the step.

use super::collision::resolve;
use super::state::{Outcome, RoundState};

/// Player intent for a single tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickInput {
    /// Move paddle left
    pub left: bool,
    /// Move paddle right
    pub right: bool,
}

impl TickInput {
    /// Horizontal direction: -1, 0 or 1. Left wins when both are held.
    pub fn direction(&self) -> f32 {
        if self.left {
            -1.0
        } else if self.right {
            1.0
        } else {
            0.0
        }
    }
}

/// Turn player intent into paddle velocity. Ignored once the round is over.
pub fn apply_input(state: &mut RoundState, input: &TickInput) {
    if !state.is_active() {
        return;
    }
    state.paddle.dx = input.direction() * state.paddle.speed;
}

/// Advance the round by one tick. A no-op after the round has ended.
pub fn update(state: &mut RoundState) {
    if !state.is_active() {
        return;
    }
    state.time_ticks += 1;

    resolve(state);

    // Loss is checked first and wins a tie with a cleared board
    if ball_leaving_bottom(state) {
        state.finish(Outcome::Over);
        return;
    }
    if state.blocks.all_cleared() {
        state.finish(Outcome::Cleared);
        return;
    }

    state.ball.move_step();
    state.paddle.move_step();
}

/// Apply input, then advance one tick
pub fn tick(state: &mut RoundState, input: &TickInput) {
    apply_input(state, input);
    update(state);
}

fn ball_leaving_bottom(state: &RoundState) -> bool {
    state.playfield.height - state.ball.radius < state.ball.projected().y
}
