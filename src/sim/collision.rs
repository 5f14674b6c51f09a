//! Collision detection and response
//!
//! Every check looks one step ahead: it tests the position an entity would
//! reach with its current velocity and corrects the velocity before the step
//! is committed. Reflection is a plain sign flip of one velocity component.
//! Paddle and block hits only ever flip `dy`.

use glam::Vec2;

use super::state::{Axis, BlockHit, GameEvent, RoundState};
use crate::Aabb;

/// Run every collision check for one tick, in order.
///
/// Order matters: each check reads the velocity left behind by the previous one.
pub fn resolve(state: &mut RoundState) {
    ball_vs_walls(state);
    ball_vs_paddle(state);
    paddle_vs_walls(state);
    ball_vs_blocks(state);
}

/// True if a ball of `radius` centred at `point` overlaps `bounds`
#[inline]
pub fn ball_hits_box(point: Vec2, radius: f32, bounds: &Aabb) -> bool {
    bounds.expanded_contains(point, radius)
}

/// Side walls first; a side hit skips the top wall for this tick.
/// The bottom edge is not a wall.
fn ball_vs_walls(state: &mut RoundState) {
    let field = state.playfield;
    let radius = state.ball.radius;
    let next = state.ball.projected();

    if next.x < radius || field.width - radius < next.x {
        state.ball.vel.x = -state.ball.vel.x;
        state.push_event(GameEvent::WallBounce { axis: Axis::X });
        return;
    }

    if next.y < radius + field.top_margin {
        state.ball.vel.y = -state.ball.vel.y;
        state.push_event(GameEvent::WallBounce { axis: Axis::Y });
    }
}

fn ball_vs_paddle(state: &mut RoundState) {
    let next = state.ball.projected();
    if ball_hits_box(next, state.ball.radius, &state.paddle.bounds()) {
        state.ball.vel.y = -state.ball.vel.y;
        log::debug!("Paddle hit at ({:.1}, {:.1})", next.x, next.y);
        state.push_event(GameEvent::PaddleHit);
    }
}

/// Stop the paddle flush against a side wall instead of letting it leave the field
fn paddle_vs_walls(state: &mut RoundState) {
    let right_limit = state.playfield.width - state.paddle.width();
    let next_x = state.paddle.projected_x();

    let clamp_to = if next_x < 0.0 {
        Some(0.0)
    } else if right_limit < next_x {
        Some(right_limit)
    } else {
        None
    };

    if let Some(x) = clamp_to {
        state.paddle.dx = 0.0;
        state.paddle.pos.x = x;
        state.push_event(GameEvent::PaddleClamped);
    }
}

/// Test every active block against the same projected point.
/// Several blocks can be hit in one tick; each hit flips `dy` again.
fn ball_vs_blocks(state: &mut RoundState) {
    let next = state.ball.projected();
    let radius = state.ball.radius;
    let mut hits = Vec::new();

    for (index, block) in state.blocks.iter_mut().enumerate() {
        if !block.active || !ball_hits_box(next, radius, &block.bounds()) {
            continue;
        }

        let event = match block.hit() {
            BlockHit::Destroyed { points } => {
                state.score.add(points);
                log::debug!("Block {} destroyed (+{})", index, points);
                GameEvent::BlockHit {
                    index,
                    destroyed: true,
                    points,
                }
            }
            BlockHit::Damaged { hp_left } => {
                log::debug!("Block {} damaged, {} hp left", index, hp_left);
                GameEvent::BlockHit {
                    index,
                    destroyed: false,
                    points: 0,
                }
            }
            BlockHit::Ignored => continue,
        };
        state.ball.vel.y = -state.ball.vel.y;
        hits.push(event);
    }

    for event in hits {
        state.push_event(event);
    }
}
