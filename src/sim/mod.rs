//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must stay pure:
//! - One tick per frame, no wall-clock time
//! - Fixed block iteration order
//! - No rendering, audio or platform dependencies; side effects leave as events

pub mod collision;
pub mod layout;
pub mod state;
pub mod tick;

pub use collision::{ball_hits_box, resolve};
pub use layout::{BlockSpec, Layout};
pub use state::{
    Axis, Ball, Block, BlockHit, BlockRegistry, GameEvent, Outcome, Paddle, Playfield,
    RoundState, Score,
};
pub use tick::{TickInput, apply_input, tick, update};
