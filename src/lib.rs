//! Block Breaker - single-screen breakout simulation core
//!
//! Core modules:
//! - `sim`: Deterministic simulation (entities, collisions, round state)
//! - `platform`: Input key mapping
//! - `audio`: Sound cue interface (playback lives outside the crate)
//! - `renderer`: Draw interface (drawing lives outside the crate)
//! - `settings`: Round configuration

pub mod audio;
pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use settings::{ConfigError, RoundConfig};

use glam::Vec2;

/// Game configuration constants
pub mod consts {
    /// Playfield dimensions
    pub const PLAYFIELD_WIDTH: f32 = 320.0;
    pub const PLAYFIELD_HEIGHT: f32 = 480.0;
    /// Dead band at the top of the playfield (score bar lives here)
    pub const TOP_MARGIN: f32 = 20.0;

    /// Ball defaults
    pub const BALL_START_X: f32 = 20.0;
    pub const BALL_START_Y: f32 = 440.0;
    pub const BALL_START_DX: f32 = 5.0;
    pub const BALL_START_DY: f32 = 2.0;
    pub const BALL_RADIUS: f32 = 2.0;

    /// Paddle defaults
    pub const PADDLE_START_X: f32 = 30.0;
    pub const PADDLE_Y: f32 = 460.0;
    pub const PADDLE_WIDTH: f32 = 40.0;
    pub const PADDLE_HEIGHT: f32 = 4.0;
    pub const PADDLE_SPEED: f32 = 5.0;

    /// Block defaults
    pub const BLOCK_WIDTH: f32 = 52.0;
    pub const BLOCK_HEIGHT: f32 = 20.0;
    pub const BLOCK_POINTS: u32 = 10;
    pub const REINFORCED_BLOCK_HP: u8 = 2;
    pub const REINFORCED_BLOCK_POINTS: u32 = 20;
}

/// Axis-aligned box (top-left origin, y grows downward)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub min: Vec2,
    pub size: Vec2,
}

impl Aabb {
    #[inline]
    pub fn new(min: Vec2, size: Vec2) -> Self {
        Self { min, size }
    }

    #[inline]
    pub fn max(&self) -> Vec2 {
        self.min + self.size
    }

    /// Strict containment test against the box grown by `margin` on every side.
    ///
    /// A point exactly on the grown edge is outside.
    #[inline]
    pub fn expanded_contains(&self, point: Vec2, margin: f32) -> bool {
        let max = self.max();
        self.min.x - margin < point.x
            && point.x < max.x + margin
            && self.min.y - margin < point.y
            && point.y < max.y + margin
    }
}
