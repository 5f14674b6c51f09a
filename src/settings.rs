//! Round configuration
//!
//! Every field has a default, so a JSON file only needs the values it changes.

use std::path::{Path, PathBuf};

use glam::Vec2;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::*;
use crate::sim::{Layout, Playfield};

/// Errors loading or validating a [`RoundConfig`]
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid config: {0}")]
    Invalid(String),
}

/// Ball starting state
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BallConfig {
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
}

impl Default for BallConfig {
    fn default() -> Self {
        Self {
            pos: Vec2::new(BALL_START_X, BALL_START_Y),
            vel: Vec2::new(BALL_START_DX, BALL_START_DY),
            radius: BALL_RADIUS,
        }
    }
}

/// Paddle starting state
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PaddleConfig {
    pub pos: Vec2,
    pub size: Vec2,
    pub speed: f32,
}

impl Default for PaddleConfig {
    fn default() -> Self {
        Self {
            pos: Vec2::new(PADDLE_START_X, PADDLE_Y),
            size: Vec2::new(PADDLE_WIDTH, PADDLE_HEIGHT),
            speed: PADDLE_SPEED,
        }
    }
}

/// Text shown when the round ends
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Messages {
    pub cleared: String,
    pub over: String,
}

impl Default for Messages {
    fn default() -> Self {
        Self {
            cleared: "GAME CLEAR".to_string(),
            over: "GAME OVER".to_string(),
        }
    }
}

/// Sound cue assets and mix
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AudioConfig {
    pub paddle_hit: String,
    pub block_hit: String,
    /// 0.0 - 1.0
    pub volume: f32,
    pub muted: bool,
}

impl Default for AudioConfig {
    fn default() -> Self {
        Self {
            paddle_hit: "sounds/move.mp3".to_string(),
            block_hit: "sounds/bomb.mp3".to_string(),
            volume: 0.8,
            muted: false,
        }
    }
}

/// Everything needed to set up one round
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RoundConfig {
    pub playfield: Playfield,
    pub ball: BallConfig,
    pub paddle: PaddleConfig,
    pub layout: Layout,
    pub messages: Messages,
    pub audio: AudioConfig,
}

impl Default for RoundConfig {
    fn default() -> Self {
        Self {
            playfield: Playfield::default(),
            ball: BallConfig::default(),
            paddle: PaddleConfig::default(),
            layout: Layout::classic(),
            messages: Messages::default(),
            audio: AudioConfig::default(),
        }
    }
}

impl RoundConfig {
    /// Parse and validate a JSON config
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a JSON config file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_json(&json)?;
        log::info!("Loaded config from {}", path.display());
        Ok(config)
    }

    pub fn to_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Reject geometry the simulation cannot run with
    pub fn validate(&self) -> Result<(), ConfigError> {
        let invalid = |msg: String| -> Result<(), ConfigError> { Err(ConfigError::Invalid(msg)) };

        if self.playfield.width <= 0.0 || self.playfield.height <= 0.0 {
            return invalid(format!(
                "playfield must be positive, got {}x{}",
                self.playfield.width, self.playfield.height
            ));
        }
        if self.ball.radius <= 0.0 {
            return invalid(format!("ball radius must be positive, got {}", self.ball.radius));
        }
        if self.paddle.size.x <= 0.0 || self.paddle.size.y <= 0.0 {
            return invalid(format!("paddle size must be positive, got {}", self.paddle.size));
        }
        if self.paddle.size.x > self.playfield.width {
            return invalid("paddle is wider than the playfield".to_string());
        }
        if self.paddle.speed <= 0.0 {
            return invalid(format!("paddle speed must be positive, got {}", self.paddle.speed));
        }
        let field = &self.playfield;
        for (i, block) in self.layout.blocks.iter().enumerate() {
            if block.hp == 0 {
                return invalid(format!("block {} has zero hp", i));
            }
            if block.size.x <= 0.0 || block.size.y <= 0.0 {
                return invalid(format!("block {} size must be positive, got {}", i, block.size));
            }
            let max = block.pos + block.size;
            if block.pos.x < 0.0
                || block.pos.y < 0.0
                || max.x > field.width
                || max.y > field.height
            {
                return invalid(format!("block {} lies outside the playfield", i));
            }
        }
        Ok(())
    }
}
