//! Round state and core simulation types
//!
//! Everything one round owns lives here. The state is plain data and
//! serializable so a round can be snapshotted for debugging or replays.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::layout::Layout;
use crate::Aabb;
use crate::settings::{Messages, RoundConfig};

/// Outcome of the round
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Outcome {
    /// Ball in play
    #[default]
    Ongoing,
    /// Every block destroyed
    Cleared,
    /// Ball crossed the bottom edge
    Over,
}

impl Outcome {
    pub fn is_terminal(&self) -> bool {
        !matches!(self, Outcome::Ongoing)
    }
}

/// Reflection axis for wall bounces
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Axis {
    X,
    Y,
}

/// Side effects produced by a tick, drained by the driver afterwards
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// Ball reflected off a side wall (X) or the top wall (Y)
    WallBounce { axis: Axis },
    /// Ball reflected off the paddle
    PaddleHit,
    /// Paddle stopped at a side wall
    PaddleClamped,
    /// Ball struck the block at `index` in the registry
    BlockHit {
        index: usize,
        destroyed: bool,
        points: u32,
    },
    RoundCleared,
    RoundOver,
}

/// Playfield bounds (read-only for the lifetime of a round)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Playfield {
    pub width: f32,
    pub height: f32,
    /// Balls reflect this far below the top edge
    pub top_margin: f32,
}

impl Default for Playfield {
    fn default() -> Self {
        use crate::consts::*;
        Self {
            width: PLAYFIELD_WIDTH,
            height: PLAYFIELD_HEIGHT,
            top_margin: TOP_MARGIN,
        }
    }
}

/// The ball
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Ball {
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
}

impl Ball {
    pub fn new(pos: Vec2, vel: Vec2, radius: f32) -> Self {
        Self { pos, vel, radius }
    }

    /// Where the ball will be after the next step
    #[inline]
    pub fn projected(&self) -> Vec2 {
        self.pos + self.vel
    }

    /// Commit one step. No bounds checks; collisions are resolved beforehand.
    #[inline]
    pub fn move_step(&mut self) {
        self.pos += self.vel;
    }
}

/// The player's paddle. Moves horizontally only.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Paddle {
    /// Top-left corner
    pub pos: Vec2,
    /// Horizontal velocity
    pub dx: f32,
    pub size: Vec2,
    /// Magnitude assigned to `dx` while a direction key is held
    pub speed: f32,
}

impl Paddle {
    pub fn new(pos: Vec2, size: Vec2, speed: f32) -> Self {
        Self {
            pos,
            dx: 0.0,
            size,
            speed,
        }
    }

    #[inline]
    pub fn width(&self) -> f32 {
        self.size.x
    }

    pub fn bounds(&self) -> Aabb {
        Aabb::new(self.pos, self.size)
    }

    #[inline]
    pub fn projected_x(&self) -> f32 {
        self.pos.x + self.dx
    }

    #[inline]
    pub fn move_step(&mut self) {
        self.pos.x += self.dx;
    }
}

/// Result of striking a block once
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockHit {
    /// Block survived with `hp_left` hits remaining
    Damaged { hp_left: u8 },
    /// Block destroyed; award `points`
    Destroyed { points: u32 },
    /// Block was already inactive
    Ignored,
}

/// A destructible block
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Block {
    /// Top-left corner
    pub pos: Vec2,
    pub size: Vec2,
    /// Remaining hits before destruction
    pub hp: u8,
    /// Hits the block started with
    pub max_hp: u8,
    pub points: u32,
    pub active: bool,
}

impl Block {
    /// Single-hit block
    pub fn standard(pos: Vec2, size: Vec2, points: u32) -> Self {
        Self::with_hp(pos, size, 1, points)
    }

    /// Block that needs `hp` hits
    pub fn reinforced(pos: Vec2, size: Vec2, hp: u8, points: u32) -> Self {
        Self::with_hp(pos, size, hp, points)
    }

    fn with_hp(pos: Vec2, size: Vec2, hp: u8, points: u32) -> Self {
        Self {
            pos,
            size,
            hp,
            max_hp: hp,
            points,
            active: true,
        }
    }

    pub fn is_reinforced(&self) -> bool {
        self.max_hp > 1
    }

    pub fn bounds(&self) -> Aabb {
        Aabb::new(self.pos, self.size)
    }

    /// Apply one qualifying hit. Inactive blocks never come back.
    pub fn hit(&mut self) -> BlockHit {
        if !self.active {
            return BlockHit::Ignored;
        }
        self.hp = self.hp.saturating_sub(1);
        if self.hp == 0 {
            self.active = false;
            BlockHit::Destroyed {
                points: self.points,
            }
        } else {
            BlockHit::Damaged { hp_left: self.hp }
        }
    }
}

/// Ordered block collection. Order is fixed at round setup.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BlockRegistry {
    blocks: Vec<Block>,
}

impl BlockRegistry {
    pub fn new(blocks: Vec<Block>) -> Self {
        Self { blocks }
    }

    pub fn from_layout(layout: &Layout) -> Self {
        Self::new(layout.blocks.iter().map(|spec| spec.build()).collect())
    }

    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Block> {
        self.blocks.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Block> {
        self.blocks.iter()
    }

    pub fn iter_active(&self) -> impl Iterator<Item = &Block> {
        self.blocks.iter().filter(|b| b.active)
    }

    pub(crate) fn iter_mut(&mut self) -> impl Iterator<Item = &mut Block> {
        self.blocks.iter_mut()
    }

    pub fn active_count(&self) -> usize {
        self.iter_active().count()
    }

    /// True when no block is left in play (vacuously true when empty)
    pub fn all_cleared(&self) -> bool {
        self.blocks.iter().all(|b| !b.active)
    }
}

/// Score accumulator. Only ever grows within a round.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Score(u64);

impl Score {
    pub fn add(&mut self, points: u32) {
        self.0 = self.0.saturating_add(points as u64);
    }

    pub fn value(&self) -> u64 {
        self.0
    }
}

/// Complete state of one round
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoundState {
    pub playfield: Playfield,
    pub ball: Ball,
    pub paddle: Paddle,
    pub blocks: BlockRegistry,
    pub score: Score,
    /// Ticks simulated while ongoing
    pub time_ticks: u64,
    outcome: Outcome,
    result_message: Option<String>,
    messages: Messages,
    /// Pending side effects for the driver
    #[serde(skip)]
    events: Vec<GameEvent>,
}

impl Default for RoundState {
    fn default() -> Self {
        Self::new(&RoundConfig::default())
    }
}

impl RoundState {
    /// Set up a fresh round. Restarting means building a new state.
    pub fn new(config: &RoundConfig) -> Self {
        let state = Self {
            playfield: config.playfield,
            ball: Ball::new(config.ball.pos, config.ball.vel, config.ball.radius),
            paddle: Paddle::new(config.paddle.pos, config.paddle.size, config.paddle.speed),
            blocks: BlockRegistry::from_layout(&config.layout),
            score: Score::default(),
            time_ticks: 0,
            outcome: Outcome::Ongoing,
            result_message: None,
            messages: config.messages.clone(),
            events: Vec::new(),
        };
        log::info!(
            "Round start: {} blocks, playfield {}x{}",
            state.blocks.len(),
            state.playfield.width,
            state.playfield.height
        );
        state
    }

    pub fn outcome(&self) -> Outcome {
        self.outcome
    }

    /// False once the round reached a terminal outcome
    pub fn is_active(&self) -> bool {
        !self.outcome.is_terminal()
    }

    /// Win/loss text, set on the terminal transition
    pub fn result_message(&self) -> Option<&str> {
        self.result_message.as_deref()
    }

    /// Events queued since the last drain
    pub fn pending_events(&self) -> &[GameEvent] {
        &self.events
    }

    /// Take all queued events, oldest first
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    pub(crate) fn push_event(&mut self, event: GameEvent) {
        self.events.push(event);
    }

    /// Enter a terminal outcome. Only the first call has any effect.
    pub(crate) fn finish(&mut self, outcome: Outcome) {
        if self.outcome.is_terminal() || !outcome.is_terminal() {
            return;
        }
        let (message, event) = match outcome {
            Outcome::Cleared => (&self.messages.cleared, GameEvent::RoundCleared),
            _ => (&self.messages.over, GameEvent::RoundOver),
        };
        self.result_message = Some(message.clone());
        self.outcome = outcome;
        self.push_event(event);
        log::info!(
            "Round finished: {:?} after {} ticks, score {}",
            outcome,
            self.time_ticks,
            self.score.value()
        );
    }
}
