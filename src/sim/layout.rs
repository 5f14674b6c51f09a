//! Block layouts
//!
//! A layout is the list of blocks a round starts with. It is plain data so it
//! can come from config, from the built-in classic board, or from the seeded
//! generator.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::state::{Block, Playfield};
use crate::consts::*;

/// Gap between generated blocks and around the grid
const GRID_GAP: f32 = 10.0;
/// Chance a generated block is reinforced
const REINFORCED_CHANCE: f64 = 0.3;
/// Narrowest block the generator will produce
const MIN_BLOCK_WIDTH: f32 = 8.0;
/// Share of the playfield height the generated grid may fill
const GRID_DEPTH: f32 = 0.5;

fn default_hp() -> u8 {
    1
}

fn default_points() -> u32 {
    BLOCK_POINTS
}

/// Starting description of one block
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BlockSpec {
    /// Top-left corner
    pub pos: Vec2,
    pub size: Vec2,
    #[serde(default = "default_hp")]
    pub hp: u8,
    #[serde(default = "default_points")]
    pub points: u32,
}

impl BlockSpec {
    pub fn standard(x: f32, y: f32) -> Self {
        Self {
            pos: Vec2::new(x, y),
            size: Vec2::new(BLOCK_WIDTH, BLOCK_HEIGHT),
            hp: 1,
            points: BLOCK_POINTS,
        }
    }

    pub fn reinforced(x: f32, y: f32) -> Self {
        Self {
            hp: REINFORCED_BLOCK_HP,
            points: REINFORCED_BLOCK_POINTS,
            ..Self::standard(x, y)
        }
    }

    /// Instantiate the live block
    pub fn build(&self) -> Block {
        if self.hp > 1 {
            Block::reinforced(self.pos, self.size, self.hp, self.points)
        } else {
            Block::standard(self.pos, self.size, self.points)
        }
    }
}

/// Ordered block arrangement for one round
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Layout {
    pub blocks: Vec<BlockSpec>,
}

impl Layout {
    /// The stock board: two standard blocks on top, two reinforced below
    pub fn classic() -> Self {
        Self {
            blocks: vec![
                BlockSpec::standard(196.0, 40.0),
                BlockSpec::standard(258.0, 40.0),
                BlockSpec::reinforced(10.0, 70.0),
                BlockSpec::reinforced(72.0, 70.0),
            ],
        }
    }

    /// Deterministic grid of `rows` x `cols` blocks sized to fit `field`.
    /// Same seed, same layout.
    ///
    /// `cols` is capped so no block is narrower than `MIN_BLOCK_WIDTH`, and
    /// `rows` so the grid stays in the upper half of the field, well clear of
    /// the paddle. A field too small for a single block gives an empty layout.
    pub fn generate(seed: u64, rows: u32, cols: u32, field: &Playfield) -> Self {
        let top = field.top_margin + GRID_GAP * 2.0;
        let (max_rows, max_cols) = (max_rows(field, top), max_cols(field));
        if rows > max_rows || cols > max_cols {
            log::warn!(
                "Requested {}x{} grid does not fit, capping at {}x{}",
                rows,
                cols,
                rows.min(max_rows),
                cols.min(max_cols)
            );
        }
        let rows = rows.min(max_rows);
        let cols = cols.min(max_cols);
        if rows == 0 || cols == 0 {
            return Self::default();
        }

        let mut rng = Pcg32::seed_from_u64(seed);
        let width = (field.width - GRID_GAP * (cols + 1) as f32) / cols as f32;

        let mut blocks = Vec::with_capacity((rows * cols) as usize);
        for row in 0..rows {
            let y = top + row as f32 * (BLOCK_HEIGHT + GRID_GAP);
            for col in 0..cols {
                let x = GRID_GAP + col as f32 * (width + GRID_GAP);
                let base = if rng.random_bool(REINFORCED_CHANCE) {
                    BlockSpec::reinforced(x, y)
                } else {
                    BlockSpec::standard(x, y)
                };
                blocks.push(BlockSpec {
                    size: Vec2::new(width, BLOCK_HEIGHT),
                    ..base
                });
            }
        }

        let reinforced = blocks.iter().filter(|b| b.hp > 1).count();
        log::info!(
            "Generated layout: seed {}, {} blocks ({} reinforced)",
            seed,
            blocks.len(),
            reinforced
        );
        Self { blocks }
    }

    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }
}

/// Most columns that keep every block at least `MIN_BLOCK_WIDTH` wide
fn max_cols(field: &Playfield) -> u32 {
    let fit = (field.width - GRID_GAP) / (MIN_BLOCK_WIDTH + GRID_GAP);
    fit.max(0.0) as u32
}

/// Most rows whose bottom edge stays within `GRID_DEPTH` of the field
fn max_rows(field: &Playfield, top: f32) -> u32 {
    let floor = field.height * GRID_DEPTH;
    let fit = (floor - top + GRID_GAP) / (BLOCK_HEIGHT + GRID_GAP);
    fit.max(0.0) as u32
}
