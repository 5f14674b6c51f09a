//! Draw interface
//!
//! The simulation only describes what to draw. A [`Renderer`] implementation
//! owned by the host turns that into pixels (or text, see [`ascii`]).

pub mod ascii;

pub use ascii::AsciiRenderer;

use crate::sim::{Ball, Block, Paddle, RoundState};

/// Text overlay for the current frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Hud<'a> {
    pub score: u64,
    /// Win/loss text once the round is over
    pub message: Option<&'a str>,
}

/// Per-entity draw calls, issued once per frame
pub trait Renderer {
    fn draw_ball(&mut self, ball: &Ball);
    fn draw_paddle(&mut self, paddle: &Paddle);
    fn draw_block(&mut self, block: &Block);
    fn draw_hud(&mut self, hud: &Hud<'_>);
}

/// Draw the whole round. Destroyed blocks are skipped.
pub fn draw(state: &RoundState, renderer: &mut impl Renderer) {
    renderer.draw_ball(&state.ball);
    renderer.draw_paddle(&state.paddle);
    for block in state.blocks.iter_active() {
        renderer.draw_block(block);
    }
    renderer.draw_hud(&Hud {
        score: state.score.value(),
        message: state.result_message(),
    });
}

/// Remaining durability in 0..=1, for damage shading
pub fn block_integrity(block: &Block) -> f32 {
    if block.max_hp == 0 {
        return 0.0;
    }
    block.hp as f32 / block.max_hp as f32
}
