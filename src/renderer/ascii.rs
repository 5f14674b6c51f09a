//! Text renderer for headless runs and debugging

use super::{Hud, Renderer, block_integrity};
use crate::Aabb;
use crate::sim::{Ball, Block, Paddle, Playfield};

/// Rasterizes a round into a character grid
#[derive(Debug, Clone)]
pub struct AsciiRenderer {
    cols: usize,
    rows: usize,
    scale_x: f32,
    scale_y: f32,
    cells: Vec<char>,
    status: String,
}

impl AsciiRenderer {
    pub fn new(field: &Playfield, cols: usize, rows: usize) -> Self {
        let cols = cols.max(1);
        let rows = rows.max(1);
        Self {
            cols,
            rows,
            scale_x: cols as f32 / field.width,
            scale_y: rows as f32 / field.height,
            cells: vec![' '; cols * rows],
            status: String::new(),
        }
    }

    /// Blank the grid before the next frame
    pub fn clear(&mut self) {
        self.cells.fill(' ');
        self.status.clear();
    }

    fn cell(&self, x: f32, y: f32) -> Option<usize> {
        let col = (x * self.scale_x).floor();
        let row = (y * self.scale_y).floor();
        if col < 0.0 || row < 0.0 {
            return None;
        }
        let (col, row) = (col as usize, row as usize);
        (col < self.cols && row < self.rows).then_some(row * self.cols + col)
    }

    fn fill(&mut self, bounds: &Aabb, ch: char) {
        let max = bounds.max();
        let c0 = (bounds.min.x * self.scale_x).floor().max(0.0) as usize;
        let r0 = (bounds.min.y * self.scale_y).floor().max(0.0) as usize;
        let c1 = ((max.x * self.scale_x).ceil().max(0.0) as usize).min(self.cols);
        let r1 = ((max.y * self.scale_y).ceil().max(0.0) as usize).min(self.rows);
        for row in r0..r1 {
            for col in c0..c1 {
                self.cells[row * self.cols + col] = ch;
            }
        }
    }

    /// The finished frame, framed by a border with the status line underneath
    pub fn frame(&self) -> String {
        let mut out = String::with_capacity((self.cols + 3) * (self.rows + 3));
        let border: String = std::iter::repeat_n('-', self.cols).collect();
        out.push('+');
        out.push_str(&border);
        out.push_str("+\n");
        for row in self.cells.chunks(self.cols) {
            out.push('|');
            out.extend(row.iter());
            out.push_str("|\n");
        }
        out.push('+');
        out.push_str(&border);
        out.push_str("+\n");
        out.push_str(&self.status);
        out
    }
}

impl Renderer for AsciiRenderer {
    fn draw_ball(&mut self, ball: &Ball) {
        if let Some(i) = self.cell(ball.pos.x, ball.pos.y) {
            self.cells[i] = 'o';
        }
    }

    fn draw_paddle(&mut self, paddle: &Paddle) {
        self.fill(&paddle.bounds(), '=');
    }

    fn draw_block(&mut self, block: &Block) {
        let ch = if block_integrity(block) < 1.0 {
            '%'
        } else if block.is_reinforced() {
            '#'
        } else {
            '*'
        };
        self.fill(&block.bounds(), ch);
    }

    fn draw_hud(&mut self, hud: &Hud<'_>) {
        self.status = match hud.message {
            Some(msg) => format!("SCORE {}  {}", hud.score, msg),
            None => format!("SCORE {}", hud.score),
        };
    }
}
