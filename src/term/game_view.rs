//! GameView: maps the game model into a terminal framebuffer.
//!
//! This module is pure (no I/O). It scales the 800x600 world onto whatever
//! viewport the terminal offers, so the scene keeps its proportions at any
//! size. It can be unit-tested.

use rand::Rng;

use crate::core::pipe::{obstacle_spans, Pipe};
use crate::core::Game;
use crate::term::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::{bird_x, BIRD_RADIUS, PIPE_WIDTH, WORLD_HEIGHT, WORLD_WIDTH};

const SKY: Rgb = Rgb::new(96, 156, 200);
const PIPE_GREEN: Rgb = Rgb::new(46, 148, 54);
const BIRD_YELLOW: Rgb = Rgb::new(244, 208, 63);
const SCORE_WHITE: Rgb = Rgb::new(255, 255, 255);

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

/// Projects world coordinates onto viewport cells.
#[derive(Debug, Default)]
pub struct GameView;

impl GameView {
    /// Render the current game state into a fresh framebuffer.
    pub fn render<R: Rng>(&self, game: &Game<R>, viewport: Viewport, now_ms: u64) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        fb.clear(SKY);

        let sx = f64::from(viewport.width) / WORLD_WIDTH;
        let sy = f64::from(viewport.height) / WORLD_HEIGHT;

        for pipe in game.pipes() {
            self.draw_pipe(&mut fb, &pipe.borrow(), now_ms, sx, sy);
        }

        self.draw_bird(&mut fb, game.bird().position_at(now_ms), sx, sy);

        let score_style = CellStyle {
            fg: SCORE_WHITE,
            bg: SKY,
            bold: true,
        };
        fb.put_str(1, 0, &format!("Score: {}", game.score()), score_style);

        fb
    }

    fn draw_pipe(&self, fb: &mut FrameBuffer, pipe: &Pipe, now_ms: u64, sx: f64, sy: f64) {
        let style = CellStyle {
            fg: PIPE_GREEN,
            bg: SKY,
            bold: false,
        };

        let x = (pipe.leading_x(now_ms) * sx).round() as i32;
        let w = ((PIPE_WIDTH * sx).round() as i32).max(1);

        let ((_, top_end), (bottom_start, bottom_end)) = obstacle_spans(pipe.gap_bottom_y());

        // Top obstacle: from the ceiling down to the gap.
        let top_h = (top_end * sy).round() as i32;
        fb.fill_rect(x, 0, w, top_h, '█', style);

        // Bottom obstacle: from the gap down to the ground.
        let y0 = (bottom_start * sy).round() as i32;
        let y1 = (bottom_end * sy).round() as i32;
        fb.fill_rect(x, y0, w, y1 - y0, '█', style);
    }

    fn draw_bird(&self, fb: &mut FrameBuffer, bird_y: f64, sx: f64, sy: f64) {
        let style = CellStyle {
            fg: BIRD_YELLOW,
            bg: SKY,
            bold: false,
        };
        fb.fill_ellipse(
            bird_x() * sx,
            bird_y * sy,
            (BIRD_RADIUS * sx).max(0.5),
            (BIRD_RADIUS * sy).max(0.5),
            '●',
            style,
        );
    }
}
