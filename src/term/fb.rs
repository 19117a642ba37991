//! Framebuffer: the 2D drawing surface the game renders onto.
//!
//! Mirrors the drawing-context contract the game needs: clear, filled
//! rectangles, a filled ellipse (the "arc" primitive, elliptical so callers
//! can compensate for terminal glyph aspect ratio), and text. All writes
//! are clipped to the buffer.

/// 24-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// Per-cell styling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellStyle {
    pub fg: Rgb,
    pub bg: Rgb,
    pub bold: bool,
}

impl Default for CellStyle {
    fn default() -> Self {
        Self {
            fg: Rgb::new(220, 220, 220),
            bg: Rgb::new(0, 0, 0),
            bold: false,
        }
    }
}

/// A single terminal cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    pub ch: char,
    pub style: CellStyle,
}

impl Default for Cell {
    fn default() -> Self {
        Self {
            ch: ' ',
            style: CellStyle::default(),
        }
    }
}

/// 2D grid of styled character cells.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameBuffer {
    width: u16,
    height: u16,
    cells: Vec<Cell>,
}

impl FrameBuffer {
    pub fn new(width: u16, height: u16) -> Self {
        let len = usize::from(width) * usize::from(height);
        Self {
            width,
            height,
            cells: vec![Cell::default(); len],
        }
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    fn idx(&self, x: u16, y: u16) -> Option<usize> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(usize::from(y) * usize::from(self.width) + usize::from(x))
    }

    pub fn get(&self, x: u16, y: u16) -> Option<Cell> {
        self.idx(x, y).map(|i| self.cells[i])
    }

    pub fn set(&mut self, x: u16, y: u16, cell: Cell) {
        if let Some(i) = self.idx(x, y) {
            self.cells[i] = cell;
        }
    }

    /// Clear the whole surface to a background color.
    pub fn clear(&mut self, bg: Rgb) {
        let cell = Cell {
            ch: ' ',
            style: CellStyle {
                bg,
                ..CellStyle::default()
            },
        };
        self.cells.fill(cell);
    }

    /// Filled axis-aligned rectangle, clipped at the edges.
    pub fn fill_rect(&mut self, x: i32, y: i32, w: i32, h: i32, ch: char, style: CellStyle) {
        for dy in 0..h.max(0) {
            for dx in 0..w.max(0) {
                let (cx, cy) = (x + dx, y + dy);
                if cx >= 0 && cy >= 0 {
                    self.set(cx as u16, cy as u16, Cell { ch, style });
                }
            }
        }
    }

    /// Filled ellipse centered at `(cx, cy)` in cell coordinates with radii
    /// `(rx, ry)`. The filled-arc primitive; unequal radii let the caller
    /// absorb the ~2:1 aspect ratio of terminal glyphs.
    pub fn fill_ellipse(&mut self, cx: f64, cy: f64, rx: f64, ry: f64, ch: char, style: CellStyle) {
        if rx <= 0.0 || ry <= 0.0 {
            return;
        }
        let x0 = (cx - rx).floor() as i32;
        let x1 = (cx + rx).ceil() as i32;
        let y0 = (cy - ry).floor() as i32;
        let y1 = (cy + ry).ceil() as i32;

        for y in y0..=y1 {
            for x in x0..=x1 {
                let nx = (f64::from(x) + 0.5 - cx) / rx;
                let ny = (f64::from(y) + 0.5 - cy) / ry;
                if nx * nx + ny * ny <= 1.0 && x >= 0 && y >= 0 {
                    self.set(x as u16, y as u16, Cell { ch, style });
                }
            }
        }
    }

    /// Draw text starting at `(x, y)`, truncated at the right edge.
    pub fn put_str(&mut self, x: u16, y: u16, s: &str, style: CellStyle) {
        let mut cx = x;
        for ch in s.chars() {
            if cx >= self.width {
                break;
            }
            self.set(cx, y, Cell { ch, style });
            cx += 1;
        }
    }
}
