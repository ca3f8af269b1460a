//! Screen: the cell grid drawables render into.
//!
//! The screen owns a flat `width x height` buffer of [`Cell`]s and all of
//! the clipping policy: callers may hand it any coordinates, including
//! negative ones, and out-of-grid writes are dropped. Flushing the grid to
//! a real terminal belongs to a backend outside this workspace.

use tui_scene_types::{Attr, Cell};
use unicode_width::UnicodeWidthChar;

pub use tui_scene_types as types;

/// 2D grid of display cells.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Screen {
    width: u16,
    height: u16,
    cells: Vec<Cell>,
}

impl Screen {
    pub fn new(width: u16, height: u16) -> Self {
        let len = (width as usize) * (height as usize);
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

    /// Resize the grid.
    ///
    /// This preserves the underlying allocation when possible.
    pub fn resize(&mut self, width: u16, height: u16) {
        if self.width == width && self.height == height {
            return;
        }
        self.width = width;
        self.height = height;
        let len = (width as usize) * (height as usize);
        self.cells.clear();
        self.cells.resize(len, Cell::default());
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    #[inline(always)]
    fn idx(&self, x: i32, y: i32) -> Option<usize> {
        if x < 0 || y < 0 || x >= self.width as i32 || y >= self.height as i32 {
            return None;
        }
        Some((y as usize) * (self.width as usize) + (x as usize))
    }

    pub fn get(&self, x: i32, y: i32) -> Option<Cell> {
        self.idx(x, y).map(|i| self.cells[i])
    }

    /// Copy one cell into the grid at (x, y).
    ///
    /// Coordinates outside the grid are clipped; the write is dropped
    /// silently.
    pub fn render_cell(&mut self, x: i32, y: i32, cell: &Cell) {
        if let Some(i) = self.idx(x, y) {
            self.cells[i] = *cell;
        }
    }

    pub fn clear(&mut self, cell: Cell) {
        self.cells.fill(cell);
    }

    /// Render a string into the grid starting at (x, y).
    ///
    /// Double-width characters take two columns, with the spare column
    /// marked as a continuation. Zero-width code points are skipped.
    pub fn render_str(&mut self, x: i32, y: i32, s: &str, fg: Attr, bg: Attr) {
        let mut cx = x;
        for ch in s.chars() {
            if cx >= self.width as i32 {
                break;
            }
            let w = ch.width().unwrap_or(0);
            if w == 0 {
                continue;
            }
            self.render_cell(cx, y, &Cell::new(ch, fg, bg));
            if w > 1 {
                self.render_cell(cx + 1, y, &Cell::continuation(fg, bg));
            }
            cx += w as i32;
        }
    }

    /// Fill a rectangle with copies of one cell, clipped at the grid edge.
    pub fn fill_rect(&mut self, x: i32, y: i32, w: u16, h: u16, cell: &Cell) {
        for dy in 0..h as i32 {
            for dx in 0..w as i32 {
                self.render_cell(x + dx, y + dy, cell);
            }
        }
    }
}
