//! Text: a one-line string rendered as display cells.

use tui_scene_screen::Screen;
use tui_scene_types::{Attr, Cell, Event};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::Drawable;

/// A string drawable at a grid position.
///
/// The cell buffer is a cache fully derived from the content string and
/// the attribute pair: rebuilt from scratch whenever the string changes,
/// repainted in place when only the colors change. There is no deferred
/// recomputation, so a draw always reflects the last mutation.
pub struct Text {
    x: i32,
    y: i32,
    fg: Attr,
    bg: Attr,
    content: String,
    cells: Vec<Cell>,
}

impl Text {
    /// Create a text element at (x, y) with the given content and colors.
    ///
    /// The cell buffer is built eagerly; there are no error conditions.
    /// Unprintable code points pass through opaquely and are measured by
    /// the width tables like everything else.
    pub fn new(x: i32, y: i32, text: &str, fg: Attr, bg: Attr) -> Self {
        let content = text.to_string();
        let cells = build_cells(&content, fg, bg);
        Self {
            x,
            y,
            fg,
            bg,
            content,
            cells,
        }
    }

    pub fn text(&self) -> &str {
        &self.content
    }

    /// Replace the content, rebuilding the cell buffer with the current
    /// colors.
    ///
    /// Always a full rebuild; the old buffer is discarded, never patched.
    pub fn set_text(&mut self, text: &str) {
        self.content.clear();
        self.content.push_str(text);
        self.cells = build_cells(&self.content, self.fg, self.bg);
    }

    /// Current (foreground, background) attribute pair.
    pub fn color(&self) -> (Attr, Attr) {
        (self.fg, self.bg)
    }

    /// Set both attributes and repaint every existing cell in place.
    ///
    /// Colors never affect cell count or glyphs, so no rebuild happens.
    pub fn set_color(&mut self, fg: Attr, bg: Attr) {
        self.fg = fg;
        self.bg = bg;
        for cell in &mut self.cells {
            cell.fg = fg;
            cell.bg = bg;
        }
    }

    /// Move the anchor. Position is not baked into the cell buffer.
    pub fn set_position(&mut self, x: i32, y: i32) {
        self.x = x;
        self.y = y;
    }

    /// Derived cell buffer, one slot per occupied column.
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }
}

fn build_cells(text: &str, fg: Attr, bg: Attr) -> Vec<Cell> {
    let mut cells = Vec::with_capacity(text.width());
    for ch in text.chars() {
        cells.push(Cell::new(ch, fg, bg));
        if ch.width().unwrap_or(0) > 1 {
            cells.push(Cell::continuation(fg, bg));
        }
    }
    cells
}

impl Drawable for Text {
    fn tick(&mut self, _event: Event) {}

    fn draw(&self, screen: &mut Screen) {
        let (w, _) = self.size();
        for (i, cell) in self.cells.iter().take(w as usize).enumerate() {
            screen.render_cell(self.x + i as i32, self.y, cell);
        }
    }

    fn position(&self) -> (i32, i32) {
        (self.x, self.y)
    }

    /// Rendered column width of the content; the height is always one row.
    fn size(&self) -> (i32, i32) {
        (self.content.width() as i32, 1)
    }
}
