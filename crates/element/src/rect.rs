//! Rect: a solid color block.

use tui_scene_screen::Screen;
use tui_scene_types::{Attr, Cell, Event};

use crate::Drawable;

/// A filled rectangle drawable: `w x h` blank cells in one color.
pub struct Rect {
    x: i32,
    y: i32,
    w: u16,
    h: u16,
    color: Attr,
}

impl Rect {
    pub fn new(x: i32, y: i32, w: u16, h: u16, color: Attr) -> Self {
        Self { x, y, w, h, color }
    }

    pub fn color(&self) -> Attr {
        self.color
    }

    pub fn set_color(&mut self, color: Attr) {
        self.color = color;
    }

    pub fn set_position(&mut self, x: i32, y: i32) {
        self.x = x;
        self.y = y;
    }

    pub fn set_size(&mut self, w: u16, h: u16) {
        self.w = w;
        self.h = h;
    }
}

impl Drawable for Rect {
    fn tick(&mut self, _event: Event) {}

    fn draw(&self, screen: &mut Screen) {
        // Blank glyph, fill color on both halves.
        let cell = Cell::new(' ', self.color, self.color);
        screen.fill_rect(self.x, self.y, self.w, self.h, &cell);
    }

    fn position(&self) -> (i32, i32) {
        (self.x, self.y)
    }

    fn size(&self) -> (i32, i32) {
        (self.w as i32, self.h as i32)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tui_scene_types::Rgb;

    #[test]
    fn draw_fills_exactly_its_extent() {
        let color = Attr::new(Rgb::new(200, 120, 220));
        let rect = Rect::new(1, 1, 2, 2, color);
        let mut screen = Screen::new(4, 4);
        rect.draw(&mut screen);

        for y in 0..4 {
            for x in 0..4 {
                let inside = (1..3).contains(&x) && (1..3).contains(&y);
                let cell = screen.get(x, y).unwrap();
                if inside {
                    assert_eq!(cell.bg, color);
                } else {
                    assert_eq!(cell, Cell::default());
                }
            }
        }
    }

    #[test]
    fn set_size_changes_the_reported_extent() {
        let mut rect = Rect::new(0, 0, 2, 2, Attr::default());
        rect.set_size(5, 1);
        assert_eq!(rect.size(), (5, 1));
    }
}
