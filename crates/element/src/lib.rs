//! Drawable elements for the cell grid.
//!
//! Every element kind implements [`Drawable`], the capability a compositor
//! loop drives: tick it once per frame, have it draw into the screen, and
//! ask it where it sits and how much room it takes. The loop itself (and
//! the terminal backend behind the screen) live outside this workspace.

pub mod rect;
pub mod text;

pub use tui_scene_screen as screen;
pub use tui_scene_types as types;

pub use rect::Rect;
pub use text::Text;

use tui_scene_screen::Screen;
use tui_scene_types::Event;

/// Capability contract between elements and the compositor loop.
///
/// Object-safe, so a heterogeneous scene can be driven through
/// `Box<dyn Drawable>`.
pub trait Drawable {
    /// Advance animation state for one frame.
    ///
    /// Elements without animation state accept the event and ignore it.
    fn tick(&mut self, event: Event);

    /// Render into the screen's cell grid at the element's position.
    ///
    /// Clipping is the screen's responsibility, not the element's.
    fn draw(&self, screen: &mut Screen);

    /// Current (x, y) anchor on the grid.
    fn position(&self) -> (i32, i32);

    /// Occupied extent as (columns, rows).
    fn size(&self) -> (i32, i32);
}
