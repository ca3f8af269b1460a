//! tui-scene (workspace facade crate).
//!
//! This package exposes the `tui_scene::{element,screen,types}` public API
//! while the implementation lives in dedicated crates under `crates/`.

pub use tui_scene_element as element;
pub use tui_scene_screen as screen;
pub use tui_scene_types as types;
