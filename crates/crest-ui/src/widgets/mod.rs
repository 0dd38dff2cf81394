//! Built-in widgets.

pub mod container;
pub mod flex;
pub mod header_scroller;
pub mod scroll;
pub mod text;
