//! Per-shape draw payloads and `DrawList` push helpers.

pub mod image;
pub mod rect;
pub mod rounded_rect;
pub mod text;
