//! Shape renderers.

mod common;

pub mod image;
pub mod rect;
pub mod rounded_rect;
pub mod text;

pub use image::ImageRenderer;
pub use rect::RectRenderer;
pub use rounded_rect::RoundedRectRenderer;
pub use text::TextRenderer;
