//! Paint model shared between UI and renderers.
//!
//! Scope:
//! - color representation (linear premultiplied alpha)
//! - stroke description for shape outlines
//!
//! Geometry types remain in `coords`; textured fills are their own draw
//! command (`scene::shapes::image`) rather than a paint variant.

mod color;

pub use color::Color;

/// Stroke drawn along the outer edge of a shape.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Border {
    pub width: f32,
    pub color: Color,
}

impl Border {
    #[inline]
    pub fn new(width: f32, color: Color) -> Self {
        Self { width, color }
    }
}
