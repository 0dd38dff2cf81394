//! Scroll-driven interpolation for the collapsing header screen.
//!
//! One input — the vertical scroll offset — drives every visual property of
//! the header: translation, height, opacity, color, avatar size and corner
//! rounding. All of them are clamped linear interpolations over the same
//! domain `[0, D]` where `D` is the collapse distance, so the whole mapping
//! reduces to computing a single progress fraction `t` and deriving each
//! property from it.
//!
//! The crate is deliberately free of engine types: offsets in, plain numbers
//! (and one RGBA color) out. Rendering lives elsewhere.

mod header;
mod lerp;
mod offset;
mod rgba;

pub use header::{HeaderMetrics, HeaderPose};
pub use lerp::{InterpSpec, clamped_lerp};
pub use offset::ScrollConvention;
pub use rgba::Rgba;
