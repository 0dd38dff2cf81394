//! GPU rendering subsystem.
//!
//! Renderers consume `scene` draw streams and issue GPU commands via wgpu.
//! Each renderer owns its GPU resources (pipeline, buffers, textures).
//!
//! Convention:
//! - CPU geometry is in logical pixels (top-left origin, +Y down).
//! - The vertex shader converts to NDC using a viewport uniform.
//! - Scissor rects are computed in physical pixels from logical clip rects.

mod ctx;
pub mod shapes;

pub use ctx::{RenderCtx, RenderTarget};
