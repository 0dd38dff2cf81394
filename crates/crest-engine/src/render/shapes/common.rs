//! Shared GPU types and utilities used by all shape renderers.

use bytemuck::{Pod, Zeroable};

use crate::coords::{Rect, Viewport};

// ── blend ─────────────────────────────────────────────────────────────────

/// Blend state for premultiplied-alpha source colors.
pub(super) fn premul_alpha_blend() -> wgpu::BlendState {
    let component = wgpu::BlendComponent {
        src_factor: wgpu::BlendFactor::One,
        dst_factor: wgpu::BlendFactor::OneMinusSrcAlpha,
        operation: wgpu::BlendOperation::Add,
    };
    wgpu::BlendState { color: component, alpha: component }
}

// ── viewport uniform ──────────────────────────────────────────────────────

#[repr(C)]
#[derive(Debug, Copy, Clone, Pod, Zeroable)]
pub(super) struct ViewportUniform {
    pub viewport: [f32; 2],
    pub _pad: [f32; 2], // 16-byte alignment
}

impl ViewportUniform {
    pub(super) fn from_viewport(v: Viewport) -> Self {
        Self { viewport: [v.width.max(1.0), v.height.max(1.0)], _pad: [0.0; 2] }
    }
}

/// Minimum binding size for the viewport uniform buffer.
///
/// `ViewportUniform` is 16 bytes by construction, so the size is never zero;
/// centralizing this keeps `.unwrap()` out of each pipeline-creation site.
pub(super) fn viewport_ubo_min_binding_size() -> std::num::NonZeroU64 {
    std::num::NonZeroU64::new(std::mem::size_of::<ViewportUniform>() as u64)
        .expect("ViewportUniform has non-zero size by construction")
}

// ── quad vertex ───────────────────────────────────────────────────────────

#[repr(C)]
#[derive(Debug, Copy, Clone, Pod, Zeroable)]
pub(super) struct QuadVertex {
    /// Unit-square position, 0..1.
    pub pos: [f32; 2],
}

impl QuadVertex {
    const ATTRS: [wgpu::VertexAttribute; 1] = wgpu::vertex_attr_array![0 => Float32x2];

    pub(super) fn layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<QuadVertex>() as u64,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &Self::ATTRS,
        }
    }
}

pub(super) const QUAD_VERTICES: [QuadVertex; 4] = [
    QuadVertex { pos: [0.0, 0.0] },
    QuadVertex { pos: [1.0, 0.0] },
    QuadVertex { pos: [1.0, 1.0] },
    QuadVertex { pos: [0.0, 1.0] },
];

pub(super) const QUAD_INDICES: [u16; 6] = [0, 1, 2, 0, 2, 3];

// ── scissor rect ──────────────────────────────────────────────────────────

/// Converts a logical-pixel clip rect into physical scissor arguments.
///
/// `clip = None` means "no scissor" and maps to the full viewport. Returns
/// `None` when the resulting rect is zero-area, in which case the renderer
/// should skip the draw call.
pub(super) fn logical_clip_to_scissor(
    clip: Option<Rect>,
    viewport: Viewport,
    scale: f32,
) -> Option<(u32, u32, u32, u32)> {
    let phys_vw = (viewport.width * scale).max(1.0) as u32;
    let phys_vh = (viewport.height * scale).max(1.0) as u32;

    let (x, y, w, h) = match clip {
        None => (0, 0, phys_vw, phys_vh),
        Some(r) => {
            let x = ((r.origin.x * scale).max(0.0) as u32).min(phys_vw);
            let y = ((r.origin.y * scale).max(0.0) as u32).min(phys_vh);
            let x2 = (((r.origin.x + r.size.x) * scale).max(0.0) as u32).min(phys_vw);
            let y2 = (((r.origin.y + r.size.y) * scale).max(0.0) as u32).min(phys_vh);
            (x, y, x2.saturating_sub(x), y2.saturating_sub(y))
        }
    };

    if w == 0 || h == 0 { None } else { Some((x, y, w, h)) }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coords::Rect;

    const VIEWPORT: Viewport = Viewport { width: 400.0, height: 300.0 };

    #[test]
    fn no_clip_covers_full_viewport() {
        let s = logical_clip_to_scissor(None, VIEWPORT, 2.0);
        assert_eq!(s, Some((0, 0, 800, 600)));
    }

    #[test]
    fn clip_scales_to_physical_pixels() {
        let clip = Rect::new(10.0, 20.0, 100.0, 50.0);
        let s = logical_clip_to_scissor(Some(clip), VIEWPORT, 2.0);
        assert_eq!(s, Some((20, 40, 200, 100)));
    }

    #[test]
    fn clip_outside_viewport_is_none() {
        let clip = Rect::new(500.0, 0.0, 100.0, 50.0);
        assert_eq!(logical_clip_to_scissor(Some(clip), VIEWPORT, 1.0), None);
    }

    #[test]
    fn clip_partially_outside_is_clamped() {
        let clip = Rect::new(350.0, -10.0, 100.0, 50.0);
        let s = logical_clip_to_scissor(Some(clip), VIEWPORT, 1.0);
        assert_eq!(s, Some((350, 0, 50, 40)));
    }
}
