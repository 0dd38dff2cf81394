use crest_engine::coords::{Rect, Vec2};
use crest_engine::image::{ImageData, ImageId, ImageStore};
use crest_engine::input::{Key, Modifiers};
use crest_engine::scene::DrawList;
use crest_engine::text::{FontId, FontLoadError, FontSystem};

use crate::constraints::{Constraints, LayoutCtx};
use crate::event::UiEvent;
use crate::painter::Painter;
use crate::widget::{Element, Widget};

// ── UiInput ───────────────────────────────────────────────────────────────

/// Snapshot of input state for one UI frame.
///
/// Construct this from your engine's `InputState` / `InputFrame` each frame.
#[derive(Debug, Clone, Default)]
pub struct UiInput {
    /// Current cursor position in logical pixels.
    pub mouse_pos: Vec2,
    /// `true` while the primary button is held down.
    pub mouse_pressed: bool,
    /// `true` for exactly one frame when the primary button is released.
    pub mouse_clicked: bool,
    /// Named keys pressed this frame (arrow keys, Page Up/Down, …).
    pub keys_pressed: Vec<Key>,
    /// Modifier state while the keys above were pressed.
    pub modifiers: Modifiers,
    /// Accumulated scroll wheel delta this frame, in line units
    /// (positive = scroll down).
    pub scroll_delta: f32,
}

// ── UiScene ───────────────────────────────────────────────────────────────

/// Top-level coordinator that owns shared resources across frames.
///
/// Owns the `FontSystem` (and therefore all loaded fonts), the `ImageStore`
/// holding decoded image assets, and the `DrawList` that is populated each
/// frame by [`frame`] / [`frame_ref`].
///
/// The GPU renderers (`RectRenderer`, `ImageRenderer`, …) still live in the
/// application and receive the `&mut DrawList` returned here.
///
/// # Example
///
/// ```rust,ignore
/// let mut ui = UiScene::new();
/// let font = ui.load_font(&font_bytes)?;
/// let avatar = ui.register_image(avatar_data);
///
/// // In your on_frame callback:
/// let draw_list = ui.frame_ref(&mut root, viewport, &input, scale);
/// rect_renderer.render(rctx, target, draw_list);
/// image_renderer.render(rctx, target, draw_list, &ui.image_store);
/// ```
///
/// [`frame`]: UiScene::frame
/// [`frame_ref`]: UiScene::frame_ref
pub struct UiScene {
    /// Fonts are public so the application can pass `&ui.font_system` to the
    /// engine's `TextRenderer::render`.
    pub font_system: FontSystem,
    /// Decoded image assets, public for the same reason (`ImageRenderer`
    /// uploads textures from it on demand).
    pub image_store: ImageStore,
    /// Draw list populated by the most recent frame call.
    ///
    /// Public so callers can split-borrow it alongside `font_system` and
    /// `image_store` when passing all of them to engine renderers.
    pub draw_list: DrawList,
}

impl UiScene {
    pub fn new() -> Self {
        Self {
            font_system: FontSystem::new(),
            image_store: ImageStore::new(),
            draw_list: DrawList::new(),
        }
    }

    /// Load a TrueType / OpenType font from raw bytes.
    pub fn load_font(&mut self, data: &[u8]) -> Result<FontId, FontLoadError> {
        self.font_system.load_font(data)
    }

    /// Register a decoded RGBA image and return its stable handle.
    pub fn register_image(&mut self, data: ImageData) -> ImageId {
        self.image_store.register(data)
    }

    /// Build, layout, and paint a widget tree for this frame.
    ///
    /// The root widget is consumed (it is freshly constructed each call).
    /// The returned `&mut DrawList` is owned by the `UiScene` and valid
    /// until the next frame call.
    #[must_use]
    pub fn frame(
        &mut self,
        mut root: Element,
        viewport: Vec2,
        input: &UiInput,
        scale: f32,
    ) -> &mut DrawList {
        self.run_frame(&mut root, viewport, input, scale);
        &mut self.draw_list
    }

    /// Like [`frame`] but borrows the root widget instead of consuming it.
    ///
    /// Use this when the root widget holds state that must persist across
    /// frames (e.g. a scroll position). The widget is kept alive in the
    /// caller and updated via `on_event` each frame.
    ///
    /// [`frame`]: UiScene::frame
    #[must_use]
    pub fn frame_ref(
        &mut self,
        root: &mut Element,
        viewport: Vec2,
        input: &UiInput,
        scale: f32,
    ) -> &mut DrawList {
        self.run_frame(root, viewport, input, scale);
        &mut self.draw_list
    }

    /// Convenience: wrap any [`Widget`] in an [`Element`] and call [`frame`].
    ///
    /// [`frame`]: UiScene::frame
    pub fn frame_widget<W: Widget>(
        &mut self,
        root: W,
        viewport: Vec2,
        input: &UiInput,
        scale: f32,
    ) -> &mut DrawList {
        self.frame(root.into(), viewport, input, scale)
    }

    fn run_frame(&mut self, root: &mut Element, viewport: Vec2, input: &UiInput, scale: f32) {
        self.draw_list.clear();

        // ── measure ───────────────────────────────────────────────────────
        let ctx = LayoutCtx { fonts: &self.font_system, scale };
        // Pre-pass: let children compute their natural sizes. The root itself
        // always occupies the full viewport, so its measured size is unused.
        let _ = root.measure(Constraints::loose(viewport), &ctx);
        let rect = Rect::new(0.0, 0.0, viewport.x, viewport.y);

        // ── paint ─────────────────────────────────────────────────────────
        {
            let mut painter = Painter::new(
                &mut self.draw_list,
                &self.font_system,
                input.mouse_pos,
                input.mouse_pressed,
                scale,
            );
            root.paint(&mut painter, rect);
        }

        // ── events ────────────────────────────────────────────────────────
        root.on_event(&UiEvent::Hover { pos: input.mouse_pos }, rect, &ctx);
        if input.mouse_clicked {
            root.on_event(&UiEvent::Click { pos: input.mouse_pos }, rect, &ctx);
        }
        for key in &input.keys_pressed {
            let ev = UiEvent::KeyPress { key: *key, modifiers: input.modifiers };
            root.on_event(&ev, rect, &ctx);
        }
        if input.scroll_delta != 0.0 {
            root.on_event(&UiEvent::ScrollWheel { delta: input.scroll_delta }, rect, &ctx);
        }
    }
}

impl Default for UiScene {
    fn default() -> Self {
        Self::new()
    }
}
