use std::cell::Cell;

use crest_engine::coords::{Rect, Vec2};
use crest_engine::image::ImageId;
use crest_engine::input::Key;
use crest_engine::paint::Color;
use crest_engine::text::FontId;
use crest_motion::{HeaderMetrics, HeaderPose, Rgba, ScrollConvention};

use crate::constraints::{Constraints, LayoutCtx};
use crate::event::{EventResult, UiEvent};
use crate::painter::Painter;
use crate::widget::{Element, Widget};

/// Left inset of the avatar and the title row, logical pixels.
const EDGE_PAD: f32 = 16.0;
/// Gap between the header's bottom edge and the avatar / title.
const BOTTOM_PAD: f32 = 8.0;
/// Gap between the avatar's collapsed slot and the title.
const TITLE_GAP: f32 = 12.0;

/// A screen-level widget with a collapsing header over a scrollable body.
///
/// The scroll offset drives every visual property of the header through
/// [`HeaderMetrics::pose`]: as the user scrolls down, the bar shrinks from
/// `max_height` to `min_height`, the backdrop image fades out while
/// parallaxing at half the scroll rate, the avatar shrinks into a rounded
/// badge and slides in from the left together with the title, and the title
/// recolors from white to black.
///
/// The body is given a top inset equal to `max_height` so it starts below the
/// fully expanded header at rest, and is clipped to the widget's bounds.
///
/// # Example
/// ```rust,ignore
/// HeaderScroller::new("Profile", font, backdrop, avatar, rows)
///     .bar_color(Color::from_srgb_u8(135, 206, 250, 255))
/// ```
pub struct HeaderScroller {
    metrics: HeaderMetrics,
    title: String,
    title_font: FontId,
    title_size: f32,
    backdrop: ImageId,
    avatar: ImageId,
    content: Element,
    bar_color: Color,
    /// Current scroll offset in logical pixels, normalized so `0` is the
    /// fully expanded rest position.
    pub scroll_offset: f32,
    /// Pixels scrolled per line-delta unit.
    line_height: f32,
    /// Cached content height from the most recent measure/paint pass.
    cached_content_height: Cell<f32>,
}

impl HeaderScroller {
    pub fn new(
        title: impl Into<String>,
        title_font: FontId,
        backdrop: ImageId,
        avatar: ImageId,
        content: impl Into<Element>,
    ) -> Self {
        Self {
            metrics: HeaderMetrics::default(),
            title: title.into(),
            title_font,
            title_size: 20.0,
            backdrop,
            avatar,
            content: content.into(),
            bar_color: Color::from_srgb_u8(135, 206, 250, 255),
            scroll_offset: 0.0,
            line_height: 24.0,
            cached_content_height: Cell::new(0.0),
        }
    }

    pub fn metrics(mut self, metrics: HeaderMetrics) -> Self {
        self.metrics = metrics;
        self
    }

    pub fn bar_color(mut self, color: Color) -> Self {
        self.bar_color = color;
        self
    }

    pub fn title_size(mut self, size: f32) -> Self {
        self.title_size = size;
        self
    }

    pub fn line_height(mut self, v: f32) -> Self {
        self.line_height = v;
        self
    }

    /// Seed the scroll position from a platform-reported raw offset.
    ///
    /// This is the single place where scroll conventions are reconciled: a
    /// platform that rests at `-max_height` (content-inset convention) and one
    /// that rests at `0` both land on the same normalized offset here.
    pub fn offset_from_raw(mut self, raw: f32, convention: ScrollConvention) -> Self {
        self.scroll_offset = convention.normalize(raw, self.metrics.max_height);
        self
    }

    /// The pose the header is currently rendered with.
    pub fn pose(&self) -> HeaderPose {
        self.metrics.pose(self.scroll_offset)
    }

    // ── helpers ───────────────────────────────────────────────────────────

    fn measure_content(&self, viewport_w: f32, ctx: &LayoutCtx) -> Vec2 {
        let c = Constraints::loose(Vec2::new(viewport_w, f32::INFINITY));
        self.content.measure(c, ctx)
    }

    /// Total scrollable distance: the body plus its `max_height` top inset,
    /// minus the viewport.
    fn max_scroll(&self, content_h: f32, viewport_h: f32) -> f32 {
        (content_h + self.metrics.max_height - viewport_h).max(0.0)
    }

    fn clamped_offset(&self, content_h: f32, viewport_h: f32) -> f32 {
        self.scroll_offset.clamp(0.0, self.max_scroll(content_h, viewport_h))
    }

    fn content_rect(&self, rect: Rect, content_h: f32) -> Rect {
        let offset = self.clamped_offset(content_h, rect.size.y);
        Rect::new(
            rect.origin.x,
            rect.origin.y + self.metrics.max_height - offset,
            rect.size.x,
            content_h,
        )
    }

    fn apply_scroll(&mut self, delta: f32, content_h: f32, viewport_h: f32) {
        let max = self.max_scroll(content_h, viewport_h);
        self.scroll_offset = (self.scroll_offset + delta).clamp(0.0, max);
    }
}

fn rgba_to_color(c: Rgba) -> Color {
    Color::from_straight(c.r, c.g, c.b, c.a)
}

impl Widget for HeaderScroller {
    fn measure(&self, constraints: Constraints, ctx: &LayoutCtx) -> Vec2 {
        // Fills whatever space the parent offers; falls back to natural
        // height (header + body) when unconstrained.
        let w = if constraints.max.x.is_finite() { constraints.max.x } else { 0.0 };
        let content = self.measure_content(w, ctx);
        self.cached_content_height.set(content.y);
        let h = if constraints.max.y.is_finite() {
            constraints.max.y
        } else {
            self.metrics.max_height + content.y
        };
        constraints.constrain(Vec2::new(w, h))
    }

    fn paint(&self, painter: &mut Painter, rect: Rect) {
        let ctx = painter.layout_ctx();
        let content_h = self.measure_content(rect.size.x, &ctx).y;
        self.cached_content_height.set(content_h);

        let s = self.clamped_offset(content_h, rect.size.y);
        let pose = self.metrics.pose(s);

        // ── body ──────────────────────────────────────────────────────────
        // Painted first so the header always covers it. The top inset equals
        // max_height so the body starts below the expanded header at rest.
        painter.push_clip(rect);
        self.content.paint(painter, self.content_rect(rect, content_h));
        painter.pop_clip();

        // ── header bar ────────────────────────────────────────────────────
        // Pinned to the top; its height carries the collapse. (The pose also
        // exposes the equivalent translate-up representation.)
        let bar = Rect::new(rect.origin.x, rect.origin.y, rect.size.x, pose.header_height);
        let bar_bottom = bar.origin.y + bar.size.y;
        painter.fill_rect(bar, self.bar_color);

        // ── backdrop ──────────────────────────────────────────────────────
        // Full-bleed at expanded height, parallaxing down at half the scroll
        // rate while it fades. Clipped so it never pokes below the bar.
        let backdrop = Rect::new(rect.origin.x, rect.origin.y, rect.size.x, self.metrics.max_height)
            .translated(0.0, pose.image_translate_y);
        painter.push_clip(bar);
        painter.image(backdrop, self.backdrop, pose.image_opacity);
        painter.pop_clip();

        // ── avatar ────────────────────────────────────────────────────────
        let avatar = Rect::new(
            rect.origin.x + EDGE_PAD + pose.avatar_translate_x,
            bar_bottom - pose.avatar_size - BOTTOM_PAD,
            pose.avatar_size,
            pose.avatar_size,
        );
        painter.rounded_image(avatar, self.avatar, pose.avatar_border_radius, 1.0);

        // ── title ─────────────────────────────────────────────────────────
        // Anchored at its collapsed-row position (after the avatar's
        // collapsed slot) and slid left while expanded.
        let title_origin = Vec2::new(
            rect.origin.x + EDGE_PAD + HeaderMetrics::AVATAR_COLLAPSED + TITLE_GAP
                + pose.title_translate_x,
            bar_bottom - BOTTOM_PAD - self.title_size * 1.2,
        );
        painter.text(
            &self.title,
            self.title_font,
            self.title_size,
            rgba_to_color(pose.title_color),
            title_origin,
            None,
        );
    }

    fn on_event(&mut self, event: &UiEvent, rect: Rect, ctx: &LayoutCtx<'_>) -> EventResult {
        let content_h = self.cached_content_height.get();

        match event {
            UiEvent::ScrollWheel { delta } => {
                self.apply_scroll(*delta * self.line_height, content_h, rect.size.y);
                EventResult::Consumed
            }

            UiEvent::KeyPress { key, .. } => {
                let content_rect = self.content_rect(rect, content_h);
                if self.content.on_event(event, content_rect, ctx) == EventResult::Consumed {
                    return EventResult::Consumed;
                }
                let page = rect.size.y * 0.9;
                match key {
                    Key::ArrowDown => self.apply_scroll(self.line_height, content_h, rect.size.y),
                    Key::ArrowUp => self.apply_scroll(-self.line_height, content_h, rect.size.y),
                    Key::PageDown => self.apply_scroll(page, content_h, rect.size.y),
                    Key::PageUp => self.apply_scroll(-page, content_h, rect.size.y),
                    Key::Home => self.apply_scroll(f32::NEG_INFINITY, content_h, rect.size.y),
                    Key::End => self.apply_scroll(f32::INFINITY, content_h, rect.size.y),
                    _ => return EventResult::Ignored,
                }
                EventResult::Consumed
            }

            other => {
                let content_rect = self.content_rect(rect, content_h);
                self.content.on_event(other, content_rect, ctx)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crest_engine::image::{ImageData, ImageStore};
    use crest_engine::scene::{DrawCmd, DrawList};
    use crest_engine::text::FontSystem;

    /// Probe body: a fixed-size block painted in a recognizable color.
    struct Probe {
        size: Vec2,
        color: Color,
    }

    impl Widget for Probe {
        fn measure(&self, _c: Constraints, _ctx: &LayoutCtx) -> Vec2 {
            self.size
        }
        fn paint(&self, painter: &mut Painter, rect: Rect) {
            painter.fill_rect(rect, self.color);
        }
    }

    const PROBE_COLOR: Color = Color { r: 1.0, g: 0.0, b: 1.0, a: 1.0 };
    const SCREEN: Rect = Rect::new(0.0, 0.0, 390.0, 720.0);

    fn scroller() -> HeaderScroller {
        let mut store = ImageStore::new();
        let backdrop = store.register(ImageData::placeholder(4, 4));
        let avatar = store.register(ImageData::placeholder(4, 4));
        HeaderScroller::new(
            "Profile",
            FontId(0),
            backdrop,
            avatar,
            Probe { size: Vec2::new(390.0, 2000.0), color: PROBE_COLOR },
        )
    }

    fn paint(widget: &HeaderScroller) -> DrawList {
        let fonts = FontSystem::new();
        let mut dl = DrawList::new();
        {
            let mut painter = Painter::new(&mut dl, &fonts, Vec2::zero(), false, 1.0);
            widget.paint(&mut painter, SCREEN);
        }
        dl
    }

    fn images(dl: &DrawList) -> Vec<crest_engine::scene::ImageCmd> {
        dl.items()
            .iter()
            .filter_map(|i| match &i.cmd {
                DrawCmd::Image(c) => Some(*c),
                _ => None,
            })
            .collect()
    }

    fn title_cmd(dl: &DrawList) -> crest_engine::scene::TextCmd {
        dl.items()
            .iter()
            .find_map(|i| match &i.cmd {
                DrawCmd::Text(c) => Some(c.clone()),
                _ => None,
            })
            .expect("no title in draw list")
    }

    fn bar_cmd(dl: &DrawList) -> crest_engine::scene::RectCmd {
        dl.items()
            .iter()
            .find_map(|i| match &i.cmd {
                DrawCmd::Rect(c) if c.color != PROBE_COLOR => Some(*c),
                _ => None,
            })
            .expect("no header bar in draw list")
    }

    // ── expanded stack at rest ────────────────────────────────────────────

    #[test]
    fn at_rest_paints_the_expanded_stack() {
        let w = scroller();
        let dl = paint(&w);

        let bar = bar_cmd(&dl);
        assert_eq!(bar.rect.size.y, 160.0);

        let imgs = images(&dl);
        assert_eq!(imgs.len(), 2);

        // Backdrop: full-bleed, opaque, no parallax yet.
        let backdrop = imgs[0];
        assert_eq!(backdrop.opacity, 1.0);
        assert_eq!(backdrop.rect, Rect::new(0.0, 0.0, 390.0, 160.0));

        // Avatar: expanded 80px square, sharp corners, still off-screen left.
        let avatar = imgs[1];
        assert_eq!(avatar.rect.size, Vec2::new(80.0, 80.0));
        assert_eq!(avatar.radii.top_left, 0.0);
        assert_eq!(avatar.rect.origin.x, EDGE_PAD - 80.0);

        // Title: white, slid 40px left of its resting slot.
        let title = title_cmd(&dl);
        assert_eq!(title.color, Color::from_straight(1.0, 1.0, 1.0, 1.0));
        assert_eq!(title.origin.x, EDGE_PAD + 24.0 + TITLE_GAP - 40.0);
    }

    #[test]
    fn body_rests_below_the_expanded_header() {
        let w = scroller();
        let dl = paint(&w);

        let probe = dl
            .items()
            .iter()
            .find_map(|i| match &i.cmd {
                DrawCmd::Rect(c) if c.color == PROBE_COLOR => Some(*c),
                _ => None,
            })
            .expect("no body in draw list");
        assert_eq!(probe.rect.origin.y, 160.0);
    }

    // ── collapsed stack past the collapse distance ────────────────────────

    #[test]
    fn past_collapse_distance_paints_the_collapsed_stack() {
        let mut w = scroller();
        w.scroll_offset = 300.0; // well past D = 96

        let dl = paint(&w);

        let bar = bar_cmd(&dl);
        assert_eq!(bar.rect.size.y, 64.0);

        let imgs = images(&dl);

        // Backdrop: fully faded, parallaxed down by D/2.
        let backdrop = imgs[0];
        assert_eq!(backdrop.opacity, 0.0);
        assert_eq!(backdrop.rect.origin.y, 48.0);

        // Avatar: collapsed 24px badge with 12px corners, docked at the inset.
        let avatar = imgs[1];
        assert_eq!(avatar.rect.size, Vec2::new(24.0, 24.0));
        assert_eq!(avatar.radii.top_left, 12.0);
        assert_eq!(avatar.rect.origin.x, EDGE_PAD);

        // Title: black, docked at its resting slot.
        let title = title_cmd(&dl);
        assert_eq!(title.color, Color::from_straight(0.0, 0.0, 0.0, 1.0));
        assert_eq!(title.origin.x, EDGE_PAD + 24.0 + TITLE_GAP);
    }

    // ── backdrop clipping ─────────────────────────────────────────────────

    #[test]
    fn backdrop_is_clipped_to_the_bar() {
        let mut w = scroller();
        w.scroll_offset = 48.0; // halfway: bar is 112 tall

        let dl = paint(&w);
        let item = dl
            .items()
            .iter()
            .find(|i| matches!(&i.cmd, DrawCmd::Image(_)))
            .expect("no backdrop in draw list");
        assert_eq!(item.clip_rect, Some(Rect::new(0.0, 0.0, 390.0, 112.0)));
    }

    // ── scrolling ─────────────────────────────────────────────────────────

    #[test]
    fn wheel_scroll_clamps_to_content_overflow() {
        let fonts = FontSystem::new();
        let lc = LayoutCtx { fonts: &fonts, scale: 1.0 };
        let mut w = scroller();
        let _ = w.measure(Constraints::loose(SCREEN.size), &lc);

        w.on_event(&UiEvent::ScrollWheel { delta: 2.0 }, SCREEN, &lc);
        assert_eq!(w.scroll_offset, 48.0);

        // max scroll = 160 + 2000 - 720
        w.on_event(&UiEvent::ScrollWheel { delta: 1e6 }, SCREEN, &lc);
        assert_eq!(w.scroll_offset, 1440.0);

        w.on_event(&UiEvent::ScrollWheel { delta: -1e6 }, SCREEN, &lc);
        assert_eq!(w.scroll_offset, 0.0);
    }

    #[test]
    fn keyboard_scrolling_mirrors_the_wheel() {
        let fonts = FontSystem::new();
        let lc = LayoutCtx { fonts: &fonts, scale: 1.0 };
        let mut w = scroller();
        let _ = w.measure(Constraints::loose(SCREEN.size), &lc);

        let down = UiEvent::KeyPress { key: Key::ArrowDown, modifiers: Default::default() };
        assert!(w.on_event(&down, SCREEN, &lc).is_consumed());
        assert_eq!(w.scroll_offset, 24.0);

        let end = UiEvent::KeyPress { key: Key::End, modifiers: Default::default() };
        assert!(w.on_event(&end, SCREEN, &lc).is_consumed());
        assert_eq!(w.scroll_offset, 1440.0);
    }

    // ── platform normalization ────────────────────────────────────────────

    #[test]
    fn inset_convention_rest_offset_is_expanded() {
        let w = scroller().offset_from_raw(-160.0, ScrollConvention::ContentInset);
        assert_eq!(w.scroll_offset, 0.0);
        assert_eq!(w.pose().progress, 0.0);
    }
}
