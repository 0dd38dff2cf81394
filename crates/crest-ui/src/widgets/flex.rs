use crest_engine::coords::{Rect, Vec2};

use crate::constraints::{inset_rect, Constraints, Edges, LayoutCtx};
use crate::event::{EventResult, UiEvent};
use crate::painter::Painter;
use crate::widget::{Element, Widget};

// ── Align ─────────────────────────────────────────────────────────────────

/// Cross-axis alignment inside a flex container.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Align {
    /// Children fill the full cross-axis extent (default).
    #[default]
    Stretch,
    /// Children are placed at the start of the cross axis.
    Start,
    /// Children are centered on the cross axis.
    Center,
    /// Children are placed at the end of the cross axis.
    End,
}

// ── Column ────────────────────────────────────────────────────────────────

/// Vertical flex container. Children are stacked top to bottom.
///
/// # Example
/// ```rust,ignore
/// Column::new()
///     .padding_all(16.0)
///     .spacing(8.0)
///     .child(Text::new("Title", font, 20.0, white))
///     .child(Text::new("Body",  font, 14.0, grey))
/// ```
pub struct Column {
    children: Vec<Element>,
    spacing: f32,
    padding: Edges,
    cross_align: Align,
}

impl Column {
    pub fn new() -> Self {
        Self {
            children: Vec::new(),
            spacing: 0.0,
            padding: Edges::default(),
            cross_align: Align::Stretch,
        }
    }

    pub fn spacing(mut self, v: f32) -> Self {
        self.spacing = v;
        self
    }

    pub fn padding(mut self, edges: Edges) -> Self {
        self.padding = edges;
        self
    }

    pub fn padding_all(mut self, v: f32) -> Self {
        self.padding = Edges::all(v);
        self
    }

    pub fn cross_align(mut self, align: Align) -> Self {
        self.cross_align = align;
        self
    }

    pub fn child(mut self, child: impl Into<Element>) -> Self {
        self.children.push(child.into());
        self
    }

    pub fn children(mut self, iter: impl IntoIterator<Item = impl Into<Element>>) -> Self {
        self.children.extend(iter.into_iter().map(Into::into));
        self
    }

    // ── layout helpers ────────────────────────────────────────────────────

    fn inner_width(&self, available: f32) -> f32 {
        (available - self.padding.h()).max(0.0)
    }

    fn child_constraints(&self, inner_w: f32) -> Constraints {
        match self.cross_align {
            Align::Stretch => {
                // Only enforce the width when it is actually constrained.
                // When inner_w is INFINITY children should size naturally,
                // not to ∞.
                let min_x = if inner_w.is_finite() { inner_w } else { 0.0 };
                Constraints {
                    min: Vec2::new(min_x, 0.0),
                    max: Vec2::new(inner_w, f32::INFINITY),
                }
            }
            _ => Constraints::loose(Vec2::new(inner_w, f32::INFINITY)),
        }
    }

    fn child_x(&self, inner_origin_x: f32, inner_w: f32, child_w: f32) -> f32 {
        match self.cross_align {
            Align::Stretch | Align::Start => inner_origin_x,
            Align::Center => inner_origin_x + (inner_w - child_w) * 0.5,
            Align::End => inner_origin_x + (inner_w - child_w),
        }
    }
}

impl Default for Column {
    fn default() -> Self {
        Self::new()
    }
}

impl Widget for Column {
    fn measure(&self, constraints: Constraints, ctx: &LayoutCtx) -> Vec2 {
        let inner_w = self.inner_width(constraints.max.x);
        let child_c = self.child_constraints(inner_w);

        let mut total_h = self.padding.v();
        let mut max_child_w: f32 = 0.0;

        for (i, child) in self.children.iter().enumerate() {
            let s = child.measure(child_c, ctx);
            total_h += s.y;
            if i + 1 < self.children.len() {
                total_h += self.spacing;
            }
            max_child_w = max_child_w.max(s.x);
        }

        let w = match self.cross_align {
            // Only fill the available width when it is actually constrained;
            // otherwise report content width.
            Align::Stretch => {
                if constraints.max.x.is_finite() {
                    constraints.max.x
                } else {
                    (max_child_w + self.padding.h()).max(0.0)
                }
            }
            _ => (max_child_w + self.padding.h()).max(0.0),
        };

        constraints.constrain(Vec2::new(w, total_h))
    }

    fn paint(&self, painter: &mut Painter, rect: Rect) {
        // Copy the font_system reference out of painter first. `&FontSystem`
        // is Copy so this ends the borrow on `painter`, letting us pass
        // `painter` mutably to child.paint() in the loop.
        let ctx = LayoutCtx { fonts: painter.font_system, scale: painter.scale };

        let inner = inset_rect(rect, self.padding);
        let child_c = self.child_constraints(inner.size.x);

        let mut y = inner.origin.y;
        for (i, child) in self.children.iter().enumerate() {
            let s = child.measure(child_c, &ctx);
            let x = self.child_x(inner.origin.x, inner.size.x, s.x);
            child.paint(painter, Rect::new(x, y, s.x, s.y));
            y += s.y;
            if i + 1 < self.children.len() {
                y += self.spacing;
            }
        }
    }

    fn on_event(&mut self, event: &UiEvent, rect: Rect, ctx: &LayoutCtx<'_>) -> EventResult {
        let inner = inset_rect(rect, self.padding);
        let child_c = self.child_constraints(inner.size.x);
        let cross_align = self.cross_align;
        let spacing = self.spacing;
        let n = self.children.len();

        let mut y = inner.origin.y;
        for (i, child) in self.children.iter_mut().enumerate() {
            let s = child.measure(child_c, ctx);
            let x = match cross_align {
                Align::Stretch | Align::Start => inner.origin.x,
                Align::Center => inner.origin.x + (inner.size.x - s.x) * 0.5,
                Align::End => inner.origin.x + (inner.size.x - s.x),
            };
            let child_rect = Rect::new(x, y, s.x, s.y);
            if child.on_event(event, child_rect, ctx).is_consumed() {
                return EventResult::Consumed;
            }
            y += s.y;
            if i + 1 < n {
                y += spacing;
            }
        }
        EventResult::Ignored
    }
}
