use crate::coords::Rect;

use super::{DrawCmd, SortKey, ZIndex};

/// A single draw item: sort key + command + clip rect.
#[derive(Debug, Clone, PartialEq)]
pub struct DrawItem {
    pub key: SortKey,
    pub cmd: DrawCmd,
    /// Scissor rect in logical pixels. `None` = no clipping (draw everywhere).
    pub clip_rect: Option<Rect>,
}

/// Recorded draw stream for a frame.
///
/// `push()` is O(1); paint-order iteration reuses an internal index buffer so
/// there is no per-frame allocation once warmed.
///
/// # Clipping
///
/// Use [`push_clip`] / [`pop_clip`] to scope draw commands to a scissor rect.
/// Clips are intersected with the current parent, so a header bar drawn over
/// a clipped scroll viewport composes correctly.
///
/// [`push_clip`]: DrawList::push_clip
/// [`pop_clip`]: DrawList::pop_clip
#[derive(Debug, Default)]
pub struct DrawList {
    items: Vec<DrawItem>,
    next_order: u32,

    sorted_indices: Vec<usize>,
    sorted_dirty: bool,

    /// Stack of active scissor rects (logical pixels).
    /// The top is always the current effective clip, already intersected with all parents.
    clip_stack: Vec<Rect>,
}

impl DrawList {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Clears recorded items and the clip stack. Keeps allocated capacity for reuse.
    #[inline]
    pub fn clear(&mut self) {
        self.items.clear();
        self.next_order = 0;
        self.sorted_dirty = true;
        self.sorted_indices.clear();
        self.clip_stack.clear();
    }

    /// Returns items in insertion order.
    #[inline]
    pub fn items(&self) -> &[DrawItem] {
        &self.items
    }

    /// Pushes a draw command with the given z-index.
    ///
    /// The item inherits the current clip rect from the clip stack.
    #[inline]
    pub fn push(&mut self, z: ZIndex, cmd: DrawCmd) {
        let order = self.next_order;
        self.next_order = self.next_order.wrapping_add(1);

        self.items.push(DrawItem {
            key: SortKey::new(z, order),
            cmd,
            clip_rect: self.clip_stack.last().copied(),
        });

        self.sorted_dirty = true;
    }

    /// Begins a scissor region. All draw commands pushed until [`pop_clip`]
    /// are clipped to `rect` (intersected with any parent clip rect).
    ///
    /// Calls must be balanced with [`pop_clip`].
    ///
    /// [`pop_clip`]: DrawList::pop_clip
    #[inline]
    pub fn push_clip(&mut self, rect: Rect) {
        let effective = match self.clip_stack.last() {
            None => rect,
            // Intersect with the parent; if no overlap, produce a zero-area rect so
            // the renderer skips those draw calls.
            Some(&parent) => parent.intersect(rect).unwrap_or(Rect::new(0.0, 0.0, 0.0, 0.0)),
        };
        self.clip_stack.push(effective);
    }

    /// Ends the most recent scissor region started by [`push_clip`].
    ///
    /// # Panics
    /// Panics (debug only) if called without a matching `push_clip`.
    ///
    /// [`push_clip`]: DrawList::push_clip
    #[inline]
    pub fn pop_clip(&mut self) {
        debug_assert!(!self.clip_stack.is_empty(), "pop_clip called without matching push_clip");
        self.clip_stack.pop();
    }

    /// Returns indices into `items` in paint order (back-to-front).
    ///
    /// This buffer is owned by `DrawList` and reused across frames.
    pub fn indices_in_paint_order(&mut self) -> &[usize] {
        if self.sorted_dirty {
            self.rebuild_sorted_indices();
        }
        &self.sorted_indices
    }

    /// Iterates items in paint order without cloning draw commands.
    pub fn iter_in_paint_order(&mut self) -> impl Iterator<Item = &DrawItem> {
        if self.sorted_dirty {
            self.rebuild_sorted_indices();
        }

        self.sorted_indices.iter().map(|&i| &self.items[i])
    }

    fn rebuild_sorted_indices(&mut self) {
        self.sorted_indices.clear();
        self.sorted_indices.extend(0..self.items.len());

        // Stable ordering is ensured by SortKey including insertion order.
        self.sorted_indices
            .sort_by(|&a, &b| self.items[a].key.cmp(&self.items[b].key));

        self.sorted_dirty = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::paint::Color;

    fn solid(dl: &mut DrawList, z: i32, x: f32) {
        dl.push_solid_rect(ZIndex::new(z), Rect::new(x, 0.0, 1.0, 1.0), Color::transparent());
    }

    // ── ordering ──────────────────────────────────────────────────────────

    #[test]
    fn paint_order_sorts_by_z_then_insertion() {
        let mut dl = DrawList::new();
        solid(&mut dl, 5, 0.0);
        solid(&mut dl, 1, 1.0);
        solid(&mut dl, 5, 2.0);

        let order: Vec<usize> = dl.indices_in_paint_order().to_vec();
        assert_eq!(order, vec![1, 0, 2]);
    }

    #[test]
    fn clear_resets_insertion_order() {
        let mut dl = DrawList::new();
        solid(&mut dl, 0, 0.0);
        dl.clear();
        solid(&mut dl, 0, 1.0);
        assert_eq!(dl.items().len(), 1);
        assert_eq!(dl.items()[0].key.order, 0);
    }

    // ── clipping ──────────────────────────────────────────────────────────

    #[test]
    fn items_inherit_current_clip() {
        let mut dl = DrawList::new();
        solid(&mut dl, 0, 0.0);
        dl.push_clip(Rect::new(0.0, 160.0, 390.0, 560.0));
        solid(&mut dl, 0, 1.0);
        dl.pop_clip();
        solid(&mut dl, 0, 2.0);

        assert_eq!(dl.items()[0].clip_rect, None);
        assert_eq!(dl.items()[1].clip_rect, Some(Rect::new(0.0, 160.0, 390.0, 560.0)));
        assert_eq!(dl.items()[2].clip_rect, None);
    }

    #[test]
    fn nested_clips_intersect_with_parent() {
        let mut dl = DrawList::new();
        dl.push_clip(Rect::new(0.0, 0.0, 100.0, 100.0));
        dl.push_clip(Rect::new(50.0, 50.0, 100.0, 100.0));
        solid(&mut dl, 0, 0.0);
        dl.pop_clip();
        dl.pop_clip();

        assert_eq!(dl.items()[0].clip_rect, Some(Rect::new(50.0, 50.0, 50.0, 50.0)));
    }

    #[test]
    fn disjoint_nested_clip_collapses_to_zero_area() {
        let mut dl = DrawList::new();
        dl.push_clip(Rect::new(0.0, 0.0, 10.0, 10.0));
        dl.push_clip(Rect::new(50.0, 50.0, 10.0, 10.0));
        solid(&mut dl, 0, 0.0);
        dl.pop_clip();
        dl.pop_clip();

        let clip = dl.items()[0].clip_rect.unwrap();
        assert!(clip.is_empty());
    }
}
