use super::Vec2;

/// Axis-aligned rectangle in logical pixels (top-left origin).
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Rect {
    pub origin: Vec2,
    pub size: Vec2,
}

impl Rect {
    #[inline]
    pub const fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { origin: Vec2::new(x, y), size: Vec2::new(w, h) }
    }

    #[inline]
    pub const fn from_origin_size(origin: Vec2, size: Vec2) -> Self {
        Self { origin, size }
    }

    #[inline]
    pub fn min(self) -> Vec2 {
        self.origin
    }

    #[inline]
    pub fn max(self) -> Vec2 {
        self.origin + self.size
    }

    /// The rect shifted by `(dx, dy)` with unchanged size.
    #[inline]
    #[must_use]
    pub fn translated(self, dx: f32, dy: f32) -> Self {
        Self { origin: Vec2::new(self.origin.x + dx, self.origin.y + dy), size: self.size }
    }

    #[inline]
    pub fn is_empty(self) -> bool {
        self.size.x <= 0.0 || self.size.y <= 0.0
    }

    #[inline]
    pub fn is_finite(self) -> bool {
        self.origin.is_finite() && self.size.is_finite()
    }

    /// Normalizes the rectangle so width/height are non-negative.
    #[inline]
    pub fn normalized(self) -> Self {
        let mut x = self.origin.x;
        let mut y = self.origin.y;
        let mut w = self.size.x;
        let mut h = self.size.y;

        if w < 0.0 {
            x += w;
            w = -w;
        }
        if h < 0.0 {
            y += h;
            h = -h;
        }

        Rect::new(x, y, w, h)
    }

    /// Half-open containment: [min, max).
    #[inline]
    pub fn contains(self, p: Vec2) -> bool {
        let r = self.normalized();
        p.x >= r.origin.x
            && p.y >= r.origin.y
            && p.x < (r.origin.x + r.size.x)
            && p.y < (r.origin.y + r.size.y)
    }

    /// Overlapping region of two rects, `None` when they are disjoint or
    /// touch only along an edge.
    #[inline]
    pub fn intersect(self, other: Rect) -> Option<Rect> {
        let a = self.normalized();
        let b = other.normalized();

        let x0 = a.origin.x.max(b.origin.x);
        let y0 = a.origin.y.max(b.origin.y);
        let x1 = (a.origin.x + a.size.x).min(b.origin.x + b.size.x);
        let y1 = (a.origin.y + a.size.y).min(b.origin.y + b.size.y);

        let w = x1 - x0;
        let h = y1 - y0;

        if w <= 0.0 || h <= 0.0 { None } else { Some(Rect::new(x0, y0, w, h)) }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn r(x: f32, y: f32, w: f32, h: f32) -> Rect {
        Rect::new(x, y, w, h)
    }

    // ── translated ────────────────────────────────────────────────────────

    #[test]
    fn translated_moves_origin_only() {
        let moved = r(10.0, 20.0, 80.0, 160.0).translated(-80.0, 48.0);
        assert_eq!(moved.origin, Vec2::new(-70.0, 68.0));
        assert_eq!(moved.size, Vec2::new(80.0, 160.0));
    }

    // ── normalized ────────────────────────────────────────────────────────

    #[test]
    fn normalized_flips_negative_extents() {
        let n = r(10.0, 10.0, -4.0, -6.0).normalized();
        assert_eq!(n, r(6.0, 4.0, 4.0, 6.0));
    }

    // ── contains ──────────────────────────────────────────────────────────

    #[test]
    fn contains_is_half_open() {
        let rect = r(0.0, 0.0, 10.0, 10.0);
        assert!(rect.contains(Vec2::zero()));
        assert!(rect.contains(Vec2::new(9.999, 9.999)));
        assert!(!rect.contains(Vec2::new(10.0, 10.0)));
    }

    #[test]
    fn contains_rejects_outside_points() {
        let rect = r(5.0, 5.0, 10.0, 10.0);
        assert!(!rect.contains(Vec2::new(4.0, 8.0)));
        assert!(!rect.contains(Vec2::new(8.0, 16.0)));
    }

    // ── intersect ─────────────────────────────────────────────────────────

    #[test]
    fn intersect_overlapping() {
        let i = r(0.0, 0.0, 10.0, 10.0).intersect(r(6.0, 4.0, 10.0, 10.0)).unwrap();
        assert_eq!(i, r(6.0, 4.0, 4.0, 6.0));
    }

    #[test]
    fn intersect_nested_returns_inner() {
        let outer = r(0.0, 0.0, 390.0, 720.0);
        let inner = r(16.0, 160.0, 358.0, 48.0);
        assert_eq!(outer.intersect(inner).unwrap(), inner);
    }

    #[test]
    fn intersect_edge_touch_is_none() {
        assert!(r(0.0, 0.0, 10.0, 10.0).intersect(r(0.0, 10.0, 10.0, 10.0)).is_none());
    }

    #[test]
    fn intersect_disjoint_is_none() {
        assert!(r(0.0, 0.0, 5.0, 5.0).intersect(r(100.0, 100.0, 5.0, 5.0)).is_none());
    }
}
