use crate::rgba::Rgba;

/// Fixed geometry of a collapsing header.
///
/// Invariant: `max_height > min_height`, so the collapse distance is always
/// positive and the interpolation domain is never degenerate.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct HeaderMetrics {
    /// Header height when fully expanded (`s = 0`), logical pixels.
    pub max_height: f32,
    /// Header height when fully collapsed (`s >= collapse_distance`).
    pub min_height: f32,
}

impl HeaderMetrics {
    pub const AVATAR_EXPANDED: f32 = 80.0;
    pub const AVATAR_COLLAPSED: f32 = 24.0;
    pub const AVATAR_RADIUS_COLLAPSED: f32 = 12.0;
    pub const TITLE_SLIDE: f32 = 40.0;

    #[inline]
    pub fn new(max_height: f32, min_height: f32) -> Self {
        debug_assert!(
            max_height > min_height,
            "HeaderMetrics: max_height ({max_height}) must exceed min_height ({min_height})"
        );
        Self { max_height, min_height }
    }

    /// The scroll distance over which the header fully collapses.
    #[inline]
    pub fn collapse_distance(self) -> f32 {
        self.max_height - self.min_height
    }

    /// Shared progress fraction for a normalized offset `s`, clamped to `[0, 1]`.
    ///
    /// `0` = fully expanded, `1` = fully collapsed. Every derived property is
    /// a linear function of this one value; computing it once keeps the nine
    /// interpolations in lockstep.
    #[inline]
    pub fn progress(self, s: f32) -> f32 {
        (s / self.collapse_distance()).clamp(0.0, 1.0)
    }

    /// Computes the full set of derived visual properties for offset `s`.
    ///
    /// Pure: no hidden state, identical inputs give identical poses. `s` is
    /// the platform-normalized offset (see [`ScrollConvention::normalize`]);
    /// out-of-range values pin to the expanded or collapsed endpoint.
    ///
    /// [`ScrollConvention::normalize`]: crate::ScrollConvention::normalize
    pub fn pose(self, s: f32) -> HeaderPose {
        let d = self.collapse_distance();
        let t = self.progress(s);

        HeaderPose {
            progress: t,
            header_translate_y: -d * t,
            header_height: self.max_height + (self.min_height - self.max_height) * t,
            image_opacity: 1.0 - t,
            // Backdrop parallaxes at half the scroll rate.
            image_translate_y: (d / 2.0) * t,
            title_color: Rgba::WHITE.lerp(Rgba::BLACK, t),
            avatar_size: Self::AVATAR_EXPANDED
                + (Self::AVATAR_COLLAPSED - Self::AVATAR_EXPANDED) * t,
            avatar_border_radius: Self::AVATAR_RADIUS_COLLAPSED * t,
            avatar_translate_x: -Self::AVATAR_EXPANDED * (1.0 - t),
            title_translate_x: -Self::TITLE_SLIDE * (1.0 - t),
        }
    }
}

impl Default for HeaderMetrics {
    /// The reference geometry: 160px expanded, 64px collapsed, D = 96.
    fn default() -> Self {
        Self { max_height: 160.0, min_height: 64.0 }
    }
}

/// The nine derived visual properties for one scroll position.
///
/// A pose is a value, not a controller: the renderer reads it and issues draw
/// calls, nothing here mutates anything.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct HeaderPose {
    /// Shared clamped fraction in `[0, 1]` the other fields derive from.
    pub progress: f32,
    /// Header slides up as it collapses: `0 → -D`.
    pub header_translate_y: f32,
    /// Header shrinks: `max_height → min_height`.
    pub header_height: f32,
    /// Backdrop image fades out: `1 → 0`.
    pub image_opacity: f32,
    /// Backdrop parallax at half rate: `0 → D/2`.
    pub image_translate_y: f32,
    /// Title recolors white → black.
    pub title_color: Rgba,
    /// Avatar shrinks: `80 → 24` (applied to width and height).
    pub avatar_size: f32,
    /// Avatar corners round: `0 → 12`.
    pub avatar_border_radius: f32,
    /// Avatar slides in from off-screen left: `-80 → 0`.
    pub avatar_translate_x: f32,
    /// Title slides in from off-screen left: `-40 → 0`.
    pub title_translate_x: f32,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ScrollConvention;

    fn metrics() -> HeaderMetrics {
        HeaderMetrics::new(160.0, 64.0)
    }

    // ── endpoints ─────────────────────────────────────────────────────────

    #[test]
    fn at_or_below_zero_is_fully_expanded() {
        for s in [0.0, -1.0, -96.0, -10_000.0] {
            let p = metrics().pose(s);
            assert_eq!(p.progress, 0.0, "s = {s}");
            assert_eq!(p.header_translate_y, 0.0);
            assert_eq!(p.header_height, 160.0);
            assert_eq!(p.image_opacity, 1.0);
            assert_eq!(p.image_translate_y, 0.0);
            assert_eq!(p.title_color, Rgba::WHITE);
            assert_eq!(p.avatar_size, 80.0);
            assert_eq!(p.avatar_border_radius, 0.0);
            assert_eq!(p.avatar_translate_x, -80.0);
            assert_eq!(p.title_translate_x, -40.0);
        }
    }

    #[test]
    fn at_or_beyond_collapse_distance_is_fully_collapsed() {
        for s in [96.0, 97.0, 500.0, 10_000.0] {
            let p = metrics().pose(s);
            assert_eq!(p.progress, 1.0, "s = {s}");
            assert_eq!(p.header_translate_y, -96.0);
            assert_eq!(p.header_height, 64.0);
            assert_eq!(p.image_opacity, 0.0);
            assert_eq!(p.image_translate_y, 48.0);
            assert_eq!(p.title_color, Rgba::BLACK);
            assert_eq!(p.avatar_size, 24.0);
            assert_eq!(p.avatar_border_radius, 12.0);
            assert_eq!(p.avatar_translate_x, 0.0);
            assert_eq!(p.title_translate_x, 0.0);
        }
    }

    // ── midpoint scenario ─────────────────────────────────────────────────

    #[test]
    fn midpoint_of_reference_geometry() {
        let p = metrics().pose(48.0);
        assert_eq!(p.progress, 0.5);
        assert_eq!(p.header_height, 112.0);
        assert_eq!(p.image_opacity, 0.5);
        assert_eq!(p.avatar_size, 52.0);
        assert_eq!(p.avatar_border_radius, 6.0);
        assert_eq!(p.title_translate_x, -20.0);
        assert_eq!(p.avatar_translate_x, -40.0);
    }

    // ── monotonicity ──────────────────────────────────────────────────────

    #[test]
    fn collapse_is_monotone_over_the_domain() {
        let m = metrics();
        let mut prev = m.pose(0.0);
        for i in 1..=96 {
            let p = m.pose(i as f32);
            assert!(p.header_height <= prev.header_height);
            assert!(p.image_opacity <= prev.image_opacity);
            assert!(p.avatar_size <= prev.avatar_size);
            assert!(p.avatar_border_radius >= prev.avatar_border_radius);
            prev = p;
        }
    }

    // ── purity ────────────────────────────────────────────────────────────

    #[test]
    fn pose_is_idempotent() {
        let m = metrics();
        for s in [-5.0, 0.0, 13.7, 48.0, 96.0, 4242.0] {
            assert_eq!(m.pose(s), m.pose(s), "s = {s}");
        }
    }

    // ── platform normalization ────────────────────────────────────────────

    #[test]
    fn inset_resting_offset_reproduces_expanded_pose() {
        let m = metrics();
        let s = ScrollConvention::ContentInset.normalize(-160.0, m.max_height);
        assert_eq!(s, 0.0);
        assert_eq!(m.pose(s), m.pose(0.0));
    }

    // ── geometry helpers ──────────────────────────────────────────────────

    #[test]
    fn default_collapse_distance_is_96() {
        assert_eq!(HeaderMetrics::default().collapse_distance(), 96.0);
    }

    #[test]
    fn custom_metrics_scale_the_domain() {
        let m = HeaderMetrics::new(200.0, 50.0); // D = 150
        assert_eq!(m.pose(75.0).progress, 0.5);
        assert_eq!(m.pose(75.0).header_height, 125.0);
    }
}
