/// How the host scroll container reports its resting offset.
///
/// The mapping math wants `s = 0` to mean "header fully expanded" on every
/// platform. Most containers already report 0 at rest; content-inset-style
/// containers rest at `-expanded_height` instead, so their raw value needs a
/// constant shift before it reaches the mapper. Normalization is the single
/// platform-conditional step in the pipeline — everything downstream is
/// platform-agnostic.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub enum ScrollConvention {
    /// The container reports 0 at rest. Raw offsets pass through unchanged.
    #[default]
    ZeroAtRest,
    /// The container rests at `-expanded_height` (content-inset convention).
    /// Raw offsets are shifted by `+expanded_height`.
    ContentInset,
}

impl ScrollConvention {
    /// Normalizes a raw container offset so that 0 means fully expanded.
    ///
    /// The result is not clamped; clamping to the collapse range happens per
    /// derived property inside the mapper.
    #[inline]
    pub fn normalize(self, raw: f32, expanded_height: f32) -> f32 {
        match self {
            ScrollConvention::ZeroAtRest => raw,
            ScrollConvention::ContentInset => raw + expanded_height,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_at_rest_passes_through() {
        assert_eq!(ScrollConvention::ZeroAtRest.normalize(37.5, 160.0), 37.5);
        assert_eq!(ScrollConvention::ZeroAtRest.normalize(-12.0, 160.0), -12.0);
    }

    #[test]
    fn content_inset_shifts_resting_offset_to_zero() {
        assert_eq!(ScrollConvention::ContentInset.normalize(-160.0, 160.0), 0.0);
    }

    #[test]
    fn content_inset_preserves_scroll_distance() {
        // Scrolling 48px past rest lands at s = 48 under either convention.
        assert_eq!(ScrollConvention::ContentInset.normalize(-112.0, 160.0), 48.0);
        assert_eq!(ScrollConvention::ZeroAtRest.normalize(48.0, 160.0), 48.0);
    }
}
