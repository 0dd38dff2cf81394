/// Maps `s` from `[in_lo, in_hi]` onto `[out_lo, out_hi]`, clamping to the
/// edges of the output range.
///
/// The input fraction is hard-clamped to `[0, 1]` before mapping, so values
/// outside the input range never extrapolate past the endpoints. The output
/// range may be inverted (`out_lo > out_hi`); clamping happens on the
/// fraction, not the output, so direction does not matter.
#[inline]
pub fn clamped_lerp(s: f32, in_lo: f32, in_hi: f32, out_lo: f32, out_hi: f32) -> f32 {
    debug_assert!(in_hi > in_lo, "clamped_lerp: degenerate input range");
    let t = ((s - in_lo) / (in_hi - in_lo)).clamp(0.0, 1.0);
    out_lo + (out_hi - out_lo) * t
}

/// A reusable interpolation: fixed input range, fixed output range,
/// clamp-to-edge extrapolation.
///
/// Constructed once, evaluated every frame. Stateless — `eval` is a pure
/// function of its argument.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct InterpSpec {
    pub in_lo: f32,
    pub in_hi: f32,
    pub out_lo: f32,
    pub out_hi: f32,
}

impl InterpSpec {
    #[inline]
    pub const fn new(in_lo: f32, in_hi: f32, out_lo: f32, out_hi: f32) -> Self {
        Self { in_lo, in_hi, out_lo, out_hi }
    }

    /// Evaluates the interpolation at `s`.
    #[inline]
    pub fn eval(&self, s: f32) -> f32 {
        clamped_lerp(s, self.in_lo, self.in_hi, self.out_lo, self.out_hi)
    }

    /// Evaluates from an already-clamped progress fraction in `[0, 1]`.
    ///
    /// All properties of a collapsing header share the same input domain, so
    /// callers can compute the fraction once and feed it to every spec.
    #[inline]
    pub fn eval_t(&self, t: f32) -> f32 {
        self.out_lo + (self.out_hi - self.out_lo) * t
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ── clamped_lerp ──────────────────────────────────────────────────────

    #[test]
    fn maps_endpoints_exactly() {
        assert_eq!(clamped_lerp(0.0, 0.0, 96.0, 160.0, 64.0), 160.0);
        assert_eq!(clamped_lerp(96.0, 0.0, 96.0, 160.0, 64.0), 64.0);
    }

    #[test]
    fn maps_midpoint() {
        assert_eq!(clamped_lerp(48.0, 0.0, 96.0, 160.0, 64.0), 112.0);
    }

    #[test]
    fn clamps_below_input_range() {
        assert_eq!(clamped_lerp(-500.0, 0.0, 96.0, 1.0, 0.0), 1.0);
    }

    #[test]
    fn clamps_above_input_range() {
        assert_eq!(clamped_lerp(500.0, 0.0, 96.0, 1.0, 0.0), 0.0);
    }

    #[test]
    fn inverted_output_range_still_clamps() {
        // Output runs high→low; overshoot must pin to the hi-side endpoint,
        // not run past it.
        assert_eq!(clamped_lerp(1000.0, 0.0, 96.0, 0.0, -96.0), -96.0);
        assert_eq!(clamped_lerp(-1000.0, 0.0, 96.0, 0.0, -96.0), 0.0);
    }

    // ── InterpSpec ────────────────────────────────────────────────────────

    #[test]
    fn spec_eval_matches_free_function() {
        let spec = InterpSpec::new(0.0, 96.0, 80.0, 24.0);
        for s in [-10.0, 0.0, 24.0, 48.0, 96.0, 200.0] {
            assert_eq!(spec.eval(s), clamped_lerp(s, 0.0, 96.0, 80.0, 24.0));
        }
    }

    #[test]
    fn spec_eval_t_agrees_with_eval() {
        let spec = InterpSpec::new(0.0, 96.0, -40.0, 0.0);
        assert_eq!(spec.eval_t(0.5), spec.eval(48.0));
    }
}
