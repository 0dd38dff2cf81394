/// Straight-alpha RGBA color with components in `[0, 1]`.
///
/// This is the color type the interpolation layer hands out. It carries no
/// premultiplication invariant — converting to whatever representation the
/// renderer wants (premultiplied, sRGB bytes, …) is the caller's job.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Rgba {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Rgba {
    pub const WHITE: Self = Self::new(1.0, 1.0, 1.0, 1.0);
    pub const BLACK: Self = Self::new(0.0, 0.0, 0.0, 1.0);

    #[inline]
    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Component-wise linear interpolation toward `other`.
    ///
    /// `t` is expected to already be clamped to `[0, 1]`; this method does
    /// not clamp again so a shared pre-clamped fraction interpolates every
    /// channel identically.
    #[inline]
    pub fn lerp(self, other: Self, t: f32) -> Self {
        Self {
            r: self.r + (other.r - self.r) * t,
            g: self.g + (other.g - self.g) * t,
            b: self.b + (other.b - self.b) * t,
            a: self.a + (other.a - self.a) * t,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lerp_endpoints() {
        assert_eq!(Rgba::WHITE.lerp(Rgba::BLACK, 0.0), Rgba::WHITE);
        assert_eq!(Rgba::WHITE.lerp(Rgba::BLACK, 1.0), Rgba::BLACK);
    }

    #[test]
    fn lerp_midpoint_is_channelwise() {
        let mid = Rgba::WHITE.lerp(Rgba::BLACK, 0.5);
        assert_eq!(mid, Rgba::new(0.5, 0.5, 0.5, 1.0));
    }

    #[test]
    fn lerp_preserves_alpha_when_equal() {
        let a = Rgba::new(0.2, 0.4, 0.6, 1.0);
        let b = Rgba::new(0.8, 0.6, 0.4, 1.0);
        assert_eq!(a.lerp(b, 0.25).a, 1.0);
    }
}
