use crate::coords::{CornerRadii, Rect};
use crate::image::ImageId;
use crate::scene::{DrawCmd, DrawList, ZIndex};

/// Textured rectangle draw payload.
///
/// The image is stretched to fill `rect`. `opacity` is a straight-alpha
/// multiplier in `[0, 1]` applied on top of the texture's own alpha, and
/// `radii` rounds the corners of the destination (an avatar with
/// `CornerRadii::all(r)` renders as a rounded badge without a mask layer).
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ImageCmd {
    pub rect: Rect,
    pub image: ImageId,
    pub radii: CornerRadii,
    pub opacity: f32,
}

impl ImageCmd {
    #[inline]
    pub fn new(rect: Rect, image: ImageId, radii: CornerRadii, opacity: f32) -> Self {
        Self { rect, image, radii, opacity }
    }
}

impl DrawList {
    /// Records an image draw command with rounded corners.
    #[inline]
    pub fn push_image_rounded(
        &mut self,
        z: ZIndex,
        rect: Rect,
        image: ImageId,
        radii: CornerRadii,
        opacity: f32,
    ) {
        self.push(z, DrawCmd::Image(ImageCmd::new(rect, image, radii, opacity)));
    }

    /// Records a sharp-cornered image draw command.
    #[inline]
    pub fn push_image(&mut self, z: ZIndex, rect: Rect, image: ImageId, opacity: f32) {
        self.push_image_rounded(z, rect, image, CornerRadii::zero(), opacity);
    }
}
