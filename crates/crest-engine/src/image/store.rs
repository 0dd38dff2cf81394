use std::fmt;

/// Error returned by [`ImageStore::register`].
#[derive(Debug, Clone)]
pub struct ImageLoadError(pub String);

impl fmt::Display for ImageLoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "image load error: {}", self.0)
    }
}

impl std::error::Error for ImageLoadError {}

/// Opaque handle to an image registered in an [`ImageStore`].
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct ImageId(pub(crate) usize);

/// Decoded straight-alpha RGBA8 pixels.
///
/// Invariant: `pixels.len() == width * height * 4`, enforced at registration.
#[derive(Debug, Clone)]
pub struct ImageData {
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<u8>,
}

impl ImageData {
    /// Builds image data from raw RGBA8 bytes, validating dimensions.
    pub fn from_rgba8(width: u32, height: u32, pixels: Vec<u8>) -> Result<Self, ImageLoadError> {
        let expected = (width as usize) * (height as usize) * 4;
        if width == 0 || height == 0 {
            return Err(ImageLoadError(format!("zero-sized image ({width}x{height})")));
        }
        if pixels.len() != expected {
            return Err(ImageLoadError(format!(
                "pixel buffer is {} bytes, expected {expected} for {width}x{height}",
                pixels.len()
            )));
        }
        Ok(Self { width, height, pixels })
    }

    /// A generated stand-in for an asset that failed to load: a two-tone
    /// checker so the missing image is visible but not alarming.
    pub fn placeholder(width: u32, height: u32) -> Self {
        let width = width.max(1);
        let height = height.max(1);
        let mut pixels = Vec::with_capacity((width * height * 4) as usize);
        for y in 0..height {
            for x in 0..width {
                let dark = ((x / 8) + (y / 8)) % 2 == 0;
                let v = if dark { 0x5a } else { 0x78 };
                pixels.extend_from_slice(&[v, v, v, 0xff]);
            }
        }
        Self { width, height, pixels }
    }
}

/// Owns registered images for the lifetime of the application.
///
/// Images are immutable after registration, so renderers may cache GPU
/// uploads keyed by `ImageId` without invalidation logic.
#[derive(Debug, Default)]
pub struct ImageStore {
    images: Vec<ImageData>,
}

impl ImageStore {
    pub fn new() -> Self {
        Self { images: Vec::new() }
    }

    /// Registers decoded image data and returns its handle.
    pub fn register(&mut self, data: ImageData) -> ImageId {
        let id = ImageId(self.images.len());
        self.images.push(data);
        id
    }

    /// Registers a placeholder and returns its handle.
    ///
    /// Use when an external asset could not be decoded; the screen still
    /// renders, with the checker standing in for the missing picture.
    pub fn register_placeholder(&mut self, width: u32, height: u32) -> ImageId {
        self.register(ImageData::placeholder(width, height))
    }

    /// Returns the pixel data for `id`, if the handle is valid.
    pub fn get(&self, id: ImageId) -> Option<&ImageData> {
        self.images.get(id.0)
    }

    pub fn len(&self) -> usize {
        self.images.len()
    }

    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn register_and_get_round_trip() {
        let mut store = ImageStore::new();
        let data = ImageData::from_rgba8(2, 2, vec![0xff; 16]).unwrap();
        let id = store.register(data);
        let got = store.get(id).unwrap();
        assert_eq!(got.width, 2);
        assert_eq!(got.pixels.len(), 16);
    }

    #[test]
    fn from_rgba8_rejects_wrong_length() {
        assert!(ImageData::from_rgba8(4, 4, vec![0u8; 10]).is_err());
    }

    #[test]
    fn from_rgba8_rejects_zero_size() {
        assert!(ImageData::from_rgba8(0, 4, Vec::new()).is_err());
    }

    #[test]
    fn placeholder_has_full_coverage() {
        let p = ImageData::placeholder(16, 16);
        assert_eq!(p.pixels.len(), 16 * 16 * 4);
        // Every pixel opaque.
        assert!(p.pixels.chunks_exact(4).all(|px| px[3] == 0xff));
    }

    #[test]
    fn unknown_handle_is_none() {
        let store = ImageStore::new();
        assert!(store.get(ImageId(3)).is_none());
    }
}
