//! Image assets.
//!
//! Images are read-only external resources referenced by stable handles.
//! The store owns decoded CPU-side pixel data; GPU upload happens lazily in
//! the image renderer the first time a handle is drawn.

mod store;

pub use store::{ImageData, ImageId, ImageLoadError, ImageStore};
