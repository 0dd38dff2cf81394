//! Crest engine crate.
//!
//! Platform + GPU runtime pieces for the collapsing-header screen: window and
//! event loop, input translation, draw-stream recording, and wgpu renderers
//! for the shapes the screen is built from (rects, rounded rects, images,
//! text).

pub mod core;
pub mod device;
pub mod input;
pub mod time;
pub mod window;

pub mod coords;
pub mod image;
pub mod logging;
pub mod paint;
pub mod render;
pub mod scene;
pub mod text;
