//! Profile screen demo: a collapsing header over a scrollable list.
//!
//! Scroll (wheel, trackpad, or arrow / page keys) to collapse the header:
//! the backdrop fades and parallaxes away, the avatar shrinks into a rounded
//! badge, and the title slides into its collapsed slot and recolors.

use crest_engine::logging::{init_logging, LoggingConfig};
use crest_ui::prelude::*;
use crest_ui::Application;

fn main() {
    init_logging(LoggingConfig::default());

    Application::new()
        .title("Profile")
        .size(390.0, 720.0)
        .clear_color(Color::from_srgb_u8(0xf2, 0xf2, 0xf2, 0xff))
        .font("body", load_font())
        .image_bytes("backdrop", &load_asset("backdrop", &["assets/backdrop.jpg", "assets/backdrop.png"]))
        .image_bytes("avatar", &load_asset("avatar", &["assets/avatar.jpg", "assets/avatar.png"]))
        .run_widget(|fonts, images| {
            let font = fonts.get("body").unwrap_or(FontId(0));
            // image_bytes always registers something (placeholder on failure),
            // so these lookups cannot miss.
            let backdrop = images.get("backdrop").expect("backdrop registered");
            let avatar = images.get("avatar").expect("avatar registered");

            HeaderScroller::new("Profile", font, backdrop, avatar, row_list(font))
                .bar_color(Color::from_srgb_u8(135, 206, 250, 255))
                .into()
        })
}

/// The placeholder body: thirty numbered rows.
fn row_list(font: FontId) -> Column {
    let dark = Color::from_srgb_u8(0x33, 0x33, 0x33, 0xff);
    Column::new().children((1..=30).map(|i| {
        Container::new()
            .padding(Edges::symmetric(14.0, 16.0))
            .background(if i % 2 == 0 {
                Color::from_srgb_u8(0xff, 0xff, 0xff, 0xff)
            } else {
                Color::from_srgb_u8(0xe9, 0xe9, 0xe9, 0xff)
            })
            .child(Text::new(format!("Row {i}"), font, 15.0, dark))
    }))
}

/// Reads the first readable TTF from the usual system font locations.
///
/// Returns empty bytes when nothing is found; the font then fails to load
/// and text is skipped, but the screen still runs.
fn load_font() -> Vec<u8> {
    [
        "/usr/share/fonts/TTF/DejaVuSans.ttf",
        "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
        "/usr/share/fonts/dejavu/DejaVuSans.ttf",
        "/usr/share/fonts/noto/NotoSans-Regular.ttf",
        "/usr/share/fonts/truetype/noto/NotoSans-Regular.ttf",
        "/System/Library/Fonts/Supplemental/Arial.ttf",
    ]
    .iter()
    .find_map(|p| std::fs::read(p).ok())
    .unwrap_or_else(|| {
        log::warn!("no system font found; text will not render");
        Vec::new()
    })
}

/// Reads an image asset from the first path that exists.
///
/// A missing asset returns empty bytes, which `image_bytes` turns into a
/// visible checkerboard placeholder.
fn load_asset(name: &str, candidates: &[&str]) -> Vec<u8> {
    candidates
        .iter()
        .find_map(|p| std::fs::read(p).ok())
        .unwrap_or_else(|| {
            log::warn!("asset '{name}' not found; using placeholder");
            Vec::new()
        })
}
