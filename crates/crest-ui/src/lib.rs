//! Crest UI — retained widget tree on top of `crest-engine`.
//!
//! # Quick start
//!
//! ```rust,ignore
//! use crest_ui::prelude::*;
//!
//! let mut scene = UiScene::new();
//! let font = scene.load_font(&font_bytes).unwrap();
//! let avatar = scene.register_image(avatar_data);
//!
//! // In your frame callback:
//! let input = UiInput { mouse_pos, scroll_delta, ..Default::default() };
//! let draw_list = scene.frame_ref(&mut root, viewport, &input, scale);
//! // Pass draw_list to your renderers.
//! ```
//!
//! # Extending with custom widgets
//!
//! Implement [`Widget`](widget::Widget) for any type, then use it anywhere an
//! [`Element`](widget::Element) is accepted:
//!
//! ```rust,ignore
//! use crest_ui::prelude::*;
//!
//! pub struct MyBadge { color: Color, size: f32 }
//!
//! impl Widget for MyBadge {
//!     fn measure(&self, _constraints: Constraints, _ctx: &LayoutCtx) -> Vec2 {
//!         Vec2::splat(self.size)
//!     }
//!     fn paint(&self, painter: &mut Painter, rect: Rect) {
//!         painter.fill_rounded_rect(rect, rect.size.x / 2.0, self.color, None);
//!     }
//! }
//! ```

pub mod app;
pub mod constraints;
pub mod event;
pub mod painter;
pub mod scene;
pub mod widget;
pub mod widgets;

// Top-level re-export for the common entry point — `use crest_ui::Application`
pub use app::Application;

/// Everything you need to build and extend UI — import this in your component files.
pub mod prelude {
    pub use crate::constraints::{Constraints, Edges, LayoutCtx};
    pub use crate::event::{EventResult, UiEvent};
    pub use crate::painter::Painter;
    pub use crate::scene::{UiInput, UiScene};
    pub use crate::widget::{Element, Widget};
    pub use crate::widgets::{
        container::Container,
        flex::{Align, Column},
        header_scroller::HeaderScroller,
        scroll::ScrollView,
        text::Text,
    };

    // Re-export the engine primitives everyone needs.
    pub use crest_engine::coords::{CornerRadii, Rect, Vec2};
    pub use crest_engine::image::{ImageData, ImageId};
    pub use crest_engine::paint::{Border, Color};
    pub use crest_engine::text::FontId;

    // Motion primitives the header widget is driven by.
    pub use crest_motion::{HeaderMetrics, HeaderPose, ScrollConvention};

    // Application (entry point for end-user apps)
    pub use crate::app::{Application, FontMap, ImageMap};
}
