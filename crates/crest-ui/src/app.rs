use std::collections::HashMap;

use winit::dpi::LogicalSize;

use crest_engine::coords::Vec2;
use crest_engine::core::{App as EngineApp, AppControl, FrameCtx};
use crest_engine::device::GpuInit;
use crest_engine::image::{ImageData, ImageId};
use crest_engine::input::MouseButton;
use crest_engine::paint::Color;
use crest_engine::render::shapes::{ImageRenderer, RectRenderer, RoundedRectRenderer, TextRenderer};
use crest_engine::text::FontId;
use crest_engine::window::{Runtime, RuntimeConfig};

use crate::scene::{UiInput, UiScene};
use crate::widget::Element;

// ── FontMap / ImageMap ────────────────────────────────────────────────────

/// A name-keyed map of loaded font handles.
///
/// Passed to the builder closure in [`Application::run_widget`] so the
/// application can retrieve [`FontId`] values by name without ever importing
/// engine internals.
///
/// ```rust,ignore
/// .run_widget(|fonts, images| {
///     let body = fonts.get("body").unwrap();
///     MyApp::new(body).into()
/// })
/// ```
pub struct FontMap(pub(crate) HashMap<String, FontId>);

impl FontMap {
    /// Returns the [`FontId`] registered under `name`, or `None` if the name
    /// was not registered or the font failed to load.
    pub fn get(&self, name: &str) -> Option<FontId> {
        self.0.get(name).copied()
    }
}

/// A name-keyed map of registered image handles, mirroring [`FontMap`].
pub struct ImageMap(pub(crate) HashMap<String, ImageId>);

impl ImageMap {
    /// Returns the [`ImageId`] registered under `name`.
    ///
    /// Always succeeds for registered names: images that failed to decode are
    /// replaced by a placeholder at registration time.
    pub fn get(&self, name: &str) -> Option<ImageId> {
        self.0.get(name).copied()
    }
}

// ── Application ───────────────────────────────────────────────────────────

/// Top-level UI application builder.
///
/// Follows a builder pattern: configure the window, fonts, and images, then
/// start the event loop with [`run_widget`].
///
/// ```rust,ignore
/// Application::new()
///     .title("Profile")
///     .size(390.0, 720.0)
///     .font("body", font_bytes)
///     .image_bytes("avatar", avatar_png)
///     .run_widget(|fonts, images| {
///         profile_screen(fonts.get("body").unwrap(), images).into()
///     });
/// ```
///
/// [`run_widget`]: Application::run_widget
pub struct Application {
    title: String,
    width: f64,
    height: f64,
    clear_color: Color,
    fonts: Vec<(String, Vec<u8>)>,
    images: Vec<(String, ImageData)>,
}

impl Application {
    pub fn new() -> Self {
        Self {
            title: "crest".to_string(),
            width: 1280.0,
            height: 720.0,
            clear_color: Color::from_straight(1.0, 1.0, 1.0, 1.0),
            fonts: Vec::new(),
            images: Vec::new(),
        }
    }

    /// Set the window title.
    pub fn title(mut self, t: impl Into<String>) -> Self {
        self.title = t.into();
        self
    }

    /// Set the initial window size in logical pixels.
    pub fn size(mut self, width: f64, height: f64) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    /// Set the surface clear color painted under the widget tree.
    pub fn clear_color(mut self, color: Color) -> Self {
        self.clear_color = color;
        self
    }

    /// Register a named font from raw TTF/OTF bytes.
    ///
    /// The name is used in [`FontMap::get`].
    pub fn font(mut self, name: impl Into<String>, data: Vec<u8>) -> Self {
        self.fonts.push((name.into(), data));
        self
    }

    /// Register a named, already-decoded RGBA image.
    pub fn image(mut self, name: impl Into<String>, data: ImageData) -> Self {
        self.images.push((name.into(), data));
        self
    }

    /// Register a named image from encoded bytes (PNG, JPEG).
    ///
    /// Bytes that fail to decode register a checkerboard placeholder instead,
    /// so a missing or corrupt asset degrades visibly rather than aborting.
    pub fn image_bytes(mut self, name: impl Into<String>, data: &[u8]) -> Self {
        let name = name.into();
        let decoded = match image::load_from_memory(data) {
            Ok(img) => {
                let rgba = img.to_rgba8();
                let (w, h) = rgba.dimensions();
                ImageData::from_rgba8(w, h, rgba.into_raw())
                    .unwrap_or_else(|e| {
                        log::warn!("image '{name}' has inconsistent dimensions: {e}");
                        ImageData::placeholder(64, 64)
                    })
            }
            Err(e) => {
                log::warn!("failed to decode image '{name}': {e}");
                ImageData::placeholder(64, 64)
            }
        };
        self.images.push((name, decoded));
        self
    }

    /// Start the event loop with a custom root widget.
    ///
    /// `build` is called once after fonts and images are loaded; the returned
    /// [`Element`] persists across frames and is mutated in place via
    /// `on_event`.
    ///
    /// This never returns.
    pub fn run_widget<F>(self, build: F) -> !
    where
        F: FnOnce(&FontMap, &ImageMap) -> Element,
    {
        let state = UiAppState::new(self, build);
        let config = RuntimeConfig {
            title: state.title.clone(),
            initial_size: LogicalSize::new(state.width, state.height),
        };
        Runtime::run(config, GpuInit::default(), state).unwrap_or_else(|e| {
            eprintln!("crest runtime error: {e:#}");
            std::process::exit(1);
        });
        // Runtime::run only returns on fatal error (exit via AppControl::Exit
        // goes through the event loop exit path), but the compiler doesn't
        // know that, so we help it here.
        std::process::exit(0);
    }
}

impl Default for Application {
    fn default() -> Self {
        Self::new()
    }
}

// ── UiAppState ────────────────────────────────────────────────────────────

/// Internal state that implements `crest_engine::core::App`.
///
/// Everything engine-specific (renderers, FrameCtx) lives here.
/// User code never sees this type.
struct UiAppState {
    title: String,
    width: f64,
    height: f64,
    clear_color: Color,

    ui_scene: UiScene,
    rect_renderer: RectRenderer,
    rounded_rect_renderer: RoundedRectRenderer,
    image_renderer: ImageRenderer,
    text_renderer: TextRenderer,

    /// Root widget; state persists across frames.
    root: Element,
}

impl UiAppState {
    fn new<F>(app: Application, build: F) -> Self
    where
        F: FnOnce(&FontMap, &ImageMap) -> Element,
    {
        let mut ui_scene = UiScene::new();

        let mut fonts = HashMap::new();
        for (name, bytes) in &app.fonts {
            match ui_scene.load_font(bytes) {
                Ok(id) => {
                    fonts.insert(name.clone(), id);
                }
                Err(e) => log::warn!("failed to load font '{name}': {e}"),
            }
        }

        let mut images = HashMap::new();
        for (name, data) in app.images {
            images.insert(name, ui_scene.register_image(data));
        }

        let root = build(&FontMap(fonts), &ImageMap(images));

        Self {
            title: app.title,
            width: app.width,
            height: app.height,
            clear_color: app.clear_color,
            ui_scene,
            rect_renderer: RectRenderer::new(),
            rounded_rect_renderer: RoundedRectRenderer::new(),
            image_renderer: ImageRenderer::new(),
            text_renderer: TextRenderer::new(),
            root,
        }
    }
}

impl EngineApp for UiAppState {
    fn on_frame(&mut self, ctx: &mut FrameCtx<'_, '_>) -> AppControl {
        let (w, h) = ctx.window.logical_size();
        let viewport = Vec2::new(w, h);
        let scale = ctx.window.window.scale_factor() as f32;

        let (mx, my) = ctx.input.pointer_pos.unwrap_or((0.0, 0.0));
        let ui_input = UiInput {
            mouse_pos: Vec2::new(mx, my),
            mouse_pressed: ctx.input.button_down(MouseButton::Left),
            mouse_clicked: ctx.input_frame.buttons_released.contains(&MouseButton::Left),
            keys_pressed: ctx.input_frame.keys_pressed.iter().copied().collect(),
            modifiers: ctx.input.modifiers,
            scroll_delta: ctx.input_frame.scroll_delta,
        };

        // ── Layout + paint + events ───────────────────────────────────────
        let _ = self.ui_scene.frame_ref(&mut self.root, viewport, &ui_input, scale);

        // ── Render ────────────────────────────────────────────────────────
        let dl = &mut self.ui_scene.draw_list;
        let fs = &self.ui_scene.font_system;
        let is = &self.ui_scene.image_store;
        let r_r = &mut self.rect_renderer;
        let r_rr = &mut self.rounded_rect_renderer;
        let r_i = &mut self.image_renderer;
        let r_t = &mut self.text_renderer;

        let clear = self.clear_color;
        ctx.render(clear, |rctx, target| {
            r_r.render(rctx, target, dl);
            r_rr.render(rctx, target, dl);
            r_i.render(rctx, target, dl, is);
            r_t.render(rctx, target, dl, fs);
        })
    }
}
