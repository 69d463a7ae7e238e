// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration between the content loader, the
//! page and the lightbox.
//!
//! The `App` struct wires the pieces together: it mounts the loader once at
//! startup, re-resolves the page whenever the document is replaced, feeds
//! image loads into the store and turns component effects into tasks
//! (scroll snapping, the lightbox reveal, opening links).

mod message;
pub mod paths;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};

use crate::config::{self, Config, ContentEndpoint};
use crate::content::{self, client, loader, ContentClient, ContentSource, ResolvedPage};
use crate::media::ImageStore;
use crate::ui::gallery;
use crate::ui::lightbox;
use crate::ui::theming::ColorScheme;
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;
use std::sync::Arc;

/// Root Iced application state.
pub struct App {
    config: Config,
    endpoint: ContentEndpoint,
    theme: Theme,
    loader: loader::State,
    /// Missing when the endpoint or HTTP client could not be built.
    source: Option<Arc<dyn ContentSource>>,
    page: ResolvedPage,
    images: ImageStore,
    gallery: gallery::State,
    lightbox: lightbox::State,
    window_height: f32,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("endpoint", &self.endpoint)
            .field("loader", &self.loader)
            .field("images", &self.images)
            .field("lightbox", &self.lightbox.phase())
            .field("window_height", &self.window_height)
            .finish_non_exhaustive()
    }
}

pub const WINDOW_DEFAULT_HEIGHT: u32 = 768;
pub const WINDOW_DEFAULT_WIDTH: u32 = 1024;
pub const MIN_WINDOW_HEIGHT: u32 = 480;
pub const MIN_WINDOW_WIDTH: u32 = 640;

/// Window settings. Close requests are routed through `update` so the loader
/// can be unmounted before the window goes away.
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        exit_on_close_request: false,
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the portfolio.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // iced 0.14 takes an Fn boot; the flags are consumed on the first call.
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state.borrow_mut().take().unwrap_or_default();
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl App {
    /// Loads the config, builds the content client and mounts the loader.
    pub fn new(flags: Flags) -> (Self, Task<Message>) {
        paths::init_cli_overrides(flags.config_dir.clone());

        let (config, warning) = config::load();
        if let Some(warning) = warning {
            tracing::warn!("{warning}");
        }

        let endpoint = config.content.resolve(&flags.content);
        let http = match client::build_http_client(endpoint.timeout) {
            Ok(http) => Some(http),
            Err(err) => {
                tracing::error!(error = %err, "HTTP client unavailable, remote content disabled");
                None
            }
        };

        let source = http.clone().and_then(|http| {
            match ContentClient::with_http(&endpoint, http) {
                Ok(client) => {
                    tracing::info!(url = %client.url(), "content endpoint");
                    Some(Arc::new(client) as Arc<dyn ContentSource>)
                }
                Err(err) => {
                    tracing::warn!(error = %err, "content endpoint rejected, showing defaults");
                    None
                }
            }
        });

        Self::boot(config, endpoint, source, http)
    }

    /// Builds the app around an arbitrary content source and mounts the loader.
    pub fn with_source(
        config: Config,
        source: Option<Arc<dyn ContentSource>>,
    ) -> (Self, Task<Message>) {
        let endpoint = config.content.resolve(&config::ContentOverrides::default());
        Self::boot(config, endpoint, source, None)
    }

    fn boot(
        config: Config,
        endpoint: ContentEndpoint,
        source: Option<Arc<dyn ContentSource>>,
        http: Option<reqwest::Client>,
    ) -> (Self, Task<Message>) {
        let mut app = App {
            theme: config.general.theme_mode.to_theme(),
            images: ImageStore::new(config.media.cache_capacity(), http),
            gallery: gallery::State::new(config.gallery.drag_sensitivity()),
            lightbox: lightbox::State::default(),
            loader: loader::State::default(),
            page: ResolvedPage::default(),
            window_height: WINDOW_DEFAULT_HEIGHT as f32,
            endpoint,
            source,
            config,
        };

        let fetch = match app.source.clone() {
            Some(source) => app.loader.mount(source).map(Message::Loader),
            None => Task::none(),
        };
        let images = app.request_images();

        (app, Task::batch([fetch, images]))
    }

    pub fn title(&self) -> String {
        format!("{} · Portfolio", content::fallback::NAME)
    }

    pub fn theme(&self) -> Theme {
        self.theme.clone()
    }

    pub fn subscription(&self) -> Subscription<Message> {
        subscription::create(&self.lightbox)
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Loader(msg) => self.handle_loader(msg),
            Message::Page(msg) => self.handle_page(msg),
            Message::Lightbox(msg) => self.handle_lightbox(msg),
            Message::ImageLoaded(image, result) => {
                self.images.insert(image, result);
                Task::none()
            }
            Message::LinkOpened(result) => {
                if let Err(err) = result {
                    tracing::warn!(error = %err, "could not open link");
                }
                Task::none()
            }
            Message::WindowResized(size) => {
                self.window_height = size.height;
                Task::none()
            }
            Message::WindowCloseRequested(id) => {
                self.loader.unmount();
                window::close(id)
            }
        }
    }

    pub fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            page: &self.page,
            store: &self.images,
            gallery: &self.gallery,
            lightbox: &self.lightbox,
            gallery_image_height: self.config.gallery.image_height(),
            window_height: self.window_height,
            scheme: ColorScheme::for_theme(&self.theme),
        })
    }

    /// The page as currently rendered, fallbacks applied.
    #[must_use]
    pub fn page(&self) -> &ResolvedPage {
        &self.page
    }

    #[must_use]
    pub fn loader_status(&self) -> loader::Status {
        self.loader.status()
    }

    #[must_use]
    pub fn gallery(&self) -> &gallery::State {
        &self.gallery
    }

    #[must_use]
    pub fn lightbox(&self) -> &lightbox::State {
        &self.lightbox
    }

    #[must_use]
    pub fn images(&self) -> &ImageStore {
        &self.images
    }

    #[must_use]
    pub fn window_height(&self) -> f32 {
        self.window_height
    }
}
