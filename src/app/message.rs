// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::config::ContentOverrides;
use crate::content::{loader, ImageRef};
use crate::error::Error;
use crate::media::ImageData;
use crate::ui::lightbox;
use crate::ui::page;
use iced::{window, Size};

/// Top-level messages consumed by `App::update`. The variants forward
/// lower-level component messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    Loader(loader::Message),
    Page(page::Message),
    Lightbox(lightbox::Message),
    /// A load started by the image store finished.
    ImageLoaded(ImageRef, Result<ImageData, Error>),
    LinkOpened(Result<(), Error>),
    WindowResized(Size),
    WindowCloseRequested(window::Id),
}

/// Runtime flags passed in from the command line.
#[derive(Debug, Default, Clone)]
pub struct Flags {
    /// Optional config directory override (for tests or portable installs).
    pub config_dir: Option<String>,
    /// Content store overrides (`--project-id`, `--dataset`).
    pub content: ContentOverrides,
}
