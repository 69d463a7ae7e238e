// SPDX-License-Identifier: MPL-2.0
//! Centralized icon module.
//!
//! Icons are SVG files under `assets/icons/`, embedded with the other assets.
//! Each handle is built once on first access and reused thereafter.
//!
//! # Usage
//!
//! ```ignore
//! use crate::ui::icons;
//!
//! let close = button(icons::close().width(24).height(24));
//! ```

use crate::content::SocialKind;
use crate::media::assets;
use iced::widget::svg::{Handle, Svg};
use std::sync::OnceLock;

/// Defines an icon function with a cached handle.
macro_rules! define_icon {
    ($name:ident, $path:literal, $doc:literal) => {
        #[doc = $doc]
        pub fn $name() -> Svg<'static> {
            static HANDLE: OnceLock<Handle> = OnceLock::new();
            let handle = HANDLE.get_or_init(|| load($path));
            Svg::new(handle.clone())
        }
    };
}

fn load(path: &str) -> Handle {
    match assets::get(path) {
        Some(bytes) => Handle::from_memory(bytes.into_owned()),
        None => {
            tracing::error!(path, "missing embedded icon");
            Handle::from_memory(Vec::new())
        }
    }
}

define_icon!(close, "icons/close.svg", "Close icon: diagonal cross.");
define_icon!(
    chevron_left,
    "icons/chevron_left.svg",
    "Chevron pointing left (previous image)."
);
define_icon!(
    chevron_right,
    "icons/chevron_right.svg",
    "Chevron pointing right (next image)."
);
define_icon!(instagram, "icons/instagram.svg", "Instagram camera glyph.");
define_icon!(tiktok, "icons/tiktok.svg", "TikTok note glyph.");
define_icon!(youtube, "icons/youtube.svg", "YouTube play button glyph.");
define_icon!(link, "icons/link.svg", "Chain link glyph.");

/// Icon for a social link.
#[must_use]
pub fn social(kind: SocialKind) -> Svg<'static> {
    match kind {
        SocialKind::Instagram => instagram(),
        SocialKind::TikTok => tiktok(),
        SocialKind::YouTube => youtube(),
        SocialKind::RandomLink => link(),
    }
}
