// SPDX-License-Identifier: MPL-2.0
//! Assets compiled into the binary.

use rust_embed::RustEmbed;
use std::borrow::Cow;

#[derive(RustEmbed)]
#[folder = "assets/"]
struct Asset;

/// Placeholder shown for images that cannot be displayed.
pub const BROKEN_IMAGE: &str = "defaults/broken.svg";

/// Returns an embedded asset by its path under `assets/`.
///
/// A leading `/` is ignored so paths written as site-absolute still resolve.
#[must_use]
pub fn get(path: &str) -> Option<Cow<'static, [u8]>> {
    Asset::get(path.trim_start_matches('/')).map(|file| file.data)
}

/// Returns true if `path` names an embedded asset.
#[must_use]
pub fn contains(path: &str) -> bool {
    Asset::get(path.trim_start_matches('/')).is_some()
}
