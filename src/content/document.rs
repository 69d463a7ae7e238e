// SPDX-License-Identifier: MPL-2.0
//! Typed shape of the content store response.
//!
//! Every field may be missing or `null` on the wire. Both read as absent.

use serde::{Deserialize, Deserializer};
use std::fmt;
use std::hash::{Hash, Hasher};

/// Reference to an image shown on the page.
#[derive(Debug, Clone, Default)]
pub enum ImageRef {
    /// Embedded default asset or a direct path.
    Local(String),
    /// Uploaded asset with a resolved URL.
    Remote(String),
    /// Asset object without a URL.
    #[default]
    Unresolved,
}

impl ImageRef {
    /// Builds a reference from a direct string, classifying `http(s)` URLs as remote.
    #[must_use]
    pub fn direct(source: impl Into<String>) -> Self {
        let source = source.into();
        let trimmed = source.trim();
        if trimmed.is_empty() {
            ImageRef::Unresolved
        } else if trimmed.starts_with("https://") || trimmed.starts_with("http://") {
            ImageRef::Remote(trimmed.to_string())
        } else {
            ImageRef::Local(trimmed.to_string())
        }
    }

    /// Source string used for identity. Empty for unresolved references.
    #[must_use]
    pub fn source(&self) -> &str {
        match self {
            ImageRef::Local(path) => path,
            ImageRef::Remote(url) => url,
            ImageRef::Unresolved => "",
        }
    }

    #[must_use]
    pub fn is_unresolved(&self) -> bool {
        matches!(self, ImageRef::Unresolved)
    }
}

impl PartialEq for ImageRef {
    fn eq(&self, other: &Self) -> bool {
        self.source() == other.source()
    }
}

impl Eq for ImageRef {}

impl Hash for ImageRef {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.source().hash(state);
    }
}

impl fmt::Display for ImageRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ImageRef::Unresolved => f.write_str("<unresolved>"),
            other => f.write_str(other.source()),
        }
    }
}

#[derive(Deserialize)]
struct RawAsset {
    #[serde(default)]
    url: Option<String>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawImage {
    Direct(String),
    Asset {
        #[serde(default)]
        asset: Option<RawAsset>,
    },
    Missing,
}

impl From<RawImage> for ImageRef {
    fn from(raw: RawImage) -> Self {
        match raw {
            RawImage::Direct(source) => ImageRef::direct(source),
            RawImage::Asset { asset } => asset
                .and_then(|asset| asset.url)
                .map(|url| url.trim().to_string())
                .filter(|url| !url.is_empty())
                .map_or(ImageRef::Unresolved, ImageRef::Remote),
            RawImage::Missing => ImageRef::Unresolved,
        }
    }
}

impl<'de> Deserialize<'de> for ImageRef {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        RawImage::deserialize(deserializer).map(ImageRef::from)
    }
}

/// Reads `null` the same way as a missing field.
pub(crate) fn nullable<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}

/// The `portfolio` document.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Portfolio {
    #[serde(default)]
    pub headshot: Option<ImageRef>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "nullable")]
    pub images: Vec<ImageRef>,
}

/// One partner brand.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct BrandRef {
    #[serde(default, deserialize_with = "nullable")]
    pub logo: ImageRef,
    /// Logo height override in logical pixels.
    #[serde(default)]
    pub height: Option<f32>,
}

/// The `socials` document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Socials {
    #[serde(default)]
    pub instagram: Option<String>,
    #[serde(default)]
    pub tiktok: Option<String>,
    #[serde(default)]
    pub youtube: Option<String>,
    #[serde(default)]
    pub randomlink: Option<String>,
}

/// Everything the page reads from the content store.
///
/// The default value is the empty shape shown before (or instead of) a
/// successful fetch.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ContentDocument {
    #[serde(default, deserialize_with = "nullable")]
    pub portfolio: Portfolio,
    #[serde(default, deserialize_with = "nullable")]
    pub brands: Vec<BrandRef>,
    #[serde(default, deserialize_with = "nullable")]
    pub socials: Socials,
    #[serde(default)]
    pub email: Option<String>,
}

impl ContentDocument {
    /// True when no field carries content.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        *self == ContentDocument::default()
    }
}
