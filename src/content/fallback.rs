// SPDX-License-Identifier: MPL-2.0
//! Per-field merge of the fetched document with the built-in defaults.
//!
//! Each field reads the document first. A missing, blank or empty value falls
//! back to its default independently of every other field, and the result
//! records where it came from.

use super::document::{ContentDocument, ImageRef};
use crate::ui::design_tokens::sizing;

/// Name shown on the hero banner.
pub const NAME: &str = "Naomi Okolo";

/// Embedded headshot placeholder.
pub const DEFAULT_HEADSHOT: &str = "defaults/headshot.svg";

/// Embedded gallery placeholder.
pub const DEFAULT_GALLERY_IMAGE: &str = "defaults/gallery.svg";

pub const DEFAULT_DESCRIPTION: &str = "Welcome to my modeling portfolio. I showcase my work, projects, and photo shoots here.";

pub const DEFAULT_EMAIL: &str = "naomi.okolo@email.com";

pub const DEFAULT_INSTAGRAM: &str = "https://www.instagram.com/naomiokolo";
pub const DEFAULT_TIKTOK: &str = "https://www.tiktok.com/@naomiokolo";
pub const DEFAULT_YOUTUBE: &str = "https://www.youtube.com/@naomiokolo";
pub const DEFAULT_RANDOM_LINK: &str = "https://twitter.com/naomiokolo";

/// Where a resolved value came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Source {
    Content,
    Default,
}

/// A value paired with its origin.
#[derive(Debug, Clone, PartialEq)]
pub struct Resolved<T> {
    pub value: T,
    pub source: Source,
}

impl<T> Resolved<T> {
    fn pick(fetched: Option<T>, default: impl FnOnce() -> T) -> Self {
        match fetched {
            Some(value) => Self {
                value,
                source: Source::Content,
            },
            None => Self {
                value: default(),
                source: Source::Default,
            },
        }
    }

    #[must_use]
    pub fn is_default(&self) -> bool {
        self.source == Source::Default
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SocialKind {
    Instagram,
    TikTok,
    YouTube,
    RandomLink,
}

impl SocialKind {
    pub const ALL: [SocialKind; 4] = [
        SocialKind::Instagram,
        SocialKind::TikTok,
        SocialKind::YouTube,
        SocialKind::RandomLink,
    ];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            SocialKind::Instagram => "Instagram",
            SocialKind::TikTok => "TikTok",
            SocialKind::YouTube => "YouTube",
            SocialKind::RandomLink => "Random Link",
        }
    }

    fn default_url(self) -> &'static str {
        match self {
            SocialKind::Instagram => DEFAULT_INSTAGRAM,
            SocialKind::TikTok => DEFAULT_TIKTOK,
            SocialKind::YouTube => DEFAULT_YOUTUBE,
            SocialKind::RandomLink => DEFAULT_RANDOM_LINK,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SocialLink {
    pub kind: SocialKind,
    pub url: Resolved<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Brand {
    pub logo: ImageRef,
    pub height: f32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Contact {
    pub email: Resolved<String>,
}

impl Contact {
    /// `mailto:` target for the contact button.
    #[must_use]
    pub fn href(&self) -> String {
        format!("mailto:{}", self.email.value)
    }
}

/// Page content after fallback, ready to render.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedPage {
    pub name: &'static str,
    pub headshot: Resolved<ImageRef>,
    pub description: Resolved<String>,
    pub gallery: Resolved<Vec<ImageRef>>,
    pub brands: Vec<Brand>,
    pub contact: Contact,
    pub socials: [SocialLink; 4],
}

impl Default for ResolvedPage {
    fn default() -> Self {
        resolve(&ContentDocument::default())
    }
}

impl ResolvedPage {
    /// Every image the page displays, in render order.
    pub fn images(&self) -> impl Iterator<Item = &ImageRef> {
        std::iter::once(&self.headshot.value)
            .chain(self.gallery.value.iter())
            .chain(self.brands.iter().map(|brand| &brand.logo))
    }

    #[must_use]
    pub fn social(&self, kind: SocialKind) -> &SocialLink {
        let index = SocialKind::ALL
            .iter()
            .position(|k| *k == kind)
            .unwrap_or_default();
        &self.socials[index]
    }
}

fn present(value: &Option<String>) -> Option<String> {
    value
        .as_deref()
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}

/// Merges `doc` with the defaults.
#[must_use]
pub fn resolve(doc: &ContentDocument) -> ResolvedPage {
    let socials = &doc.socials;
    let fetched_social = |kind: SocialKind| match kind {
        SocialKind::Instagram => present(&socials.instagram),
        SocialKind::TikTok => present(&socials.tiktok),
        SocialKind::YouTube => present(&socials.youtube),
        SocialKind::RandomLink => present(&socials.randomlink),
    };

    ResolvedPage {
        name: NAME,
        headshot: Resolved::pick(
            doc.portfolio
                .headshot
                .clone()
                .filter(|image| !image.is_unresolved()),
            || ImageRef::Local(DEFAULT_HEADSHOT.into()),
        ),
        description: Resolved::pick(present(&doc.portfolio.description), || {
            DEFAULT_DESCRIPTION.to_string()
        }),
        gallery: Resolved::pick(
            Some(doc.portfolio.images.clone()).filter(|images| !images.is_empty()),
            || vec![ImageRef::Local(DEFAULT_GALLERY_IMAGE.into())],
        ),
        brands: doc
            .brands
            .iter()
            .map(|brand| Brand {
                logo: brand.logo.clone(),
                height: brand
                    .height
                    .filter(|h| h.is_finite() && *h > 0.0)
                    .unwrap_or(sizing::BRAND_LOGO_HEIGHT),
            })
            .collect(),
        contact: Contact {
            email: Resolved::pick(present(&doc.email), || DEFAULT_EMAIL.to_string()),
        },
        socials: SocialKind::ALL.map(|kind| SocialLink {
            kind,
            url: Resolved::pick(fetched_social(kind), || kind.default_url().to_string()),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::document::{BrandRef, Portfolio, Socials};

    #[test]
    fn empty_document_uses_every_default() {
        let page = resolve(&ContentDocument::default());

        assert_eq!(page.headshot.value, ImageRef::Local(DEFAULT_HEADSHOT.into()));
        assert_eq!(page.description.value, DEFAULT_DESCRIPTION);
        assert_eq!(page.gallery.value, vec![ImageRef::Local(DEFAULT_GALLERY_IMAGE.into())]);
        assert!(page.brands.is_empty());
        assert_eq!(page.contact.href(), "mailto:naomi.okolo@email.com");
        assert!(page.socials.iter().all(|link| link.url.is_default()));
        assert_eq!(page.name, "Naomi Okolo");
    }

    #[test]
    fn present_fields_come_from_the_document() {
        let doc = ContentDocument {
            portfolio: Portfolio {
                headshot: Some(ImageRef::Remote("https://x/h.jpg".into())),
                description: Some("Model based in Lagos".into()),
                images: vec![ImageRef::Remote("https://x/1.jpg".into())],
            },
            email: Some("booking@example.com".into()),
            ..ContentDocument::default()
        };

        let page = resolve(&doc);

        assert_eq!(page.headshot.source, Source::Content);
        assert_eq!(page.description.value, "Model based in Lagos");
        assert_eq!(page.gallery.value.len(), 1);
        assert_eq!(page.contact.href(), "mailto:booking@example.com");
    }

    #[test]
    fn blank_strings_and_empty_lists_fall_back() {
        let doc = ContentDocument {
            portfolio: Portfolio {
                description: Some("   ".into()),
                images: Vec::new(),
                ..Portfolio::default()
            },
            email: Some(String::new()),
            ..ContentDocument::default()
        };

        let page = resolve(&doc);

        assert!(page.description.is_default());
        assert!(page.gallery.is_default());
        assert!(page.contact.email.is_default());
    }

    #[test]
    fn unresolved_headshot_falls_back() {
        let doc = ContentDocument {
            portfolio: Portfolio {
                headshot: Some(ImageRef::Unresolved),
                ..Portfolio::default()
            },
            ..ContentDocument::default()
        };
        assert!(resolve(&doc).headshot.is_default());
    }

    #[test]
    fn social_links_default_independently() {
        let doc = ContentDocument {
            socials: Socials {
                instagram: Some("https://instagram.com/fetched".into()),
                ..Socials::default()
            },
            ..ContentDocument::default()
        };

        let page = resolve(&doc);

        let instagram = page.social(SocialKind::Instagram);
        assert_eq!(instagram.url.value, "https://instagram.com/fetched");
        assert_eq!(instagram.url.source, Source::Content);

        let tiktok = page.social(SocialKind::TikTok);
        assert_eq!(tiktok.url.value, DEFAULT_TIKTOK);
        assert_eq!(tiktok.url.source, Source::Default);
    }

    #[test]
    fn brand_height_defaults_to_logo_height() {
        let doc = ContentDocument {
            brands: vec![
                BrandRef {
                    logo: ImageRef::Remote("https://x/a.png".into()),
                    height: None,
                },
                BrandRef {
                    logo: ImageRef::Remote("https://x/b.png".into()),
                    height: Some(48.0),
                },
            ],
            ..ContentDocument::default()
        };

        let page = resolve(&doc);

        assert_eq!(page.brands[0].height, sizing::BRAND_LOGO_HEIGHT);
        assert_eq!(page.brands[1].height, 48.0);
    }

    #[test]
    fn images_lists_headshot_gallery_and_logos() {
        let page = ResolvedPage::default();
        assert_eq!(page.images().count(), 2);
    }
}
