// SPDX-License-Identifier: MPL-2.0
//! Content store access: document model, query, client, loader and fallback.

pub mod client;
pub mod document;
pub mod fallback;
pub mod loader;
pub mod query;

pub use client::{ContentClient, ContentSource};
pub use document::{BrandRef, ContentDocument, ImageRef, Portfolio, Socials};
pub use fallback::{resolve, ResolvedPage, SocialKind, Source};
