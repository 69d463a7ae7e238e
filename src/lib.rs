// SPDX-License-Identifier: MPL-2.0
//! `naomi_portfolio` is a single-page model portfolio built with the Iced GUI
//! framework.
//!
//! Page content (headshot, description, gallery, brand logos, socials and
//! contact email) comes from a Sanity content store, fetched once at startup.
//! Every field falls back to a built-in default, so the page renders fully
//! whether the fetch succeeds, fails or is still in flight.
//!
//! # Modules
//!
//! - [`content`] - Document model, query client, fetch-once loader, fallbacks
//! - [`media`] - Embedded assets and the decoded image store
//! - [`ui`] - Page sections, drag-scroll gallery, lightbox, styling
//! - [`app`] - Iced application root
//! - [`config`] - `settings.toml` and endpoint resolution
//! - [`links`] - Opening external links

pub mod app;
pub mod config;
pub mod content;
pub mod error;
pub mod links;
pub mod media;
pub mod ui;
