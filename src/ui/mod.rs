// SPDX-License-Identifier: MPL-2.0
//! User interface components and state management.
//!
//! Components follow the Elm-style "state down, messages up" pattern: each
//! keeps its own `State`, handles its own `Message` and reports an `Effect`
//! for the application to act on.
//!
//! - [`page`] - The portfolio page and its sections
//! - [`gallery`] - Horizontal drag-to-scroll photo strip
//! - [`lightbox`] - Full-window image viewer with arrow navigation
//! - [`state`] - Reusable interaction state (drag tracking)
//! - [`styles`] - Centralized styling (buttons, containers, svg tints)
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`theming`] - Light/Dark/System theme mode and color schemes
//! - [`icons`] - Embedded SVG icons

pub mod design_tokens;
pub mod gallery;
pub mod icons;
pub mod lightbox;
pub mod page;
pub mod state;
pub mod styles;
pub mod theming;
