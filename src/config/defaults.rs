// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the application. Constants are organized by category.
//!
//! # Categories
//!
//! - **Content**: Sanity project, dataset and API version
//! - **Gallery**: Drag sensitivity and strip image height
//! - **Lightbox**: Entry reveal delay
//! - **Media**: Decoded image store capacity

// ==========================================================================
// Content Store Defaults
// ==========================================================================

/// Sanity project identifier used when neither config, env nor CLI set one.
pub const DEFAULT_PROJECT_ID: &str = "e233vs9h";

/// Dataset queried when none is configured.
pub const DEFAULT_DATASET: &str = "production";

/// Dated API version pinned for the query endpoint.
pub const DEFAULT_API_VERSION: &str = "2023-08-01";

/// Read through the CDN by default (faster, possibly slightly stale).
pub const DEFAULT_USE_CDN: bool = true;

/// Environment variable overriding the Sanity project id.
pub const ENV_PROJECT_ID: &str = "NAOMI_PORTFOLIO_PROJECT_ID";

/// Environment variable overriding the Sanity dataset.
pub const ENV_DATASET: &str = "NAOMI_PORTFOLIO_DATASET";

// ==========================================================================
// Gallery Defaults
// ==========================================================================

/// Multiplier applied to horizontal pointer travel while dragging the strip.
pub const DEFAULT_DRAG_SENSITIVITY: f32 = 1.5;

/// Minimum allowed drag sensitivity.
pub const MIN_DRAG_SENSITIVITY: f32 = 0.1;

/// Maximum allowed drag sensitivity.
pub const MAX_DRAG_SENSITIVITY: f32 = 10.0;

/// Height of gallery strip images in logical pixels.
pub const DEFAULT_GALLERY_IMAGE_HEIGHT: f32 = 256.0;

/// Minimum gallery image height.
pub const MIN_GALLERY_IMAGE_HEIGHT: f32 = 64.0;

/// Maximum gallery image height.
pub const MAX_GALLERY_IMAGE_HEIGHT: f32 = 1024.0;

// ==========================================================================
// Lightbox Defaults
// ==========================================================================

/// Delay before the lightbox becomes visible, so the hidden frame paints first.
pub const DEFAULT_REVEAL_DELAY_MS: u64 = 10;

/// Maximum reveal delay in milliseconds.
pub const MAX_REVEAL_DELAY_MS: u64 = 1_000;

// ==========================================================================
// Media Defaults
// ==========================================================================

/// Number of decoded images kept in memory.
pub const DEFAULT_IMAGE_CACHE_CAPACITY: usize = 128;

/// Minimum image store capacity.
pub const MIN_IMAGE_CACHE_CAPACITY: usize = 8;

/// Maximum image store capacity.
pub const MAX_IMAGE_CACHE_CAPACITY: usize = 1_024;

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    assert!(MIN_DRAG_SENSITIVITY > 0.0);
    assert!(DEFAULT_DRAG_SENSITIVITY >= MIN_DRAG_SENSITIVITY);
    assert!(DEFAULT_DRAG_SENSITIVITY <= MAX_DRAG_SENSITIVITY);

    assert!(MIN_GALLERY_IMAGE_HEIGHT > 0.0);
    assert!(DEFAULT_GALLERY_IMAGE_HEIGHT >= MIN_GALLERY_IMAGE_HEIGHT);
    assert!(DEFAULT_GALLERY_IMAGE_HEIGHT <= MAX_GALLERY_IMAGE_HEIGHT);

    assert!(DEFAULT_REVEAL_DELAY_MS <= MAX_REVEAL_DELAY_MS);

    assert!(MIN_IMAGE_CACHE_CAPACITY > 0);
    assert!(DEFAULT_IMAGE_CACHE_CAPACITY >= MIN_IMAGE_CACHE_CAPACITY);
    assert!(DEFAULT_IMAGE_CACHE_CAPACITY <= MAX_IMAGE_CACHE_CAPACITY);
};
