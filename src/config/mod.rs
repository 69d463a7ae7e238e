// SPDX-License-Identifier: MPL-2.0
//! This module handles the application's configuration, loaded from a
//! read-only `settings.toml` file.
//!
//! # Configuration Sections
//!
//! - `[general]` - Theme mode
//! - `[content]` - Sanity project, dataset, API version, CDN and timeout
//! - `[gallery]` - Drag sensitivity and strip image height
//! - `[lightbox]` - Entry reveal delay
//! - `[media]` - Decoded image store capacity
//!
//! Every key is optional. Missing keys take the values in [`defaults`].
//!
//! # Content Store Resolution
//!
//! The project id and dataset are resolved with this precedence:
//! 1. CLI flags (`--project-id`, `--dataset`)
//! 2. Environment (`NAOMI_PORTFOLIO_PROJECT_ID`, `NAOMI_PORTFOLIO_DATASET`)
//! 3. `[content]` section of `settings.toml`
//! 4. Built-in literals
//!
//! # Examples
//!
//! ```no_run
//! use naomi_portfolio::config::{self, ContentOverrides};
//!
//! let (config, warning) = config::load();
//! if let Some(message) = warning {
//!     eprintln!("{message}");
//! }
//! let endpoint = config.content.resolve(&ContentOverrides::default());
//! assert!(!endpoint.project_id.is_empty());
//! ```

pub mod defaults;

pub use defaults::*;

use crate::app::paths;
use crate::error::Result;
use crate::ui::theming::ThemeMode;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

const CONFIG_FILE: &str = "settings.toml";

// =============================================================================
// Section Structs
// =============================================================================

/// General application settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct GeneralConfig {
    /// Application theme mode (light, dark, or system).
    #[serde(default, deserialize_with = "deserialize_theme_mode")]
    pub theme_mode: ThemeMode,
}

/// Content store endpoint settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct ContentConfig {
    /// Sanity project identifier.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project_id: Option<String>,

    /// Dataset name (e.g. `production`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dataset: Option<String>,

    /// Dated API version (e.g. `2023-08-01`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_version: Option<String>,

    /// Query through the CDN edge instead of the live API.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub use_cdn: Option<bool>,

    /// Request timeout. Unset means the request may wait indefinitely.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub request_timeout_secs: Option<u64>,
}

/// Gallery strip settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct GalleryConfig {
    /// Multiplier applied to pointer travel while dragging.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub drag_sensitivity: Option<f32>,

    /// Strip image height in logical pixels.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_height: Option<f32>,
}

/// Lightbox settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct LightboxConfig {
    /// Delay before the lightbox becomes visible.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reveal_delay_ms: Option<u64>,
}

/// Image store settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct MediaConfig {
    /// Number of decoded images kept in memory.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cache_capacity: Option<usize>,
}

// =============================================================================
// Main Config Struct (Sectioned)
// =============================================================================

/// Application configuration with logical sections.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub general: GeneralConfig,

    #[serde(default)]
    pub content: ContentConfig,

    #[serde(default)]
    pub gallery: GalleryConfig,

    #[serde(default)]
    pub lightbox: LightboxConfig,

    #[serde(default)]
    pub media: MediaConfig,
}

// =============================================================================
// Resolved Values
// =============================================================================

/// Content store overrides coming from the command line.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContentOverrides {
    pub project_id: Option<String>,
    pub dataset: Option<String>,
}

/// Fully resolved content store endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentEndpoint {
    pub project_id: String,
    pub dataset: String,
    pub api_version: String,
    pub use_cdn: bool,
    pub timeout: Option<Duration>,
}

impl Default for ContentEndpoint {
    fn default() -> Self {
        ContentConfig::default().resolve_with_env(&ContentOverrides::default(), |_| None)
    }
}

impl ContentConfig {
    /// Resolves the endpoint using the process environment.
    #[must_use]
    pub fn resolve(&self, cli: &ContentOverrides) -> ContentEndpoint {
        self.resolve_with_env(cli, |key| std::env::var(key).ok())
    }

    /// Resolves the endpoint with an injected environment lookup.
    ///
    /// Empty or whitespace-only values at any level are skipped.
    pub fn resolve_with_env(
        &self,
        cli: &ContentOverrides,
        env: impl Fn(&str) -> Option<String>,
    ) -> ContentEndpoint {
        let pick = |cli_value: &Option<String>, env_key: &str, file: &Option<String>, fallback: &str| {
            [cli_value.clone(), env(env_key), file.clone()]
                .into_iter()
                .flatten()
                .map(|value| value.trim().to_string())
                .find(|value| !value.is_empty())
                .unwrap_or_else(|| fallback.to_string())
        };

        ContentEndpoint {
            project_id: pick(&cli.project_id, ENV_PROJECT_ID, &self.project_id, DEFAULT_PROJECT_ID),
            dataset: pick(&cli.dataset, ENV_DATASET, &self.dataset, DEFAULT_DATASET),
            api_version: self
                .api_version
                .as_deref()
                .map(str::trim)
                .filter(|v| !v.is_empty())
                .unwrap_or(DEFAULT_API_VERSION)
                .to_string(),
            use_cdn: self.use_cdn.unwrap_or(DEFAULT_USE_CDN),
            timeout: self
                .request_timeout_secs
                .filter(|secs| *secs > 0)
                .map(Duration::from_secs),
        }
    }
}

impl GalleryConfig {
    #[must_use]
    pub fn drag_sensitivity(&self) -> f32 {
        self.drag_sensitivity
            .filter(|v| v.is_finite())
            .unwrap_or(DEFAULT_DRAG_SENSITIVITY)
            .clamp(MIN_DRAG_SENSITIVITY, MAX_DRAG_SENSITIVITY)
    }

    #[must_use]
    pub fn image_height(&self) -> f32 {
        self.image_height
            .filter(|v| v.is_finite())
            .unwrap_or(DEFAULT_GALLERY_IMAGE_HEIGHT)
            .clamp(MIN_GALLERY_IMAGE_HEIGHT, MAX_GALLERY_IMAGE_HEIGHT)
    }
}

impl LightboxConfig {
    #[must_use]
    pub fn reveal_delay(&self) -> Duration {
        let ms = self
            .reveal_delay_ms
            .unwrap_or(DEFAULT_REVEAL_DELAY_MS)
            .min(MAX_REVEAL_DELAY_MS);
        Duration::from_millis(ms)
    }
}

impl MediaConfig {
    #[must_use]
    pub fn cache_capacity(&self) -> usize {
        self.cache_capacity
            .unwrap_or(DEFAULT_IMAGE_CACHE_CAPACITY)
            .clamp(MIN_IMAGE_CACHE_CAPACITY, MAX_IMAGE_CACHE_CAPACITY)
    }
}

fn deserialize_theme_mode<'de, D>(deserializer: D) -> std::result::Result<ThemeMode, D::Error>
where
    D: serde::Deserializer<'de>,
{
    use serde::de::Error;

    let raw = String::deserialize(deserializer)?;
    match raw.to_lowercase().as_str() {
        "light" => Ok(ThemeMode::Light),
        "dark" => Ok(ThemeMode::Dark),
        "system" => Ok(ThemeMode::System),
        other => Err(D::Error::custom(format!("invalid theme_mode: {}", other))),
    }
}

// =============================================================================
// Load Functions
// =============================================================================

fn get_config_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    paths::get_app_config_dir_with_override(base_dir).map(|mut path| {
        path.push(CONFIG_FILE);
        path
    })
}

/// Loads the configuration from the default path.
///
/// Returns a tuple of (config, optional_warning). If loading fails, returns
/// default config with a warning message explaining what went wrong.
pub fn load() -> (Config, Option<String>) {
    load_with_override(None)
}

/// Loads the configuration from a custom directory.
pub fn load_with_override(base_dir: Option<PathBuf>) -> (Config, Option<String>) {
    if let Some(path) = get_config_path_with_override(base_dir) {
        if path.exists() {
            match load_from_path(&path) {
                Ok(config) => return (config, None),
                Err(err) => {
                    return (
                        Config::default(),
                        Some(format!("ignoring {}: {}", path.display(), err)),
                    );
                }
            }
        }
    }
    (Config::default(), None)
}

/// Loads configuration from a specific path.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    let config: Config = toml::from_str(&content)?;
    Ok(config)
}

// =============================================================================
// Tests
// =============================================================================
