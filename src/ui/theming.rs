// SPDX-License-Identifier: MPL-2.0
//! Light/dark theming.

use crate::ui::design_tokens::{opacity, palette};
use iced::{Color, Theme};
use serde::{Deserialize, Serialize};

/// Color palette for a theme.
#[derive(Debug, Clone)]
pub struct ColorScheme {
    pub surface: Color,
    pub text_primary: Color,
    pub text_secondary: Color,

    /// Links sourced from the content store.
    pub accent: Color,
    pub accent_hover: Color,
    /// Links that fell back to built-in defaults.
    pub neutral: Color,
    pub neutral_hover: Color,

    /// Contact button fill.
    pub button_fill: Color,
    pub button_fill_hover: Color,
    pub button_text: Color,

    pub backdrop: Color,
    pub overlay_text: Color,
}

impl ColorScheme {
    #[must_use]
    pub fn light() -> Self {
        Self {
            surface: palette::WHITE,
            text_primary: palette::BLACK,
            text_secondary: palette::GRAY_700,

            accent: palette::PINK_300,
            accent_hover: palette::PINK_200,
            neutral: palette::BLACK,
            neutral_hover: palette::GRAY_400,

            button_fill: palette::PINK_300,
            button_fill_hover: palette::PINK_200,
            button_text: palette::BLACK,

            backdrop: Color {
                a: opacity::BACKDROP,
                ..palette::BLACK
            },
            overlay_text: palette::WHITE,
        }
    }

    #[must_use]
    pub fn dark() -> Self {
        Self {
            surface: palette::GRAY_900,
            text_primary: palette::WHITE,
            text_secondary: palette::GRAY_200,

            accent: palette::PINK_300,
            accent_hover: palette::PINK_200,
            neutral: palette::WHITE,
            neutral_hover: palette::GRAY_400,

            button_fill: palette::PINK_500,
            button_fill_hover: palette::PINK_300,
            button_text: palette::WHITE,

            backdrop: Color {
                a: opacity::OVERLAY_STRONG,
                ..palette::BLACK
            },
            overlay_text: palette::WHITE,
        }
    }

    /// Picks the scheme matching an iced theme.
    #[must_use]
    pub fn for_theme(theme: &Theme) -> Self {
        if matches!(theme, Theme::Dark) {
            Self::dark()
        } else {
            Self::light()
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
    System,
}

impl ThemeMode {
    /// Returns true if the effective theme is dark.
    /// For System mode, detects the actual system theme.
    #[must_use]
    pub fn is_dark(self) -> bool {
        match self {
            ThemeMode::Light => false,
            ThemeMode::Dark => true,
            ThemeMode::System => matches!(dark_light::detect(), Ok(dark_light::Mode::Dark)),
        }
    }

    #[must_use]
    pub fn to_theme(self) -> Theme {
        if self.is_dark() {
            Theme::Dark
        } else {
            Theme::Light
        }
    }
}
