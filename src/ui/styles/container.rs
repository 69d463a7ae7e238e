// SPDX-License-Identifier: MPL-2.0
//! Container styles.

use crate::ui::design_tokens::{opacity, palette, radius};
use crate::ui::theming::ColorScheme;
use iced::widget::container;
use iced::{Background, Border, Color, Theme};

/// Page background.
pub fn surface(theme: &Theme) -> container::Style {
    let scheme = ColorScheme::for_theme(theme);
    container::Style {
        background: Some(Background::Color(scheme.surface)),
        text_color: Some(scheme.text_primary),
        ..Default::default()
    }
}

/// Dimmed fullscreen backdrop behind the lightbox image.
///
/// `progress` runs from 0 (transparent) to 1 (full scheme backdrop) over
/// the entry transition.
pub fn backdrop(progress: f32) -> impl Fn(&Theme) -> container::Style {
    move |theme: &Theme| {
        let scheme = ColorScheme::for_theme(theme);
        let progress = progress.clamp(opacity::TRANSPARENT, opacity::OPAQUE);
        let color = Color {
            a: scheme.backdrop.a * progress,
            ..scheme.backdrop
        };
        container::Style {
            background: Some(Background::Color(color)),
            text_color: Some(scheme.overlay_text),
            ..Default::default()
        }
    }
}

/// Translucent band carrying the name over the hero image.
pub fn banner(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(Color {
            a: opacity::OVERLAY_MEDIUM,
            ..palette::BLACK
        })),
        text_color: Some(palette::WHITE),
        ..Default::default()
    }
}

/// Tile shown while an image is still loading.
pub fn placeholder(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(palette::GRAY_100)),
        border: Border {
            radius: radius::SM.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}
