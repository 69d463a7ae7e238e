// SPDX-License-Identifier: MPL-2.0
//! Centralized button styles.

use crate::content::Source;
use crate::ui::design_tokens::{opacity, palette::BLACK, radius, shadow};
use crate::ui::theming::ColorScheme;
use iced::widget::button;
use iced::{Background, Border, Color, Theme};

/// Rounded contact button.
pub fn contact(theme: &Theme, status: button::Status) -> button::Style {
    let scheme = ColorScheme::for_theme(theme);
    let fill = match status {
        button::Status::Hovered | button::Status::Pressed => scheme.button_fill_hover,
        _ => scheme.button_fill,
    };

    button::Style {
        background: Some(Background::Color(fill)),
        text_color: scheme.button_text,
        border: Border {
            radius: radius::MD.into(),
            ..Border::default()
        },
        shadow: if status == button::Status::Hovered {
            shadow::MD
        } else {
            shadow::NONE
        },
        snap: true,
    }
}

/// Borderless text link. Content-sourced links use the accent color,
/// fallback links the neutral one.
pub fn link(source: Source) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |theme: &Theme, status: button::Status| {
        let scheme = ColorScheme::for_theme(theme);
        let (normal, hover) = match source {
            Source::Content => (scheme.accent, scheme.accent_hover),
            Source::Default => (scheme.neutral, scheme.neutral_hover),
        };
        let text_color = match status {
            button::Status::Hovered | button::Status::Pressed => hover,
            _ => normal,
        };

        button::Style {
            background: None,
            text_color,
            border: Border::default(),
            shadow: shadow::NONE,
            snap: true,
        }
    }
}

/// Round translucent lightbox control (close, arrows).
pub fn overlay(
    text_color: Color,
    alpha_normal: f32,
    alpha_hover: f32,
) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |_theme: &Theme, status: button::Status| {
        let alpha = match status {
            button::Status::Hovered => alpha_hover,
            button::Status::Pressed => opacity::OVERLAY_PRESSED,
            _ => alpha_normal,
        };

        button::Style {
            background: Some(Background::Color(Color { a: alpha, ..BLACK })),
            text_color,
            border: Border {
                radius: radius::FULL.into(),
                ..Border::default()
            },
            shadow: shadow::MD,
            snap: true,
        }
    }
}
