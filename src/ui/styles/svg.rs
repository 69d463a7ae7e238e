// SPDX-License-Identifier: MPL-2.0
//! SVG icon styles.

use iced::widget::svg;
use iced::{Color, Theme};

/// Tints an icon with a fixed color.
pub fn tinted(color: Color) -> impl Fn(&Theme, svg::Status) -> svg::Style {
    move |_theme: &Theme, _status: svg::Status| svg::Style { color: Some(color) }
}
