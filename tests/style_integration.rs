// SPDX-License-Identifier: MPL-2.0
//! Integration tests to validate style and design token coherence.

#[cfg(test)]
mod tests {
    use iced::widget::button::Status;
    use iced::Theme;
    use naomi_portfolio::content::Source;
    use naomi_portfolio::ui::design_tokens::{opacity, palette, radius, sizing, spacing};
    use naomi_portfolio::ui::styles::button;
    use naomi_portfolio::ui::theming::{ColorScheme, ThemeMode};

    #[test]
    fn all_button_styles_compile() {
        let theme = Theme::Light;

        let _ = button::contact(&theme, Status::Active);
        let _ = button::link(Source::Content)(&theme, Status::Hovered);
        let _ = button::overlay(palette::WHITE, opacity::OVERLAY_MEDIUM, opacity::OVERLAY_STRONG)(
            &theme,
            Status::Active,
        );
    }

    #[test]
    fn fetched_and_fallback_links_look_different() {
        let theme = Theme::Light;
        let fetched = button::link(Source::Content)(&theme, Status::Active);
        let fallback = button::link(Source::Default)(&theme, Status::Active);

        assert_ne!(fetched.text_color, fallback.text_color);
    }

    #[test]
    fn lightbox_controls_are_round() {
        let style = button::overlay(palette::WHITE, 0.5, 0.8)(&Theme::Dark, Status::Active);
        assert_eq!(style.border.radius, iced::border::Radius::from(radius::FULL));
    }

    #[test]
    fn design_tokens_are_accessible() {
        let _ = palette::PINK_300;
        let _ = spacing::MD;
        let _ = opacity::BACKDROP;
        let _ = sizing::LIGHTBOX_BUTTON;
    }

    #[test]
    fn theming_switches_correctly() {
        let light = ColorScheme::for_theme(&ThemeMode::Light.to_theme());
        let dark = ColorScheme::for_theme(&ThemeMode::Dark.to_theme());

        // Surface colors should be visually opposite between light and dark
        assert!(light.surface.r > dark.surface.r);
        assert!(light.text_primary.r < dark.text_primary.r);
    }
}
