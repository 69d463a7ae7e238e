// SPDX-License-Identifier: MPL-2.0
#![doc = r#"
# Design Tokens

Design constants for the portfolio page.

## Organization

- **Palette**: Base colors (grayscale plus the pink accent)
- **Opacity**: Standardized opacity levels
- **Spacing**: Spacing scale (8px grid)
- **Sizing**: Component sizes
- **Typography**: Font size scale
- **Radius**: Border radii
- **Shadow**: Shadow definitions

## Examples

```
use naomi_portfolio::ui::design_tokens::{opacity, palette, spacing};
use iced::Color;

let backdrop = Color {
    a: opacity::BACKDROP,
    ..palette::BLACK
};

let padding = spacing::MD; // 16px
```
"#]

use iced::Color;

// ============================================================================
// Color Palette
// ============================================================================

pub mod palette {
    use super::Color;

    // Grayscale
    pub const BLACK: Color = Color::BLACK;
    pub const WHITE: Color = Color::WHITE;
    pub const GRAY_900: Color = Color::from_rgb(0.1, 0.1, 0.1);
    pub const GRAY_700: Color = Color::from_rgb(0.3, 0.3, 0.3);
    pub const GRAY_400: Color = Color::from_rgb(0.61, 0.64, 0.69);
    pub const GRAY_200: Color = Color::from_rgb(0.75, 0.75, 0.75);
    pub const GRAY_100: Color = Color::from_rgb(0.85, 0.85, 0.85);

    // Accent (pink scale)
    pub const PINK_200: Color = Color::from_rgb(0.984, 0.812, 0.910); // #fbcfe8
    pub const PINK_300: Color = Color::from_rgb(0.976, 0.659, 0.831); // #f9a8d4
    pub const PINK_500: Color = Color::from_rgb(0.925, 0.282, 0.600); // #ec4899
}

// ============================================================================
// Opacity Scale
// ============================================================================

pub mod opacity {
    pub const TRANSPARENT: f32 = 0.0;
    pub const OVERLAY_MEDIUM: f32 = 0.5;
    /// Lightbox backdrop dimming.
    pub const BACKDROP: f32 = 0.6;
    pub const OVERLAY_STRONG: f32 = 0.7;
    pub const OVERLAY_PRESSED: f32 = 0.9;
    pub const OPAQUE: f32 = 1.0;
}

// ============================================================================
// Spacing Scale (8px baseline grid)
// ============================================================================

pub mod spacing {
    pub const XXS: f32 = 4.0; // 0.5 unit
    pub const XS: f32 = 8.0; // 1 unit
    pub const SM: f32 = 12.0; // 1.5 units
    pub const MD: f32 = 16.0; // 2 units
    pub const LG: f32 = 24.0; // 3 units
    pub const XL: f32 = 32.0; // 4 units
    pub const SECTION: f32 = 80.0; // 10 units
}

// ============================================================================
// Sizing Scale
// ============================================================================

pub mod sizing {
    pub const ICON_MD: f32 = 24.0;

    /// Round lightbox buttons (close, arrows).
    pub const LIGHTBOX_BUTTON: f32 = 40.0;

    /// Default brand logo height (`h-23` in the original page).
    pub const BRAND_LOGO_HEIGHT: f32 = 92.0;

    /// Description paragraph max width.
    pub const DESCRIPTION_MAX_WIDTH: f32 = 672.0;

    /// Brand grid columns.
    pub const BRAND_COLUMNS: usize = 4;
}

// ============================================================================
// Typography Scale
// ============================================================================

pub mod typography {
    /// Hero banner name.
    pub const HERO: f32 = 48.0;

    /// Section headings ("My Photos", "Brands I've Worked With").
    pub const TITLE_LG: f32 = 30.0;

    /// Footer heading.
    pub const TITLE_SM: f32 = 20.0;

    /// Standard body.
    pub const BODY: f32 = 16.0;
}

// ============================================================================
// Border Radius Scale
// ============================================================================

pub mod radius {
    pub const SM: f32 = 4.0;
    pub const MD: f32 = 8.0;
    pub const FULL: f32 = 9999.0; // Pill shape
}

// ============================================================================
// Shadow Definitions
// ============================================================================

pub mod shadow {
    use super::palette;
    use iced::{Shadow, Vector};

    pub const NONE: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector::ZERO,
        blur_radius: 0.0,
    };

    pub const MD: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector { x: 0.0, y: 4.0 },
        blur_radius: 8.0,
    };
}

// ============================================================================
// Compile-time Validation
// ============================================================================

const _: () = {
    assert!(spacing::XS > 0.0);
    assert!(spacing::SM > spacing::XS);
    assert!(spacing::MD > spacing::SM);
    assert!(spacing::LG > spacing::MD);

    assert!(opacity::TRANSPARENT == 0.0);
    assert!(opacity::OPAQUE == 1.0);
    assert!(opacity::BACKDROP > 0.0 && opacity::BACKDROP < 1.0);

    assert!(sizing::LIGHTBOX_BUTTON > sizing::ICON_MD);
    assert!(sizing::BRAND_COLUMNS > 0);

    assert!(typography::HERO > typography::TITLE_LG);
    assert!(typography::TITLE_LG > typography::TITLE_SM);
    assert!(typography::TITLE_SM > typography::BODY);
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spacing_scale_is_consistent() {
        assert_eq!(spacing::MD, spacing::XS * 2.0);
        assert_eq!(spacing::LG, spacing::MD * 1.5);
    }

    #[test]
    fn accent_is_pink() {
        assert!(palette::PINK_300.r > palette::PINK_300.g);
        assert!(palette::PINK_300.b > palette::PINK_300.g);
    }
}
