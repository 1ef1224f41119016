// SPDX-License-Identifier: MPL-2.0
#![doc = r#"
# Design Tokens

This module defines all of the application's design tokens, following the W3C Design Tokens standard.

## Organization

- **Palette**: Base colors
- **Opacity**: Standardized opacity levels
- **Spacing**: Spacing scale (8px grid)
- **Sizing**: Component sizes
- **Typography**: Font size scale
- **Border**: Border width scale
- **Radius**: Border radii
- **Shadow**: Shadow definitions

## Examples

```
use company_analyzer::ui::design_tokens::{palette, spacing, opacity};
use iced::Color;

let overlay_bg = Color {
    a: opacity::OVERLAY_STRONG,
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
    pub const GRAY_400: Color = Color::from_rgb(0.4, 0.4, 0.4);
    pub const GRAY_200: Color = Color::from_rgb(0.75, 0.75, 0.75);
    pub const GRAY_100: Color = Color::from_rgb(0.85, 0.85, 0.85);

    // Slate surfaces (dark page background and cards)
    pub const SLATE_900: Color = Color::from_rgb(0.067, 0.094, 0.153); // #111827
    pub const SLATE_800: Color = Color::from_rgb(0.122, 0.161, 0.216); // #1f2937
    pub const SLATE_700: Color = Color::from_rgb(0.216, 0.255, 0.318); // #374151
    pub const SLATE_600: Color = Color::from_rgb(0.294, 0.333, 0.388); // #4b5563

    // Brand colors (blue scale)
    pub const PRIMARY_400: Color = Color::from_rgb(0.376, 0.647, 0.980); // #60a5fa
    pub const PRIMARY_500: Color = Color::from_rgb(0.231, 0.510, 0.965); // #3b82f6
    pub const PRIMARY_600: Color = Color::from_rgb(0.145, 0.388, 0.922); // #2563eb
    pub const PRIMARY_700: Color = Color::from_rgb(0.114, 0.306, 0.847); // #1d4ed8

    // Analysis accents
    pub const ACCENT_GREEN: Color = Color::from_rgb(0.290, 0.871, 0.502); // #4ade80
    pub const ACCENT_BLUE: Color = PRIMARY_400;
    pub const ACCENT_PURPLE: Color = Color::from_rgb(0.753, 0.518, 0.988); // #c084fc

    // Semantic colors
    pub const ERROR_500: Color = Color::from_rgb(0.898, 0.224, 0.208);
    pub const WARNING_500: Color = Color::from_rgb(0.945, 0.651, 0.125);
    pub const SUCCESS_500: Color = Color::from_rgb(0.263, 0.702, 0.404);

    // Error banner
    pub const ERROR_100: Color = Color::from_rgb(0.996, 0.886, 0.886); // #fee2e2
    pub const ERROR_400: Color = Color::from_rgb(0.973, 0.443, 0.443); // #f87171
    pub const ERROR_700: Color = Color::from_rgb(0.725, 0.110, 0.110); // #b91c1c
}

// ============================================================================
// Opacity Scale
// ============================================================================

pub mod opacity {
    pub const TRANSPARENT: f32 = 0.0;
    pub const OVERLAY_SUBTLE: f32 = 0.2;
    pub const OVERLAY_MEDIUM: f32 = 0.5;
    pub const OVERLAY_STRONG: f32 = 0.7;
    pub const OPAQUE: f32 = 1.0;

    /// Disabled controls
    pub const DISABLED: f32 = 0.5;
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
}

// ============================================================================
// Sizing Scale
// ============================================================================

pub mod sizing {
    // Icon sizes
    pub const ICON_SM: f32 = 16.0;
    pub const ICON_MD: f32 = 20.0;

    // Interactive element heights
    pub const INPUT_HEIGHT: f32 = 48.0;

    // Component widths
    pub const CONTENT_MAX_WIDTH: f32 = 896.0;
    pub const TOAST_WIDTH: f32 = 320.0;
}

// ============================================================================
// Typography Scale
// ============================================================================

pub mod typography {
    //! Font size scale.

    /// Page heading
    pub const TITLE_LG: f32 = 36.0;

    /// Analysis item headings
    pub const TITLE_SM: f32 = 18.0;

    /// Form inputs, item values
    pub const BODY_LG: f32 = 16.0;

    /// Standard body
    pub const BODY: f32 = 14.0;

    /// Item labels
    pub const CAPTION: f32 = 13.0;
}

// ============================================================================
// Border Scale
// ============================================================================

pub mod border {
    /// Thin border - banners, input fields
    pub const WIDTH_SM: f32 = 1.0;

    /// Medium border - toast accents
    pub const WIDTH_MD: f32 = 2.0;
}

// ============================================================================
// Border Radius Scale
// ============================================================================

pub mod radius {
    pub const SM: f32 = 4.0;
    pub const MD: f32 = 8.0;
    pub const LG: f32 = 12.0;
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

    pub const LG: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector { x: 0.0, y: 8.0 },
        blur_radius: 16.0,
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
    assert!(opacity::OVERLAY_MEDIUM > 0.0 && opacity::OVERLAY_MEDIUM < 1.0);

    assert!(sizing::ICON_MD > sizing::ICON_SM);
    assert!(sizing::CONTENT_MAX_WIDTH > sizing::TOAST_WIDTH);

    assert!(typography::TITLE_LG > typography::TITLE_SM);
    assert!(typography::TITLE_SM > typography::BODY_LG);
    assert!(typography::BODY_LG > typography::BODY);
    assert!(typography::BODY > typography::CAPTION);

    assert!(border::WIDTH_MD > border::WIDTH_SM);
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
    fn analysis_accents_are_distinct() {
        assert_ne!(palette::ACCENT_GREEN, palette::ACCENT_BLUE);
        assert_ne!(palette::ACCENT_BLUE, palette::ACCENT_PURPLE);
        assert_ne!(palette::ACCENT_GREEN, palette::ACCENT_PURPLE);
    }
}
