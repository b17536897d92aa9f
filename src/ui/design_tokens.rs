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
use demo_preview::ui::design_tokens::{palette, spacing, opacity};
use iced::Color;

// Create an overlay color
let overlay_bg = Color {
    a: opacity::OVERLAY_STRONG,
    ..palette::BLACK
};

// Use the spacing scale
let padding = spacing::MD; // 16px
```

## Modification

⚠️ Tokens are designed to be consistent. Before modifying:
1. Check the impact on all components
2. Maintain ratios (e.g., MD = XS * 2)
3. Run validation tests
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
    pub const GRAY_200: Color = Color::from_rgb(0.75, 0.75, 0.75);

    // Brand colors (blue scale)
    pub const PRIMARY_100: Color = Color::from_rgb(0.925, 0.961, 1.0); // #ECF5FF
    pub const PRIMARY_400: Color = Color::from_rgb(0.475, 0.733, 1.0); // #79BBFF
    pub const PRIMARY_500: Color = Color::from_rgb(0.251, 0.620, 1.0); // #409EFF

    // Semantic colors
    pub const SUCCESS_100: Color = Color::from_rgb(0.941, 0.976, 0.922); // #F0F9EB
    pub const SUCCESS_500: Color = Color::from_rgb(0.404, 0.761, 0.227); // #67C23A
    pub const WARNING_100: Color = Color::from_rgb(0.992, 0.965, 0.925); // #FDF6EC
    pub const WARNING_500: Color = Color::from_rgb(0.902, 0.635, 0.235); // #E6A23C
    pub const DANGER_100: Color = Color::from_rgb(0.996, 0.941, 0.941); // #FEF0F0
    pub const DANGER_500: Color = Color::from_rgb(0.961, 0.424, 0.424); // #F56C6C
    pub const INFO_100: Color = Color::from_rgb(0.957, 0.957, 0.961); // #F4F4F5
    pub const INFO_500: Color = Color::from_rgb(0.565, 0.576, 0.600); // #909399
}

// ============================================================================
// Opacity Scale
// ============================================================================

pub mod opacity {
    pub const OVERLAY_SUBTLE: f32 = 0.2;
    pub const OVERLAY_MEDIUM: f32 = 0.5;
    pub const OVERLAY_STRONG: f32 = 0.7;
    pub const OVERLAY_PRESSED: f32 = 0.9;

    /// Surface background - Semi-transparent panels and containers
    pub const SURFACE: f32 = 0.95;
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

    // Interactive element heights
    pub const BUTTON_HEIGHT: f32 = 32.0;

    // Toasts
    /// Rendered toast height. Stacking offsets assume exactly this value.
    pub const TOAST_HEIGHT: f32 = 42.0;
    /// Gap above the first toast and between stacked toasts.
    pub const TOAST_GAP: f32 = 10.0;
    /// Distance a toast slides while entering or leaving.
    pub const TOAST_SLIDE: f32 = 20.0;

    // Source panel
    /// Fixed line height of highlighted source lines.
    pub const CODE_LINE_HEIGHT: f32 = 20.0;
    /// Inner padding of the source panel (each side).
    pub const CODE_PADDING: f32 = 16.0;

    // Demo blocks
    pub const BLOCK_MAX_WIDTH: f32 = 860.0;
    pub const SPLIT_LINE: f32 = 1.0;
}

// ============================================================================
// Typography Scale
// ============================================================================

pub mod typography {
    //! Font size scale following Material Design 3 type scale principles.
    //!
    //! The scale provides semantic sizes for consistent text hierarchy:
    //! - Titles: Large headings (pages, dialogs)
    //! - Body: Primary content text
    //! - Caption: Secondary, supporting text

    /// Small title - Section headers
    pub const TITLE_SM: f32 = 18.0;

    /// Large body - Form inputs, emphasis text
    pub const BODY_LG: f32 = 16.0;

    /// Standard body - Most UI text, labels, descriptions
    pub const BODY: f32 = 14.0;

    /// Small body - Hints, secondary labels
    pub const BODY_SM: f32 = 13.0;

    /// Caption - Badges, timestamps, small info
    pub const CAPTION: f32 = 12.0;

    /// Monospace source code
    pub const CODE: f32 = 13.0;
}

// ============================================================================
// Border Scale
// ============================================================================

pub mod border {
    /// Thin border - Subtle separators, input fields
    pub const WIDTH_SM: f32 = 1.0;
}

// ============================================================================
// Border Radius Scale
// ============================================================================

pub mod radius {
    pub const NONE: f32 = 0.0;
    pub const SM: f32 = 4.0;
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

    pub const SM: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector { x: 0.0, y: 2.0 },
        blur_radius: 4.0,
    };
}

// ============================================================================
// Compile-time Validation
// ============================================================================

const _: () = {
    // Spacing validation
    assert!(spacing::XS > 0.0);
    assert!(spacing::SM > spacing::XS);
    assert!(spacing::MD > spacing::SM);
    assert!(spacing::LG > spacing::MD);

    // Opacity validation
    assert!(opacity::OVERLAY_MEDIUM > 0.0 && opacity::OVERLAY_MEDIUM < 1.0);
    assert!(opacity::SURFACE > 0.0 && opacity::SURFACE < 1.0);

    // Sizing validation
    assert!(sizing::TOAST_HEIGHT > sizing::ICON_SM);
    assert!(sizing::CODE_LINE_HEIGHT > typography::CODE);

    // Typography validation
    assert!(typography::TITLE_SM > typography::BODY_LG);
    assert!(typography::BODY > typography::BODY_SM);
    assert!(typography::BODY_SM > typography::CAPTION);

    // Color validation
    assert!(palette::PRIMARY_500.r >= 0.0 && palette::PRIMARY_500.r <= 1.0);
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
    fn toast_metrics_match_stacking_constants() {
        assert_eq!(sizing::TOAST_HEIGHT, 42.0);
        assert_eq!(sizing::TOAST_GAP, 10.0);
    }
}
