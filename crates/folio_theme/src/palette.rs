//! Portfolio palettes
//!
//! Semantic color tokens the display components key off. One palette per
//! scheme; consumers read the active palette from the theme controller
//! instead of hardcoding colors.

use crate::scheme::ColorScheme;
use folio_core::Color;

/// Semantic color tokens for one scheme
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Palette {
    /// Page background
    pub background: Color,
    /// Card and panel surfaces
    pub surface: Color,
    /// Primary copy
    pub text_primary: Color,
    /// Secondary copy (taglines, captions)
    pub text_secondary: Color,
    /// Brand accent (headings, active nav item, buttons)
    pub accent: Color,
    /// Accent hover state
    pub accent_hover: Color,
    /// Card and timeline borders
    pub border: Color,
}

impl Palette {
    /// Light variant
    pub fn light() -> Self {
        Self {
            background: Color::WHITE,
            surface: Color::from_hex(0xF3F4F6),
            text_primary: Color::from_hex(0x111827),
            text_secondary: Color::from_hex(0x374151),
            accent: Color::from_hex(0xEA580C),
            accent_hover: Color::from_hex(0xF97316),
            border: Color::from_hex(0xE5E7EB),
        }
    }

    /// Dark variant
    pub fn dark() -> Self {
        Self {
            background: Color::from_hex(0x111827),
            surface: Color::from_hex(0x1F2937),
            text_primary: Color::from_hex(0xF9FAFB),
            text_secondary: Color::from_hex(0xD1D5DB),
            accent: Color::from_hex(0xFB923C),
            accent_hover: Color::from_hex(0xFDBA74),
            border: Color::from_hex(0x374151),
        }
    }

    /// Palette for the given scheme
    pub fn for_scheme(scheme: ColorScheme) -> Self {
        match scheme {
            ColorScheme::Light => Self::light(),
            ColorScheme::Dark => Self::dark(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn schemes_resolve_distinct_palettes() {
        assert_ne!(Palette::light(), Palette::dark());
        assert_eq!(Palette::for_scheme(ColorScheme::Light), Palette::light());
        assert_eq!(Palette::for_scheme(ColorScheme::Dark), Palette::dark());
    }

    #[test]
    fn accent_differs_between_schemes() {
        // The dark scheme uses the lighter accent shade for contrast.
        assert_ne!(Palette::light().accent, Palette::dark().accent);
    }
}
