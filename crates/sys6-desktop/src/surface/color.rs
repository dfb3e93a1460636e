//! RGBA colour and the toolkit palette

use serde::{Deserialize, Serialize};

/// RGBA color (8 bits per channel)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    #[serde(default = "opaque")]
    pub a: u8,
}

fn opaque() -> u8 {
    255
}

impl Color {
    /// Creates a new color with full opacity
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Creates a new color with alpha
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Creates a color from a 24-bit RGB value
    pub const fn from_rgb24(rgb: u32) -> Self {
        Self {
            r: ((rgb >> 16) & 0xFF) as u8,
            g: ((rgb >> 8) & 0xFF) as u8,
            b: (rgb & 0xFF) as u8,
            a: 255,
        }
    }

    /// Converts to 24-bit RGB
    pub const fn to_rgb24(&self) -> u32 {
        ((self.r as u32) << 16) | ((self.g as u32) << 8) | (self.b as u32)
    }

    /// Blends this color over another using alpha compositing
    pub fn blend_over(&self, bg: Color) -> Color {
        if self.a == 255 {
            return *self;
        }
        if self.a == 0 {
            return bg;
        }

        let alpha = self.a as u32;
        let inv_alpha = 255 - alpha;

        Color {
            r: ((self.r as u32 * alpha + bg.r as u32 * inv_alpha) / 255) as u8,
            g: ((self.g as u32 * alpha + bg.g as u32 * inv_alpha) / 255) as u8,
            b: ((self.b as u32 * alpha + bg.b as u32 * inv_alpha) / 255) as u8,
            a: 255,
        }
    }
}

/// Colours used by the window chrome
pub mod palette {
    use super::Color;

    pub const BLACK: Color = Color::rgb(0x00, 0x00, 0x00);
    pub const WHITE: Color = Color::rgb(0xFF, 0xFF, 0xFF);
    /// Default desktop behind all windows
    pub const DESKTOP: Color = Color::rgb(0x40, 0x40, 0x40);
    pub const TITLE_BAR: Color = Color::from_rgb24(0xC0C0C0);
    pub const SCROLL_TRACK: Color = Color::from_rgb24(0xE0E0E0);
    pub const SCROLL_THUMB: Color = Color::from_rgb24(0x808080);
    pub const BUTTON: Color = Color::from_rgb24(0xA0A0A0);
    /// Translucent veil painted under a modal window
    pub const MODAL_DIM: Color = Color::rgba(0x00, 0x00, 0x00, 0x40);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rgb24_roundtrip() {
        let c = Color::from_rgb24(0xC0A080);
        assert_eq!(c, Color::rgb(0xC0, 0xA0, 0x80));
        assert_eq!(c.to_rgb24(), 0xC0A080);
    }

    #[test]
    fn test_blend_over_opaque_and_transparent() {
        let bg = Color::rgb(10, 20, 30);
        assert_eq!(palette::WHITE.blend_over(bg), palette::WHITE);
        assert_eq!(Color::rgba(255, 255, 255, 0).blend_over(bg), bg);
    }

    #[test]
    fn test_modal_dim_darkens() {
        let dimmed = palette::MODAL_DIM.blend_over(palette::WHITE);
        assert_eq!(dimmed.a, 255);
        assert!(dimmed.r < 255 && dimmed.r > 128);
        assert_eq!(dimmed.r, dimmed.g);
        assert_eq!(dimmed.g, dimmed.b);
    }

    #[test]
    fn test_color_deserialize_defaults_alpha() {
        let c: Color = serde_json::from_str(r#"{"r":1,"g":2,"b":3}"#).unwrap();
        assert_eq!(c, Color::rgb(1, 2, 3));
    }
}
