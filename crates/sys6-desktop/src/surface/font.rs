//! 8x8 bitmap text for titles and button labels

use font8x8::{UnicodeFonts, BASIC_FONTS};

/// Glyph cell width in pixels
pub const GLYPH_WIDTH: i32 = 8;
/// Glyph cell height in pixels
pub const GLYPH_HEIGHT: i32 = 8;

/// Bitmap rows for a character; unknown characters render as `?`.
///
/// Bit 0 of each row is the leftmost pixel.
pub fn glyph(ch: char) -> [u8; 8] {
    BASIC_FONTS
        .get(ch)
        .or_else(|| BASIC_FONTS.get('?'))
        .unwrap_or([0; 8])
}

/// Width of a single-line string in pixels
pub fn text_width(text: &str) -> i32 {
    text.chars().count() as i32 * GLYPH_WIDTH
}

/// Longest prefix of `text` that fits in `max_width` pixels
pub fn truncate_to_width(text: &str, max_width: i32) -> &str {
    if max_width <= 0 {
        return "";
    }
    let max_chars = (max_width / GLYPH_WIDTH) as usize;
    match text.char_indices().nth(max_chars) {
        Some((byte_idx, _)) => &text[..byte_idx],
        None => text,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_width() {
        assert_eq!(text_width(""), 0);
        assert_eq!(text_width("OK"), 16);
        assert_eq!(text_width("Window 1"), 64);
    }

    #[test]
    fn test_truncate_to_width() {
        assert_eq!(truncate_to_width("Modal Alert", 40), "Modal");
        assert_eq!(truncate_to_width("OK", 100), "OK");
        assert_eq!(truncate_to_width("OK", 0), "");
        assert_eq!(truncate_to_width("OK", 7), "");
    }

    #[test]
    fn test_glyph_space_is_blank() {
        assert_eq!(glyph(' '), [0; 8]);
        assert_ne!(glyph('A'), [0; 8]);
    }

    #[test]
    fn test_unknown_glyph_falls_back() {
        assert_eq!(glyph('\u{2603}'), glyph('?'));
    }
}
