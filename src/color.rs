//! Color value parsing for marker fills.
//!
//! Fill colors arrive as strings (scene files, caller props) and are resolved
//! to concrete [`egui::Color32`] values. Supported forms:
//! - basic named colors ("red", "blue", "white", ...)
//! - 6-digit hex ("#rrggbb")
//!
//! Malformed values are not errors: they resolve to opaque black, so a bad
//! color renders a wrong-looking marker instead of crashing.

use egui::Color32;
use once_cell::sync::Lazy;
use std::collections::HashMap;

static NAMED_COLORS: Lazy<HashMap<&'static str, Color32>> = Lazy::new(|| {
    HashMap::from([
        ("black", Color32::from_rgb(0, 0, 0)),
        ("white", Color32::from_rgb(255, 255, 255)),
        ("red", Color32::from_rgb(255, 0, 0)),
        ("green", Color32::from_rgb(0, 128, 0)),
        ("lime", Color32::from_rgb(0, 255, 0)),
        ("blue", Color32::from_rgb(0, 0, 255)),
        ("yellow", Color32::from_rgb(255, 255, 0)),
        ("orange", Color32::from_rgb(255, 165, 0)),
        ("purple", Color32::from_rgb(128, 0, 128)),
        ("magenta", Color32::from_rgb(255, 0, 255)),
        ("cyan", Color32::from_rgb(0, 255, 255)),
        ("pink", Color32::from_rgb(255, 192, 203)),
        ("brown", Color32::from_rgb(165, 42, 42)),
        ("gray", Color32::from_rgb(128, 128, 128)),
        ("grey", Color32::from_rgb(128, 128, 128)),
    ])
});

/// Resolves a color string to a concrete color.
///
/// Named colors are matched case-insensitively. Anything that is neither a
/// known name nor valid "#rrggbb" hex falls back to opaque black.
pub fn parse_color(value: &str) -> Color32 {
    let trimmed = value.trim();

    if let Some(color) = NAMED_COLORS.get(trimmed.to_ascii_lowercase().as_str()) {
        return *color;
    }

    hex_to_color32(trimmed)
}

/// Converts a hex color string (like "#3264c8") to Color32
pub fn hex_to_color32(hex: &str) -> Color32 {
    let hex = hex.trim_start_matches('#');

    if hex.len() == 6 {
        let r = u8::from_str_radix(&hex[0..2], 16).unwrap_or(0);
        let g = u8::from_str_radix(&hex[2..4], 16).unwrap_or(0);
        let b = u8::from_str_radix(&hex[4..6], 16).unwrap_or(0);
        Color32::from_rgb(r, g, b)
    } else {
        Color32::from_rgb(0, 0, 0) // Fallback to black
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_named_colors() {
        assert_eq!(parse_color("red"), Color32::from_rgb(255, 0, 0));
        assert_eq!(parse_color("blue"), Color32::from_rgb(0, 0, 255));
        assert_eq!(parse_color("white"), Color32::from_rgb(255, 255, 255));
    }

    #[test]
    fn test_named_colors_case_and_whitespace() {
        assert_eq!(parse_color("RED"), Color32::from_rgb(255, 0, 0));
        assert_eq!(parse_color("  Blue "), Color32::from_rgb(0, 0, 255));
    }

    #[test]
    fn test_hex_colors() {
        assert_eq!(parse_color("#ff0000"), Color32::from_rgb(255, 0, 0));
        assert_eq!(parse_color("#3264c8"), Color32::from_rgb(50, 100, 200));
    }

    #[test]
    fn test_malformed_falls_back_to_black() {
        assert_eq!(parse_color("not-a-color"), Color32::from_rgb(0, 0, 0));
        assert_eq!(parse_color("#12"), Color32::from_rgb(0, 0, 0));
        assert_eq!(parse_color(""), Color32::from_rgb(0, 0, 0));
    }

    #[test]
    fn test_hex_with_invalid_digits() {
        // Invalid pairs decode to 0, valid pairs keep their value
        assert_eq!(parse_color("#zz00ff"), Color32::from_rgb(0, 0, 255));
    }
}
