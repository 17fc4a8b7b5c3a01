//! Dot marker style derivation.
//!
//! A [`DotStyle`] is derived once from its inputs and applied at paint time;
//! there is no identity, mutation, or lifecycle beyond the single paint call
//! that consumes it. The derivation is deterministic: equal inputs always
//! produce an equal style.

use egui::epaint::Shadow;
use egui::{Color32, Pos2, Rect, Stroke, vec2};

use crate::color::parse_color;

/// Diameter used when the caller does not supply one.
pub const DEFAULT_DIAMETER: f32 = 10.0;

/// Fill color used when the caller does not supply one.
pub const DEFAULT_FILL: &str = "red";

/// Border stroke width, in points.
pub const BORDER_WIDTH: f32 = 2.0;

/// Shadow blur radius, in points.
pub const SHADOW_BLUR: u8 = 5;

/// Visual style of a circular marker.
///
/// The bounding box is `width` x `height` with corner rounding equal to half
/// the box, which makes the painted shape a perfect circle. The marker is
/// anchored at the center of its box: the point the caller positions is the
/// visual center of the circle, not its top-left corner.
#[derive(Debug, Clone, PartialEq)]
pub struct DotStyle {
    /// Bounding box width; equals the diameter.
    pub width: f32,
    /// Bounding box height; equals the diameter.
    pub height: f32,
    /// Interior fill color.
    pub fill: Color32,
    /// Corner rounding; half the box on every corner.
    pub corner_radius: f32,
    /// Solid border drawn on the circle's edge.
    pub border: Stroke,
    /// Drop shadow painted behind the circle.
    pub shadow: Shadow,
}

impl DotStyle {
    /// Derives the style for a marker of the given diameter and fill color.
    ///
    /// The diameter is taken as-is: no range validation is performed, and a
    /// non-positive or non-finite value yields a style that paints a
    /// degenerate (but harmless) shape.
    pub fn new(diameter: f32, fill: Color32) -> Self {
        Self {
            width: diameter,
            height: diameter,
            fill,
            corner_radius: diameter / 2.0,
            border: Stroke::new(BORDER_WIDTH, Color32::WHITE),
            shadow: Shadow {
                offset: [0, 0],
                blur: SHADOW_BLUR,
                spread: 0,
                color: Color32::from_black_alpha(128),
            },
        }
    }

    /// Returns the bounding box for a marker anchored at `anchor`.
    ///
    /// The box is shifted by minus half its own width and height on both
    /// axes, so `anchor` ends up at the box center.
    pub fn rect_at(&self, anchor: Pos2) -> Rect {
        Rect::from_min_size(
            anchor - vec2(self.width / 2.0, self.height / 2.0),
            vec2(self.width, self.height),
        )
    }

    /// Radius of the painted circle.
    pub fn radius(&self) -> f32 {
        self.width / 2.0
    }
}

impl Default for DotStyle {
    /// Style for a marker with no explicit props: diameter 10, red fill.
    fn default() -> Self {
        Self::new(DEFAULT_DIAMETER, parse_color(DEFAULT_FILL))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use egui::pos2;

    #[test]
    fn test_derivation_is_square_and_circular() {
        let style = DotStyle::new(16.0, Color32::from_rgb(0, 128, 0));
        assert_eq!(style.width, 16.0);
        assert_eq!(style.height, 16.0);
        assert_eq!(style.fill, Color32::from_rgb(0, 128, 0));
        assert_eq!(style.corner_radius, 8.0);
    }

    #[test]
    fn test_default_is_ten_point_red() {
        let style = DotStyle::default();
        assert_eq!(style, DotStyle::new(10.0, parse_color("red")));
        assert_eq!(style.width, 10.0);
        assert_eq!(style.fill, Color32::from_rgb(255, 0, 0));
    }

    #[test]
    fn test_border_and_shadow() {
        let style = DotStyle::new(20.0, parse_color("blue"));
        assert_eq!(style.border, Stroke::new(2.0, Color32::WHITE));
        assert_eq!(style.shadow.offset, [0, 0]);
        assert_eq!(style.shadow.blur, 5);
        assert_eq!(style.shadow.spread, 0);
        assert_eq!(style.shadow.color, Color32::from_black_alpha(128));
    }

    #[test]
    fn test_concrete_twenty_blue() {
        let style = DotStyle::new(20.0, parse_color("blue"));
        assert_eq!(style.width, 20.0);
        assert_eq!(style.height, 20.0);
        assert_eq!(style.fill, Color32::from_rgb(0, 0, 255));
        assert_eq!(style.corner_radius, 10.0);
    }

    #[test]
    fn test_anchor_is_box_center() {
        let style = DotStyle::new(12.0, Color32::WHITE);
        let rect = style.rect_at(pos2(100.0, 40.0));
        assert_eq!(rect.center(), pos2(100.0, 40.0));
        assert_eq!(rect.min, pos2(94.0, 34.0));
        assert_eq!(rect.width(), 12.0);
        assert_eq!(rect.height(), 12.0);
    }

    #[test]
    fn test_degenerate_diameter_passes_through() {
        // No validation layer: the value flows into the style unchanged
        let style = DotStyle::new(-4.0, Color32::WHITE);
        assert_eq!(style.width, -4.0);
        assert_eq!(style.corner_radius, -2.0);
    }

    #[test]
    fn test_same_inputs_same_style() {
        let a = DotStyle::new(7.5, parse_color("#3264c8"));
        let b = DotStyle::new(7.5, parse_color("#3264c8"));
        assert_eq!(a, b);
    }
}
