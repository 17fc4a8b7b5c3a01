//! Circular marker rendering
//!
//! Paints a single marker from a derived [`DotStyle`] using egui's painter
//! API. Painting allocates no layout space: the marker is positioned
//! absolutely within whatever surface owns the painter, centered on the
//! caller-supplied anchor point.

use eframe::egui;

use crate::style::DotStyle;

/// Paints one circular marker centered on `center`.
///
/// Draws the drop shadow first, then the filled circle with its border
/// stroke on top. Degenerate styles (non-positive diameter) paint degenerate
/// shapes rather than failing.
pub fn paint_dot(painter: &egui::Painter, center: egui::Pos2, style: &DotStyle) {
    let rect = style.rect_at(center);

    let corner_radius = egui::CornerRadius::from(style.corner_radius);
    painter.add(style.shadow.as_shape(rect, corner_radius));

    painter.circle(rect.center(), style.radius(), style.fill, style.border);
}
